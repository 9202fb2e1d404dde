use reqwest::{
    header::{HeaderValue, CONTENT_TYPE},
    Client, Method, Response, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::PortalConfig;
use shared_models::{MessageBody, ServiceError};

/// Path segment the backend reads as "no filter".
pub const NULL_SEGMENT: &str = "null";

/// Percent-encodes a single path segment.
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Encodes an optional filter value, sending the null marker when it is absent or blank.
pub fn segment_or_null(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => segment(v),
        _ => NULL_SEGMENT.to_string(),
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &PortalConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and hands back the response untouched, whatever its status.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Response, ServiceError> {
        let url = self.url(path);
        debug!("Making {} request to {}", method, url);

        let mut req = self.client.request(method, &url);

        if let Some(body_data) = body {
            req = req
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .json(&body_data);
        }

        req.send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))
    }

    /// Decodes the body as `T` on success; non-2xx statuses become `ServiceError::Status`.
    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body).await?;

        let status = response.status();
        if !status.is_success() {
            let bytes = read_body(response).await?;
            let message = error_message(status, &bytes);
            error!("API error ({}): {}", status, message);
            return Err(ServiceError::Status { status: status.as_u16(), message });
        }

        let bytes = read_body(response).await?;
        decode(&bytes)
    }

    /// Decodes the body regardless of status and returns both, for endpoints whose
    /// failure responses carry the same `{message}` shape as their successes.
    pub async fn exchange<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(StatusCode, T), ServiceError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body).await?;
        let status = response.status();
        let bytes = read_body(response).await?;
        Ok((status, decode(&bytes)?))
    }
}

async fn read_body(response: Response) -> Result<Vec<u8>, ServiceError> {
    response
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| ServiceError::Transport(e.to_string()))
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ServiceError> {
    serde_json::from_slice(bytes).map_err(|e| ServiceError::Decode(e.to_string()))
}

fn error_message(status: StatusCode, bytes: &[u8]) -> String {
    if let Ok(body) = serde_json::from_slice::<MessageBody>(bytes) {
        if let Some(text) = body.text() {
            return text.to_string();
        }
    }

    let text = String::from_utf8_lossy(bytes).trim().to_string();
    if text.is_empty() {
        status.canonical_reason().unwrap_or_default().to_string()
    } else {
        text
    }
}
