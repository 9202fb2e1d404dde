use reqwest::{Response, StatusCode};

use shared_models::{ServiceError, TokenResponse};

/// Raw reply to a login call. The body stays unread until the caller asks for the token.
#[derive(Debug)]
pub struct LoginResponse {
    response: Response,
}

impl LoginResponse {
    pub fn new(response: Response) -> Self {
        Self { response }
    }

    pub fn ok(&self) -> bool {
        self.response.status().is_success()
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Consumes the body and extracts the issued session token.
    pub async fn token(self) -> Result<String, ServiceError> {
        let bytes = self
            .response
            .bytes()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        let body: TokenResponse =
            serde_json::from_slice(&bytes).map_err(|e| ServiceError::Decode(e.to_string()))?;
        Ok(body.token)
    }
}
