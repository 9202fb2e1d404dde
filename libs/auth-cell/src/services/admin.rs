use reqwest::Method;
use tracing::{debug, error};

use shared_api::{ApiClient, LoginResponse};
use shared_config::PortalConfig;
use shared_models::AdminLoginRequest;

const ADMIN_API: &str = "/admin";

pub struct AdminService {
    api: ApiClient,
}

impl AdminService {
    pub fn new(config: &PortalConfig) -> Self {
        Self::with_client(ApiClient::new(config))
    }

    pub fn with_client(api: ApiClient) -> Self {
        Self { api }
    }

    /// Same contract as patient login: raw response, `None` when unreachable.
    pub async fn admin_login(&self, data: &AdminLoginRequest) -> Option<LoginResponse> {
        debug!("Logging in admin: {}", data.username);

        let body = match serde_json::to_value(data) {
            Ok(body) => body,
            Err(e) => {
                error!("Error :: admin_login :: {}", e);
                return None;
            }
        };
        let path = format!("{}/login", ADMIN_API);

        match self.api.send(Method::POST, &path, Some(body)).await {
            Ok(response) => Some(LoginResponse::new(response)),
            Err(e) => {
                error!("Error :: admin_login :: {}", e);
                None
            }
        }
    }
}
