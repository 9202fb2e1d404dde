use std::env;
use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_SESSION_FILE: &str = ".clinic-session.json";

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub api_base_url: String,
    pub session_file: String,
}

impl PortalConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url.into()),
            session_file: DEFAULT_SESSION_FILE.to_string(),
        }
    }

    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("CLINIC_API_BASE_URL")
                .map(normalize_base_url)
                .unwrap_or_else(|_| {
                    warn!("CLINIC_API_BASE_URL not set, using default");
                    DEFAULT_API_BASE_URL.to_string()
                }),
            session_file: env::var("CLINIC_SESSION_FILE")
                .unwrap_or_else(|_| {
                    warn!("CLINIC_SESSION_FILE not set, using default");
                    DEFAULT_SESSION_FILE.to_string()
                }),
        };

        if !config.is_configured() {
            warn!("Portal not fully configured - API base URL is empty");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty()
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = PortalConfig::new("http://clinic.local:8080/api/");
        assert_eq!(config.api_base_url, "http://clinic.local:8080/api");
        assert!(config.is_configured());
    }

    #[test]
    fn test_empty_base_url_is_not_configured() {
        let config = PortalConfig::new("  ");
        assert!(!config.is_configured());
        assert_eq!(config.session_file, DEFAULT_SESSION_FILE);
    }
}
