use crate::error::{Error, Result};
use crate::utils::validation::validate_base_url;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://pizza.sulla.hu";
pub const DEFAULT_ITEMS_PATH: &str = "/pizza";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_rate_limit: u64,
    pub max_request_body_size: usize,
}

/// Where the pizza API lives and how we talk to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub items_path: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub placeholder_image: String,
    pub swagger_url: String,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PORT value".to_string()))?;

        let api_rate_limit = std::env::var("API_RATE_LIMIT")
            .unwrap_or_else(|_| "100".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid API_RATE_LIMIT value".to_string()))?;

        let max_request_body_size = std::env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| "1048576".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_REQUEST_BODY_SIZE value".to_string()))?;

        let base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let items_path = normalize_path(
            &std::env::var("ITEMS_PATH").unwrap_or_else(|_| DEFAULT_ITEMS_PATH.to_string()),
        );

        let timeout_seconds = std::env::var("REQUEST_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid REQUEST_TIMEOUT value".to_string()))?;

        let placeholder_image = std::env::var("PLACEHOLDER_IMAGE")
            .unwrap_or_else(|_| DEFAULT_PLACEHOLDER_IMAGE.to_string());

        let swagger_url =
            std::env::var("SWAGGER_URL").unwrap_or_else(|_| format!("{base_url}/swagger/"));

        Ok(Settings {
            server: ServerConfig {
                host,
                port,
                api_rate_limit,
                max_request_body_size,
            },
            upstream: UpstreamConfig {
                base_url,
                items_path,
                timeout_seconds,
                user_agent: format!("Pizzeria/{}", env!("CARGO_PKG_VERSION")),
            },
            display: DisplayConfig {
                placeholder_image,
                swagger_url,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.server.api_rate_limit == 0 {
            return Err(Error::Config("API rate limit must be non-zero".to_string()));
        }

        if self.upstream.timeout_seconds == 0 {
            return Err(Error::Config("Request timeout must be non-zero".to_string()));
        }

        validate_base_url(&self.upstream.base_url)
            .map_err(|e| Error::Config(format!("Invalid API_BASE_URL: {}", e.log_safe())))?;

        if self.display.placeholder_image.trim().is_empty() {
            return Err(Error::Config(
                "Placeholder image path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Ensure a path has exactly one leading slash and no trailing slash
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    format!("/{trimmed}")
}

#[cfg(test)]
pub(crate) fn test_settings(base_url: &str) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            api_rate_limit: 100,
            max_request_body_size: 1048576,
        },
        upstream: UpstreamConfig {
            base_url: base_url.to_string(),
            items_path: DEFAULT_ITEMS_PATH.to_string(),
            timeout_seconds: 5,
            user_agent: "test".to_string(),
        },
        display: DisplayConfig {
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            swagger_url: format!("{base_url}/swagger/"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_validation() {
        let mut settings = test_settings("https://pizza.example.com");
        assert!(settings.validate().is_ok());

        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_reject_bad_base_url() {
        let mut settings = test_settings("ftp://pizza.example.com");
        assert!(settings.validate().is_err());

        settings.upstream.base_url = "not a url".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_reject_empty_placeholder() {
        let mut settings = test_settings("https://pizza.example.com");
        settings.display.placeholder_image = "  ".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("pizza"), "/pizza");
        assert_eq!(normalize_path("/pizza/"), "/pizza");
        assert_eq!(normalize_path("/api/items"), "/api/items");
    }
}
