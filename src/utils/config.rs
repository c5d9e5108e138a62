use std::fmt;

/// Fixed search endpoint of the Quake service
pub const DEFAULT_ENDPOINT: &str = "https://quake.360.cn/api/v3/search/quake_service";

/// Request header carrying the API credential
pub const TOKEN_HEADER: &str = "X-QuakeToken";

/// Environment variable the CLI reads the credential from
pub const API_KEY_ENV: &str = "QUAKE_API_KEY";

/// Client configuration for the Quake search API
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl ClientConfig {
    /// Create a configuration with the default endpoint and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: 30,
        }
    }

    /// Override the search endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}

// The credential must never be echoed, so Debug redacts it.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::new("secret-token");

        assert_eq!(config.api_key, "secret-token");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_client_config_builder_pattern() {
        let config = ClientConfig::new("secret-token")
            .with_endpoint("https://localhost:9443/search")
            .with_timeout(5);

        assert_eq!(config.endpoint, "https://localhost:9443/search");
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_client_config_debug_redacts_api_key() {
        let config = ClientConfig::new("secret-token");
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
        assert!(rendered.contains(DEFAULT_ENDPOINT));
    }
}
