use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::client::provider_trait::SearchProvider;
use crate::utils::{
    config::{ClientConfig, TOKEN_HEADER},
    error::{DecodeError, QuakeError, QuakeResult, TransportError},
    types::{SearchRequest, SearchResponse},
};

/// Client for the Quake search API
#[derive(Debug)]
pub struct SearchClient {
    http: Client,
    config: ClientConfig,
}

impl SearchClient {
    /// Create a client with the default endpoint and timeout
    pub fn new(api_key: impl Into<String>) -> QuakeResult<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from an explicit configuration
    pub fn with_config(config: ClientConfig) -> QuakeResult<Self> {
        if config.api_key.is_empty() {
            return Err(QuakeError::Configuration(
                "API key must not be empty".to_string(),
            ));
        }

        Url::parse(&config.endpoint)
            .map_err(|e| QuakeError::Configuration(format!("Invalid endpoint URL: {}", e)))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                QuakeError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { http, config })
    }

    /// Endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl SearchProvider for SearchClient {
    async fn perform_search(
        &self,
        query: &str,
        page_size: u32,
        start_page: u32,
    ) -> QuakeResult<SearchResponse> {
        if query.is_empty() {
            return Err(QuakeError::Configuration(
                "Search query must not be empty".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(QuakeError::Configuration(
                "Page size must be positive".to_string(),
            ));
        }

        let request = SearchRequest::new(query, page_size, start_page);

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(TOKEN_HEADER, &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::HttpStatus(status.as_u16()).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::DEFAULT_ENDPOINT;

    #[test]
    fn test_client_rejects_empty_api_key() {
        let result = SearchClient::new("");
        assert!(matches!(result, Err(QuakeError::Configuration(_))));
    }

    #[test]
    fn test_client_rejects_invalid_endpoint() {
        let config = ClientConfig::new("token").with_endpoint("not a url");
        let result = SearchClient::with_config(config);
        assert!(matches!(result, Err(QuakeError::Configuration(_))));
    }

    #[test]
    fn test_client_uses_default_endpoint() {
        let client = SearchClient::new("token").unwrap();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_client_debug_never_echoes_credential() {
        let client = SearchClient::new("super-secret-token").unwrap();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("super-secret-token"));
    }

    #[tokio::test]
    async fn test_perform_search_rejects_empty_query() {
        let client = SearchClient::new("token").unwrap();
        let result = client.perform_search("", 100, 1).await;
        assert!(matches!(result, Err(QuakeError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_perform_search_rejects_zero_page_size() {
        let client = SearchClient::new("token").unwrap();
        let result = client.perform_search("city=Beijing", 0, 1).await;
        assert!(matches!(result, Err(QuakeError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_perform_search_connection_refused_is_transport_error() {
        // Nothing listens on this port, so the request fails before any
        // body decoding happens.
        let config = ClientConfig::new("token")
            .with_endpoint("http://127.0.0.1:1/api/v3/search/quake_service")
            .with_timeout(2);
        let client = SearchClient::with_config(config).unwrap();

        let result = client.perform_search("city=Beijing", 2, 1).await;
        assert!(matches!(
            result,
            Err(QuakeError::Transport(TransportError::RequestFailed(_)))
        ));
    }
}
