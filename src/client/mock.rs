use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::provider_trait::SearchProvider;
use crate::utils::{
    error::{DecodeError, QuakeResult, TransportError},
    types::SearchResponse,
};

/// Canned outcome of a mock search call
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Respond(SearchResponse),
    FailTransport(String),
    FailDecode(String),
}

/// Mock search provider for testing with deterministic canned outcomes.
/// Records every call so tests can assert how the runner used it.
#[derive(Debug)]
pub struct MockSearchProvider {
    outcome: MockOutcome,
    calls: AtomicUsize,
    recorded: Mutex<Vec<(String, u32, u32)>>,
}

impl MockSearchProvider {
    /// Mock that answers every call with the given response
    pub fn respond_with(response: SearchResponse) -> Self {
        Self::with_outcome(MockOutcome::Respond(response))
    }

    /// Mock that fails every call with a transport error
    pub fn fail_transport(message: impl Into<String>) -> Self {
        Self::with_outcome(MockOutcome::FailTransport(message.into()))
    }

    /// Mock that fails every call with a decode error
    pub fn fail_decode(message: impl Into<String>) -> Self {
        Self::with_outcome(MockOutcome::FailDecode(message.into()))
    }

    fn with_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            recorded: Mutex::new(Vec::new()),
        }
    }

    /// Number of search calls performed against this mock
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Arguments of every recorded call, in order
    pub fn recorded_calls(&self) -> Vec<(String, u32, u32)> {
        self.recorded.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn perform_search(
        &self,
        query: &str,
        page_size: u32,
        start_page: u32,
    ) -> QuakeResult<SearchResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.recorded
            .lock()
            .expect("mock lock poisoned")
            .push((query.to_string(), page_size, start_page));

        match &self.outcome {
            MockOutcome::Respond(response) => Ok(response.clone()),
            MockOutcome::FailTransport(message) => {
                Err(TransportError::RequestFailed(message.clone()).into())
            }
            MockOutcome::FailDecode(message) => {
                Err(DecodeError::InvalidJson(message.clone()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::QuakeError;
    use serde_json::json;

    fn sample_response() -> SearchResponse {
        serde_json::from_value(json!({
            "meta": {"pagination": {"page_index": 1, "page_size": 2, "total": 2}},
            "data": [
                {"ip": "1.2.3.4", "port": 443, "service": {"http": {"host": "a.com"}}}
            ]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let mock = MockSearchProvider::respond_with(sample_response());

        let response = mock.perform_search("city=Beijing", 2, 1).await.unwrap();
        assert_eq!(response.items().unwrap().len(), 1);

        assert_eq!(mock.call_count(), 1);
        assert_eq!(
            mock.recorded_calls(),
            vec![("city=Beijing".to_string(), 2, 1)]
        );
    }

    #[tokio::test]
    async fn test_mock_transport_failure() {
        let mock = MockSearchProvider::fail_transport("connection refused");

        let result = mock.perform_search("city=Beijing", 2, 1).await;
        assert!(matches!(
            result,
            Err(QuakeError::Transport(TransportError::RequestFailed(_)))
        ));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_decode_failure() {
        let mock = MockSearchProvider::fail_decode("expected value at line 1");

        let result = mock.perform_search("city=Beijing", 2, 1).await;
        assert!(matches!(
            result,
            Err(QuakeError::Decode(DecodeError::InvalidJson(_)))
        ));
    }
}
