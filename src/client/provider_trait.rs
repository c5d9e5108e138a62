use async_trait::async_trait;

use crate::utils::{error::QuakeResult, types::SearchResponse};

/// Seam between the CLI runner and the network.
///
/// The production implementation is [`crate::client::SearchClient`]; tests
/// drive the runner with [`crate::client::MockSearchProvider`].
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Perform exactly one authenticated search call and hand back the
    /// parsed response. No retry, no local recovery.
    async fn perform_search(
        &self,
        query: &str,
        page_size: u32,
        start_page: u32,
    ) -> QuakeResult<SearchResponse>;
}
