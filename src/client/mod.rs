// Search provider implementations
pub mod mock;
pub mod provider_trait;
pub mod search_client;

pub use mock::*;
pub use provider_trait::*;
pub use search_client::*;
