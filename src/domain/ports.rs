use crate::utils::error::Result;
use async_trait::async_trait;

/// Transport that serves a registry's sample index.
///
/// The HTTP client implements this; tests substitute in-memory sources.
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Fetch the raw sample-index payload for the given registry.
    async fn fetch_index(&self, registry: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider: Send + Sync {
    fn registry_url(&self) -> &str;
    fn timeout_secs(&self) -> u64;
}
