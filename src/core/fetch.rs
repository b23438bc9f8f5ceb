use crate::domain::ports::{ConfigProvider, SampleSource};
use crate::utils::error::{RegistryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Path under the registry base that serves the sample-only index.
///
/// The registry scopes the index by entry type server-side, so a request to
/// this path returns sample entries only, never stacks.
const SAMPLE_INDEX_PATH: &str = "index/sample";

/// HTTP client for a devfile registry's sample index.
///
/// Stateless between calls; a single instance is safe to share across tasks
/// and to point at different registries per call.
pub struct RegistryClient {
    client: Client,
}

impl RegistryClient {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    pub fn from_config(config: &impl ConfigProvider) -> Result<Self> {
        Self::new(config.timeout_secs())
    }

    /// Fetch the raw sample index from `registry`.
    ///
    /// Returns the response body verbatim on a 2xx response; decoding into
    /// [`Sample`](crate::Sample) records is the caller's concern (see
    /// [`parse_samples`](crate::parse_samples)). Any transport failure or
    /// non-2xx status surfaces as an error with no payload.
    pub async fn get_registry_samples(&self, registry: &str) -> Result<Vec<u8>> {
        let endpoint = sample_index_url(registry)?;

        tracing::debug!("Fetching sample index from {}", endpoint);
        let response = self
            .client
            .get(endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        tracing::debug!("Registry response status: {}", response.status());
        if !response.status().is_success() {
            return Err(RegistryError::FetchFailed {
                registry: registry.to_string(),
                status: response.status().as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SampleSource for RegistryClient {
    async fn fetch_index(&self, registry: &str) -> Result<Vec<u8>> {
        self.get_registry_samples(registry).await
    }
}

fn sample_index_url(registry: &str) -> Result<Url> {
    let mut base = Url::parse(registry).map_err(|err| RegistryError::InvalidUrl {
        url: registry.to_string(),
        reason: err.to_string(),
    })?;

    match base.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(RegistryError::InvalidUrl {
                url: registry.to_string(),
                reason: format!("unsupported scheme: {}", scheme),
            })
        }
    }

    // Url::join drops the last path segment unless the base ends with '/'.
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }

    base.join(SAMPLE_INDEX_PATH)
        .map_err(|err| RegistryError::InvalidUrl {
            url: registry.to_string(),
            reason: err.to_string(),
        })
}
