use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Public staging registry operated by the devfile project. This is the CLI
/// default; any registry base URL can be passed instead.
pub const STAGING_REGISTRY_URL: &str = "https://registry.stage.devfile.io";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "devfile-registry")]
#[command(about = "Fetch sample entries from a devfile registry")]
pub struct CliConfig {
    /// Base URL of the devfile registry to query
    #[arg(long, default_value = STAGING_REGISTRY_URL)]
    pub registry: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "10")]
    pub timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn registry_url(&self) -> &str {
        &self.registry
    }

    fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("registry", &self.registry)?;
        validation::validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        Ok(())
    }
}
