pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, STAGING_REGISTRY_URL};
pub use core::{
    fetch::RegistryClient,
    samples::{fetch_samples, parse_samples},
};
pub use domain::model::{DevfileType, Git, Sample};
pub use domain::ports::{ConfigProvider, SampleSource};
pub use utils::error::{RegistryError, Result};
