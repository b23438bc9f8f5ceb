use crate::domain::model::{DevfileType, Sample};
use crate::domain::ports::SampleSource;
use crate::utils::error::{RegistryError, Result};
use std::collections::HashSet;

/// Decode a sample-index payload into [`Sample`] records.
///
/// Enforces the invariants the registry contract promises: every entry has a
/// non-empty name unique within the payload, carries the sample
/// discriminator, and any git section lists at least one remote. Registry
/// order is preserved.
pub fn parse_samples(bytes: &[u8]) -> Result<Vec<Sample>> {
    let samples: Vec<Sample> = serde_json::from_slice(bytes)?;

    let mut seen = HashSet::new();
    for sample in &samples {
        if sample.name.trim().is_empty() {
            return Err(RegistryError::InvalidSample {
                name: sample.name.clone(),
                reason: "name is empty".to_string(),
            });
        }
        if !seen.insert(sample.name.clone()) {
            return Err(RegistryError::InvalidSample {
                name: sample.name.clone(),
                reason: "duplicate name in sample index".to_string(),
            });
        }
        if sample.devfile_type != DevfileType::Sample {
            return Err(RegistryError::InvalidSample {
                name: sample.name.clone(),
                reason: "entry is not a sample".to_string(),
            });
        }
        if let Some(git) = &sample.git {
            if git.remotes.is_empty() {
                return Err(RegistryError::InvalidSample {
                    name: sample.name.clone(),
                    reason: "git section has no remotes".to_string(),
                });
            }
        }
    }

    Ok(samples)
}

/// Fetch and decode a registry's sample index in one step.
pub async fn fetch_samples<S: SampleSource>(source: &S, registry: &str) -> Result<Vec<Sample>> {
    let payload = source.fetch_index(registry).await?;
    let samples = parse_samples(&payload)?;
    tracing::debug!("Decoded {} samples from {}", samples.len(), registry);
    Ok(samples)
}
