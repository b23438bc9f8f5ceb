use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Discriminator between the entry kinds a registry index can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevfileType {
    Sample,
    Stack,
}

/// Git source for a sample: remote name (e.g. "origin") to clone URL.
///
/// A `BTreeMap` keeps remote ordering deterministic across re-encodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Git {
    pub remotes: BTreeMap<String, String>,
}

/// One sample entry from a registry index.
///
/// Samples are read-only data decoded from the registry response; they are
/// never mutated or persisted after decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub icon: String,
    #[serde(rename = "type")]
    pub devfile_type: DevfileType,
    pub project_type: String,
    pub language: String,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<Git>,
}
