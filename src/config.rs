//! Sample configuration for the site generator
//!
//! The sample map links each histone mark to the GEO accession of its
//! ENCODE CD14 monocyte dataset. A built-in map is used unless a YAML
//! file overrides it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Histone label → GEO accession. Iteration order is lexicographic by label.
pub type SampleMap = BTreeMap<String, String>;

/// Built-in histone marks and their GEO accessions
const DEFAULT_SAMPLES: &[(&str, &str)] = &[
    ("H3K27ac", "GSM1102782"),
    ("H3K27me3", "GSM1102785"),
    ("H3K36me3", "GSM1102788"),
    ("H3K4me1", "GSM1102793"),
    ("H3K4me3", "GSM1102797"),
];

/// Generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sample definitions (label → accession)
    #[serde(default = "default_samples")]
    pub samples: SampleMap,
}

fn default_samples() -> SampleMap {
    DEFAULT_SAMPLES
        .iter()
        .map(|(label, accession)| (label.to_string(), accession.to_string()))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            samples: default_samples(),
        }
    }
}

impl Config {
    /// Load configuration from YAML file
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.samples.is_empty() {
            anyhow::bail!("At least one sample must be defined");
        }

        for (label, accession) in &self.samples {
            if label.trim().is_empty() {
                anyhow::bail!("Sample with accession '{}' has an empty label", accession);
            }
            // Labels end up inside pages that are still scanned for @TOKEN@ markers
            if label.contains('@') {
                anyhow::bail!("Sample label '{}' must not contain '@'", label);
            }
            if accession.trim().is_empty() {
                anyhow::bail!("Sample '{}' has an empty accession", label);
            }
        }

        Ok(())
    }

    /// Sample labels in table order
    pub fn labels(&self) -> Vec<&str> {
        self.samples.keys().map(String::as_str).collect()
    }
}
