use super::traits::{ConfigSection, ConfigManifest, FieldManifest};
use crate::error::SelectionError;
use serde::{Deserialize, Serialize};

/// Phrase used when the caller leaves the target empty.
pub const DEFAULT_TARGET: &str = "Ca-Caw! Ca-Caw! Ca-Caw! Ah Ah Ee Ee Tookie Tookie! \
    Tookie Tookie! Ca-Caw Ca-ca-caw-ca-caw-caw-caw! Ca-ca-caw!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub target: String,
    pub mutations: usize,
    pub snapshot_interval: u64,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
            mutations: 1,
            snapshot_interval: 1000,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    pub fn new(target: impl Into<String>, mutations: usize) -> Self {
        Self {
            target: target.into(),
            mutations,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_snapshot_interval(mut self, interval: u64) -> Self {
        self.snapshot_interval = interval;
        self
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), SelectionError> {
        if self.target.is_empty() {
            return Err(SelectionError::EmptyTarget);
        }
        if self.snapshot_interval == 0 {
            return Err(SelectionError::Configuration(
                "Snapshot interval must be at least 1 generation".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Evolution".to_string(),
            fields: vec![
                FieldManifest {
                    name: "target".to_string(),
                    field_type: "string".to_string(),
                    default: serde_json::json!(DEFAULT_TARGET),
                    min: None,
                    max: None,
                    description: "Phrase the population evolves towards".to_string(),
                },
                FieldManifest {
                    name: "mutations".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(1),
                    min: Some(0.0),
                    max: None,
                    description: "Point mutations applied to each offspring".to_string(),
                },
                FieldManifest {
                    name: "snapshot_interval".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(1000),
                    min: Some(1.0),
                    max: None,
                    description: "Generations between progress snapshots".to_string(),
                },
                FieldManifest {
                    name: "seed".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::Value::Null,
                    min: Some(0.0),
                    max: None,
                    description: "Random seed; empty for a fresh run every time".to_string(),
                },
            ],
        }
    }
}
