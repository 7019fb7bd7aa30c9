use super::traits::{ConfigSection, ConfigManifest, FieldManifest};
use crate::error::SelectionError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum number of snapshot lines kept in the log view
    pub log_capacity: usize,
    pub plot_height: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            log_capacity: 500,
            plot_height: 220.0,
            window_width: 1100.0,
            window_height: 760.0,
        }
    }
}

impl ConfigSection for DisplayConfig {
    fn section_name() -> &'static str {
        "display"
    }

    fn validate(&self) -> Result<(), SelectionError> {
        if self.log_capacity == 0 {
            return Err(SelectionError::Configuration(
                "Log capacity must be at least 1 line".to_string()
            ));
        }
        if self.plot_height <= 0.0 {
            return Err(SelectionError::Configuration(
                "Plot height must be positive".to_string()
            ));
        }
        if self.window_width < 400.0 || self.window_height < 300.0 {
            return Err(SelectionError::Configuration(
                "Window must be at least 400x300".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Display".to_string(),
            fields: vec![
                FieldManifest {
                    name: "log_capacity".to_string(),
                    field_type: "integer".to_string(),
                    default: serde_json::json!(500),
                    min: Some(1.0),
                    max: Some(100_000.0),
                    description: "Snapshot lines kept in the log".to_string(),
                },
                FieldManifest {
                    name: "plot_height".to_string(),
                    field_type: "float".to_string(),
                    default: serde_json::json!(220.0),
                    min: Some(80.0),
                    max: Some(1000.0),
                    description: "Height of the match chart in points".to_string(),
                },
            ],
        }
    }
}
