use crate::error::SelectionError;
use serde::{Deserialize, Serialize};

/// A `[table]` of the settings file (`[evolution]`, `[display]`).
///
/// Every field needs a default so partially written files still load.
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    /// TOML table name, also the env override segment (`VISUAL_SELECTION_<SECTION>__<FIELD>`).
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), SelectionError>;
    /// Field hints shown next to the matching inputs.
    fn to_manifest(&self) -> ConfigManifest;
}

/// Describes a section's editable fields for the input row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigManifest {
    pub section: String,
    pub fields: Vec<FieldManifest>,
}

impl ConfigManifest {
    pub fn field(&self, name: &str) -> Option<&FieldManifest> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One field's type, default and accepted range. `min`/`max` are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldManifest {
    pub name: String,
    pub field_type: String,
    pub default: serde_json::Value,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub description: String,
}
