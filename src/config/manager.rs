use super::{
    display::DisplayConfig,
    evolution::EvolutionConfig,
    traits::ConfigSection,
};
use crate::error::SelectionError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Prefix for environment overrides, e.g. `VISUAL_SELECTION_EVOLUTION__MUTATIONS=3`
pub const ENV_PREFIX: &str = "VISUAL_SELECTION";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), SelectionError> {
        self.evolution.validate()?;
        self.display.validate()?;
        Ok(())
    }

    /// Merge an optional TOML file with environment overrides.
    pub fn load_layered<P: AsRef<Path>>(path: Option<P>) -> Result<Self, SelectionError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path.as_ref())
                    .format(config::FileFormat::Toml)
                    .required(false),
            );
        }
        let config: AppConfig = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SelectionError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        config.validate()?;

        *self.write() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SelectionError> {
        let toml_str = toml::to_string_pretty(&*self.read())?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.read().clone()
    }

    /// Apply `f` and keep the result only if it still validates.
    pub fn update<F>(&self, f: F) -> Result<(), SelectionError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.write();
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, AppConfig> {
        self.config.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, AppConfig> {
        self.config.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_rejects_invalid() {
        let manager = ConfigManager::new();
        let result = manager.update(|c| c.evolution.target.clear());
        assert!(result.is_err());
        // Rejected edits leave the stored config untouched
        assert_eq!(manager.get(), AppConfig::default());
    }

    #[test]
    fn test_update_applies_valid() {
        let manager = ConfigManager::new();
        manager.update(|c| c.evolution.mutations = 4).unwrap();
        assert_eq!(manager.get().evolution.mutations, 4);
    }

    #[test]
    fn test_toml_section_names() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml_str.contains(&format!("[{}]", EvolutionConfig::section_name())));
        assert!(toml_str.contains(&format!("[{}]", DisplayConfig::section_name())));
    }
}
