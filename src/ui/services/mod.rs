pub mod config_bridge;
pub mod settings;

pub use config_bridge::ConfigBridge;
pub use settings::SettingsService;
