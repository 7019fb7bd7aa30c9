use crate::config::ConfigManager;
use crate::error::SelectionError;
use crate::ui::state::AppState;
use std::path::Path;

/// Load and save settings files picked through a native dialog.
pub struct SettingsService;

impl SettingsService {
    pub fn load_with_dialog(manager: &ConfigManager, state: &mut AppState) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML Files", &["toml"])
            .pick_file()
        {
            match Self::load(manager, state, &path) {
                Ok(()) => {
                    state.status_message = format!("Settings loaded from {}", path.display());
                }
                Err(e) => {
                    log::warn!("Failed to load settings from {}: {}", path.display(), e);
                    state.status_message = format!("Error loading settings: {}", e);
                }
            }
        }
    }

    pub fn save_with_dialog(manager: &ConfigManager, state: &mut AppState) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML Files", &["toml"])
            .set_file_name("visual_selection.toml")
            .save_file()
        {
            match manager.save_to_file(&path) {
                Ok(()) => {
                    state.status_message = format!("Settings saved to {}", path.display());
                }
                Err(e) => {
                    state.status_message = format!("Error saving settings: {}", e);
                }
            }
        }
    }

    pub fn load(
        manager: &ConfigManager,
        state: &mut AppState,
        path: &Path,
    ) -> Result<(), SelectionError> {
        manager.load_from_file(path)?;
        state.apply_config(&manager.get());
        Ok(())
    }
}
