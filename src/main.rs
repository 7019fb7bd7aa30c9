use eframe::NativeOptions;
use std::path::PathBuf;
use visual_selection::config::AppConfig;
use visual_selection::ui::SelectionApp;

/// Settings file read at startup unless `VISUAL_SELECTION_CONFIG` points elsewhere.
const DEFAULT_CONFIG_FILE: &str = "visual_selection.toml";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config_path = std::env::var_os("VISUAL_SELECTION_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let config = AppConfig::load_layered(Some(&config_path)).unwrap_or_else(|e| {
        log::warn!("Using default settings: {}", e);
        AppConfig::default()
    });

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.display.window_width, config.display.window_height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Visual Selection"),
        ..Default::default()
    };

    eframe::run_native(
        "Visual Selection",
        native_options,
        Box::new(move |cc| Ok(Box::new(SelectionApp::new(cc, config)))),
    )
}
