pub mod input_panel;
pub mod main_panel;
pub mod status_panel;

pub use input_panel::InputPanel;
pub use main_panel::MainPanel;
pub use status_panel::StatusPanel;
