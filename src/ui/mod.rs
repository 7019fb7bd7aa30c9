mod app;
mod panels;
mod state;
mod widgets;
mod services;

pub use app::SelectionApp;
pub use state::{AppState, LogLine};
pub use services::ConfigBridge;
