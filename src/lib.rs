pub mod config;
pub mod engine;
pub mod error;
pub mod ui;

pub use error::{Result, SelectionError};
