use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Target phrase must not be empty")]
    EmptyTarget,

    #[error("Genome length must be positive")]
    EmptyGenome,

    #[error("Simulation worker panicked")]
    WorkerPanicked,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SelectionError>;
