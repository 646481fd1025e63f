use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur when installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to open log file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid log filter '{filter}': {source}")]
    Filter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("a global log subscriber is already installed")]
    AlreadyInstalled,
}
