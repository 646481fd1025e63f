//! Log subscriber setup. The terminal is owned by the UI, so events go to a
//! file or nowhere.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::LogError;

/// Build the event filter: `RUST_LOG` when set, the configured level otherwise.
pub fn filter(config: &LoggingConfig) -> Result<EnvFilter, LogError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|source| LogError::Filter {
        filter: config.level.clone(),
        source,
    })
}

/// Install the global subscriber, appending to `file`.
///
/// Returns `Ok(false)` without installing anything when no file is given.
pub fn init(config: &LoggingConfig, file: Option<&Path>) -> Result<bool, LogError> {
    let Some(path) = file.or(config.file.as_deref()) else {
        return Ok(false);
    };

    let writer = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LogError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(config)?)
        .with_writer(Mutex::new(writer))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|_| LogError::AlreadyInstalled)?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}
