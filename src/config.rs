use std::path::{Path, PathBuf};

use ratatui::style::Color;

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Board presentation. Board size and win length are fixed and not listed
/// here.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Terminal columns per tile
    pub tile_width: u16,
    /// Any ratatui colour: a name like "blue" or "#rrggbb"
    pub player_one_color: String,
    pub player_two_color: String,
    /// Show the keyboard cursor on the board
    pub cursor: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            tile_width: 3,
            player_one_color: "blue".into(),
            player_two_color: "red".into(),
            cursor: true,
        }
    }
}

impl UiConfig {
    pub const MAX_TILE_WIDTH: u16 = 6;

    /// Colour of a player's marks.
    pub fn player_color(&self, player: Player) -> Result<Color, ConfigError> {
        let (key, value) = match player {
            Player::One => ("ui.player_one_color", &self.player_one_color),
            Player::Two => ("ui.player_two_color", &self.player_two_color),
        };
        value
            .parse::<Color>()
            .map_err(|_| ConfigError::Validation(format!("{key}: unknown colour '{value}'")))
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "piskvorky=debug". `RUST_LOG` wins
    /// when set.
    pub level: String,
    /// Log destination. No file, no logging: the terminal belongs to the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".into(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.tile_width == 0 || self.ui.tile_width > UiConfig::MAX_TILE_WIDTH {
            return Err(ConfigError::Validation(format!(
                "ui.tile_width must be in 1..={}",
                UiConfig::MAX_TILE_WIDTH
            )));
        }
        let one = self.ui.player_color(Player::One)?;
        let two = self.ui.player_color(Player::Two)?;
        if one == two {
            return Err(ConfigError::Validation(
                "ui.player_one_color and ui.player_two_color must differ".into(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".into(),
            ));
        }
        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}': {e}",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
