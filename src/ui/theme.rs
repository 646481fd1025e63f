use crate::config::UiConfig;
use crate::error::ConfigError;
use crate::game::Player;
use ratatui::style::{Color, Modifier, Style};

/// Resolved colours for drawing marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub player_one: Color,
    pub player_two: Color,
}

impl Theme {
    pub fn from_config(config: &UiConfig) -> Result<Self, ConfigError> {
        Ok(Theme {
            player_one: config.player_color(Player::One)?,
            player_two: config.player_color(Player::Two)?,
        })
    }

    pub fn player(&self, player: Player) -> Color {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    pub fn mark(&self, player: Player) -> Style {
        Style::default()
            .fg(self.player(player))
            .add_modifier(Modifier::BOLD)
    }

    /// Marks of the winning run
    pub fn highlight(&self, player: Player) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.player(player))
            .add_modifier(Modifier::BOLD)
    }

    pub fn empty(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
