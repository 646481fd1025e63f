//! Terminal UI: the game screen, mouse-to-tile mapping, and end-of-game
//! notices.

mod app;
mod board_layout;
mod game_view;
mod theme;

pub use app::App;
pub use board_layout::BoardLayout;
pub use theme::Theme;

use crate::game::{Board, Win, WinLine};

/// A finished game, shown over its final position until dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Won(Win),
    Draw(Board),
}

impl Notice {
    /// The board as the game ended
    pub fn board(&self) -> &Board {
        match self {
            Notice::Won(win) => &win.board,
            Notice::Draw(board) => board,
        }
    }

    pub fn line(&self) -> Option<&WinLine> {
        match self {
            Notice::Won(win) => Some(&win.line),
            Notice::Draw(_) => None,
        }
    }
}
