//! Core game logic: the 16x16 board, players, win detection, and the game
//! state that ties them together with turn tracking and restarts.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, Coord, MoveError, BOARD_HEIGHT, BOARD_WIDTH};
pub use player::Player;
pub use state::{GameState, Placement, Score, Win};
pub use win::{scan_board, winning_line, Direction, WinLine, WIN_LENGTH};
