//! # Piskvorky
//!
//! Five-in-a-row for two players on a 16x16 board, played with the mouse in
//! a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, players, win detection, turn state
//! - [`ui`]: Terminal UI: board rendering, click-to-tile mapping, notices
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: File-backed `tracing` subscriber
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
