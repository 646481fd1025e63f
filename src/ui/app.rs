use super::game_view::{self, View};
use super::{BoardLayout, Notice, Theme};
use crate::config::UiConfig;
use crate::error::ConfigError;
use crate::game::{Coord, GameState, MoveError, Placement, BOARD_HEIGHT, BOARD_WIDTH};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    game_state: GameState,
    cursor: Coord,
    show_cursor: bool,
    theme: Theme,
    tile_width: u16,
    /// Board position from the last draw, used to hit-test clicks
    layout: Option<BoardLayout>,
    notice: Option<Notice>,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &UiConfig) -> Result<Self, ConfigError> {
        Ok(App {
            game_state: GameState::new(),
            cursor: Self::center(),
            show_cursor: config.cursor,
            theme: Theme::from_config(config)?,
            tile_width: config.tile_width.clamp(1, UiConfig::MAX_TILE_WIDTH),
            layout: None,
            notice: None,
            message: None,
            should_quit: false,
        })
    }

    fn center() -> Coord {
        Coord::new(BOARD_WIDTH as i32 / 2, BOARD_HEIGHT as i32 / 2)
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        tracing::info!("game started");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        tracing::info!(score = ?self.game_state.score(), "game closed");
        Ok(())
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                // The next draw picks up the new size
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        if self.notice.take().is_some() {
            return;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.cursor = Self::center();
                self.message = Some("New game started!".to_string());
                tracing::info!("game restarted");
            }
            _ => {}
        }
    }

    /// Handle mouse input: a left click places on the clicked tile
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        self.message = None;

        if self.notice.take().is_some() {
            return;
        }

        let tile = self
            .layout
            .and_then(|layout| layout.tile_at(mouse.column, mouse.row));
        if let Some(coord) = tile {
            self.cursor = coord;
            self.place(coord);
        }
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let moved = self.cursor.offset(dx, dy, 1);
        if moved.in_bounds() {
            self.cursor = moved;
        }
    }

    /// Place the current player's mark and report the outcome
    fn place(&mut self, coord: Coord) {
        match self.game_state.place(coord) {
            Ok(Placement::Continue { .. }) => {}
            Ok(Placement::Won(win)) => {
                self.notice = Some(Notice::Won(win));
                self.cursor = Self::center();
            }
            Ok(Placement::Draw { board }) => {
                self.notice = Some(Notice::Draw(board));
                self.cursor = Self::center();
            }
            Err(MoveError::Occupied { .. }) => {
                self.message = Some("You cannot override an existing piece!".to_string());
            }
            Err(err @ MoveError::OutOfBounds(_)) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        let view = View {
            game_state: &self.game_state,
            cursor: self.show_cursor.then_some(self.cursor),
            message: self.message.as_deref(),
            notice: self.notice.as_ref(),
            theme: &self.theme,
            tile_width: self.tile_width,
        };
        let layout = game_view::render(frame, &view);
        self.layout = Some(layout);
    }
}
