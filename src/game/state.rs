use super::{winning_line, Board, Coord, MoveError, Player, WinLine};

/// Games finished in this session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub one: u32,
    pub two: u32,
    pub draws: u32,
}

impl Score {
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::One => self.one += 1,
            Player::Two => self.two += 1,
        }
    }
}

/// A finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    pub line: WinLine,
    /// The board as it stood when the run was completed
    pub board: Board,
}

impl Win {
    pub fn winner(&self) -> Player {
        self.line.player
    }
}

/// Result of a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Mark placed, game goes on
    Continue { coord: Coord, player: Player },
    /// Mark completed a run; the board has been reset
    Won(Win),
    /// Mark filled the last tile without a run; the board has been reset
    Draw { board: Board },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    move_count: usize,
    score: Score,
}

impl GameState {
    /// Fresh session: empty board, Player 1 to move, no score
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One,
            move_count: 0,
            score: Score::default(),
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marks placed in the current game
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Place the current player's mark.
    ///
    /// A rejected placement leaves the board and the turn untouched. A
    /// placement that ends the game scores it and starts a new one.
    pub fn place(&mut self, coord: Coord) -> Result<Placement, MoveError> {
        let player = self.current_player;
        if let Err(err) = self.board.place(coord, player) {
            tracing::debug!(%coord, %player, %err, "placement rejected");
            return Err(err);
        }

        self.move_count += 1;
        self.current_player = player.other();
        tracing::debug!(%coord, %player, moves = self.move_count, "mark placed");

        if let Some(line) = winning_line(&self.board, coord) {
            let win = Win {
                line,
                board: self.board,
            };
            self.score.record_win(player);
            tracing::info!(winner = %player, moves = self.move_count, "game won");
            self.reset();
            return Ok(Placement::Won(win));
        }

        if self.board.is_full() {
            let board = self.board;
            self.score.draws += 1;
            tracing::info!(moves = self.move_count, "game drawn");
            self.reset();
            return Ok(Placement::Draw { board });
        }

        Ok(Placement::Continue { coord, player })
    }

    /// Discard the current game and start over with Player 1.
    /// The session score is kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::One;
        self.move_count = 0;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
