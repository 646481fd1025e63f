use super::Player;

pub const BOARD_WIDTH: usize = 16;
pub const BOARD_HEIGHT: usize = 16;

/// A tile position. Column grows to the right, row grows downward.
///
/// Signed so that win scans can step off the board; such coordinates read
/// back as [`Cell::OffBoard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    pub const fn new(col: i32, row: i32) -> Self {
        Coord { col, row }
    }

    /// Whether the coordinate lies within `[0, width) x [0, height)`
    pub fn in_bounds(self) -> bool {
        self.col >= 0
            && self.row >= 0
            && (self.col as usize) < BOARD_WIDTH
            && (self.row as usize) < BOARD_HEIGHT
    }

    /// The coordinate `steps` tiles away along `(dx, dy)`
    pub fn offset(self, dx: i32, dy: i32, steps: i32) -> Coord {
        Coord::new(self.col + dx * steps, self.row + dy * steps)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
    /// Sentinel for coordinates outside the grid. Never stored.
    OffBoard,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
            Cell::Empty | Cell::OffBoard => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("tile {coord} is already taken by {by}")]
    Occupied { coord: Coord, by: Player },

    #[error("tile {0} is outside the board")]
    OutOfBounds(Coord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// Occupant of a tile, or [`Cell::OffBoard`] outside the grid
    pub fn occupant(&self, coord: Coord) -> Cell {
        if coord.in_bounds() {
            self.cells[coord.row as usize][coord.col as usize]
        } else {
            Cell::OffBoard
        }
    }

    /// Put a player's mark on an empty tile.
    ///
    /// Any mark blocks the tile, the player's own included.
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), MoveError> {
        match self.occupant(coord) {
            Cell::OffBoard => Err(MoveError::OutOfBounds(coord)),
            Cell::Empty => {
                self.cells[coord.row as usize][coord.col as usize] = player.to_cell();
                Ok(())
            }
            Cell::One => Err(MoveError::Occupied { coord, by: Player::One }),
            Cell::Two => Err(MoveError::Occupied { coord, by: Player::Two }),
        }
    }

    /// Check if every tile is taken
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    /// Occupied tiles in row-major order
    pub fn stones(&self) -> impl Iterator<Item = (Coord, Player)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.player()
                    .map(|player| (Coord::new(col as i32, row as i32), player))
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..BOARD_HEIGHT as i32 {
            for col in 0..BOARD_WIDTH as i32 {
                assert_eq!(board.occupant(Coord::new(col, row)), Cell::Empty);
            }
        }
        assert_eq!(board.stones().count(), 0);
    }

    #[test]
    fn test_place() {
        let mut board = Board::new();
        board.place(Coord::new(3, 7), Player::One).unwrap();
        assert_eq!(board.occupant(Coord::new(3, 7)), Cell::One);
        // Column and row are not swapped
        assert_eq!(board.occupant(Coord::new(7, 3)), Cell::Empty);
    }

    #[test]
    fn test_place_on_opponent_rejected() {
        let mut board = Board::new();
        let coord = Coord::new(0, 0);
        board.place(coord, Player::One).unwrap();

        let before = board;
        assert_eq!(
            board.place(coord, Player::Two),
            Err(MoveError::Occupied { coord, by: Player::One })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_on_own_mark_rejected() {
        let mut board = Board::new();
        let coord = Coord::new(5, 5);
        board.place(coord, Player::Two).unwrap();
        assert_eq!(
            board.place(coord, Player::Two),
            Err(MoveError::Occupied { coord, by: Player::Two })
        );
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new();
        let coord = Coord::new(BOARD_WIDTH as i32, 0);
        assert_eq!(board.place(coord, Player::One), Err(MoveError::OutOfBounds(coord)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_occupant_off_board() {
        let mut board = Board::new();
        board.place(Coord::new(0, 0), Player::One).unwrap();
        board.place(Coord::new(15, 15), Player::Two).unwrap();

        let outside = [
            Coord::new(-1, 0),
            Coord::new(0, -1),
            Coord::new(16, 0),
            Coord::new(0, 16),
            Coord::new(16, 16),
            Coord::new(-1, -1),
            Coord::new(i32::MIN, i32::MAX),
        ];
        for coord in outside {
            assert_eq!(board.occupant(coord), Cell::OffBoard);
            assert_eq!(board.occupant(coord).player(), None);
        }
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        assert!(!board.is_full());
        for row in 0..BOARD_HEIGHT as i32 {
            for col in 0..BOARD_WIDTH as i32 {
                board.place(Coord::new(col, row), Player::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.stones().count(), BOARD_WIDTH * BOARD_HEIGHT);
    }

    #[test]
    fn test_stones_row_major() {
        let mut board = Board::new();
        board.place(Coord::new(4, 2), Player::Two).unwrap();
        board.place(Coord::new(1, 9), Player::One).unwrap();
        board.place(Coord::new(9, 2), Player::One).unwrap();

        let stones: Vec<_> = board.stones().collect();
        assert_eq!(
            stones,
            vec![
                (Coord::new(4, 2), Player::Two),
                (Coord::new(9, 2), Player::One),
                (Coord::new(1, 9), Player::One),
            ]
        );
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::Occupied {
            coord: Coord::new(2, 3),
            by: Player::One,
        };
        assert_eq!(err.to_string(), "tile (2, 3) is already taken by Player 1");
    }
}
