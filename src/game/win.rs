//! Five-in-a-row detection along the four board axes.
//!
//! [`winning_line`] checks only the neighbourhood of the last placed tile and
//! is what the game uses. [`scan_board`] is the exhaustive forward scan over
//! every occupied tile; it finds the same runs and serves as a cross-check.

use super::{Board, Cell, Coord, Player};

pub const WIN_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
    /// Top-left to bottom-right, `\`
    DiagonalDown,
    /// Bottom-left to top-right, `/`
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// Forward step as `(dx, dy)`
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// A detected run of [`WIN_LENGTH`] marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine {
    pub player: Player,
    pub direction: Direction,
    /// Tiles of the run, first tile in scan order first
    pub cells: [Coord; WIN_LENGTH],
}

impl WinLine {
    fn from_start(player: Player, start: Coord, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        let mut cells = [start; WIN_LENGTH];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = start.offset(dx, dy, i as i32);
        }
        WinLine {
            player,
            direction,
            cells,
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// Whether `origin` starts a forward run of [`WIN_LENGTH`] for `player`.
///
/// The origin counts as the first mark; only the following tiles are read.
/// Off-board tiles read as the sentinel and end the run.
pub fn forward_run(board: &Board, origin: Coord, player: Player, direction: Direction) -> bool {
    let (dx, dy) = direction.delta();
    let target = player.to_cell();
    (1..WIN_LENGTH as i32).all(|i| board.occupant(origin.offset(dx, dy, i)) == target)
}

/// Scan the whole board in row-major order for any run of [`WIN_LENGTH`].
pub fn scan_board(board: &Board) -> Option<WinLine> {
    board.stones().find_map(|(origin, player)| {
        Direction::ALL
            .into_iter()
            .find(|&direction| forward_run(board, origin, player, direction))
            .map(|direction| WinLine::from_start(player, origin, direction))
    })
}

/// Check whether the mark at `coord` is part of a run of at least
/// [`WIN_LENGTH`], counting both ways along each axis.
pub fn winning_line(board: &Board, coord: Coord) -> Option<WinLine> {
    let player = board.occupant(coord).player()?;

    Direction::ALL.into_iter().find_map(|direction| {
        let (dx, dy) = direction.delta();
        let backward = count_from(board, coord, player.to_cell(), -dx, -dy);
        let forward = count_from(board, coord, player.to_cell(), dx, dy);

        (1 + backward + forward >= WIN_LENGTH).then(|| {
            let start = coord.offset(-dx, -dy, backward as i32);
            WinLine::from_start(player, start, direction)
        })
    })
}

/// Number of consecutive `target` cells after `origin` along `(dx, dy)`
fn count_from(board: &Board, origin: Coord, target: Cell, dx: i32, dy: i32) -> usize {
    (1..)
        .take_while(|&i| board.occupant(origin.offset(dx, dy, i)) == target)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};

    fn board_with(marks: &[(i32, i32)], player: Player) -> Board {
        let mut board = Board::new();
        for &(col, row) in marks {
            board.place(Coord::new(col, row), player).unwrap();
        }
        board
    }

    fn line(start: (i32, i32), direction: Direction) -> Vec<(i32, i32)> {
        let (dx, dy) = direction.delta();
        (0..WIN_LENGTH as i32)
            .map(|i| (start.0 + dx * i, start.1 + dy * i))
            .collect()
    }

    #[test]
    fn test_horizontal_win() {
        let marks = line((3, 4), Direction::Horizontal);
        let board = board_with(&marks, Player::One);

        // Any tile of the run finds it, not only the ends
        for &(col, row) in &marks {
            let win = winning_line(&board, Coord::new(col, row)).unwrap();
            assert_eq!(win.player, Player::One);
            assert_eq!(win.direction, Direction::Horizontal);
            assert_eq!(win.cells[0], Coord::new(3, 4));
            assert_eq!(win.cells[4], Coord::new(7, 4));
        }
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(&line((9, 0), Direction::Vertical), Player::Two);
        let win = winning_line(&board, Coord::new(9, 2)).unwrap();
        assert_eq!(win.player, Player::Two);
        assert_eq!(win.direction, Direction::Vertical);
    }

    #[test]
    fn test_diagonal_down_win() {
        let board = board_with(&line((11, 11), Direction::DiagonalDown), Player::One);
        let win = winning_line(&board, Coord::new(15, 15)).unwrap();
        assert_eq!(win.direction, Direction::DiagonalDown);
        assert_eq!(win.cells[0], Coord::new(11, 11));
    }

    #[test]
    fn test_diagonal_up_win() {
        let marks = line((0, 15), Direction::DiagonalUp);
        let board = board_with(&marks, Player::Two);
        let win = winning_line(&board, Coord::new(2, 13)).unwrap();
        assert_eq!(win.direction, Direction::DiagonalUp);
        assert_eq!(win.cells[0], Coord::new(0, 15));
        assert_eq!(win.cells[4], Coord::new(4, 11));
    }

    #[test]
    fn test_no_win_with_four() {
        for direction in Direction::ALL {
            let mut marks = line((5, 5), direction);
            marks.truncate(WIN_LENGTH - 1);
            let board = board_with(&marks, Player::One);
            for &(col, row) in &marks {
                assert_eq!(winning_line(&board, Coord::new(col, row)), None);
            }
            assert_eq!(scan_board(&board), None);
        }
    }

    #[test]
    fn test_broken_run_by_opponent() {
        let marks = line((2, 2), Direction::Horizontal);
        let mut board = board_with(&[marks[0], marks[1], marks[3], marks[4]], Player::One);
        board.place(Coord::new(marks[2].0, marks[2].1), Player::Two).unwrap();

        assert_eq!(winning_line(&board, Coord::new(2, 2)), None);
        assert_eq!(winning_line(&board, Coord::new(6, 2)), None);
        assert_eq!(scan_board(&board), None);
    }

    #[test]
    fn test_broken_run_by_gap() {
        let board = board_with(&[(0, 0), (1, 1), (2, 2), (4, 4), (5, 5)], Player::Two);
        assert_eq!(winning_line(&board, Coord::new(4, 4)), None);
        assert_eq!(scan_board(&board), None);
    }

    #[test]
    fn test_overline_wins() {
        let board = board_with(
            &[(0, 8), (1, 8), (2, 8), (3, 8), (4, 8), (5, 8)],
            Player::One,
        );
        assert!(winning_line(&board, Coord::new(5, 8)).is_some());
        assert!(scan_board(&board).is_some());
    }

    #[test]
    fn test_run_does_not_wrap_at_edge() {
        // Three at the end of row 0 and two at the start of row 1 are adjacent
        // in memory but not on the board
        let board = board_with(&[(13, 0), (14, 0), (15, 0), (0, 1), (1, 1)], Player::One);
        assert_eq!(winning_line(&board, Coord::new(15, 0)), None);
        assert_eq!(scan_board(&board), None);
    }

    #[test]
    fn test_empty_tile_never_wins() {
        let board = Board::new();
        assert_eq!(winning_line(&board, Coord::new(0, 0)), None);
        assert_eq!(winning_line(&board, Coord::new(-1, 3)), None);
        assert_eq!(scan_board(&board), None);
    }

    #[test]
    fn test_forward_run_only_looks_forward() {
        let board = board_with(&line((4, 4), Direction::Horizontal), Player::One);
        assert!(forward_run(&board, Coord::new(4, 4), Player::One, Direction::Horizontal));
        // The last tile has nothing to its right
        assert!(!forward_run(&board, Coord::new(8, 4), Player::One, Direction::Horizontal));
        assert!(!forward_run(&board, Coord::new(4, 4), Player::Two, Direction::Horizontal));
    }

    #[test]
    fn test_forward_run_stops_at_edge() {
        let board = board_with(&[(12, 3), (13, 3), (14, 3), (15, 3)], Player::One);
        assert!(!forward_run(&board, Coord::new(12, 3), Player::One, Direction::Horizontal));
    }

    #[test]
    fn test_scan_board_reports_first_run_start() {
        let board = board_with(&line((6, 10), Direction::DiagonalUp), Player::Two);
        let win = scan_board(&board).unwrap();
        // Row-major order reaches the top end of a `/` run first, but only the
        // bottom end starts a forward run
        assert_eq!(win.cells[0], Coord::new(6, 10));
        assert_eq!(win.direction, Direction::DiagonalUp);
    }

    #[test]
    fn test_local_and_full_scan_agree() {
        for direction in Direction::ALL {
            for row in 0..BOARD_HEIGHT as i32 {
                for col in 0..BOARD_WIDTH as i32 {
                    let marks = line((col, row), direction);
                    let fits = marks
                        .iter()
                        .all(|&(c, r)| Coord::new(c, r).in_bounds());
                    if !fits {
                        continue;
                    }
                    let board = board_with(&marks, Player::One);
                    let last = marks[WIN_LENGTH - 1];
                    let local = winning_line(&board, Coord::new(last.0, last.1)).unwrap();
                    let full = scan_board(&board).unwrap();
                    assert_eq!(local, full);
                }
            }
        }
    }
}
