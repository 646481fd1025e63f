use crate::game::{Coord, BOARD_HEIGHT, BOARD_WIDTH};
use ratatui::layout::Rect;

/// Where the board sits on screen, and the mapping between terminal
/// positions and tiles. Each tile is `tile_width` columns by one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    outer: Rect,
    tile_width: u16,
}

impl BoardLayout {
    /// Board size including the one-cell border on every side
    pub fn outer_size(tile_width: u16) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * tile_width + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Center the board in `area`, clipped to it when the terminal is small.
    pub fn centered(area: Rect, tile_width: u16) -> Self {
        let (width, height) = Self::outer_size(tile_width);
        let outer = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width: width.min(area.width),
            height: height.min(area.height),
        };
        BoardLayout { outer, tile_width }
    }

    /// Area including the border
    pub fn outer(&self) -> Rect {
        self.outer
    }

    /// Area covered by tiles
    pub fn inner(&self) -> Rect {
        Rect {
            x: self.outer.x.saturating_add(1),
            y: self.outer.y.saturating_add(1),
            width: self.outer.width.saturating_sub(2),
            height: self.outer.height.saturating_sub(2),
        }
    }

    pub fn tile_width(&self) -> u16 {
        self.tile_width
    }

    /// Tile under a terminal position, `None` on the border or outside.
    pub fn tile_at(&self, x: u16, y: u16) -> Option<Coord> {
        let inner = self.inner();
        if x < inner.x || y < inner.y || x >= inner.right() || y >= inner.bottom() {
            return None;
        }
        let coord = Coord::new(
            ((x - inner.x) / self.tile_width) as i32,
            (y - inner.y) as i32,
        );
        coord.in_bounds().then_some(coord)
    }

    /// Screen area of a tile, `None` when off the board.
    pub fn tile_rect(&self, coord: Coord) -> Option<Rect> {
        if !coord.in_bounds() {
            return None;
        }
        let inner = self.inner();
        Some(Rect {
            x: inner.x + coord.col as u16 * self.tile_width,
            y: inner.y + coord.row as u16,
            width: self.tile_width,
            height: 1,
        })
    }
}
