//! Pixel geometry of the tile grid.

use crate::core::{BoardConfig, Position};

use super::InputResolver;

/// Tiles of a fixed size separated by a fixed gap, with one gap of margin
/// before the first row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileLayout {
    pub tile_width: u32,
    pub tile_height: u32,
    pub gap: u32,
    pub columns: usize,
    pub rows: usize,
}

impl TileLayout {
    /// 90×120 tiles with a 10 px gap.
    #[must_use]
    pub fn for_board(board: BoardConfig) -> Self {
        Self {
            tile_width: 90,
            tile_height: 120,
            gap: 10,
            columns: board.width,
            rows: board.height,
        }
    }

    /// Top-left pixel of the tile at `pos`.
    #[must_use]
    pub fn tile_origin(&self, pos: Position) -> (i64, i64) {
        let gap = i64::from(self.gap);
        let left = pos.col as i64 * (i64::from(self.tile_width) + gap) + gap;
        let top = pos.row as i64 * (i64::from(self.tile_height) + gap) + gap;
        (left, top)
    }

    fn cell(&self, coord: i32, extent: u32, count: usize) -> Option<usize> {
        let offset = i64::from(coord) - i64::from(self.gap);
        if offset < 0 {
            return None;
        }
        let stride = i64::from(extent) + i64::from(self.gap);
        if offset % stride >= i64::from(extent) {
            return None;
        }
        let cell = (offset / stride) as usize;
        (cell < count).then_some(cell)
    }
}

impl InputResolver for TileLayout {
    fn resolve(&self, x: i32, y: i32) -> Option<Position> {
        let col = self.cell(x, self.tile_width, self.columns)?;
        let row = self.cell(y, self.tile_height, self.rows)?;
        Some(Position::new(row, col))
    }
}
