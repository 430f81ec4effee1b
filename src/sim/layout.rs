//! Block grid layout
//!
//! The grid is a centered band between two side lanes. Each block's top-left
//! corner is a pure function of its (column, row) index, so every reset
//! rebuilds the same grid bit-for-bit.

use glam::Vec2;

use super::state::{Block, BlockKind};
use crate::consts::*;

/// Steel cells of the grid, one string per row, one char per column
pub const BLOCK_MAP: [&str; BLOCK_ROWS] = [
    "000001100000",
    "100000000001",
    "000100001000",
    "010001100010",
    "100000000001",
    "000100001000",
    "000001100000",
    "111100001111",
];

/// Kind of the block at (col, row) according to [`BLOCK_MAP`]
pub fn kind_at(col: usize, row: usize) -> BlockKind {
    match BLOCK_MAP[row].as_bytes()[col] {
        b'1' => BlockKind::Steel,
        _ => BlockKind::Normal,
    }
}

/// Left edge of the first column
pub fn offset_left() -> f32 {
    let playable_width = CANVAS_WIDTH - SIDE_LANE_WIDTH * 2.0;
    let total_block_width =
        BLOCK_COLS as f32 * BLOCK_WIDTH + (BLOCK_COLS - 1) as f32 * BLOCK_PADDING;
    SIDE_LANE_WIDTH + (playable_width - total_block_width) / 2.0
}

/// Top-left corner of the block at (col, row)
pub fn block_origin(col: usize, row: usize) -> Vec2 {
    Vec2::new(
        col as f32 * (BLOCK_WIDTH + BLOCK_PADDING) + offset_left(),
        row as f32 * (BLOCK_HEIGHT + BLOCK_PADDING) + BLOCK_OFFSET_TOP,
    )
}

/// Index of (col, row) in the column-major block list
#[inline]
pub fn block_index(col: usize, row: usize) -> usize {
    col * BLOCK_ROWS + row
}

/// Build a fresh grid: every block alive, column-major order
pub fn build_blocks() -> Vec<Block> {
    let mut blocks = Vec::with_capacity(BLOCK_COLS * BLOCK_ROWS);
    for col in 0..BLOCK_COLS {
        for row in 0..BLOCK_ROWS {
            blocks.push(Block {
                pos: block_origin(col, row),
                alive: true,
                kind: kind_at(col, row),
            });
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_dimensions() {
        assert_eq!(BLOCK_MAP.len(), BLOCK_ROWS);
        assert!(BLOCK_MAP.iter().all(|row| row.len() == BLOCK_COLS));
    }

    #[test]
    fn test_band_is_centered() {
        let first = block_origin(0, 0);
        let last = block_origin(BLOCK_COLS - 1, 0);
        assert_eq!(first, Vec2::new(78.0, 80.0));
        let right_margin = CANVAS_WIDTH - (last.x + BLOCK_WIDTH);
        assert_eq!(first.x, right_margin);
    }

    #[test]
    fn test_bottom_right_origin() {
        assert_eq!(block_origin(11, 7), Vec2::new(672.0, 283.0));
    }

    #[test]
    fn test_steel_cells_follow_map() {
        let blocks = build_blocks();
        assert_eq!(blocks.len(), BLOCK_COLS * BLOCK_ROWS);
        for col in 0..BLOCK_COLS {
            for row in 0..BLOCK_ROWS {
                let block = &blocks[block_index(col, row)];
                let expected = BLOCK_MAP[row].as_bytes()[col] == b'1';
                assert_eq!(block.kind == BlockKind::Steel, expected);
                assert!(block.alive);
                assert_eq!(block.pos, block_origin(col, row));
            }
        }
    }

    #[test]
    fn test_steel_count() {
        let steel = build_blocks()
            .iter()
            .filter(|b| b.kind == BlockKind::Steel)
            .count();
        assert_eq!(steel, 24);
    }
}
