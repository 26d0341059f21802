//! Collision and placement rules
//!
//! Pure predicates over a shape and the board. The engine applies a speculative
//! mutation, asks [`is_illegal_placement`], and undoes the mutation when it is.

use crate::board::Board;
use crate::shape::Shape;
use crate::types::NUM_ROWS;

/// True if any block is outside the grid or overlaps a settled block
pub fn is_illegal_placement(shape: &Shape, board: &Board) -> bool {
    shape.blocks().iter().any(|block| {
        !Board::in_bounds(block.column, block.row) || board.is_occupied(block.column, block.row)
    })
}

/// True if any bottom block rests on the floor or on a settled block
///
/// Expects a legally placed shape.
pub fn detect_touch(shape: &Shape, board: &Board) -> bool {
    let last_row = NUM_ROWS as i8 - 1;
    shape.bottom_blocks().any(|block| {
        block.row >= last_row || board.is_occupied(block.column, block.row + 1)
    })
}
