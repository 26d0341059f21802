//! Board module - fixed storage for settled blocks
//!
//! The board is a 10x20 grid where each cell is either empty or holds the block
//! that settled there. It is pure storage: legality checks live in [`crate::rules`].
//! Uses a flat array indexed by `(row * columns) + column` and never allocates.
//! Coordinates: (column, row) where column ranges 0..9 (left to right) and row
//! ranges 0..19 (top to bottom).
//!
//! Access outside the grid is a caller bug and panics.

use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{BlockColor, NUM_COLUMNS, NUM_ROWS};

/// Number of columns as a `usize`, for sizing row buffers
pub const COLUMNS: usize = NUM_COLUMNS as usize;

/// Number of rows as a `usize`, for sizing column buffers
pub const ROWS: usize = NUM_ROWS as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = COLUMNS * ROWS;

/// Blocks taken from a single board row, left to right
pub type BlockRow = ArrayVec<Block, COLUMNS>;

/// Blocks that moved within a single board column, bottom to top
pub type BlockColumn = ArrayVec<Block, ROWS>;

/// A single colored block
///
/// Two blocks are equal when they share position and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub column: i8,
    pub row: i8,
    pub color: BlockColor,
}

impl Block {
    pub fn new(column: i8, row: i8, color: BlockColor) -> Self {
        Self { column, row, color }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}, {}]", self.color, self.column, self.row)
    }
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLUMNS + column)
    cells: [Option<Block>; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Flat index for (column, row); panics when out of bounds
    #[inline(always)]
    fn index(column: i8, row: i8) -> usize {
        assert!(
            Self::in_bounds(column, row),
            "board access out of bounds: column {column}, row {row}"
        );
        (row as usize) * COLUMNS + (column as usize)
    }

    /// Whether (column, row) lies inside the grid
    #[inline(always)]
    pub fn in_bounds(column: i8, row: i8) -> bool {
        column >= 0 && (column as u8) < NUM_COLUMNS && row >= 0 && (row as u8) < NUM_ROWS
    }

    pub fn columns(&self) -> u8 {
        NUM_COLUMNS
    }

    pub fn rows(&self) -> u8 {
        NUM_ROWS
    }

    /// Block at (column, row), if any
    pub fn get(&self, column: i8, row: i8) -> Option<Block> {
        self.cells[Self::index(column, row)]
    }

    /// Store or clear the cell at (column, row)
    pub fn set(&mut self, column: i8, row: i8, block: Option<Block>) {
        self.cells[Self::index(column, row)] = block;
    }

    /// Remove and return the block at (column, row)
    pub fn take(&mut self, column: i8, row: i8) -> Option<Block> {
        self.cells[Self::index(column, row)].take()
    }

    pub fn is_occupied(&self, column: i8, row: i8) -> bool {
        self.get(column, row).is_some()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: i8) -> bool {
        let start = Self::index(0, row);
        self.cells[start..start + COLUMNS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Blocks in `row`, left to right
    pub fn row_blocks(&self, row: i8) -> BlockRow {
        let start = Self::index(0, row);
        self.cells[start..start + COLUMNS]
            .iter()
            .flatten()
            .copied()
            .collect()
    }

    /// Iterate over every settled block, top row first
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.cells.iter().flatten()
    }

    pub fn occupied_count(&self) -> usize {
        self.blocks().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Export as a color grid: 0 = empty, 1..=6 = color index + 1
    pub fn write_u8_grid(&self, out: &mut [[u8; COLUMNS]; ROWS]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            for (column, out_cell) in out_row.iter_mut().enumerate() {
                *out_cell = match self.cells[row * COLUMNS + column] {
                    Some(block) => block.color.index() + 1,
                    None => 0,
                };
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
