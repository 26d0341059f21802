//! Shape module - tetromino offset tables and the movable shape
//!
//! Every kind is plain data: a table of four `(column, row)` offsets per
//! orientation, plus a table naming which of those blocks are the bottom-most
//! ones (used for touch detection). Rotation just swaps which table row is used;
//! there is no geometry at runtime.
//!
//! Block order in each table is fixed: block `i` of a shape is always placed at
//! `anchor + block_offsets(kind, orientation)[i]`.

use std::fmt;

use crate::board::Block;
use crate::rng::RandomSource;
use crate::types::{
    BlockColor, Orientation, ShapeKind, BLOCKS_PER_SHAPE, NUM_COLORS, NUM_ORIENTATIONS,
    NUM_SHAPE_KINDS,
};

/// Offset of a single block relative to the shape anchor
pub type BlockOffset = (i8, i8);

/// Offsets of all four blocks of a shape
pub type ShapeOffsets = [BlockOffset; BLOCKS_PER_SHAPE];

const FIRST: usize = 0;
const SECOND: usize = 1;
const THIRD: usize = 2;
const FOURTH: usize = 3;

/// Get the block offsets for a kind and orientation
pub fn block_offsets(kind: ShapeKind, orientation: Orientation) -> ShapeOffsets {
    match kind {
        ShapeKind::Square => square_offsets(orientation),
        ShapeKind::Line => line_offsets(orientation),
        ShapeKind::T => t_offsets(orientation),
        ShapeKind::L => l_offsets(orientation),
        ShapeKind::J => j_offsets(orientation),
        ShapeKind::S => s_offsets(orientation),
        ShapeKind::Z => z_offsets(orientation),
    }
}

/// Indices of the bottom-most blocks for a kind and orientation
pub fn bottom_block_indices(kind: ShapeKind, orientation: Orientation) -> &'static [usize] {
    use Orientation::*;

    match (kind, orientation) {
        (ShapeKind::Square, _) => &[THIRD, FOURTH],

        (ShapeKind::Line, Zero | OneEighty) => &[FOURTH],
        (ShapeKind::Line, Ninety | TwoSeventy) => &[FIRST, SECOND, THIRD, FOURTH],

        (ShapeKind::T, Zero) => &[SECOND, THIRD, FOURTH],
        (ShapeKind::T, Ninety) => &[FIRST, FOURTH],
        (ShapeKind::T, OneEighty) => &[FIRST, SECOND, FOURTH],
        (ShapeKind::T, TwoSeventy) => &[FIRST, FOURTH],

        (ShapeKind::L, Zero) => &[THIRD, FOURTH],
        (ShapeKind::L, Ninety) => &[FIRST, SECOND, FOURTH],
        (ShapeKind::L, OneEighty) => &[FIRST, FOURTH],
        (ShapeKind::L, TwoSeventy) => &[FIRST, SECOND, THIRD],

        (ShapeKind::J, Zero) => &[THIRD, FOURTH],
        (ShapeKind::J, Ninety) => &[FIRST, SECOND, THIRD],
        (ShapeKind::J, OneEighty) => &[FIRST, FOURTH],
        (ShapeKind::J, TwoSeventy) => &[FIRST, SECOND, FOURTH],

        (ShapeKind::S, Zero | OneEighty) => &[SECOND, FOURTH],
        (ShapeKind::S, Ninety | TwoSeventy) => &[FIRST, THIRD, FOURTH],

        (ShapeKind::Z, Zero | OneEighty) => &[SECOND, FOURTH],
        (ShapeKind::Z, Ninety | TwoSeventy) => &[FIRST, THIRD, FOURTH],
    }
}

/// Square shapes (same for all orientations)
///
/// ```text
/// | 0* | 1 |
/// | 2  | 3 |
/// ```
/// `*` marks the anchor.
fn square_offsets(_orientation: Orientation) -> ShapeOffsets {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

/// Line shapes: vertical at 0/180, horizontal at 90/270
fn line_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => [(0, 0), (0, 1), (0, 2), (0, 3)],
        Orientation::Ninety | Orientation::TwoSeventy => [(-1, 0), (0, 0), (1, 0), (2, 0)],
    }
}

fn t_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Orientation::Ninety => [(2, 1), (1, 0), (1, 1), (1, 2)],
        Orientation::OneEighty => [(1, 2), (0, 1), (1, 1), (2, 1)],
        Orientation::TwoSeventy => [(0, 1), (1, 0), (1, 1), (1, 2)],
    }
}

fn l_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero => [(0, 0), (0, 1), (0, 2), (1, 2)],
        Orientation::Ninety => [(1, 1), (0, 1), (-1, 1), (-1, 2)],
        Orientation::OneEighty => [(0, 2), (0, 1), (0, 0), (-1, 0)],
        Orientation::TwoSeventy => [(-1, 1), (0, 1), (1, 1), (1, 0)],
    }
}

fn j_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero => [(1, 0), (1, 1), (1, 2), (0, 2)],
        Orientation::Ninety => [(2, 1), (1, 1), (0, 1), (0, 0)],
        Orientation::OneEighty => [(0, 2), (0, 1), (0, 0), (1, 0)],
        Orientation::TwoSeventy => [(0, 0), (1, 0), (2, 0), (2, 1)],
    }
}

fn s_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => [(0, 0), (0, 1), (1, 1), (1, 2)],
        Orientation::Ninety | Orientation::TwoSeventy => [(2, 0), (1, 0), (1, 1), (0, 1)],
    }
}

fn z_offsets(orientation: Orientation) -> ShapeOffsets {
    match orientation {
        Orientation::Zero | Orientation::OneEighty => [(1, 0), (1, 1), (0, 1), (0, 2)],
        Orientation::Ninety | Orientation::TwoSeventy => [(-1, 0), (0, 0), (0, 1), (1, 1)],
    }
}

/// A tetromino: four blocks positioned around an anchor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    color: BlockColor,
    orientation: Orientation,
    column: i8,
    row: i8,
    blocks: [Block; BLOCKS_PER_SHAPE],
}

impl Shape {
    pub fn new(
        kind: ShapeKind,
        column: i8,
        row: i8,
        color: BlockColor,
        orientation: Orientation,
    ) -> Self {
        let mut shape = Self {
            kind,
            color,
            orientation,
            column,
            row,
            blocks: [Block::new(column, row, color); BLOCKS_PER_SHAPE],
        };
        shape.realign_blocks();
        shape
    }

    /// A shape of random kind, color and orientation anchored at (column, row)
    ///
    /// Draws kind, then color, then orientation.
    pub fn random(rng: &mut impl RandomSource, column: i8, row: i8) -> Self {
        let kind = Self::random_kind(rng);
        let color = BlockColor::from_index(rng.next_range(NUM_COLORS));
        let orientation = Self::random_orientation(rng);
        Self::new(kind, column, row, color, orientation)
    }

    pub fn random_kind(rng: &mut impl RandomSource) -> ShapeKind {
        ShapeKind::from_index(rng.next_range(NUM_SHAPE_KINDS))
    }

    pub fn random_orientation(rng: &mut impl RandomSource) -> Orientation {
        Orientation::from_index(rng.next_range(NUM_ORIENTATIONS))
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> BlockColor {
        self.color
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn column(&self) -> i8 {
        self.column
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn blocks(&self) -> &[Block; BLOCKS_PER_SHAPE] {
        &self.blocks
    }

    /// The bottom-most blocks at the current orientation
    pub fn bottom_blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        bottom_block_indices(self.kind, self.orientation)
            .iter()
            .map(move |&i| &self.blocks[i])
    }

    /// Place every block at `anchor + offset` for the current orientation
    fn realign_blocks(&mut self) {
        let offsets = block_offsets(self.kind, self.orientation);
        for (block, (dc, dr)) in self.blocks.iter_mut().zip(offsets) {
            block.column = self.column + dc;
            block.row = self.row + dr;
        }
    }

    /// Switch to `orientation`, keeping the anchor
    pub fn rotate_to(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.realign_blocks();
    }

    pub fn rotate_clockwise(&mut self) {
        self.rotate_to(self.orientation.rotate_cw());
    }

    pub fn rotate_counterclockwise(&mut self) {
        self.rotate_to(self.orientation.rotate_ccw());
    }

    /// Move the anchor and every block by (columns, rows)
    pub fn shift_by(&mut self, columns: i8, rows: i8) {
        self.column += columns;
        self.row += rows;
        for block in &mut self.blocks {
            block.column += columns;
            block.row += rows;
        }
    }

    pub fn lower_by_one_row(&mut self) {
        self.shift_by(0, 1);
    }

    pub fn raise_by_one_row(&mut self) {
        self.shift_by(0, -1);
    }

    pub fn shift_left_by_one_column(&mut self) {
        self.shift_by(-1, 0);
    }

    pub fn shift_right_by_one_column(&mut self) {
        self.shift_by(1, 0);
    }

    /// Set the anchor absolutely and recompute all blocks from the table
    pub fn move_to(&mut self, column: i8, row: i8) {
        self.column = column;
        self.row = row;
        self.realign_blocks();
    }

    /// Hand the blocks over, consuming the shape
    pub fn into_blocks(self) -> [Block; BLOCKS_PER_SHAPE] {
        self.blocks
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} facing {}: {}, {}, {}, {}",
            self.color,
            self.kind.as_str(),
            self.orientation,
            self.blocks[FIRST],
            self.blocks[SECOND],
            self.blocks[THIRD],
            self.blocks[FOURTH]
        )
    }
}
