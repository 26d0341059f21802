use serde::{Deserialize, Serialize};

use crate::board::{COLUMNS, ROWS};
use crate::shape::Shape;
use crate::types::{BlockColor, Orientation, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeSnapshot {
    pub kind: ShapeKind,
    pub color: BlockColor,
    pub orientation: Orientation,
    pub column: i8,
    pub row: i8,
}

impl From<&Shape> for ShapeSnapshot {
    fn from(value: &Shape) -> Self {
        Self {
            kind: value.kind(),
            color: value.color(),
            orientation: value.orientation(),
            column: value.column(),
            row: value.row(),
        }
    }
}

impl ShapeSnapshot {
    /// Rebuild the full shape (blocks included) from the summary
    pub fn to_shape(&self) -> Shape {
        Shape::new(self.kind, self.column, self.row, self.color, self.orientation)
    }
}

/// Point-in-time view of a game session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// 0 = empty, 1..=6 = block color index + 1
    pub board: [[u8; COLUMNS]; ROWS],
    pub falling: Option<ShapeSnapshot>,
    pub next: Option<ShapeSnapshot>,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn occupied_cells(&self) -> usize {
        self.board.iter().flatten().filter(|&&c| c != 0).count()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && self.falling.is_some()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; COLUMNS]; ROWS],
            falling: None,
            next: None,
            score: 0,
            level: 1,
            game_over: false,
        }
    }
}
