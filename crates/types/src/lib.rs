//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data with no game logic attached, making them usable
//! from the simulation core, the session driver, and any presentation layer
//! observing the engine.
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Spawn anchor**: column 4, row 0
//! - **Preview anchor**: column 12, row 1 (outside the board, right-hand side)
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_LINE` | 10 | Points per cleared line, multiplied by level |
//! | `LEVEL_THRESHOLD` | 500 | Level `L` ends once score reaches `L * 500` |
//!
//! # Examples
//!
//! ```
//! use swiftris_types::*;
//!
//! let kind = ShapeKind::from_str("square").unwrap();
//! assert_eq!(kind, ShapeKind::Square);
//!
//! let orientation = Orientation::TwoSeventy.rotate_cw();
//! assert_eq!(orientation, Orientation::Zero);
//!
//! let command = GameCommand::from_str("moveLeft").unwrap();
//! assert_eq!(command, GameCommand::MoveLeft);
//!
//! assert_eq!(NUM_COLUMNS, 10);
//! assert_eq!(NUM_ROWS, 20);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const NUM_COLUMNS: u8 = 10;

/// Board height in cells (20 rows)
pub const NUM_ROWS: u8 = 20;

/// Anchor column for a freshly spawned falling shape
pub const STARTING_COLUMN: i8 = 4;

/// Anchor row for a freshly spawned falling shape
pub const STARTING_ROW: i8 = 0;

/// Anchor column for the preview shape
pub const PREVIEW_COLUMN: i8 = 12;

/// Anchor row for the preview shape
pub const PREVIEW_ROW: i8 = 1;

/// Points per cleared line (before the level multiplier)
pub const POINTS_PER_LINE: u32 = 10;

/// Score needed per level before leveling up (`level * LEVEL_THRESHOLD`)
pub const LEVEL_THRESHOLD: u32 = 500;

/// Tick interval at level one (milliseconds per row of gravity)
pub const TICK_LENGTH_LEVEL_ONE_MS: u32 = 600;

/// Tick interval reduction per level gained
pub const TICK_LENGTH_STEP_MS: u32 = 100;

/// Fastest tick interval
pub const TICK_LENGTH_MIN_MS: u32 = 50;

/// Number of tetromino kinds
pub const NUM_SHAPE_KINDS: u32 = 7;

/// Number of block colors
pub const NUM_COLORS: u32 = 6;

/// Number of discrete orientations
pub const NUM_ORIENTATIONS: u32 = 4;

/// Number of blocks in every shape
pub const BLOCKS_PER_SHAPE: usize = 4;

/// Block colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockColor {
    Blue,
    Orange,
    Purple,
    Red,
    Teal,
    Yellow,
}

impl BlockColor {
    pub const ALL: [BlockColor; 6] = [
        BlockColor::Blue,
        BlockColor::Orange,
        BlockColor::Purple,
        BlockColor::Red,
        BlockColor::Teal,
        BlockColor::Yellow,
    ];

    /// Color at `index`, wrapping modulo the number of colors
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % NUM_COLORS) as usize]
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Lower-case name, used as the sprite/asset key by renderers
    pub fn sprite_name(&self) -> &'static str {
        match self {
            BlockColor::Blue => "blue",
            BlockColor::Orange => "orange",
            BlockColor::Purple => "purple",
            BlockColor::Red => "red",
            BlockColor::Teal => "teal",
            BlockColor::Yellow => "yellow",
        }
    }

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.sprite_name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for BlockColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sprite_name())
    }
}

/// The seven tetromino kinds
///
/// The declaration order is the order used when drawing a random kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Square,
    Line,
    T,
    L,
    J,
    S,
    Z,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Square,
        ShapeKind::Line,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Kind at `index`, wrapping modulo the number of kinds
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % NUM_SHAPE_KINDS) as usize]
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use swiftris_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("line"), Some(ShapeKind::Line));
    /// assert_eq!(ShapeKind::from_str("T"), Some(ShapeKind::T));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" | "o" => Some(ShapeKind::Square),
            "line" | "i" => Some(ShapeKind::Line),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Line => "line",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
        }
    }
}

/// Rotation states, measured clockwise from the spawn orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "90")]
    Ninety,
    #[serde(rename = "180")]
    OneEighty,
    #[serde(rename = "270")]
    TwoSeventy,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Zero,
        Orientation::Ninety,
        Orientation::OneEighty,
        Orientation::TwoSeventy,
    ];

    /// Orientation at `index`, wrapping modulo four
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % NUM_ORIENTATIONS) as usize]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Next orientation in the given direction; wraps past 270 and below 0
    pub fn rotate(&self, clockwise: bool) -> Self {
        let step = if clockwise { 1 } else { NUM_ORIENTATIONS - 1 };
        Self::from_index(self.index() as u32 + step)
    }

    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        self.rotate(true)
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(&self) -> Self {
        self.rotate(false)
    }

    pub fn degrees(&self) -> u16 {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 90,
            Orientation::OneEighty => 180,
            Orientation::TwoSeventy => 270,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Commands accepted from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameCommand {
    BeginGame,
    MoveLeft,
    MoveRight,
    RotateClockwise,
    RotateCounterClockwise,
    Drop,
    Tick,
}

impl GameCommand {
    /// Parse command from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "begingame" | "begin" => Some(GameCommand::BeginGame),
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "rotateclockwise" | "rotate" => Some(GameCommand::RotateClockwise),
            "rotatecounterclockwise" => Some(GameCommand::RotateCounterClockwise),
            "drop" => Some(GameCommand::Drop),
            "tick" => Some(GameCommand::Tick),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::BeginGame => "beginGame",
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::RotateClockwise => "rotateClockwise",
            GameCommand::RotateCounterClockwise => "rotateCounterClockwise",
            GameCommand::Drop => "drop",
            GameCommand::Tick => "tick",
        }
    }
}

/// Notifications emitted by the engine, in firing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameEvent {
    GameDidBegin,
    GameDidEnd,
    GameShapeDidMove,
    GameShapeDidDrop,
    GameShapeDidLand,
    GameDidLevelUp,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::GameDidBegin => "gameDidBegin",
            GameEvent::GameDidEnd => "gameDidEnd",
            GameEvent::GameShapeDidMove => "gameShapeDidMove",
            GameEvent::GameShapeDidDrop => "gameShapeDidDrop",
            GameEvent::GameShapeDidLand => "gameShapeDidLand",
            GameEvent::GameDidLevelUp => "gameDidLevelUp",
        }
    }
}
