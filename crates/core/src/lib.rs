//! Core game logic module - pure, deterministic, and testable
//!
//! Everything needed to simulate a Swiftris game: the 10x20 board, the seven
//! four-block shapes, collision rules, scoring, and the [`Swiftris`] engine that
//! drives a falling shape from spawn to landing. No rendering, input, timers or
//! I/O live here; the caller supplies ticks and commands.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of settled blocks
//! - [`shape`]: shape kinds, per-orientation block layouts, anchor movement
//! - [`rules`]: illegal-placement and touch tests
//! - [`scoring`]: line points, level thresholds, gravity interval
//! - [`game`]: the engine (spawn, fall, settle, clear, end)
//! - [`listener`]: notifications fired inline by the engine
//! - [`rng`]: injectable randomness for shape generation
//! - [`snapshot`]: serializable view of a session
//!
//! # Example
//!
//! ```
//! use swiftris_core::Swiftris;
//!
//! let mut game = Swiftris::with_seed(12345);
//! game.begin_game();
//! game.spawn_next();
//!
//! game.move_left();
//! game.rotate_shape();
//! game.drop_shape();
//! game.tick();
//!
//! assert!(game.falling_shape().is_none());
//! assert_eq!(game.board().occupied_count(), 4);
//! ```
//!
//! # Timing
//!
//! Gravity is one [`Swiftris::tick`] per [`scoring::tick_length_ms`]
//! milliseconds: 600 ms at level 1, 100 ms faster per level, never below 50 ms.

pub mod board;
pub mod game;
pub mod listener;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use swiftris_types as types;

// Re-export commonly used types for convenience
pub use board::{Block, BlockColumn, BlockRow, Board};
pub use game::{LineClear, Swiftris};
pub use listener::{EventLog, GameListener};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use rules::{detect_touch, is_illegal_placement};
pub use scoring::{apply_line_clear, tick_length_ms, ScoreResult};
pub use shape::{block_offsets, Shape};
pub use snapshot::{GameSnapshot, ShapeSnapshot};
