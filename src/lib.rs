//! Swiftris (workspace facade crate).
//!
//! Re-exports the engine crates under `swiftris::{core,engine,types}` and hosts the
//! headless simulation used by the `swiftris` binary.

pub use swiftris_core as core;
pub use swiftris_engine as engine;
pub use swiftris_types as types;

pub mod sim;
