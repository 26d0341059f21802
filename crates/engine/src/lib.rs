//! Drivers built on top of the core engine.
//!
//! - [`session`]: resolves landings (clear cascade, next spawn) and game over
//! - [`place`]: move the falling shape to a target column and orientation in one call

pub mod place;
pub mod session;

pub use place::{apply_place, PlaceError};
pub use session::{LandingReport, Session, Step};
