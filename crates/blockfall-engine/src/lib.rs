//! Board, tetromino, and game-session model for a single-player falling-block game.
//!
//! The [`core`] module holds the geometry (shapes, pieces, the bordered grid) and
//! the [`engine`] module holds the session state machine that drives it.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A move, drop, or rotation was rejected because the result would collide.
///
/// The session is left unchanged when this is returned.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece colliding after move")]
pub struct PieceCollisionError;
