//! Game session logic driving the [`core`](crate::core) model.
//!
//! - [`GameSession`] - The game controller: current and next piece, gravity, scoring, lifecycle
//! - [`GameStats`] - Score, level, and line-clear counters
//! - [`GameConfig`] - Gravity timing
//! - [`InputState`] / [`GameEvent`] - Input events and held-key tracking
//! - [`PieceGenerator`] - Uniform random piece source
//! - [`wall_kick`] - Rotation recovery near the side walls
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{GameConfig, GameEvent, GameSession, Key};
//!
//! let mut session = GameSession::new(GameConfig::default());
//!
//! session.handle_event(GameEvent::KeyDown(Key::Left));
//! session.handle_event(GameEvent::KeyDown(Key::Rotate));
//! session.handle_event(GameEvent::Tick);
//!
//! assert!(session.state().is_playing());
//! assert_eq!(session.stats().score(), 0);
//! ```

pub use self::{config::*, input::*, piece_generator::*, session::*, stats::*};

mod config;
mod input;
mod piece_generator;
mod session;
mod stats;
pub mod wall_kick;
