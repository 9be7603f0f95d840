//! Game session coordination for linelace.
//!
//! Ties the grid, placement engine, scorer, and inventory together into one
//! playable [`Session`]:
//!
//! - [`difficulty`]: board sizes and score goals per tier.
//! - [`event`]: the [`GameEvent`] queue the presentation layer drains.
//! - [`session`]: the preview/drop move flow, win and dead-end detection,
//!   and best-score tracking.
//!
//! Sessions are deterministic under a seeded random number generator; all
//! randomness comes in through the caller's [`rand::Rng`].

pub mod difficulty;
pub mod event;
pub mod session;

pub use self::{
    difficulty::DifficultyTier,
    event::GameEvent,
    session::{Session, SessionError},
};
