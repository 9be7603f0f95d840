//! Shape inventory generation for linelace.
//!
//! Maintains the pool of placement templates and refills the player's shape
//! slots:
//!
//! - [`catalog`]: the authored base shapes, each rated with a complexity of
//!   1-6 and a symmetry flag.
//! - [`pool`]: expansion of the base catalog into rotational variants (4 per
//!   shape, 2 for half-turn-symmetric ones) with stable sequential ids.
//! - [`selector`]: [`InventorySelector`], which samples a target complexity
//!   from a distribution biased toward simple shapes, narrows the pool to
//!   the closest available complexity, and filters candidates through the
//!   engine's placement-feasibility test so a refill avoids shapes that
//!   cannot be placed on the current grid.
//!
//! Selection needs randomness but owns none: every sampling operation takes
//! the caller's [`rand::Rng`], so sessions stay reproducible under a seeded
//! generator.

pub mod catalog;
pub mod pool;
pub mod selector;

pub use self::{
    catalog::base_templates,
    pool::expand_pool,
    selector::{InventorySelector, InventoryStatus, SLOT_COUNT},
};
