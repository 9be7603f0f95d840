//! Core data structures for the linelace grid-fill puzzle.
//!
//! This crate provides the fundamental types shared by the placement engine,
//! the inventory generator, and the game session:
//!
//! - [`fill`]: The tri-state fill model (`Empty` / `Highlight` / `Filled`)
//!   shared by dots, edges, and cells.
//! - [`geom`]: Grid-local geometry — [`Vec2`] poses, [`EdgeRef`] lattice edge
//!   references, and [`CellPos`] cell coordinates.
//! - [`grid`]: [`GridModel`], the authoritative dot/edge/cell state container
//!   with incremental derived-state recomputation, and [`HighlightSet`], the
//!   transient set of edges a candidate placement would fill.
//! - [`shape`]: [`ShapeTemplate`] placement templates built from axis-aligned
//!   edge [`Segment`]s, with quarter-turn rotation.
//!
//! The grid maintains one invariant at all times: dot and cell fill state is
//! a pure function of edge state. A dot is filled iff any of its adjacent
//! edges is filled; a cell is filled iff all four of its bounding edges are
//! filled. Dots and cells are never set independently.
//!
//! # Examples
//!
//! ```
//! use linelace_core::{EdgeRef, FillState, GridModel};
//!
//! let mut grid = GridModel::new(4, 4);
//!
//! // Frame the cell at (0, 0).
//! grid.set_edge(EdgeRef::horizontal(0, 0), FillState::Filled);
//! grid.set_edge(EdgeRef::horizontal(0, 1), FillState::Filled);
//! grid.set_edge(EdgeRef::vertical(0, 0), FillState::Filled);
//! grid.set_edge(EdgeRef::vertical(1, 0), FillState::Filled);
//!
//! let update = grid.recompute_derived(0, 0);
//! assert!(update.newly_completed);
//! ```

pub mod fill;
pub mod geom;
pub mod grid;
pub mod shape;

// Re-export commonly used types
pub use self::{
    fill::FillState,
    geom::{CellPos, EdgeKind, EdgeRef, Vec2},
    grid::{CellUpdate, GridModel, HighlightSet},
    shape::{Segment, ShapeId, ShapeTemplate},
};
