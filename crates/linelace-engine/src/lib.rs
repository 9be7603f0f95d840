//! Placement and line-clear engine for linelace.
//!
//! This crate turns candidate shape poses into grid mutations:
//!
//! - [`validate`]: snaps a shape's segments onto empty lattice edges and
//!   produces the [`HighlightSet`] a drop would fill, or rejects the pose.
//! - [`check_for_space`]: existence test — whether any pose on the grid
//!   validates for a shape, sampled at half-cell resolution.
//! - [`commit`] / [`apply`]: promote a highlight set to filled edges, detect
//!   completed cells and full rows/columns, build the cascading
//!   [`ClearPlan`] (including collateral "orphan" neighbors), and clear it.
//! - [`ComboScorer`]: consecutive-completion combo and score bookkeeping.
//!
//! Everything here is synchronous and side-effect free except through the
//! [`GridModel`] passed in: every operation runs to completion before
//! returning and the grid is consistent again the moment [`apply`] returns.
//! Presentation timing is a consumer of [`ClearPlan::delays`], never a
//! participant in grid mutation.
//!
//! [`HighlightSet`]: linelace_core::HighlightSet
//! [`GridModel`]: linelace_core::GridModel

pub mod clear;
pub mod score;
pub mod validate;

pub use self::{
    clear::{ClearPlan, CommitOutcome, apply, commit},
    score::{ComboScorer, ScoreConfig},
    validate::{SNAP_THRESHOLD, check_for_space, validate},
};
