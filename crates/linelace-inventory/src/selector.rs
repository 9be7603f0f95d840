//! Complexity-weighted shape selection.

use linelace_core::{GridModel, ShapeTemplate};
use linelace_engine::check_for_space;
use log::{debug, warn};
use rand::{Rng, RngExt as _};

/// Number of shape slots a session keeps in play.
pub const SLOT_COUNT: usize = 3;

/// Top breakpoint of the complexity table on the availability-filtered
/// refill path.
const FILTERED_TOP_BREAK: f32 = 0.96;
/// Top breakpoint on the full-pool fallback path.
const FALLBACK_TOP_BREAK: f32 = 0.95;

/// Maps a uniform roll in `[0, 1)` to a target complexity via the fixed
/// cumulative table, biased toward simple shapes. The two refill paths
/// differ only in the complexity-5 breakpoint.
fn complexity_for_roll(roll: f32, top_break: f32) -> u8 {
    match roll {
        r if r < 0.325 => 1,
        r if r < 0.56 => 2,
        r if r < 0.75 => 3,
        r if r < 0.875 => 4,
        r if r < top_break => 5,
        _ => 6,
    }
}

/// Draws the target complexity for one slot: a table roll, damped so
/// difficult shapes don't arrive in runs. If the previous draw exceeded 3
/// and the new one would be at least as high, it re-rolls uniformly below
/// the previous value.
fn draw_complexity<R: Rng + ?Sized>(rng: &mut R, top_break: f32, last_complexity: u8) -> u8 {
    let complexity = complexity_for_roll(rng.random::<f32>(), top_break);
    if last_complexity > 3 && complexity >= last_complexity {
        rng.random_range(1..last_complexity)
    } else {
        complexity
    }
}

/// Picks the index of a candidate whose complexity is closest to `target`,
/// uniformly at random among ties.
fn pick_closest<R: Rng + ?Sized>(
    candidates: &[&ShapeTemplate],
    target: u8,
    rng: &mut R,
) -> usize {
    let closest = candidates
        .iter()
        .map(|t| t.complexity().abs_diff(target))
        .min()
        .expect("candidate list is never empty");
    let tied: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, t)| t.complexity().abs_diff(target) == closest)
        .map(|(i, _)| i)
        .collect();
    tied[rng.random_range(0..tied.len())]
}

/// Outcome of an inventory update after a completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryStatus {
    /// At least one active shape still fits the grid.
    Ready,
    /// The slots were empty, or held only unplaceable shapes that were
    /// discarded, and have been refilled with placeable shapes.
    Refilled,
    /// Neither the active shapes nor a fresh refill can be placed; the
    /// session is over. Terminal state reported upward, never entered
    /// silently.
    NoSpace,
}

/// Refills shape slots by weighted complexity sampling over the template
/// pool.
///
/// The selector holds only the immutable pool; slots and randomness belong
/// to the caller, so a seeded [`Rng`] reproduces a session's draws exactly.
///
/// # Examples
///
/// ```
/// use linelace_core::GridModel;
/// use linelace_inventory::{InventorySelector, base_templates, expand_pool};
///
/// let selector = InventorySelector::new(expand_pool(&base_templates()));
/// let mut slots: [_; 3] = std::array::from_fn(|_| None);
/// let grid = GridModel::new(6, 6);
/// selector.refill(&mut slots, &grid, &mut rand::rng());
/// assert!(slots.iter().all(Option::is_some));
/// ```
#[derive(Debug, Clone)]
pub struct InventorySelector {
    pool: Vec<ShapeTemplate>,
}

impl InventorySelector {
    /// Creates a selector over an expanded template pool.
    ///
    /// # Panics
    ///
    /// Panics if the pool is empty.
    #[must_use]
    pub fn new(pool: Vec<ShapeTemplate>) -> Self {
        assert!(!pool.is_empty(), "template pool is empty");
        Self { pool }
    }

    /// The full template pool.
    #[must_use]
    pub fn pool(&self) -> &[ShapeTemplate] {
        &self.pool
    }

    /// Updates the slots after a completed move.
    ///
    /// If any shape in play still fits the grid the slots are left alone.
    /// Otherwise the slots are refilled — shapes in hand that no longer fit
    /// anywhere are discarded first. A refill that produces no placeable
    /// shape either is the terminal [`InventoryStatus::NoSpace`].
    pub fn update<R: Rng + ?Sized>(
        &self,
        slots: &mut [Option<ShapeTemplate>],
        grid: &GridModel,
        rng: &mut R,
    ) -> InventoryStatus {
        let any_fits = slots
            .iter()
            .flatten()
            .any(|shape| check_for_space(shape, grid));
        if any_fits {
            return InventoryStatus::Ready;
        }

        if slots.iter().any(Option::is_some) {
            debug!("discarding shapes in hand, none fit the grid");
            for slot in slots.iter_mut() {
                *slot = None;
            }
        }
        self.refill(slots, grid, rng);
        let any_fits = slots
            .iter()
            .flatten()
            .any(|shape| check_for_space(shape, grid));
        if any_fits {
            InventoryStatus::Refilled
        } else {
            InventoryStatus::NoSpace
        }
    }

    /// Fills every empty slot, preferring templates that fit the current
    /// grid.
    ///
    /// Candidates are pre-filtered through the placement-feasibility test;
    /// this is a best-effort heuristic against dead ends, not a guarantee
    /// that later shapes stay placeable. A draw above complexity 3 damps
    /// the next one: if it would be at least as high, it re-rolls uniformly
    /// below the previous value, so difficult shapes don't arrive in runs.
    pub fn refill<R: Rng + ?Sized>(
        &self,
        slots: &mut [Option<ShapeTemplate>],
        grid: &GridModel,
        rng: &mut R,
    ) {
        let mut available: Vec<&ShapeTemplate> = self
            .pool
            .iter()
            .filter(|template| check_for_space(template, grid))
            .collect();
        if available.is_empty() {
            warn!("no pool template fits the grid, refilling from the full pool");
            self.refill_unfiltered(slots, rng);
            return;
        }

        let mut last_complexity = 0u8;
        for slot in slots.iter_mut().filter(|slot| slot.is_none()) {
            let complexity = draw_complexity(rng, FILTERED_TOP_BREAK, last_complexity);
            if complexity > last_complexity {
                last_complexity = complexity;
            }

            let chosen = pick_closest(&available, complexity, rng);
            let template = available[chosen];
            debug!(
                "slot refill: target complexity {complexity}, chose shape {} (complexity {})",
                template.id(),
                template.complexity()
            );
            *slot = Some(template.clone());
            // Keep some variety without exhausting a small pool.
            if available.len() > 2 {
                available.remove(chosen);
            }
        }
    }

    /// Fills every empty slot from the full pool, ignoring the grid.
    ///
    /// Fallback path when no template passes the availability filter; the
    /// caller detects the resulting dead end through [`Self::update`].
    pub fn refill_unfiltered<R: Rng + ?Sized>(
        &self,
        slots: &mut [Option<ShapeTemplate>],
        rng: &mut R,
    ) {
        let mut working: Vec<&ShapeTemplate> = self.pool.iter().collect();
        for slot in slots.iter_mut().filter(|slot| slot.is_none()) {
            let complexity = complexity_for_roll(rng.random::<f32>(), FALLBACK_TOP_BREAK);
            let chosen = pick_closest(&working, complexity, rng);
            *slot = Some(working[chosen].clone());
            if working.len() > 2 {
                working.remove(chosen);
            }
        }
    }
}
