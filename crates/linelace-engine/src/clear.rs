//! Commit, line-clear detection, and cascade application.

use std::collections::BTreeSet;

use linelace_core::{CellPos, FillState, GridModel, HighlightSet};

/// The cascading set of cells cleared by one move.
///
/// `primary` cells belong to a fully completed row or column; `orphans` are
/// filled cells adjacent to a completed line whose own row and column are
/// incomplete, cleared as collateral so stray geometry does not remain
/// stranded. The two sets are disjoint. The plan is pure data, disjoint from
/// grid state until [`apply`] runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearPlan {
    primary: Vec<CellPos>,
    orphans: Vec<CellPos>,
    origin: Option<CellPos>,
}

impl ClearPlan {
    /// Cells belonging to a completed row or column, in row-major order.
    #[must_use]
    pub fn primary(&self) -> &[CellPos] {
        &self.primary
    }

    /// Collateral neighbor cells, in row-major order.
    #[must_use]
    pub fn orphans(&self) -> &[CellPos] {
        &self.orphans
    }

    /// The most recently completed cell, used as the cascade's propagation
    /// origin for stagger timing. `None` only for an empty plan.
    #[must_use]
    pub const fn origin(&self) -> Option<CellPos> {
        self.origin
    }

    /// Whether the plan clears nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.orphans.is_empty()
    }

    /// Total number of cells the plan clears.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.primary.len() + self.orphans.len()
    }

    /// Iterates over every cell the plan clears, primary cells first.
    pub fn cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.primary.iter().chain(self.orphans.iter()).copied()
    }

    /// Per-cell stagger hints for the presentation layer: each cleared cell
    /// paired with its Manhattan distance from the cascade origin. The
    /// engine itself never sleeps; converting distance to wall time is the
    /// consumer's concern.
    pub fn delays(&self) -> impl Iterator<Item = (CellPos, u32)> + '_ {
        let origin = self.origin;
        self.cells()
            .map(move |cell| (cell, origin.map_or(0, |o| cell.manhattan_distance(o))))
    }
}

/// Result of committing one highlight set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Cells that transitioned to filled during this commit, in row-major
    /// scan order. Drives the combo delta even when no line completes.
    pub completed_cells: Vec<CellPos>,
    /// The cascade to clear; empty when no row or column completed.
    pub plan: ClearPlan,
}

/// Fills every edge in the highlight set and computes the resulting clear
/// plan.
///
/// Derived state is recomputed only for cells adjacent to a just-filled
/// edge; untouched cells cannot change. Committing an empty set is a no-op
/// that leaves the grid unchanged and reports zero completed cells.
///
/// # Panics
///
/// Panics if the set references an edge outside the grid.
pub fn commit(set: &HighlightSet, grid: &mut GridModel) -> CommitOutcome {
    for edge in set {
        grid.set_edge(edge, FillState::Filled);
    }

    let mut affected = BTreeSet::new();
    for edge in set {
        for cell in grid.adjacent_cells(edge).into_iter().flatten() {
            affected.insert(cell);
        }
    }

    let mut completed_cells = Vec::new();
    for &pos in &affected {
        if grid.recompute_derived(pos.x, pos.y).newly_completed {
            completed_cells.push(pos);
        }
    }
    let origin = completed_cells.last().copied();

    let plan = build_plan(grid, origin);
    CommitOutcome {
        completed_cells,
        plan,
    }
}

fn build_plan(grid: &GridModel, origin: Option<CellPos>) -> ClearPlan {
    let (width, height) = (grid.width(), grid.height());

    let row_complete: Vec<bool> = (0..height)
        .map(|y| (0..width).all(|x| grid.cell_filled(CellPos::new(x, y))))
        .collect();
    let col_complete: Vec<bool> = (0..width)
        .map(|x| (0..height).all(|y| grid.cell_filled(CellPos::new(x, y))))
        .collect();

    let mut primary = BTreeSet::new();
    let mut orphans = BTreeSet::new();

    for y in 0..height {
        if !row_complete[usize::from(y)] {
            continue;
        }
        for x in 0..width {
            primary.insert(CellPos::new(x, y));
            if y > 0 && !row_complete[usize::from(y - 1)] {
                let below = CellPos::new(x, y - 1);
                if grid.cell_filled(below) {
                    orphans.insert(below);
                }
            }
            if y + 1 < height && !row_complete[usize::from(y + 1)] {
                let above = CellPos::new(x, y + 1);
                if grid.cell_filled(above) {
                    orphans.insert(above);
                }
            }
        }
    }

    for x in 0..width {
        if !col_complete[usize::from(x)] {
            continue;
        }
        for y in 0..height {
            primary.insert(CellPos::new(x, y));
            if x > 0 && !col_complete[usize::from(x - 1)] {
                let left = CellPos::new(x - 1, y);
                if grid.cell_filled(left) {
                    orphans.insert(left);
                }
            }
            if x + 1 < width && !col_complete[usize::from(x + 1)] {
                let right = CellPos::new(x + 1, y);
                if grid.cell_filled(right) {
                    orphans.insert(right);
                }
            }
        }
    }

    let orphans: Vec<_> = orphans.difference(&primary).copied().collect();
    ClearPlan {
        primary: primary.into_iter().collect(),
        orphans,
        origin,
    }
}

/// Clears every cell in the plan and restores derived-state consistency.
///
/// Each member cell and its four bounding edges are set back to empty, then
/// derived state is recomputed for the affected cells and their neighbors.
/// Runs to completion synchronously; partial application is not a
/// representable state.
///
/// # Panics
///
/// Panics if the plan references a cell outside the grid.
pub fn apply(plan: &ClearPlan, grid: &mut GridModel) {
    let mut affected = BTreeSet::new();
    for pos in plan.cells() {
        affected.insert(pos);
        for edge in pos.bounding_edges() {
            grid.set_edge(edge, FillState::Empty);
            for neighbor in grid.adjacent_cells(edge).into_iter().flatten() {
                affected.insert(neighbor);
            }
        }
    }
    for pos in affected {
        grid.recompute_derived(pos.x, pos.y);
    }
}
