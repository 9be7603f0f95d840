//! The authoritative grid state container.
//!
//! A [`GridModel`] owns the dot, edge, and cell fill states of one grid
//! instance. Edges are the only independently mutable elements; dot and cell
//! state is derived from them via [`GridModel::recompute_derived`], which
//! touches only the 2×2 dot block around one cell so callers can batch
//! updates over an affected region without recomputing the whole grid.

use crate::{CellPos, EdgeKind, EdgeRef, FillState};

/// The transient set of edges one candidate placement would fill.
///
/// Produced by placement validation, one edge per shape segment, in segment
/// order. Either promoted to filled on commit or discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    edges: Vec<EdgeRef>,
}

impl HighlightSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Adds an edge. Returns `false` without adding if the edge is already
    /// present, so a shape whose segments snap onto the same edge can be
    /// rejected.
    pub fn insert(&mut self, edge: EdgeRef) -> bool {
        if self.edges.contains(&edge) {
            return false;
        }
        self.edges.push(edge);
        true
    }

    /// Number of edges in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the set contains no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over the edges in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        self.edges.iter().copied()
    }
}

impl<'a> IntoIterator for &'a HighlightSet {
    type Item = EdgeRef;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, EdgeRef>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter().copied()
    }
}

/// Result of recomputing one cell's derived state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    /// Whether the cell is filled after the update.
    pub filled: bool,
    /// Whether the cell transitioned from not-filled to filled.
    pub newly_completed: bool,
}

/// Dot, edge, and cell state for one grid instance.
///
/// Created once per difficulty tier and mutated only through edge commits
/// and clears. Out-of-range indices are a programming error and panic with
/// the offending coordinate; placement validity is checked upstream.
///
/// # Examples
///
/// ```
/// use linelace_core::{CellPos, EdgeRef, FillState, GridModel};
///
/// let mut grid = GridModel::new(4, 4);
/// assert_eq!(grid.edge(EdgeRef::horizontal(0, 0)), FillState::Empty);
///
/// grid.set_edge(EdgeRef::horizontal(0, 0), FillState::Filled);
/// grid.recompute_derived(0, 0);
/// assert_eq!(grid.dot(0, 0), FillState::Filled);
/// assert!(!grid.cell_filled(CellPos::new(0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    width: u8,
    height: u8,
    dots: Vec<FillState>,
    h_edges: Vec<FillState>,
    v_edges: Vec<FillState>,
    cells: Vec<FillState>,
}

impl GridModel {
    /// Creates an empty grid of `width` × `height` cells.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let (w, h) = (usize::from(width), usize::from(height));
        Self {
            width,
            height,
            dots: vec![FillState::Empty; (w + 1) * (h + 1)],
            h_edges: vec![FillState::Empty; w * (h + 1)],
            v_edges: vec![FillState::Empty; (w + 1) * h],
            cells: vec![FillState::Empty; w * h],
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Sets every dot, edge, and cell back to empty.
    pub fn reset(&mut self) {
        self.dots.fill(FillState::Empty);
        self.h_edges.fill(FillState::Empty);
        self.v_edges.fill(FillState::Empty);
        self.cells.fill(FillState::Empty);
    }

    fn edge_index(&self, edge: EdgeRef) -> usize {
        let (x, y, height) = (usize::from(edge.x), usize::from(edge.y), usize::from(self.height));
        let in_range = match edge.kind {
            EdgeKind::Horizontal => edge.x < self.width && edge.y <= self.height,
            EdgeKind::Vertical => edge.x <= self.width && edge.y < self.height,
        };
        assert!(
            in_range,
            "edge out of range: {edge} on {}x{} grid",
            self.width, self.height
        );
        match edge.kind {
            EdgeKind::Horizontal => x * (height + 1) + y,
            EdgeKind::Vertical => x * height + y,
        }
    }

    fn dot_index(&self, x: u8, y: u8) -> usize {
        assert!(
            x <= self.width && y <= self.height,
            "dot out of range: ({x}, {y}) on {}x{} grid",
            self.width,
            self.height
        );
        usize::from(x) * (usize::from(self.height) + 1) + usize::from(y)
    }

    fn cell_index(&self, pos: CellPos) -> usize {
        assert!(
            pos.x < self.width && pos.y < self.height,
            "cell out of range: {pos} on {}x{} grid",
            self.width,
            self.height
        );
        usize::from(pos.x) * usize::from(self.height) + usize::from(pos.y)
    }

    /// Returns the state of an edge.
    ///
    /// # Panics
    ///
    /// Panics if the edge index is out of range for this grid.
    #[must_use]
    pub fn edge(&self, edge: EdgeRef) -> FillState {
        let index = self.edge_index(edge);
        match edge.kind {
            EdgeKind::Horizontal => self.h_edges[index],
            EdgeKind::Vertical => self.v_edges[index],
        }
    }

    /// Sets the state of an edge.
    ///
    /// Derived dot and cell state is not updated here; call
    /// [`Self::recompute_derived`] for the affected cells afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the edge index is out of range for this grid.
    pub fn set_edge(&mut self, edge: EdgeRef, state: FillState) {
        let index = self.edge_index(edge);
        match edge.kind {
            EdgeKind::Horizontal => self.h_edges[index] = state,
            EdgeKind::Vertical => self.v_edges[index] = state,
        }
    }

    /// Returns the derived state of a dot.
    ///
    /// # Panics
    ///
    /// Panics if the dot index is out of range for this grid.
    #[must_use]
    pub fn dot(&self, x: u8, y: u8) -> FillState {
        self.dots[self.dot_index(x, y)]
    }

    /// Returns the derived state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell index is out of range for this grid.
    #[must_use]
    pub fn cell(&self, pos: CellPos) -> FillState {
        self.cells[self.cell_index(pos)]
    }

    /// Returns whether a cell is filled.
    ///
    /// # Panics
    ///
    /// Panics if the cell index is out of range for this grid.
    #[must_use]
    pub fn cell_filled(&self, pos: CellPos) -> bool {
        self.cell(pos).is_filled()
    }

    fn edge_filled(&self, edge: EdgeRef) -> bool {
        self.edge(edge).is_filled()
    }

    /// Recomputes the derived state of cell `(x, y)` and its 2×2 dot block
    /// from current edge state.
    ///
    /// Idempotent and incremental: only the four surrounding dots and this
    /// one cell are touched, so callers batch calls over the cells adjacent
    /// to just-changed edges.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is not a valid cell coordinate.
    pub fn recompute_derived(&mut self, x: u8, y: u8) -> CellUpdate {
        let pos = CellPos::new(x, y);
        let cell_index = self.cell_index(pos);

        for dot_x in x..=x + 1 {
            for dot_y in y..=y + 1 {
                let any_filled = (dot_x > 0
                    && self.edge_filled(EdgeRef::horizontal(dot_x - 1, dot_y)))
                    || (dot_x < self.width && self.edge_filled(EdgeRef::horizontal(dot_x, dot_y)))
                    || (dot_y > 0 && self.edge_filled(EdgeRef::vertical(dot_x, dot_y - 1)))
                    || (dot_y < self.height && self.edge_filled(EdgeRef::vertical(dot_x, dot_y)));
                let index = self.dot_index(dot_x, dot_y);
                self.dots[index] = FillState::from_filled(any_filled);
            }
        }

        let complete = pos.bounding_edges().iter().all(|&e| self.edge_filled(e));
        let was_filled = self.cells[cell_index].is_filled();
        self.cells[cell_index] = FillState::from_filled(complete);

        CellUpdate {
            filled: complete,
            newly_completed: !was_filled && complete,
        }
    }

    /// The cells adjacent to an edge, clipped to the grid.
    ///
    /// A horizontal edge borders the cells below and above it; a vertical
    /// edge borders the cells to its left and right.
    ///
    /// # Panics
    ///
    /// Panics if the edge index is out of range for this grid.
    #[must_use]
    pub fn adjacent_cells(&self, edge: EdgeRef) -> [Option<CellPos>; 2] {
        let _ = self.edge_index(edge);
        match edge.kind {
            EdgeKind::Horizontal => [
                (edge.y > 0).then(|| CellPos::new(edge.x, edge.y - 1)),
                (edge.y < self.height).then_some(CellPos::new(edge.x, edge.y)),
            ],
            EdgeKind::Vertical => [
                (edge.x > 0).then(|| CellPos::new(edge.x - 1, edge.y)),
                (edge.x < self.width).then_some(CellPos::new(edge.x, edge.y)),
            ],
        }
    }

    /// Marks every edge in the set as highlighted.
    ///
    /// Filled edges are left untouched; validation guarantees the set only
    /// references empty edges, but a stale set must not clobber state.
    pub fn set_highlight(&mut self, set: &HighlightSet) {
        for edge in set {
            if !self.edge_filled(edge) {
                self.set_edge(edge, FillState::Highlight);
            }
        }
    }

    /// Sweeps every highlighted edge back to empty.
    pub fn clear_highlight(&mut self) {
        for state in self.h_edges.iter_mut().chain(self.v_edges.iter_mut()) {
            if *state == FillState::Highlight {
                *state = FillState::Empty;
            }
        }
    }

    /// Iterates over all cell coordinates in row-major order, bottom row
    /// first.
    pub fn cell_positions(&self) -> impl Iterator<Item = CellPos> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| CellPos::new(x, y)))
    }
}
