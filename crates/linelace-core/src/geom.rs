//! Grid-local geometry: poses, edge references, and cell coordinates.
//!
//! All coordinates here are in grid-local units: one unit per cell, with the
//! dot lattice at integer positions. The origin is the bottom-left dot; `x`
//! grows to the right and `y` grows upward.

use std::ops::{Add, Sub};

/// A point or offset in grid-local space.
///
/// Used for candidate placement poses and for shape segment geometry. Not a
/// general-purpose vector type — only what placement validation needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Vec2 {
    /// Horizontal coordinate, in cell units.
    pub x: f32,
    /// Vertical coordinate, in cell units.
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Orientation of a lattice edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum EdgeKind {
    /// An edge between dot (x, y) and dot (x+1, y).
    Horizontal,
    /// An edge between dot (x, y) and dot (x, y+1).
    Vertical,
}

/// Reference to one lattice edge.
///
/// For a horizontal edge, `x` ranges over `0..width` and `y` over
/// `0..=height`; for a vertical edge, `x` ranges over `0..=width` and `y`
/// over `0..height`.
///
/// # Examples
///
/// ```
/// use linelace_core::{EdgeKind, EdgeRef};
///
/// let edge = EdgeRef::horizontal(2, 0);
/// assert_eq!(edge.kind, EdgeKind::Horizontal);
/// assert_eq!(edge.midpoint().x, 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{kind} ({x}, {y})")]
pub struct EdgeRef {
    /// Edge orientation.
    pub kind: EdgeKind,
    /// Edge x index.
    pub x: u8,
    /// Edge y index.
    pub y: u8,
}

impl EdgeRef {
    /// Creates a horizontal edge reference.
    #[must_use]
    pub const fn horizontal(x: u8, y: u8) -> Self {
        Self {
            kind: EdgeKind::Horizontal,
            x,
            y,
        }
    }

    /// Creates a vertical edge reference.
    #[must_use]
    pub const fn vertical(x: u8, y: u8) -> Self {
        Self {
            kind: EdgeKind::Vertical,
            x,
            y,
        }
    }

    /// Returns the edge's midpoint in grid-local space.
    #[must_use]
    pub fn midpoint(self) -> Vec2 {
        match self.kind {
            EdgeKind::Horizontal => Vec2::new(f32::from(self.x) + 0.5, f32::from(self.y)),
            EdgeKind::Vertical => Vec2::new(f32::from(self.x), f32::from(self.y) + 0.5),
        }
    }
}

/// Coordinate of one grid cell.
///
/// Cells are ordered row-major, bottom row first, which is the iteration
/// order used when scanning for completed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({x}, {y})")]
pub struct CellPos {
    /// Cell column, `0..width`.
    pub x: u8,
    /// Cell row, `0..height`.
    pub y: u8,
}

impl CellPos {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another cell, used to stagger cascade timing.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u32 {
        let dx = u32::from(self.x.abs_diff(other.x));
        let dy = u32::from(self.y.abs_diff(other.y));
        dx + dy
    }

    /// The four edges bounding this cell.
    #[must_use]
    pub const fn bounding_edges(self) -> [EdgeRef; 4] {
        [
            EdgeRef::horizontal(self.x, self.y),
            EdgeRef::horizontal(self.x, self.y + 1),
            EdgeRef::vertical(self.x, self.y),
            EdgeRef::vertical(self.x + 1, self.y),
        ]
    }
}

impl Ord for CellPos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for CellPos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_arithmetic() {
        let a = Vec2::new(1.5, -0.5);
        let b = Vec2::new(0.5, 2.0);
        assert_eq!(a + b, Vec2::new(2.0, 1.5));
        assert_eq!(a - b, Vec2::new(1.0, -2.5));
        assert_eq!(Vec2::ZERO + a, a);
    }

    #[test]
    fn test_edge_midpoints() {
        assert_eq!(EdgeRef::horizontal(2, 1).midpoint(), Vec2::new(2.5, 1.0));
        assert_eq!(EdgeRef::vertical(0, 3).midpoint(), Vec2::new(0.0, 3.5));
    }

    #[test]
    fn test_cell_ordering_is_row_major() {
        let mut cells = vec![CellPos::new(1, 1), CellPos::new(0, 0), CellPos::new(2, 0)];
        cells.sort();
        assert_eq!(
            cells,
            vec![CellPos::new(0, 0), CellPos::new(2, 0), CellPos::new(1, 1)]
        );
    }

    #[test]
    fn test_manhattan_distance() {
        let origin = CellPos::new(3, 1);
        assert_eq!(origin.manhattan_distance(origin), 0);
        assert_eq!(origin.manhattan_distance(CellPos::new(0, 0)), 4);
        assert_eq!(CellPos::new(0, 0).manhattan_distance(origin), 4);
    }

    #[test]
    fn test_bounding_edges() {
        let edges = CellPos::new(1, 2).bounding_edges();
        assert_eq!(edges[0], EdgeRef::horizontal(1, 2));
        assert_eq!(edges[1], EdgeRef::horizontal(1, 3));
        assert_eq!(edges[2], EdgeRef::vertical(1, 2));
        assert_eq!(edges[3], EdgeRef::vertical(2, 2));
    }
}
