//! Placement shape templates.
//!
//! A shape is an ordered set of axis-aligned rectangles, each shaped like a
//! lattice edge (wider than tall for horizontal edges, taller than wide for
//! vertical ones), positioned relative to the shape's pivot. The same
//! template backs both the selection pool entry and every spawned instance.

use crate::geom::Vec2;

/// Stable identity of a shape template, shared between the pool entry and
/// all spawned instances referencing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct ShapeId(pub u16);

/// One edge-shaped rectangle of a shape, relative to the shape's pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Center of the rectangle in grid-local units.
    pub center: Vec2,
    /// Size of the rectangle; the longer axis is the edge direction.
    pub size: Vec2,
}

/// Thickness of the short axis of an edge segment, in cell units.
const SEGMENT_THICKNESS: f32 = 0.2;

impl Segment {
    /// A horizontal edge segment whose left dot sits at `(x, y)`.
    #[must_use]
    pub const fn horizontal(x: f32, y: f32) -> Self {
        Self {
            center: Vec2::new(x + 0.5, y),
            size: Vec2::new(1.0, SEGMENT_THICKNESS),
        }
    }

    /// A vertical edge segment whose bottom dot sits at `(x, y)`.
    #[must_use]
    pub const fn vertical(x: f32, y: f32) -> Self {
        Self {
            center: Vec2::new(x, y + 0.5),
            size: Vec2::new(SEGMENT_THICKNESS, 1.0),
        }
    }

    /// Whether this segment is horizontal-edge-shaped (wider than tall).
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.size.x > self.size.y
    }

    /// The segment rotated a quarter turn counter-clockwise around the
    /// pivot.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            center: Vec2::new(-self.center.y, self.center.x),
            size: Vec2::new(self.size.y, self.size.x),
        }
    }
}

/// A placement shape template.
///
/// Templates carry a precomputed complexity rating (1-6) used for
/// difficulty-weighted selection, and a symmetry flag: a template that maps
/// onto itself after a half turn only needs 2 rotational variants in the
/// pool instead of 4.
///
/// # Examples
///
/// ```
/// use linelace_core::{Segment, ShapeId, ShapeTemplate};
///
/// // An L corner: one horizontal edge, one vertical edge rising from its
/// // right end.
/// let corner = ShapeTemplate::new(
///     ShapeId(0),
///     vec![Segment::horizontal(-1.0, 0.0), Segment::vertical(0.0, 0.0)],
///     2,
///     false,
/// );
/// assert_eq!(corner.complexity(), 2);
/// assert_eq!(corner.segments().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeTemplate {
    id: ShapeId,
    segments: Vec<Segment>,
    complexity: u8,
    symmetric: bool,
}

impl ShapeTemplate {
    /// Creates a template.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty or `complexity` is outside 1-6; both
    /// indicate a data-authoring bug in the shape catalog.
    #[must_use]
    pub fn new(id: ShapeId, segments: Vec<Segment>, complexity: u8, symmetric: bool) -> Self {
        assert!(!segments.is_empty(), "shape {id} has no segments");
        assert!(
            (1..=6).contains(&complexity),
            "shape {id} has complexity {complexity}, expected 1-6"
        );
        Self {
            id,
            segments,
            complexity,
            symmetric,
        }
    }

    /// The template's stable identity.
    #[must_use]
    pub const fn id(&self) -> ShapeId {
        self.id
    }

    /// The edge segments relative to the pivot.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Difficulty rating, 1-6.
    #[must_use]
    pub const fn complexity(&self) -> u8 {
        self.complexity
    }

    /// Whether the shape maps onto itself after a half turn.
    #[must_use]
    pub const fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// A copy of this template under a new id, rotated by `quarter_turns`
    /// counter-clockwise quarter turns.
    #[must_use]
    pub fn rotated_variant(&self, id: ShapeId, quarter_turns: u8) -> Self {
        let segments = self
            .segments
            .iter()
            .map(|segment| {
                let mut segment = *segment;
                for _ in 0..quarter_turns % 4 {
                    segment = segment.rotated();
                }
                segment
            })
            .collect();
        Self {
            id,
            segments,
            complexity: self.complexity,
            symmetric: self.symmetric,
        }
    }
}
