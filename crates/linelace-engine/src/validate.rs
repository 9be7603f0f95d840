//! Placement validation and snapping.

use linelace_core::{EdgeRef, GridModel, HighlightSet, ShapeTemplate, Vec2};

/// Maximum distance, in grid units, between a segment's coordinate along the
/// snap axis and the target edge's midpoint for the snap to be accepted.
pub const SNAP_THRESHOLD: f32 = 0.38;

/// How far past the dot lattice a segment center may sit and still be
/// considered on the grid. Keeps the full snap band usable at border edges.
const BOUNDS_MARGIN: f32 = 0.5;

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_index(value: f32, max: u8) -> u8 {
    (value as i32).clamp(0, i32::from(max)) as u8
}

/// Validates a candidate pose for a shape against the grid.
///
/// Each segment's center is offset by `pose` into grid-local space and
/// snapped to the nearest edge of its orientation (wider segments are
/// horizontal-edge-shaped): the index along the edge is floored, the
/// perpendicular index rounded, both clamped into range. The snap is
/// accepted only if that edge is currently unfilled and the segment sits
/// within [`SNAP_THRESHOLD`] of the edge's midpoint along the edge's own
/// axis.
///
/// Returns the edges the placement would fill, in segment order, or `None`
/// if any segment misses — a single invalid segment invalidates the whole
/// placement, as does two segments snapping onto the same edge.
///
/// # Examples
///
/// ```
/// use linelace_core::{GridModel, Segment, ShapeId, ShapeTemplate, Vec2};
/// use linelace_engine::validate;
///
/// let grid = GridModel::new(4, 4);
/// let dash = ShapeTemplate::new(ShapeId(0), vec![Segment::horizontal(0.0, 0.0)], 1, true);
///
/// let set = validate(&dash, Vec2::new(1.0, 2.0), &grid).unwrap();
/// assert_eq!(set.len(), 1);
///
/// assert!(validate(&dash, Vec2::new(9.0, 2.0), &grid).is_none());
/// ```
#[must_use]
pub fn validate(shape: &ShapeTemplate, pose: Vec2, grid: &GridModel) -> Option<HighlightSet> {
    let width = f32::from(grid.width());
    let height = f32::from(grid.height());
    let mut set = HighlightSet::new();

    for segment in shape.segments() {
        let center = segment.center + pose;
        if center.x < -BOUNDS_MARGIN
            || center.x > width + BOUNDS_MARGIN
            || center.y < -BOUNDS_MARGIN
            || center.y > height + BOUNDS_MARGIN
        {
            return None;
        }

        let (edge, along) = if segment.is_horizontal() {
            let x = clamp_index(center.x.floor(), grid.width() - 1);
            let y = clamp_index(center.y.round(), grid.height());
            let edge = EdgeRef::horizontal(x, y);
            (edge, center.x - edge.midpoint().x)
        } else {
            let x = clamp_index(center.x.round(), grid.width());
            let y = clamp_index(center.y.floor(), grid.height() - 1);
            let edge = EdgeRef::vertical(x, y);
            (edge, center.y - edge.midpoint().y)
        };

        if grid.edge(edge).is_filled() || along.abs() >= SNAP_THRESHOLD {
            return None;
        }
        if !set.insert(edge) {
            return None;
        }
    }

    Some(set)
}

/// Returns whether any pose on the grid validates for the shape.
///
/// Samples candidate poses at half-cell resolution across the grid's
/// extended bounding box, from −0.5 to size + 0.5 on each axis, and stops at
/// the first pose that validates. Existence test only — no state is
/// touched, and callers must not infer a concrete placement from it.
#[must_use]
pub fn check_for_space(shape: &ShapeTemplate, grid: &GridModel) -> bool {
    let steps_x = 2 * (u16::from(grid.width()) + 1);
    let steps_y = 2 * (u16::from(grid.height()) + 1);
    for ky in 0..=steps_y {
        for kx in 0..=steps_x {
            let pose = Vec2::new(
                0.5f32.mul_add(f32::from(kx), -0.5),
                0.5f32.mul_add(f32::from(ky), -0.5),
            );
            if validate(shape, pose, grid).is_some() {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use linelace_core::{FillState, Segment, ShapeId};

    use super::*;

    fn dash_h() -> ShapeTemplate {
        ShapeTemplate::new(ShapeId(0), vec![Segment::horizontal(0.0, 0.0)], 1, true)
    }

    fn corner() -> ShapeTemplate {
        ShapeTemplate::new(
            ShapeId(1),
            vec![Segment::horizontal(-1.0, 0.0), Segment::vertical(0.0, 0.0)],
            2,
            false,
        )
    }

    #[test]
    fn test_exact_pose_snaps() {
        let grid = GridModel::new(4, 4);
        let set = validate(&dash_h(), Vec2::new(2.0, 1.0), &grid).unwrap();
        let edges: Vec<_> = set.iter().collect();
        assert_eq!(edges, vec![EdgeRef::horizontal(2, 1)]);
    }

    #[test]
    fn test_multi_segment_shape_maps_each_segment() {
        let grid = GridModel::new(4, 4);
        let set = validate(&corner(), Vec2::new(2.0, 1.0), &grid).unwrap();
        let edges: Vec<_> = set.iter().collect();
        assert_eq!(
            edges,
            vec![EdgeRef::horizontal(1, 1), EdgeRef::vertical(2, 1)]
        );
    }

    #[test]
    fn test_snap_tolerance_boundary() {
        let grid = GridModel::new(4, 4);
        let eps = 1e-4;
        // Offset along the edge axis, just inside and just outside the band.
        assert!(validate(&dash_h(), Vec2::new(2.0 + SNAP_THRESHOLD - eps, 1.0), &grid).is_some());
        assert!(validate(&dash_h(), Vec2::new(2.0 + SNAP_THRESHOLD + eps, 1.0), &grid).is_none());
    }

    #[test]
    fn test_occupied_edge_rejects_whole_placement() {
        let mut grid = GridModel::new(4, 4);
        grid.set_edge(EdgeRef::vertical(2, 1), FillState::Filled);
        assert!(validate(&corner(), Vec2::new(2.0, 1.0), &grid).is_none());
        // The horizontal half alone still fits elsewhere.
        assert!(validate(&corner(), Vec2::new(2.0, 2.0), &grid).is_some());
    }

    #[test]
    fn test_highlight_state_does_not_occupy() {
        let mut grid = GridModel::new(4, 4);
        grid.set_edge(EdgeRef::horizontal(2, 1), FillState::Highlight);
        assert!(validate(&dash_h(), Vec2::new(2.0, 1.0), &grid).is_some());
    }

    #[test]
    fn test_out_of_bounds_center_rejects() {
        let grid = GridModel::new(4, 4);
        assert!(validate(&dash_h(), Vec2::new(-3.0, 0.0), &grid).is_none());
        assert!(validate(&dash_h(), Vec2::new(0.0, 7.0), &grid).is_none());
    }

    #[test]
    fn test_duplicate_edge_target_rejects() {
        // Two segments stacked on the same horizontal edge position.
        let doubled = ShapeTemplate::new(
            ShapeId(2),
            vec![Segment::horizontal(0.0, 0.0), Segment::horizontal(0.0, 0.0)],
            2,
            true,
        );
        let grid = GridModel::new(4, 4);
        assert!(validate(&doubled, Vec2::new(1.0, 1.0), &grid).is_none());
    }

    #[test]
    fn test_check_for_space_on_empty_and_full_grid() {
        let mut grid = GridModel::new(2, 2);
        assert!(check_for_space(&dash_h(), &grid));
        assert!(check_for_space(&corner(), &grid));

        for x in 0..2u8 {
            for y in 0..=2u8 {
                grid.set_edge(EdgeRef::horizontal(x, y), FillState::Filled);
            }
        }
        assert!(!check_for_space(&dash_h(), &grid));
        // Vertical edges are still open.
        let dash_v =
            ShapeTemplate::new(ShapeId(3), vec![Segment::vertical(0.0, 0.0)], 1, true);
        assert!(check_for_space(&dash_v, &grid));
    }

    #[test]
    fn test_check_for_space_false_implies_no_sampled_pose_validates() {
        let mut grid = GridModel::new(2, 2);
        for x in 0..2u8 {
            for y in 0..=2u8 {
                grid.set_edge(EdgeRef::horizontal(x, y), FillState::Filled);
            }
        }
        let shape = dash_h();
        assert!(!check_for_space(&shape, &grid));
        for ky in 0..=6u16 {
            for kx in 0..=6u16 {
                let pose = Vec2::new(
                    0.5f32.mul_add(f32::from(kx), -0.5),
                    0.5f32.mul_add(f32::from(ky), -0.5),
                );
                assert!(validate(&shape, pose, &grid).is_none());
            }
        }
    }
}
