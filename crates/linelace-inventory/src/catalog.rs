//! The authored base shape catalog.
//!
//! Segment coordinates are relative to the shape's pivot, in the left-dot /
//! bottom-dot convention of [`Segment::horizontal`] and
//! [`Segment::vertical`]. Half-turn-symmetric shapes are centered on the
//! pivot so the symmetry actually holds under rotation.

use linelace_core::{Segment, ShapeId, ShapeTemplate};

/// Returns the base templates, before rotational expansion.
///
/// Complexity covers the full 1-6 range, weighted toward the low end to
/// match the selection distribution: simple one- and two-edge shapes are
/// the common draws, the seven-edge double frame the rare spike.
#[must_use]
pub fn base_templates() -> Vec<ShapeTemplate> {
    let shapes: [(&[Segment], u8, bool); 10] = [
        // Single edge, centered.
        (&[Segment::horizontal(-0.5, 0.0)], 1, true),
        // Two collinear edges.
        (
            &[Segment::horizontal(-1.0, 0.0), Segment::horizontal(0.0, 0.0)],
            2,
            true,
        ),
        // L corner.
        (
            &[Segment::horizontal(-1.0, 0.0), Segment::vertical(0.0, 0.0)],
            2,
            false,
        ),
        // Three collinear edges, centered.
        (
            &[
                Segment::horizontal(-1.5, 0.0),
                Segment::horizontal(-0.5, 0.0),
                Segment::horizontal(0.5, 0.0),
            ],
            3,
            true,
        ),
        // U hook, open side up.
        (
            &[
                Segment::vertical(0.0, 0.0),
                Segment::horizontal(0.0, 0.0),
                Segment::vertical(1.0, 0.0),
            ],
            3,
            false,
        ),
        // Unit cell frame, centered.
        (
            &[
                Segment::horizontal(-0.5, -0.5),
                Segment::horizontal(-0.5, 0.5),
                Segment::vertical(-0.5, -0.5),
                Segment::vertical(0.5, -0.5),
            ],
            4,
            true,
        ),
        // Staircase.
        (
            &[
                Segment::horizontal(-1.0, 0.0),
                Segment::vertical(0.0, 0.0),
                Segment::horizontal(0.0, 1.0),
            ],
            4,
            false,
        ),
        // T junction.
        (
            &[
                Segment::horizontal(-1.0, 0.0),
                Segment::horizontal(0.0, 0.0),
                Segment::vertical(0.0, 0.0),
            ],
            5,
            false,
        ),
        // Cell frame with a chimney edge.
        (
            &[
                Segment::horizontal(0.0, 0.0),
                Segment::horizontal(0.0, 1.0),
                Segment::vertical(0.0, 0.0),
                Segment::vertical(1.0, 0.0),
                Segment::vertical(0.0, 1.0),
            ],
            5,
            false,
        ),
        // Two adjacent cells, fully framed.
        (
            &[
                Segment::horizontal(0.0, 0.0),
                Segment::horizontal(1.0, 0.0),
                Segment::horizontal(0.0, 1.0),
                Segment::horizontal(1.0, 1.0),
                Segment::vertical(0.0, 0.0),
                Segment::vertical(1.0, 0.0),
                Segment::vertical(2.0, 0.0),
            ],
            6,
            false,
        ),
    ];

    shapes
        .into_iter()
        .enumerate()
        .map(|(i, (segments, complexity, symmetric))| {
            #[expect(clippy::cast_possible_truncation)]
            let id = ShapeId(i as u16);
            ShapeTemplate::new(id, segments.to_vec(), complexity, symmetric)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use linelace_core::GridModel;

    use super::*;

    #[test]
    fn test_catalog_covers_all_complexities() {
        let templates = base_templates();
        for complexity in 1..=6u8 {
            assert!(
                templates.iter().any(|t| t.complexity() == complexity),
                "no base template with complexity {complexity}"
            );
        }
    }

    #[test]
    fn test_symmetric_shapes_survive_half_turn() {
        for template in base_templates().iter().filter(|t| t.is_symmetric()) {
            let rotated = template.rotated_variant(template.id(), 2);
            for segment in template.segments() {
                assert!(
                    rotated.segments().iter().any(|r| {
                        (r.center.x - segment.center.x).abs() < 1e-6
                            && (r.center.y - segment.center.y).abs() < 1e-6
                            && r.is_horizontal() == segment.is_horizontal()
                    }),
                    "shape {} is flagged symmetric but moves under a half turn",
                    template.id()
                );
            }
        }
    }

    #[test]
    fn test_every_base_template_fits_an_empty_grid() {
        let grid = GridModel::new(8, 8);
        for template in base_templates() {
            assert!(
                linelace_engine::check_for_space(&template, &grid),
                "shape {} cannot be placed on an empty 8x8 grid",
                template.id()
            );
        }
    }
}
