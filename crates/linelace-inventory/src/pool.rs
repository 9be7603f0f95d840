//! Rotational expansion of the base catalog into the selection pool.

use linelace_core::{ShapeId, ShapeTemplate};

/// Expands base templates into their rotational variants.
///
/// Each template spawns one variant per counter-clockwise quarter turn — 4
/// of them, or 2 for half-turn-symmetric shapes whose remaining turns would
/// duplicate the first two. Variant ids are sequential over the whole pool,
/// stable for a given catalog order.
///
/// # Examples
///
/// ```
/// use linelace_inventory::{base_templates, expand_pool};
///
/// let pool = expand_pool(&base_templates());
/// assert!(pool.len() > base_templates().len());
/// ```
#[must_use]
pub fn expand_pool(base: &[ShapeTemplate]) -> Vec<ShapeTemplate> {
    let mut pool = Vec::new();
    let mut next_id = 0u16;
    for template in base {
        for turns in 0..4u8 {
            if turns > 1 && template.is_symmetric() {
                break;
            }
            pool.push(template.rotated_variant(ShapeId(next_id), turns));
            next_id += 1;
        }
    }
    pool
}
