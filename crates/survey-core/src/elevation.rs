//! Vertical travel between trees visited in zigzag order.

use crate::error::PlanError;
use crate::models::Tree;

/// Total vertical distance for trees already in zigzag order.
///
/// The drone climbs to the first canopy, then between consecutive trees
/// either adjusts by the height difference (Chebyshev-adjacent plots) or
/// drops to the ground and climbs again (any gap). The last canopy height
/// is counted once more for the descent, so a single tree contributes `2h`.
pub fn accumulate_elevation(ordered: &[Tree]) -> Result<i64, PlanError> {
    let (first, last) = match (ordered.first(), ordered.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(PlanError::NoTrees),
    };

    let mut total = i64::from(first.height);
    for pair in ordered.windows(2) {
        let (prev, tree) = (&pair[0], &pair[1]);
        total += if prev.cell().is_adjacent(&tree.cell()) {
            i64::from(tree.height.abs_diff(prev.height))
        } else {
            i64::from(prev.height) + i64::from(tree.height)
        };
    }
    total += i64::from(last.height);

    Ok(total)
}
