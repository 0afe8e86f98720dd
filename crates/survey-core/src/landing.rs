//! Landing point search under a travel budget.
//!
//! Replays the survey cell by cell over the whole grid (not just the tree
//! plots) and stops on the first plot where the accumulated distance reaches
//! the budget.

use crate::error::PlanError;
use crate::models::{Cell, Estate, LandingPoint, Tree};
use crate::planner::{CELL_SIZE_M, LAUNCH_ASCENT_M};
use crate::tree_index::TreeIndex;
use crate::zigzag::{GridTraversal, GridWalk};

/// Find the landing plot using the default grid traversal.
pub fn find_landing(
    estate: &Estate,
    trees: &[Tree],
    max_distance: i64,
) -> Result<LandingPoint, PlanError> {
    find_landing_with(estate, trees, max_distance, GridTraversal::default())
}

/// Find the landing plot for `max_distance` meters of travel.
///
/// The budget is assumed reachable; callers reject budgets above the full
/// survey distance before calling this. A non-positive budget is rejected here.
pub fn find_landing_with(
    estate: &Estate,
    trees: &[Tree],
    max_distance: i64,
    traversal: GridTraversal,
) -> Result<LandingPoint, PlanError> {
    if max_distance <= 0 {
        return Err(PlanError::InvalidBudget {
            max_distance,
            total_distance: None,
        });
    }

    let index = TreeIndex::new(trees);
    let mut travel = LAUNCH_ASCENT_M;
    let mut elevation = LAUNCH_ASCENT_M;

    let mut walk = GridWalk::new(estate.length, estate.width, traversal);
    for cell in walk.by_ref() {
        if let Some(height) = index.height_at(cell.x, cell.y) {
            let height = i64::from(height);
            travel += (height - elevation).abs();
            elevation = height + 1;
        }

        travel += CELL_SIZE_M;
        if travel >= max_distance {
            return Ok(LandingPoint {
                cell,
                max_distance,
            });
        }
    }

    let (length, width) = walk.dimensions();
    Ok(LandingPoint {
        cell: last_plot(length, width),
        max_distance,
    })
}

/// Row-major last plot of a `length x width` grid.
fn last_plot(length: u32, width: u32) -> Cell {
    let last = (u64::from(length) * u64::from(width)).saturating_sub(1);
    let length = u64::from(length.max(1));
    Cell::new((last % length + 1) as u32, (last / length + 1) as u32)
}
