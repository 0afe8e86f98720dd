//! Full-survey distance planning.

use crate::elevation::accumulate_elevation;
use crate::error::PlanError;
use crate::landing::find_landing_with;
use crate::models::{BudgetedSurveyPlan, Estate, LandingPoint, SurveyPlan, Tree};
use crate::zigzag::{zigzag_order, GridTraversal};

/// Side of one grid cell in meters.
pub const CELL_SIZE_M: i64 = 10;
/// Climb from the ground at launch.
pub const LAUNCH_ASCENT_M: i64 = 1;
/// Descent to the ground at landing.
pub const LANDING_DESCENT_M: i64 = 1;

/// One 10 m step between each pair of consecutive plots.
pub fn horizontal_distance(estate: &Estate) -> i64 {
    estate.cell_count().saturating_sub(1) as i64 * CELL_SIZE_M
}

/// Distance to survey every plot of `estate`.
pub fn plan_survey(estate: &Estate, trees: &[Tree]) -> Result<SurveyPlan, PlanError> {
    let ordered = zigzag_order(trees);
    let elevation_distance = accumulate_elevation(&ordered)?;
    let horizontal_distance = horizontal_distance(estate);

    Ok(SurveyPlan {
        total_distance: horizontal_distance
            + elevation_distance
            + LAUNCH_ASCENT_M
            + LANDING_DESCENT_M,
        horizontal_distance,
        elevation_distance,
    })
}

/// Survey plan plus the landing plot for a travel budget.
pub fn plan_survey_with_budget(
    estate: &Estate,
    trees: &[Tree],
    max_distance: i64,
) -> Result<BudgetedSurveyPlan, PlanError> {
    plan_survey_with_budget_using(estate, trees, max_distance, GridTraversal::default())
}

/// Like [`plan_survey_with_budget`] with an explicit grid traversal.
///
/// A budget equal to the full distance lands on the estate's last plot
/// without replaying the walk.
pub fn plan_survey_with_budget_using(
    estate: &Estate,
    trees: &[Tree],
    max_distance: i64,
    traversal: GridTraversal,
) -> Result<BudgetedSurveyPlan, PlanError> {
    let plan = plan_survey(estate, trees)?;
    if max_distance <= 0 || max_distance > plan.total_distance {
        return Err(PlanError::InvalidBudget {
            max_distance,
            total_distance: Some(plan.total_distance),
        });
    }

    let landing = if max_distance < plan.total_distance {
        find_landing_with(estate, trees, max_distance, traversal)?
    } else {
        LandingPoint {
            cell: estate.last_plot(),
            max_distance,
        }
    };

    Ok(BudgetedSurveyPlan { plan, landing })
}
