pub mod elevation;
pub mod error;
pub mod landing;
pub mod models;
pub mod planner;
pub mod stats;
pub mod tree_index;
pub mod zigzag;

pub use elevation::accumulate_elevation;
pub use error::PlanError;
pub use landing::{find_landing, find_landing_with};
pub use models::{BudgetedSurveyPlan, Cell, Estate, LandingPoint, SurveyPlan, Tree};
pub use planner::{
    horizontal_distance, plan_survey, plan_survey_with_budget, plan_survey_with_budget_using,
    CELL_SIZE_M, LAUNCH_ASCENT_M, LANDING_DESCENT_M,
};
pub use stats::TreeStats;
pub use tree_index::TreeIndex;
pub use zigzag::{zigzag_cmp, zigzag_order, GridTraversal, GridWalk};
