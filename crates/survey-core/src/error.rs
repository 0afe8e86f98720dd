//! Errors raised by the survey planner.

/// Planner failures. Everything else (unknown estates, storage errors,
/// malformed coordinates) belongs to the calling service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error("estate has no trees to survey")]
    NoTrees,
    #[error("invalid max_distance {max_distance}")]
    InvalidBudget {
        max_distance: i64,
        /// Full survey distance the budget was checked against, when known
        total_distance: Option<i64>,
    },
}
