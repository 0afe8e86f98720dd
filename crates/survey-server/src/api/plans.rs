//! Drone survey plan endpoint.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use survey_core::{plan_survey, plan_survey_with_budget_using, Cell, SurveyPlan};

use crate::api::error::ApiError;
use crate::api::estates::{load_estate, parse_estate_id};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DronePlanQuery {
    pub max_distance: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DronePlanResponse {
    Full {
        distance: i64,
        horizontal_distance: i64,
        elevation_distance: i64,
    },
    Budgeted {
        distance: i64,
        rest: Cell,
    },
}

impl From<SurveyPlan> for DronePlanResponse {
    fn from(plan: SurveyPlan) -> Self {
        Self::Full {
            distance: plan.total_distance,
            horizontal_distance: plan.horizontal_distance,
            elevation_distance: plan.elevation_distance,
        }
    }
}

/// Survey distance for an estate, or the landing plot under a budget.
/// GET /estate/:id/drone-plan?max_distance=N
pub async fn get_drone_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    query: Result<Query<DronePlanQuery>, QueryRejection>,
) -> Result<Json<DronePlanResponse>, ApiError> {
    let estate_id = parse_estate_id(&id)?;
    let Query(query) = query.map_err(|_| ApiError::bad_request("invalid max_distance"))?;
    let estate = load_estate(&state, &estate_id).await?.estate;
    let trees = state.trees(&estate_id).await?;

    let Some(max_distance) = query.max_distance else {
        let plan = plan_survey(&estate, &trees)?;
        tracing::debug!(
            "Survey plan for {}: total={} horizontal={} elevation={}",
            estate_id,
            plan.total_distance,
            plan.horizontal_distance,
            plan.elevation_distance
        );
        return Ok(Json(plan.into()));
    };

    // The landing walk is linear in the number of plots.
    let traversal = state.config().grid_traversal;
    let budgeted = tokio::task::spawn_blocking(move || {
        plan_survey_with_budget_using(&estate, &trees, max_distance, traversal)
    })
    .await
    .map_err(anyhow::Error::from)??;

    tracing::debug!(
        "Landing for {} with budget {}: ({}, {}) of total {}",
        estate_id,
        max_distance,
        budgeted.landing.cell.x,
        budgeted.landing.cell.y,
        budgeted.plan.total_distance
    );

    Ok(Json(DronePlanResponse::Budgeted {
        distance: budgeted.landing.max_distance,
        rest: budgeted.landing.cell,
    }))
}
