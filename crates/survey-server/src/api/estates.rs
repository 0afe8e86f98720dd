//! Estate and tree API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use survey_core::{Estate, Tree, TreeStats};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::config::Config;
use crate::persistence::estates::StoredEstate;
use crate::persistence::trees::InsertTreeOutcome;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateEstateRequest {
    pub length: i64,
    pub width: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateTreeRequest {
    pub x: i64,
    pub y: i64,
    pub height: i64,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

/// Create a new estate.
/// POST /estate
pub async fn create_estate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateEstateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(req) = body.map_err(|_| ApiError::bad_request("invalid input"))?;
    let estate = validate_estate(&req, state.config())?;

    let stored = state.create_estate(estate).await?;
    tracing::info!(
        "Created estate {} ({}x{})",
        stored.id,
        estate.length,
        estate.width
    );

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: stored.id })))
}

/// Plant a tree on one plot of an estate.
/// POST /estate/:id/tree
pub async fn create_tree(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<CreateTreeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let estate_id = parse_estate_id(&id)?;
    let Json(req) = body.map_err(|_| ApiError::bad_request("invalid input"))?;
    let stored = load_estate(&state, &estate_id).await?;
    let tree = validate_tree(&req, &stored.estate, state.config())?;

    match state.plant_tree(&estate_id, &tree).await? {
        InsertTreeOutcome::Inserted(tree_id) => {
            tracing::info!(
                "Planted tree {} at ({}, {}) height {} in estate {}",
                tree_id,
                tree.x,
                tree.y,
                tree.height,
                estate_id
            );
            Ok((StatusCode::CREATED, Json(CreatedResponse { id: tree_id })))
        }
        InsertTreeOutcome::PlotOccupied => Err(ApiError::bad_request(format!(
            "plot ({}, {}) already has a tree",
            tree.x, tree.y
        ))),
    }
}

/// Height statistics for an estate's trees.
/// GET /estate/:id/stats
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TreeStats>, ApiError> {
    let estate_id = parse_estate_id(&id)?;
    load_estate(&state, &estate_id).await?;

    let heights = state.tree_heights(&estate_id).await?;
    Ok(Json(TreeStats::from_heights(&heights)))
}

pub(crate) fn parse_estate_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::bad_request("invalid estate id"))
}

pub(crate) async fn load_estate(state: &AppState, id: &Uuid) -> Result<StoredEstate, ApiError> {
    state
        .get_estate(id)
        .await?
        .ok_or_else(ApiError::estate_not_found)
}

fn validate_estate(req: &CreateEstateRequest, config: &Config) -> Result<Estate, ApiError> {
    let max = i64::from(config.max_estate_dimension);
    if req.length <= 0 || req.length > max {
        return Err(ApiError::bad_request(format!(
            "length ({}) must be between 1 and {}",
            req.length, max
        )));
    }
    if req.width <= 0 || req.width > max {
        return Err(ApiError::bad_request(format!(
            "width ({}) must be between 1 and {}",
            req.width, max
        )));
    }
    Ok(Estate::new(req.length as u32, req.width as u32))
}

fn validate_tree(req: &CreateTreeRequest, estate: &Estate, config: &Config) -> Result<Tree, ApiError> {
    if req.x <= 0 || req.x > i64::from(estate.length) {
        return Err(ApiError::bad_request(format!(
            "x ({}) must be between 1 and estate length ({})",
            req.x, estate.length
        )));
    }
    if req.y <= 0 || req.y > i64::from(estate.width) {
        return Err(ApiError::bad_request(format!(
            "y ({}) must be between 1 and estate width ({})",
            req.y, estate.width
        )));
    }
    if req.height < 0 || req.height > i64::from(config.max_tree_height) {
        return Err(ApiError::bad_request(format!(
            "height ({}) must be between 0 and {}",
            req.height, config.max_tree_height
        )));
    }
    Ok(Tree::new(req.x as u32, req.y as u32, req.height as u32))
}
