//! API routes for the survey server.

pub mod error;
pub mod estates;
pub mod plans;
pub mod request_id;
mod routes;

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

pub use error::{ApiError, ErrorResponse};

pub fn routes() -> Router<Arc<AppState>> {
    routes::create_router()
}

#[cfg(test)]
mod tests;
