use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::career::CareerDefinition;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    pub count: usize,
    pub careers: Vec<CareerDefinition>,
}

/// GET /api/v1/careers
///
/// Returns the parsed catalog the scorer is running against.
pub async fn handle_list_careers(State(state): State<AppState>) -> Json<CareerListResponse> {
    Json(CareerListResponse {
        count: state.catalog.len(),
        careers: state.catalog.careers().to_vec(),
    })
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(career_id): Path<String>,
) -> Result<Json<CareerDefinition>, AppError> {
    state
        .catalog
        .find(&career_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career {career_id} not found")))
}
