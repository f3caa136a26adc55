use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Liveness plus what the scorer is running with.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "career-compass",
        "version": env!("CARGO_PKG_VERSION"),
        "careers": state.catalog.len(),
        "enhancer": state.enhancer.is_some(),
    }))
}
