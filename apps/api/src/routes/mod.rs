pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::report::handlers as report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/careers", get(catalog::handle_list_careers))
        .route("/api/v1/careers/:id", get(catalog::handle_get_career))
        // Report API
        .route("/api/v1/reports", post(report::handle_compute_report))
        .with_state(state)
}
