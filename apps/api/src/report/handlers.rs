//! Axum route handlers for the Report API.

use std::time::Duration;

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::report::Report;
use crate::models::submission::StudentSubmission;
use crate::report::enhancer::enhance_or_original;
use crate::report::pipeline::compute_report;
use crate::state::AppState;

/// POST /api/v1/reports
///
/// Scores the submission against the loaded catalog and returns the report.
/// Enhancement runs afterwards when configured; its failure never fails the request.
pub async fn handle_compute_report(
    State(state): State<AppState>,
    Json(submission): Json<StudentSubmission>,
) -> Result<Json<Report>, AppError> {
    submission.validate().map_err(AppError::Validation)?;

    let report = compute_report(
        &submission,
        state.catalog.careers(),
        &state.scoring,
        state.aligner.as_ref(),
        Duration::from_millis(state.config.alignment_timeout_ms),
    )
    .await;

    let report = enhance_or_original(
        state.enhancer.as_deref(),
        report,
        Duration::from_millis(state.config.enhancer_timeout_ms),
    )
    .await;

    Ok(Json(report))
}
