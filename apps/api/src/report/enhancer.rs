//! Narrative enhancement: optional downstream collaborator that enriches a
//! finished report with free text.
//!
//! RULE: enhancement can never fail a report. Any error or timeout returns the
//! original report unchanged; an unconfigured enhancer is simply skipped.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::report::Report;

#[derive(Debug, Error)]
pub enum EnhancementError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("enhancement timed out after {0}ms")]
    Timeout(u128),
}

#[async_trait]
pub trait ReportEnhancer: Send + Sync {
    async fn enhance(&self, report: &Report) -> Result<ReportEnhancement, EnhancementError>;
}

/// Narrative fields an enhancer may contribute. Everything else in the report
/// stays as computed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReportEnhancement {
    #[serde(default, alias = "enhancedSummary")]
    pub enhanced_summary: Option<String>,
    #[serde(default, alias = "skillRecommendations")]
    pub skill_recommendations: Vec<String>,
    #[serde(default, alias = "careerTrajectoryInsights")]
    pub career_trajectory_insights: Option<String>,
}

impl ReportEnhancement {
    fn is_empty(&self) -> bool {
        self.enhanced_summary.is_none()
            && self.skill_recommendations.is_empty()
            && self.career_trajectory_insights.is_none()
    }

    /// Copies the narrative fields onto `report`; scores and buckets are untouched.
    pub fn merge_into(self, mut report: Report) -> Report {
        report.enhanced_summary = self.enhanced_summary;
        report.skill_recommendations = self.skill_recommendations;
        report.career_trajectory_insights = self.career_trajectory_insights;
        report.ai_enhanced = true;
        report
    }
}

#[derive(Debug, Deserialize)]
struct EnhancerErrorBody {
    detail: String,
}

/// POSTs the report as JSON and expects the enhancement fields back.
/// Single round trip, no retries.
#[derive(Clone)]
pub struct HttpReportEnhancer {
    client: Client,
    url: String,
}

impl HttpReportEnhancer {
    pub fn new(url: String, timeout: Duration) -> Result<Self, EnhancementError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl ReportEnhancer for HttpReportEnhancer {
    async fn enhance(&self, report: &Report) -> Result<ReportEnhancement, EnhancementError> {
        let response = self.client.post(&self.url).json(report).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<EnhancerErrorBody>(&body)
                .map(|e| e.detail)
                .unwrap_or(body);
            return Err(EnhancementError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<ReportEnhancement>().await?)
    }
}

/// Runs the enhancer if present and merges its narrative fields into `report`.
/// Falls back to `report` on any failure or on an empty enhancement.
pub async fn enhance_or_original(
    enhancer: Option<&dyn ReportEnhancer>,
    report: Report,
    timeout: Duration,
) -> Report {
    let Some(enhancer) = enhancer else {
        return report;
    };

    let result = match tokio::time::timeout(timeout, enhancer.enhance(&report)).await {
        Ok(result) => result,
        Err(_) => Err(EnhancementError::Timeout(timeout.as_millis())),
    };

    match result {
        Ok(enhancement) if enhancement.is_empty() => {
            warn!("Enhancer returned no content for report {}", report.report_id);
            report
        }
        Ok(enhancement) => {
            info!("Report {} enhanced", report.report_id);
            enhancement.merge_into(report)
        }
        Err(e) => {
            warn!(
                "Enhancement failed for report {}, returning original: {e}",
                report.report_id
            );
            report
        }
    }
}
