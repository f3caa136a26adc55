use std::sync::Arc;

use crate::catalog::CareerCatalog;
use crate::config::Config;
use crate::report::enhancer::ReportEnhancer;
use crate::scoring::alignment::TextAligner;
use crate::scoring::ScoringConfig;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<CareerCatalog>,
    pub scoring: Arc<ScoringConfig>,
    /// Pluggable text aligner. Default: KeywordTextAligner.
    pub aligner: Arc<dyn TextAligner>,
    /// None when ENHANCER_URL is unset.
    pub enhancer: Option<Arc<dyn ReportEnhancer>>,
}
