// Career scoring core.
// Implements: RIASEC normalisation, the four dimension scorers, ranking and bucket aggregation.
// Everything here is pure except the text aligner, which is called through a trait.

pub mod alignment;
pub mod buckets;
pub mod context;
pub mod personality;
pub mod practical;
pub mod ranker;
pub mod riasec;
pub mod subjects;
pub mod tables;
pub mod text;
pub mod weights;

use crate::scoring::tables::ScoringTables;
use crate::scoring::weights::ScoringWeights;

/// Weights plus lookup tables. Cloned into `AppState` once at startup.
#[derive(Debug, Clone, Default)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub tables: ScoringTables,
}

/// Clamps a dimension score to the 0 – 100 range.
pub(crate) fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}
