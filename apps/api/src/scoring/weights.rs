use serde::{Deserialize, Serialize};

use crate::models::report::DimensionScores;

/// Relative weight of each dimension in the final match score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub personality: f64,
    pub subject: f64,
    pub practical: f64,
    pub context: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            personality: 0.40,
            subject: 0.30,
            practical: 0.20,
            context: 0.10,
        }
    }
}

/// Final score: 0.4*personality + 0.3*subject + 0.2*practical + 0.1*context,
/// clamped to 0 – 100 and rounded.
pub fn compute_final_score(dimensions: &DimensionScores, weights: &ScoringWeights) -> u32 {
    let raw = weights.personality * dimensions.personality
        + weights.subject * dimensions.subject
        + weights.practical * dimensions.practical
        + weights.context * dimensions.context;
    raw.clamp(0.0, 100.0).round() as u32
}
