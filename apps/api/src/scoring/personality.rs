//! Personality match: how well the student's RIASEC vector covers a career's profile.

use std::collections::BTreeMap;

use crate::models::personality::{PersonalityVector, Riasec};
use crate::scoring::clamp_score;

/// Letter → weight. Each occurrence in the profile adds one unit.
pub fn profile_weights(profile: &[Riasec]) -> BTreeMap<Riasec, u32> {
    let mut weights = BTreeMap::new();
    for &letter in profile {
        *weights.entry(letter).or_insert(0) += 1;
    }
    weights
}

/// score = Σ (pct[letter] / 100 × weight) / distinct_letters × 100, clamped.
/// An empty profile scores 0.
pub fn personality_match_score(profile: &[Riasec], student: &PersonalityVector) -> f64 {
    let weights = profile_weights(profile);
    if weights.is_empty() {
        return 0.0;
    }

    let total: f64 = weights
        .iter()
        .map(|(&letter, &weight)| (student.get(letter) as f64 / 100.0) * weight as f64)
        .sum();

    clamp_score(total / weights.len() as f64 * 100.0)
}
