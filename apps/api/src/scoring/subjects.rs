//! Subject match: academic preparedness in a career's primary subjects.

use crate::models::career::CareerDefinition;
use crate::models::submission::StudentSubmission;
use crate::scoring::clamp_score;

/// Returned when a career lists no primary subjects.
pub const NEUTRAL_SUBJECT_SCORE: f64 = 50.0;

/// Hard filter first: a missing primary subject disqualifies (0).
/// Otherwise the mean of matched scores, banded:
/// mean ≥ 80 → min(100, mean × 1.1); mean < 60 → mean × 0.8; else mean.
pub fn subject_match_score(career: &CareerDefinition, submission: &StudentSubmission) -> f64 {
    if career.primary_subjects.is_empty() {
        return NEUTRAL_SUBJECT_SCORE;
    }

    let mut total = 0.0;
    for subject in &career.primary_subjects {
        match submission.subject_score(subject) {
            Some(score) => total += score as f64,
            None => return 0.0,
        }
    }

    let mean = total / career.primary_subjects.len() as f64;
    let banded = if mean >= 80.0 {
        (mean * 1.1).min(100.0)
    } else if mean < 60.0 {
        mean * 0.8
    } else {
        mean
    };
    clamp_score(banded)
}
