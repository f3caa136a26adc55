//! Practical fit: activities, free-text interests and explicit dislikes.

use crate::models::career::CareerDefinition;
use crate::models::submission::StudentSubmission;
use crate::scoring::clamp_score;
use crate::scoring::tables::ScoringTables;
use crate::scoring::text::mentions;

const BASE_SCORE: f64 = 50.0;
const ACTIVITY_BONUS: f64 = 10.0;
const ALIGNMENT_FACTOR: f64 = 0.3;
const NOT_WANTED_PENALTY: f64 = 50.0;
const ENJOYED_BONUS: f64 = 10.0;

/// Practical fit in 0 – 100. `alignment` is the (already fetched) 0 – 100 text
/// alignment for this career; pass 0 when the aligner was skipped or failed.
///
/// 50 base
/// + 10 per extracurricular overlapping a career tag
/// + alignment × 0.3
/// − 50 if a "not wanted" answer names the career or a bucket keyword
/// + 10 if the "subjects enjoyed" answer names the career or bucket
pub fn practical_fit_score(
    career: &CareerDefinition,
    submission: &StudentSubmission,
    tables: &ScoringTables,
    alignment: f64,
) -> f64 {
    let mut score = BASE_SCORE;

    let matching_activities = submission
        .extracurriculars
        .iter()
        .filter(|activity| career.tag_overlaps(activity))
        .count();
    score += matching_activities as f64 * ACTIVITY_BONUS;

    score += alignment * ALIGNMENT_FACTOR;

    if is_not_wanted(career, submission, tables) {
        score -= NOT_WANTED_PENALTY;
    }

    if let Some(enjoyed) = submission.answer_text(&tables.answer_keys.subjects_enjoyed) {
        if mentions(&enjoyed, &career.career_name) || mentions(&enjoyed, &career.bucket) {
            score += ENJOYED_BONUS;
        }
    }

    clamp_score(score)
}

/// True when a "jobs / subjects not wanted" answer names the career or
/// contains a generic keyword of its bucket.
pub fn is_not_wanted(
    career: &CareerDefinition,
    submission: &StudentSubmission,
    tables: &ScoringTables,
) -> bool {
    let keys = &tables.answer_keys;
    let bucket_keywords = tables.keywords_for_bucket(&career.bucket);

    [&keys.jobs_not_wanted, &keys.subjects_not_wanted]
        .into_iter()
        .filter_map(|key| submission.answer_text(key))
        .any(|answer| {
            mentions(&answer, &career.career_name)
                || bucket_keywords.iter().any(|kw| mentions(&answer, kw))
        })
}
