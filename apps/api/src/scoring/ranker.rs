//! Career ranker: merges the four dimension scores into one match per career
//! and writes the human-readable parts of each match.

use std::collections::BTreeSet;
use std::time::Duration;

use tracing::debug;

use crate::models::career::CareerDefinition;
use crate::models::personality::PersonalityVector;
use crate::models::report::{CareerMatch, Confidence, DimensionScores};
use crate::models::submission::StudentSubmission;
use crate::scoring::alignment::{alignment_or_zero, TextAligner};
use crate::scoring::context::context_fit_score;
use crate::scoring::personality::personality_match_score;
use crate::scoring::practical::practical_fit_score;
use crate::scoring::subjects::subject_match_score;
use crate::scoring::weights::compute_final_score;
use crate::scoring::ScoringConfig;

const MAX_REASONS: usize = 3;
const MAX_STUDY_PATH: usize = 3;
/// Personality letters above this percentage are worth explaining.
const TRAIT_REASON_THRESHOLD: u32 = 30;
const SUBJECT_REASON_THRESHOLD: i32 = 75;
const WEAK_SUBJECT_THRESHOLD: i32 = 60;

/// Scores every catalog entry once, in catalog order. Output is unsorted.
pub async fn rank_catalog(
    catalog: &[CareerDefinition],
    submission: &StudentSubmission,
    personality: &PersonalityVector,
    config: &ScoringConfig,
    aligner: &dyn TextAligner,
    alignment_timeout: Duration,
) -> Vec<CareerMatch> {
    let subjective = submission.text_by_prefixes(&config.tables.answer_keys.subjective_prefixes);

    let mut matches = Vec::with_capacity(catalog.len());
    for career in catalog {
        let alignment = alignment_or_zero(aligner, &subjective, career, alignment_timeout).await;
        matches.push(score_career(career, submission, personality, config, alignment));
    }
    matches
}

/// Builds one `CareerMatch` from precomputed inputs. Pure.
pub fn score_career(
    career: &CareerDefinition,
    submission: &StudentSubmission,
    personality: &PersonalityVector,
    config: &ScoringConfig,
    alignment: f64,
) -> CareerMatch {
    let dimensions = DimensionScores {
        personality: personality_match_score(&career.riasec_profile, personality),
        subject: subject_match_score(career, submission),
        practical: practical_fit_score(career, submission, &config.tables, alignment),
        context: context_fit_score(career, submission, &config.tables),
    };
    let match_score = compute_final_score(&dimensions, &config.weights);

    debug!(
        "Career: {} | personality: {:.1} | subject: {:.1} | practical: {:.1} | context: {:.1} | final: {}",
        career.career_name,
        dimensions.personality,
        dimensions.subject,
        dimensions.practical,
        dimensions.context,
        match_score
    );

    CareerMatch {
        career_id: career.career_id.clone(),
        career_name: career.career_name.clone(),
        bucket: career.bucket.clone(),
        match_score,
        top_reasons: build_reasons(career, submission, personality),
        study_path: career.study_paths.iter().take(MAX_STUDY_PATH).cloned().collect(),
        first_steps: first_steps(career),
        confidence: Confidence::from_score(match_score),
        what_would_change: what_would_change(career, submission),
        dimensions,
    }
}

/// Up to three reasons, in order: strong personality letters, strong
/// primary subjects, activities overlapping a career tag.
fn build_reasons(
    career: &CareerDefinition,
    submission: &StudentSubmission,
    personality: &PersonalityVector,
) -> Vec<String> {
    let mut reasons = Vec::new();

    let mut seen = BTreeSet::new();
    for &letter in &career.riasec_profile {
        if !seen.insert(letter) {
            continue;
        }
        let pct = personality.get(letter);
        if pct > TRAIT_REASON_THRESHOLD {
            reasons.push(format!(
                "High {} score ({pct}%): you like {} activities.",
                letter.name(),
                letter.description()
            ));
        }
    }

    for subject in &career.primary_subjects {
        if let Some(score) = submission.subject_score(subject) {
            if score > SUBJECT_REASON_THRESHOLD {
                reasons.push(format!(
                    "Strong {subject} marks ({score}): good foundation for this field."
                ));
            }
        }
    }

    for activity in &submission.extracurriculars {
        if career.tag_overlaps(activity) {
            reasons.push(format!(
                "{} extracurricular shows practical interest in this area.",
                activity.trim()
            ));
        }
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

fn first_steps(career: &CareerDefinition) -> Vec<String> {
    vec![
        format!(
            "Explore {} through online courses or workshops",
            career.career_name
        ),
        "Connect with professionals in this field for informational interviews".to_string(),
        format!(
            "Start a small project related to {}",
            career.career_name.to_lowercase()
        ),
    ]
}

fn what_would_change(career: &CareerDefinition, submission: &StudentSubmission) -> String {
    career
        .primary_subjects
        .iter()
        .find(|subject| {
            submission
                .subject_score(subject)
                .is_some_and(|score| score < WEAK_SUBJECT_THRESHOLD)
        })
        .map(|subject| {
            format!("If {subject} performance drops below 50, consider alternative paths.")
        })
        .unwrap_or_else(|| {
            "Focus on building practical experience through projects and internships.".to_string()
        })
}
