//! Context fit: family background, preferences and self-reported constraints.
//!
//! A heuristic accumulation of independent signals around a neutral 50.
//! Every term is additive, so application order does not change the sum.

use crate::models::career::CareerDefinition;
use crate::models::submission::StudentSubmission;
use crate::scoring::clamp_score;
use crate::scoring::tables::{matches_fragment, ScoringTables};
use crate::scoring::text::{contains_any_word, mentions, words, RankBand, Stance};

const BASE_SCORE: f64 = 50.0;
const PARENT_BONUS: f64 = 15.0;
const STUDY_ABROAD_BONUS: f64 = 10.0;
const LONG_STUDY_PENALTY: f64 = 30.0;
const VOCATIONAL_SHIFT: f64 = 25.0;
const DREAM_CAREER_BONUS: f64 = 20.0;
const RANK_TOP_BONUS: f64 = 5.0;
const RANK_MIDDLE_PENALTY: f64 = 5.0;
const RANK_BOTTOM_PENALTY: f64 = 10.0;
const FAMILY_POSITIVE_BONUS: f64 = 15.0;
const FAMILY_NEGATIVE_PENALTY: f64 = 20.0;

pub fn context_fit_score(
    career: &CareerDefinition,
    submission: &StudentSubmission,
    tables: &ScoringTables,
) -> f64 {
    let score = BASE_SCORE
        + parent_signal(career, submission, tables)
        + study_abroad_signal(career, submission)
        + work_style_signal(career, submission, tables)
        + long_study_signal(career, submission, tables)
        + vocational_signal(career, submission, tables)
        + dream_career_signal(career, submission, tables)
        + class_rank_signal(career, submission, tables)
        + family_sentiment_signal(career, submission, tables);
    clamp_score(score)
}

fn parent_signal(
    career: &CareerDefinition,
    submission: &StudentSubmission,
    tables: &ScoringTables,
) -> f64 {
    let related = submission
        .parent_careers
        .iter()
        .any(|parent| tables.parent_relates_to(parent, &career.bucket));
    if related {
        PARENT_BONUS
    } else {
        0.0
    }
}

fn study_abroad_signal(career: &CareerDefinition, submission: &StudentSubmission) -> f64 {
    if submission.study_abroad_preference == Some(true) && career.has_tag("new_age") {
        STUDY_ABROAD_BONUS
    } else {
        0.0
    }
}

fn work_style_signal(
    career: &CareerDefinition,
    submission: &StudentSubmission,
    tables: &ScoringTables,
) -> f64 {
    let Some(style) = submission.work_style_preference.as_deref() else {
        return 0.0;
    };
    tables
        .work_style_rules
        .iter()
        .find(|rule| {
            rule.style_keywords.iter().any(|kw| mentions(style, kw))
                && matches_fragment(&career.bucket, &rule.bucket_fragments)
        })
        .map_or(0.0, |rule| rule.bonus)
}

/// A career needs long study if its qualification names a postgraduate /
/// professional degree, or its name carries a keyword such as "Doctor".
pub fn requires_long_study(career: &CareerDefinition, tables: &ScoringTables) -> bool {
    let qualification = words(&career.min_qualification);
    let by_qualification = tables
        .long_qualification_keywords
        .iter()
        .any(|kw| qualification.iter().any(|w| w == kw));
    let by_name = tables
        .long_study_name_keywords
        .iter()
        .any(|kw| mentions(&career.career_name, kw));
    by_qualification || by_name
}

fn long_study_signal(
    career: &CareerDefinition,
    submission: &StudentSubmission,
    tables: &ScoringTables,
) -> f64 {
    let unwilling = submission
        .answer_text(&tables.answer_keys.long_study)
        .is_some_and(|a| Stance::of(&a) == Stance::Negative);
    if unwilling && requires_long_study(career, tables) {
        -LONG_STUDY_PENALTY
    } else {
        0.0
    }
}

fn vocational_signal(
    career: &CareerDefinition,
    submission: &StudentSubmission,
    tables: &ScoringTables,
) -> f64 {
    if !tables.is_vocational(&career.bucket) {
        return 0.0;
    }
    match submission
        .answer_text(&tables.answer_keys.vocational)
        .map(|a| Stance::of(&a))
    {
        Some(Stance::Positive) => VOCATIONAL_SHIFT,
        Some(Stance::Negative) => -VOCATIONAL_SHIFT,
        _ => 0.0,
    }
}

fn dream_career_signal(
    career: &CareerDefinition,
    submission: &StudentSubmission,
    tables: &ScoringTables,
) -> f64 {
    match submission.answer_text(&tables.answer_keys.dream_career) {
        Some(dream) if names_career(&dream, career) => DREAM_CAREER_BONUS,
        _ => 0.0,
    }
}

fn class_rank_signal(
    career: &CareerDefinition,
    submission: &StudentSubmission,
    tables: &ScoringTables,
) -> f64 {
    if !tables.is_competitive(&career.bucket) {
        return 0.0;
    }
    match submission
        .answer_text(&tables.answer_keys.class_rank)
        .map(|a| RankBand::of(&a))
    {
        Some(RankBand::Top) => RANK_TOP_BONUS,
        Some(RankBand::Middle) => -RANK_MIDDLE_PENALTY,
        Some(RankBand::Bottom) => -RANK_BOTTOM_PENALTY,
        _ => 0.0,
    }
}

fn family_sentiment_signal(
    career: &CareerDefinition,
    submission: &StudentSubmission,
    tables: &ScoringTables,
) -> f64 {
    let Some(sentiment) = submission.answer_text(&tables.answer_keys.family_sentiment) else {
        return 0.0;
    };
    if !names_career(&sentiment, career) {
        return 0.0;
    }
    if contains_any_word(&sentiment, &tables.negative_sentiment) {
        -FAMILY_NEGATIVE_PENALTY
    } else if contains_any_word(&sentiment, &tables.positive_sentiment) {
        FAMILY_POSITIVE_BONUS
    } else {
        0.0
    }
}

/// True when `text` mentions the career name, the bucket name, or the
/// bucket's leading word (e.g. "Healthcare" for "Healthcare & Life Sciences").
fn names_career(text: &str, career: &CareerDefinition) -> bool {
    if mentions(text, &career.career_name) || mentions(text, &career.bucket) {
        return true;
    }
    career
        .bucket
        .split_whitespace()
        .next()
        .filter(|lead| lead.len() > 3)
        .is_some_and(|lead| words(text).iter().any(|w| w == &lead.to_lowercase()))
}
