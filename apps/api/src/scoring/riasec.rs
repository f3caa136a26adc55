//! RIASEC normaliser: Likert answers → six-letter percentage vector.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::models::personality::{PersonalityVector, Riasec};
use crate::models::submission::AnswerValue;

pub const LIKERT_MIN: i64 = 1;
pub const LIKERT_MAX: i64 = 5;
pub const LIKERT_MIDPOINT: i64 = 3;

/// Computes the personality vector from a raw answer map.
///
/// Algorithm:
/// 1. Collect Likert answers for every id in `questions` (clamped to 1 – 5).
/// 2. If at least one was answered, unanswered ids default to the midpoint 3.
///    If none were, return the zero vector.
/// 3. mean[letter] = arithmetic mean of its answers (0 if no question maps to it)
/// 4. pct[letter] = round(100 × mean / Σ means)
pub fn normalize(
    answers: &HashMap<String, AnswerValue>,
    questions: &BTreeMap<String, Riasec>,
) -> PersonalityVector {
    let answered: Vec<(Riasec, Option<i64>)> = questions
        .iter()
        .map(|(id, &letter)| {
            let value = answers
                .get(id)
                .and_then(AnswerValue::as_likert)
                .map(|v| v.clamp(LIKERT_MIN, LIKERT_MAX));
            (letter, value)
        })
        .collect();

    let answered_count = answered.iter().filter(|(_, v)| v.is_some()).count();
    if answered_count == 0 {
        return PersonalityVector::zero();
    }
    debug!(
        "RIASEC: {} of {} personality questions answered",
        answered_count,
        questions.len()
    );

    let mut sums: BTreeMap<Riasec, (i64, u32)> = BTreeMap::new();
    for (letter, value) in answered {
        let entry = sums.entry(letter).or_insert((0, 0));
        entry.0 += value.unwrap_or(LIKERT_MIDPOINT);
        entry.1 += 1;
    }

    let means: Vec<(Riasec, f64)> = Riasec::ALL
        .iter()
        .map(|&letter| {
            let mean = match sums.get(&letter) {
                Some(&(sum, count)) if count > 0 => sum as f64 / count as f64,
                _ => 0.0,
            };
            (letter, mean)
        })
        .collect();

    let total: f64 = means.iter().map(|(_, m)| m).sum();
    if total <= 0.0 {
        return PersonalityVector::zero();
    }

    let pairs: Vec<(Riasec, u32)> = means
        .into_iter()
        .map(|(letter, mean)| (letter, (100.0 * mean / total).round() as u32))
        .collect();
    PersonalityVector::from_pairs(&pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tables::ScoringTables;

    fn answers(pairs: &[(&str, i64)]) -> HashMap<String, AnswerValue> {
        pairs
            .iter()
            .map(|(id, v)| (id.to_string(), AnswerValue::Likert(*v)))
            .collect()
    }

    fn questions() -> BTreeMap<String, Riasec> {
        ScoringTables::default().personality_questions
    }

    #[test]
    fn test_no_answers_is_all_zero() {
        let v = normalize(&HashMap::new(), &questions());
        assert_eq!(v, PersonalityVector::zero());
    }

    #[test]
    fn test_text_only_answers_are_all_zero() {
        let mut a = HashMap::new();
        a.insert("v_01".to_string(), AnswerValue::Text("five".to_string()));
        assert_eq!(normalize(&a, &questions()).total(), 0);
    }

    #[test]
    fn test_percentages_sum_to_about_100() {
        let v = normalize(
            &answers(&[("v_01", 2), ("v_03", 5), ("v_09", 5), ("v_14", 5), ("v_05", 3)]),
            &questions(),
        );
        let total = v.total();
        assert!((97..=103).contains(&total), "total was {total}");
        assert_eq!(v.iter().count(), 6);
        assert_eq!(v.dominant(), Some(Riasec::I));
    }

    #[test]
    fn test_missing_answers_default_to_midpoint() {
        // Only v_01 answered (R=5). Every other question defaults to 3.
        // means: R=(5+3)/2=4, I=3, A=3, S=3, E=3, C=3 → total 19
        let v = normalize(&answers(&[("v_01", 5)]), &questions());
        assert_eq!(v.get(Riasec::R), 21); // 400/19 = 21.05
        assert_eq!(v.get(Riasec::I), 16); // 300/19 = 15.79
    }

    #[test]
    fn test_out_of_range_likert_is_clamped() {
        let clamped = normalize(&answers(&[("v_01", 99)]), &questions());
        let max = normalize(&answers(&[("v_01", 5)]), &questions());
        assert_eq!(clamped, max);
    }

    #[test]
    fn test_unmapped_ids_are_ignored() {
        let v = normalize(&answers(&[("v_99", 5), ("e_01", 4)]), &questions());
        assert_eq!(v.total(), 0);
    }

    #[test]
    fn test_letter_without_questions_scores_zero() {
        let mut q = BTreeMap::new();
        q.insert("q1".to_string(), Riasec::I);
        q.insert("q2".to_string(), Riasec::A);
        let v = normalize(&answers(&[("q1", 4), ("q2", 4)]), &q);
        assert_eq!(v.get(Riasec::I), 50);
        assert_eq!(v.get(Riasec::A), 50);
        assert_eq!(v.get(Riasec::R), 0);
    }
}
