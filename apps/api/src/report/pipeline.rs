//! Report pipeline: the whole scoring computation for one submission.
//!
//! Flow: normalize → rank_catalog → aggregate_buckets → assemble_report.
//!
//! Inputs are read-only, so independent requests can run this concurrently
//! without locks. The aligner is the only call that may suspend.

use std::time::Duration;

use tracing::{debug, info};

use crate::models::career::CareerDefinition;
use crate::models::report::Report;
use crate::models::submission::StudentSubmission;
use crate::report::assembler::assemble_report;
use crate::scoring::alignment::TextAligner;
use crate::scoring::buckets::aggregate_buckets;
use crate::scoring::ranker::rank_catalog;
use crate::scoring::riasec::normalize;
use crate::scoring::ScoringConfig;

pub async fn compute_report(
    submission: &StudentSubmission,
    catalog: &[CareerDefinition],
    config: &ScoringConfig,
    aligner: &dyn TextAligner,
    alignment_timeout: Duration,
) -> Report {
    info!(
        "Computing career report for {} against {} careers",
        submission.student_name,
        catalog.len()
    );

    let personality = normalize(&submission.answers, &config.tables.personality_questions);
    if let Some(letter) = personality.dominant() {
        debug!(
            "Dominant personality type for {}: {}",
            submission.student_name,
            letter.name()
        );
    }

    let matches = rank_catalog(
        catalog,
        submission,
        &personality,
        config,
        aligner,
        alignment_timeout,
    )
    .await;

    let buckets = aggregate_buckets(matches);
    if let Some(top) = buckets.first() {
        info!(
            "Top bucket for {}: {} ({}/100)",
            submission.student_name, top.bucket_name, top.bucket_score
        );
    }

    assemble_report(submission, personality, buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::career::fixtures::{career, strings};
    use crate::models::personality::Riasec;
    use crate::models::submission::fixtures::{submission, text, with_answer};
    use crate::models::submission::AnswerValue;
    use crate::scoring::alignment::fixtures::FixedAligner;
    use crate::scoring::alignment::KeywordTextAligner;

    fn catalog() -> Vec<CareerDefinition> {
        let mut ds = career("c010", "Data Scientist", "Data AI & Analytics", "IA");
        ds.primary_subjects = strings(&["Mathematics", "Computer Science", "Statistics"]);
        ds.tags = strings(&["data", "new_age"]);

        let mut me = career("c001", "Mechanical Engineer", "Engineering & Core Technology", "R");
        me.primary_subjects = strings(&["Mathematics", "Physics"]);
        me.tags = strings(&["mechanical", "hands_on"]);

        let mut ux = career("c030", "UX/UI Designer", "Design Media & Creative Industries", "AE");
        ux.primary_subjects = strings(&["Art / Design", "Computer Science"]);
        ux.tags = strings(&["design", "creative"]);

        vec![ds, me, ux]
    }

    fn likert(s: StudentSubmission, pairs: &[(&str, i64)]) -> StudentSubmission {
        pairs
            .iter()
            .fold(s, |acc, (id, v)| with_answer(acc, id, AnswerValue::Likert(*v)))
    }

    fn aisha() -> StudentSubmission {
        let mut s = likert(
            submission("Aisha"),
            &[
                ("v_01", 2),
                ("v_02", 3),
                ("v_03", 5),
                ("v_04", 2),
                ("v_05", 3),
                ("v_06", 2),
                ("v_09", 5),
                ("v_14", 5),
            ],
        );
        s = with_answer(
            s,
            "v_15",
            text("I loved building a small robot and finding patterns in data."),
        );
        s = with_answer(s, "e_05", text("I want to become a data scientist"));
        for (name, score) in [
            ("Mathematics", 88),
            ("Physics", 82),
            ("Chemistry", 74),
            ("Computer Science", 78),
            ("Statistics", 81),
        ] {
            s.subject_scores.insert(name.to_string(), score);
        }
        s.extracurriculars = strings(&["Robotics / Coding", "Debate / MUN"]);
        s.parent_careers = strings(&["IT / Software"]);
        s.study_abroad_preference = Some(true);
        s.work_style_preference = Some("Office / Lab work".to_string());
        s
    }

    fn carol() -> StudentSubmission {
        let mut s = likert(
            submission("Carol"),
            &[("v_05", 5), ("v_10", 4), ("v_01", 2), ("v_03", 3), ("v_06", 3)],
        );
        for (name, score) in [("Art / Design", 85), ("Computer Science", 70), ("Mathematics", 60)] {
            s.subject_scores.insert(name.to_string(), score);
        }
        s.extracurriculars = strings(&["Painting / Art", "Theatre / Drama", "Design club"]);
        s.parent_careers = strings(&["Creative Arts"]);
        s
    }

    async fn run(s: &StudentSubmission, catalog: &[CareerDefinition]) -> Report {
        compute_report(
            s,
            catalog,
            &ScoringConfig::default(),
            &KeywordTextAligner::builtin(),
            Duration::from_secs(1),
        )
        .await
    }

    #[tokio::test]
    async fn test_investigative_student_tops_data_bucket() {
        let report = run(&aisha(), &catalog()).await;

        assert_eq!(report.student_name, "Aisha");
        assert!(report.personality.get(Riasec::I) > report.personality.get(Riasec::R));
        assert_eq!(report.top_buckets[0].bucket_name, "Data AI & Analytics");
        assert_eq!(report.top_buckets[0].top_careers[0].career_name, "Data Scientist");
        assert!(report.summary_paragraph.contains("Data AI & Analytics"));
    }

    #[tokio::test]
    async fn test_artistic_student_tops_design_bucket() {
        let report = run(&carol(), &catalog()).await;
        assert_eq!(report.personality.dominant(), Some(Riasec::A));
        assert_eq!(
            report.top_buckets[0].bucket_name,
            "Design Media & Creative Industries"
        );
    }

    #[tokio::test]
    async fn test_all_scores_in_range_and_deterministic() {
        for s in [aisha(), carol(), submission("Minimal")] {
            let first = run(&s, &catalog()).await;
            let second = run(&s, &catalog()).await;

            for bucket in &first.top_buckets {
                assert!(bucket.bucket_score <= 100);
                assert!(bucket.top_careers.iter().all(|c| c.match_score <= 100));
            }
            let names = |r: &Report| {
                r.top_buckets
                    .iter()
                    .map(|b| b.bucket_name.clone())
                    .collect::<Vec<_>>()
            };
            assert_eq!(names(&first), names(&second));
        }
    }

    #[tokio::test]
    async fn test_empty_catalog_gives_fallback_summary() {
        let report = run(&aisha(), &[]).await;
        assert!(report.top_buckets.is_empty());
        assert_eq!(
            report.summary_paragraph,
            "Aisha, complete the assessment to get personalized career recommendations."
        );
    }

    #[tokio::test]
    async fn test_unanswered_submission_still_completes() {
        let report = compute_report(
            &submission("Minimal"),
            &catalog(),
            &ScoringConfig::default(),
            &FixedAligner(100.0),
            Duration::from_secs(1),
        )
        .await;
        assert_eq!(report.personality.total(), 0);
        assert_eq!(report.top_buckets.len(), 3);
    }
}
