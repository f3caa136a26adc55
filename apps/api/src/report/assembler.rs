//! Report assembler: composes the final report from already-computed parts.

use chrono::Utc;
use uuid::Uuid;

use crate::models::personality::PersonalityVector;
use crate::models::report::{CareerBucket, Report};
use crate::models::submission::StudentSubmission;

/// One-paragraph narrative naming the student and their top bucket.
pub fn summary_paragraph(student_name: &str, buckets: &[CareerBucket]) -> String {
    match buckets.first() {
        None => format!(
            "{student_name}, complete the assessment to get personalized career recommendations."
        ),
        Some(top) => format!(
            "{student_name}, your profile shows strong alignment with {} careers. \
             We recommend focusing on building relevant skills and gaining practical \
             experience in your top-matched fields.",
            top.bucket_name
        ),
    }
}

/// Echoes the submission into a fresh report with the computed parts attached.
pub fn assemble_report(
    submission: &StudentSubmission,
    personality: PersonalityVector,
    top_buckets: Vec<CareerBucket>,
) -> Report {
    let student_name = submission.student_name.trim().to_string();
    let summary = summary_paragraph(&student_name, &top_buckets);

    Report {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        student_name,
        grade: submission.grade,
        board: submission.board.clone(),
        school_name: submission.school_name.clone(),
        personality,
        subject_scores: submission.subject_scores.clone(),
        extracurriculars: submission.extracurriculars.clone(),
        parent_careers: submission.parent_careers.clone(),
        top_buckets,
        summary_paragraph: summary,
        ai_enhanced: false,
        enhanced_summary: None,
        skill_recommendations: vec![],
        career_trajectory_insights: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submission::fixtures::submission;

    fn bucket(name: &str) -> CareerBucket {
        CareerBucket {
            bucket_name: name.to_string(),
            bucket_score: 70,
            top_careers: vec![],
        }
    }

    #[test]
    fn test_summary_without_buckets_is_generic() {
        let text = summary_paragraph("Aisha", &[]);
        assert!(text.starts_with("Aisha,"));
        assert!(text.contains("complete the assessment"));
    }

    #[test]
    fn test_summary_names_top_bucket() {
        let text = summary_paragraph("Aisha", &[bucket("Data AI & Analytics"), bucket("Design")]);
        assert!(text.contains("Aisha"));
        assert!(text.contains("Data AI & Analytics careers"));
        assert!(!text.contains("Design"));
    }

    #[test]
    fn test_assemble_echoes_submission() {
        let mut s = submission(" Bob ");
        s.extracurriculars = vec!["Sports".to_string()];
        s.parent_careers = vec!["Skilled Trade".to_string()];
        s.subject_scores.insert("Physics".to_string(), 80);

        let report = assemble_report(&s, PersonalityVector::zero(), vec![]);
        assert_eq!(report.student_name, "Bob");
        assert_eq!(report.grade, Some(11));
        assert_eq!(report.subject_scores["Physics"], 80);
        assert_eq!(report.extracurriculars, vec!["Sports"]);
        assert_eq!(report.parent_careers, vec!["Skilled Trade"]);
        assert!(report.top_buckets.is_empty());
        assert!(!report.ai_enhanced);
    }
}
