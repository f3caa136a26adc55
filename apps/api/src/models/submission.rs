use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single questionnaire answer. Likert items arrive as integers,
/// open questions as text, multi-select questions as string lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Likert(i64),
    Text(String),
    List(Vec<String>),
    /// Anything else (floats, nulls, objects). Carried but never scored.
    Other(serde_json::Value),
}

impl AnswerValue {
    pub fn as_likert(&self) -> Option<i64> {
        match self {
            AnswerValue::Likert(v) => Some(*v),
            _ => None,
        }
    }

    /// Text view of a free-form answer. Lists are joined with ", ".
    /// Likert answers have no text.
    pub fn as_text(&self) -> Option<String> {
        match self {
            AnswerValue::Likert(_) | AnswerValue::Other(_) => None,
            AnswerValue::Text(s) => Some(s.clone()),
            AnswerValue::List(items) => Some(items.join(", ")),
        }
    }
}

/// Everything a student submits for one assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentSubmission {
    pub student_name: String,
    #[serde(default)]
    pub grade: Option<u8>,
    #[serde(default)]
    pub board: Option<String>,
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub answers: HashMap<String, AnswerValue>,
    #[serde(default)]
    pub subject_scores: HashMap<String, i32>,
    #[serde(default)]
    pub extracurriculars: Vec<String>,
    #[serde(default)]
    pub parent_careers: Vec<String>,
    #[serde(default)]
    pub study_abroad_preference: Option<bool>,
    #[serde(default)]
    pub work_style_preference: Option<String>,
}

impl StudentSubmission {
    /// Free text of one answer, trimmed. Empty answers read as absent.
    pub fn answer_text(&self, question_id: &str) -> Option<String> {
        self.answers
            .get(question_id)
            .and_then(AnswerValue::as_text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Concatenates text answers whose id starts with any of `prefixes`.
    /// Ids are visited in sorted order so the result is deterministic.
    pub fn text_by_prefixes(&self, prefixes: &[String]) -> String {
        let mut ids: Vec<&String> = self
            .answers
            .keys()
            .filter(|id| prefixes.iter().any(|p| id.starts_with(p.as_str())))
            .collect();
        ids.sort();

        ids.into_iter()
            .filter_map(|id| self.answer_text(id))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Looks up a subject score ignoring case and surrounding whitespace.
    pub fn subject_score(&self, subject: &str) -> Option<i32> {
        let wanted = subject.trim();
        self.subject_scores
            .iter()
            .find(|(name, _)| name.trim().eq_ignore_ascii_case(wanted))
            .map(|(_, &score)| score)
    }

    /// Checks the invariants the HTTP layer enforces before scoring.
    pub fn validate(&self) -> Result<(), String> {
        if self.student_name.trim().is_empty() {
            return Err("student_name cannot be empty".to_string());
        }
        if let Some((subject, score)) = self
            .subject_scores
            .iter()
            .find(|(_, &s)| !(0..=100).contains(&s))
        {
            return Err(format!(
                "subject score for '{subject}' must be between 0 and 100, got {score}"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn submission(name: &str) -> StudentSubmission {
        StudentSubmission {
            student_name: name.to_string(),
            grade: Some(11),
            board: Some("CBSE".to_string()),
            school_name: None,
            answers: HashMap::new(),
            subject_scores: HashMap::new(),
            extracurriculars: vec![],
            parent_careers: vec![],
            study_abroad_preference: None,
            work_style_preference: None,
        }
    }

    pub fn with_answer(mut s: StudentSubmission, id: &str, value: AnswerValue) -> StudentSubmission {
        s.answers.insert(id.to_string(), value);
        s
    }

    pub fn text(s: &str) -> AnswerValue {
        AnswerValue::Text(s.to_string())
    }
}
