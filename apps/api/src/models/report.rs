use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::personality::PersonalityVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => Confidence::High,
            s if s >= 60 => Confidence::Medium,
            _ => Confidence::Low,
        }
    }
}

/// The four independent 0 – 100 sub-scores behind a match.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionScores {
    pub personality: f64,
    pub subject: f64,
    pub practical: f64,
    pub context: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub career_id: String,
    pub career_name: String,
    pub bucket: String,
    pub match_score: u32, // 0 – 100
    pub top_reasons: Vec<String>, // ≤ 3
    pub study_path: Vec<String>, // ≤ 3
    pub first_steps: Vec<String>,
    pub confidence: Confidence,
    pub what_would_change: String,
    pub dimensions: DimensionScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerBucket {
    pub bucket_name: String,
    pub bucket_score: u32,
    pub top_careers: Vec<CareerMatch>,
}

/// Final report handed to the delivery layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub student_name: String,
    pub grade: Option<u8>,
    pub board: Option<String>,
    pub school_name: Option<String>,
    pub personality: PersonalityVector,
    pub subject_scores: HashMap<String, i32>,
    pub extracurriculars: Vec<String>,
    pub parent_careers: Vec<String>,
    pub top_buckets: Vec<CareerBucket>,
    pub summary_paragraph: String,

    // Filled only by a narrative enhancer.
    #[serde(default)]
    pub ai_enhanced: bool,
    #[serde(default)]
    pub enhanced_summary: Option<String>,
    #[serde(default)]
    pub skill_recommendations: Vec<String>,
    #[serde(default)]
    pub career_trajectory_insights: Option<String>,
}
