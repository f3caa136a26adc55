//! Text alignment: scores how closely a student's free-text answers
//! describe a career, behind a swappable async trait.
//!
//! Default: `KeywordTextAligner` (keyword table per tag / bucket, deterministic).
//! The pipeline only talks to `Arc<dyn TextAligner>` and wraps every call in a
//! timeout, so a slow or failing aligner contributes 0 instead of failing a report.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::models::career::CareerDefinition;

const POINTS_PER_KEYWORD: f64 = 10.0;
const MAX_ALIGNMENT: f64 = 100.0;

#[derive(Debug, Error)]
pub enum AlignmentError {
    #[error("keyword table could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("keyword table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[allow(dead_code)]
    #[error("aligner unavailable: {0}")]
    Unavailable(String),
}

/// Returns a 0 – 100 alignment between free text and a career.
#[async_trait]
pub trait TextAligner: Send + Sync {
    async fn alignment(&self, text: &str, career: &CareerDefinition)
        -> Result<f64, AlignmentError>;
}

/// Keyword-overlap aligner.
///
/// Algorithm:
/// 1. Look up the keyword list for every career tag and for the bucket name.
/// 2. +10 for every keyword found in the lowercased text.
/// 3. Cap at 100.
#[derive(Debug, Clone, Default)]
pub struct KeywordTextAligner {
    keywords: HashMap<String, Vec<String>>,
}

impl KeywordTextAligner {
    pub fn new(table: HashMap<String, Vec<String>>) -> Self {
        let keywords = table
            .into_iter()
            .map(|(key, words)| {
                let words: Vec<String> = words
                    .into_iter()
                    .map(|w| w.trim().to_lowercase())
                    .filter(|w| !w.is_empty())
                    .collect();
                (key.trim().to_lowercase(), words)
            })
            .collect();
        Self { keywords }
    }

    /// Loads a `{ "tag": ["keyword", ...] }` table from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AlignmentError> {
        let raw = std::fs::read_to_string(path)?;
        let table: HashMap<String, Vec<String>> = serde_json::from_str(&raw)?;
        Ok(Self::new(table))
    }

    /// Built-in table used when no keyword file is configured.
    pub fn builtin() -> Self {
        let table: HashMap<String, Vec<String>> = [
            ("data", &["data", "statistics", "numbers", "patterns", "analysis"][..]),
            ("new_age", &["ai", "startup", "technology", "internet"][..]),
            ("mechanical", &["machine", "mechanical", "engine", "robot", "fixing"][..]),
            ("hands_on", &["building", "repair", "tools", "hands"][..]),
            ("design", &["design", "drawing", "sketch", "visual"][..]),
            ("creative", &["creative", "art", "painting", "music", "story"][..]),
            ("coding", &["coding", "programming", "software", "app"][..]),
            ("medical", &["doctor", "patients", "biology", "hospital", "health"][..]),
            ("people", &["helping", "people", "teaching", "community"][..]),
            ("business", &["business", "money", "sales", "leading", "market"][..]),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
        .collect();
        Self::new(table)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    fn score(&self, text: &str, career: &CareerDefinition) -> f64 {
        let text = text.to_lowercase();
        let keys = career
            .tags
            .iter()
            .chain(std::iter::once(&career.bucket))
            .map(|k| k.trim().to_lowercase());

        let mut score = 0.0;
        for key in keys {
            if let Some(words) = self.keywords.get(&key) {
                score += words.iter().filter(|w| text.contains(w.as_str())).count() as f64
                    * POINTS_PER_KEYWORD;
            }
        }
        score.min(MAX_ALIGNMENT)
    }
}

#[async_trait]
impl TextAligner for KeywordTextAligner {
    async fn alignment(
        &self,
        text: &str,
        career: &CareerDefinition,
    ) -> Result<f64, AlignmentError> {
        if text.trim().is_empty() {
            return Ok(0.0);
        }
        Ok(self.score(text, career))
    }
}

/// Calls the aligner with a bounded timeout. Errors, timeouts and out-of-range
/// values all degrade to a neutral contribution.
pub async fn alignment_or_zero(
    aligner: &dyn TextAligner,
    text: &str,
    career: &CareerDefinition,
    timeout: Duration,
) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }
    match tokio::time::timeout(timeout, aligner.alignment(text, career)).await {
        Ok(Ok(score)) if score.is_finite() => score.clamp(0.0, MAX_ALIGNMENT),
        Ok(Ok(score)) => {
            warn!("Aligner returned non-finite score {score} for {}", career.career_id);
            0.0
        }
        Ok(Err(e)) => {
            warn!("Text alignment failed for {}: {e}", career.career_id);
            0.0
        }
        Err(_) => {
            warn!(
                "Text alignment timed out after {}ms for {}",
                timeout.as_millis(),
                career.career_id
            );
            0.0
        }
    }
}
