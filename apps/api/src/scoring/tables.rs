//! Lookup tables that drive the scorers. Everything here is data, so alternate
//! question banks or catalogs can be wired in without touching scoring logic.

use std::collections::BTreeMap;

use crate::models::personality::Riasec;

/// Which answer ids carry which free-text signal.
#[derive(Debug, Clone)]
pub struct AnswerKeys {
    /// Ids (by prefix) whose text is sent to the text aligner.
    pub subjective_prefixes: Vec<String>,
    pub subjects_enjoyed: String,
    pub subjects_not_wanted: String,
    pub jobs_not_wanted: String,
    pub long_study: String,
    pub vocational: String,
    pub dream_career: String,
    pub class_rank: String,
    pub family_sentiment: String,
}

impl Default for AnswerKeys {
    fn default() -> Self {
        Self {
            subjective_prefixes: strings(&["v_15", "e_12", "e_13", "e_15"]),
            subjects_enjoyed: "e_03".to_string(),
            subjects_not_wanted: "e_04".to_string(),
            jobs_not_wanted: "e_14".to_string(),
            long_study: "e_09".to_string(),
            vocational: "e_10".to_string(),
            dream_career: "e_05".to_string(),
            class_rank: "e_06".to_string(),
            family_sentiment: "e_16".to_string(),
        }
    }
}

/// Generic words that signal a bucket, e.g. "blood" for healthcare.
#[derive(Debug, Clone)]
pub struct BucketKeywords {
    /// Matched case-insensitively as a substring of the bucket name.
    pub bucket_fragment: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct WorkStyleRule {
    pub style_keywords: Vec<String>,
    pub bucket_fragments: Vec<String>,
    pub bonus: f64,
}

#[derive(Debug, Clone)]
pub struct ScoringTables {
    /// Personality question id → the single letter it measures.
    pub personality_questions: BTreeMap<String, Riasec>,
    pub answer_keys: AnswerKeys,
    /// Parent career label (lowercased) → fragments of the related bucket names.
    pub parent_buckets: BTreeMap<String, Vec<String>>,
    pub bucket_keywords: Vec<BucketKeywords>,
    /// First matching rule wins.
    pub work_style_rules: Vec<WorkStyleRule>,
    pub competitive_buckets: Vec<String>,
    pub vocational_buckets: Vec<String>,
    pub long_qualification_keywords: Vec<String>,
    pub long_study_name_keywords: Vec<String>,
    pub negative_sentiment: Vec<String>,
    pub positive_sentiment: Vec<String>,
}

impl Default for ScoringTables {
    fn default() -> Self {
        let personality_questions = [
            (1, Riasec::R),
            (2, Riasec::C),
            (3, Riasec::I),
            (4, Riasec::S),
            (5, Riasec::A),
            (6, Riasec::E),
            (7, Riasec::C),
            (8, Riasec::R),
            (9, Riasec::I),
            (10, Riasec::A),
            (11, Riasec::C),
            (12, Riasec::S),
            (13, Riasec::E),
            (14, Riasec::I),
        ]
        .into_iter()
        .map(|(n, letter)| (format!("v_{n:02}"), letter))
        .collect();

        let parent_buckets = [
            ("IT / Software", &["computer science", "software", "core technology"][..]),
            ("Finance / Banking", &["finance", "business"][..]),
            ("Medicine / Healthcare", &["healthcare", "life sciences"][..]),
            ("Education", &["education"][..]),
            ("Creative Arts", &["design", "creative", "media"][..]),
            ("Engineering", &["engineering"][..]),
            ("Law / Legal", &["law"][..]),
            ("Skilled Trade", &["vocational", "skilled trade"][..]),
        ]
        .into_iter()
        .map(|(parent, fragments)| (parent.to_lowercase(), strings(fragments)))
        .collect();

        let bucket_keywords = [
            ("computer science", &["coding", "programming", "computers", "software"][..]),
            ("data", &["coding", "statistics", "numbers", "data"][..]),
            ("healthcare", &["blood", "hospital", "medicine", "patients"][..]),
            ("engineering", &["machines", "engineering", "factory"][..]),
            ("finance", &["accounts", "finance", "sales", "banking"][..]),
            ("design", &["drawing", "design", "art"][..]),
            ("law", &["law", "court", "lawyer"][..]),
            ("education", &["teaching", "teacher", "school"][..]),
        ]
        .into_iter()
        .map(|(fragment, keywords)| BucketKeywords {
            bucket_fragment: fragment.to_string(),
            keywords: strings(keywords),
        })
        .collect();

        let tech = strings(&["computer science", "data", "software"]);
        let work_style_rules = vec![
            WorkStyleRule {
                style_keywords: strings(&["remote", "work from home"]),
                bucket_fragments: tech.clone(),
                bonus: 15.0,
            },
            WorkStyleRule {
                style_keywords: strings(&["office", "lab"]),
                bucket_fragments: tech,
                bonus: 10.0,
            },
            WorkStyleRule {
                style_keywords: strings(&["field", "outdoor", "hands-on"]),
                bucket_fragments: strings(&["engineering", "agriculture", "vocational"]),
                bonus: 10.0,
            },
        ];

        Self {
            personality_questions,
            answer_keys: AnswerKeys::default(),
            parent_buckets,
            bucket_keywords,
            work_style_rules,
            competitive_buckets: strings(&["healthcare", "core technology", "law"]),
            vocational_buckets: strings(&["vocational", "skilled trade"]),
            long_qualification_keywords: strings(&[
                "mbbs", "md", "ms", "phd", "ph.d", "llm", "master", "masters", "m.tech", "m.sc",
                "mba", "ca", "chartered",
            ]),
            long_study_name_keywords: strings(&["doctor"]),
            negative_sentiment: strings(&["bad", "taboo", "against", "disapprove", "unsafe"]),
            positive_sentiment: strings(&["good", "proud", "support", "supportive", "respect"]),
        }
    }
}

impl ScoringTables {
    /// True when the parent's career label maps onto `bucket`.
    pub fn parent_relates_to(&self, parent_career: &str, bucket: &str) -> bool {
        self.parent_buckets
            .get(&parent_career.trim().to_lowercase())
            .is_some_and(|fragments| matches_fragment(bucket, fragments))
    }

    /// Generic keywords for every table entry whose fragment appears in `bucket`.
    pub fn keywords_for_bucket(&self, bucket: &str) -> Vec<&str> {
        let bucket = bucket.to_lowercase();
        self.bucket_keywords
            .iter()
            .filter(|entry| bucket.contains(&entry.bucket_fragment))
            .flat_map(|entry| entry.keywords.iter().map(String::as_str))
            .collect()
    }

    pub fn is_competitive(&self, bucket: &str) -> bool {
        matches_fragment(bucket, &self.competitive_buckets)
    }

    pub fn is_vocational(&self, bucket: &str) -> bool {
        matches_fragment(bucket, &self.vocational_buckets)
    }
}

pub(crate) fn matches_fragment(bucket: &str, fragments: &[String]) -> bool {
    let bucket = bucket.to_lowercase();
    fragments.iter().any(|f| bucket.contains(&f.to_lowercase()))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
