use serde::{Deserialize, Serialize};

use crate::models::personality::{parse_riasec_profile, Riasec};

/// A list-valued catalog field. Catalog exports carry these either as real
/// JSON arrays or as strings like `"[\"Mathematics\",\"Physics\"]"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListField {
    List(Vec<String>),
    Encoded(String),
}

impl Default for ListField {
    fn default() -> Self {
        ListField::List(vec![])
    }
}

impl ListField {
    pub fn into_items(self) -> Vec<String> {
        match self {
            ListField::List(items) => items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            ListField::Encoded(raw) => parse_encoded_list(&raw),
        }
    }
}

/// Splits a bracketed / quoted / comma-separated string into trimmed items.
/// Empty fragments are dropped rather than rejected.
pub fn parse_encoded_list(raw: &str) -> Vec<String> {
    raw.replace(['[', ']', '"'], "")
        .split([',', ';', '|'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Raw catalog entry as it appears in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct CareerRecord {
    pub career_id: String,
    pub career_name: String,
    pub bucket: String,
    #[serde(default)]
    pub riasec_profile: String,
    #[serde(default)]
    pub primary_subjects: ListField,
    #[serde(default)]
    pub tags: ListField,
    #[serde(default)]
    pub min_qualification: String,
    #[serde(default, alias = "top5_college_courses")]
    pub study_paths: ListField,
    #[serde(default, alias = "base_paragraph")]
    pub description: String,
}

/// Parsed, read-only catalog entry. String-encoded fields are split once here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerDefinition {
    pub career_id: String,
    pub career_name: String,
    pub bucket: String,
    pub riasec_profile: Vec<Riasec>,
    pub primary_subjects: Vec<String>,
    pub tags: Vec<String>,
    pub min_qualification: String,
    pub study_paths: Vec<String>,
    pub description: String,
}

impl From<CareerRecord> for CareerDefinition {
    fn from(record: CareerRecord) -> Self {
        CareerDefinition {
            career_id: record.career_id.trim().to_string(),
            career_name: record.career_name.trim().to_string(),
            bucket: record.bucket.trim().to_string(),
            riasec_profile: parse_riasec_profile(&record.riasec_profile),
            primary_subjects: record.primary_subjects.into_items(),
            tags: record.tags.into_items(),
            min_qualification: record.min_qualification.trim().to_string(),
            study_paths: record.study_paths.into_items(),
            description: record.description.trim().to_string(),
        }
    }
}

impl CareerDefinition {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// True when `activity` and any tag contain one another (case-insensitive).
    pub fn tag_overlaps(&self, activity: &str) -> bool {
        let activity = activity.trim().to_lowercase();
        if activity.is_empty() {
            return false;
        }
        self.tags.iter().any(|tag| {
            let tag = tag.to_lowercase();
            activity.contains(&tag) || tag.contains(&activity)
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn career(id: &str, name: &str, bucket: &str, profile: &str) -> CareerDefinition {
        CareerDefinition {
            career_id: id.to_string(),
            career_name: name.to_string(),
            bucket: bucket.to_string(),
            riasec_profile: parse_riasec_profile(profile),
            primary_subjects: vec![],
            tags: vec![],
            min_qualification: String::new(),
            study_paths: vec![],
            description: String::new(),
        }
    }

    pub fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encoded_forms_parse_identically() {
        let expected = vec!["Mathematics".to_string(), "Physics".to_string()];
        assert_eq!(parse_encoded_list("[\"Mathematics\",\"Physics\"]"), expected);
        assert_eq!(parse_encoded_list("Mathematics, Physics"), expected);
        assert_eq!(parse_encoded_list(" Mathematics ;Physics,, "), expected);
        assert!(parse_encoded_list("[]").is_empty());
    }

    #[test]
    fn test_record_accepts_arrays_and_strings() {
        let record: CareerRecord = serde_json::from_value(json!({
            "career_id": "c010",
            "career_name": "Data Scientist",
            "bucket": "Data AI & Analytics",
            "riasec_profile": "IA",
            "primary_subjects": "[\"Mathematics\",\"Statistics\"]",
            "tags": ["data", " new_age "],
            "top5_college_courses": "B.Sc Statistics,B.Tech CS (AI),B.Stat,BCA"
        }))
        .unwrap();
        let career = CareerDefinition::from(record);

        assert_eq!(career.riasec_profile, vec![Riasec::I, Riasec::A]);
        assert_eq!(career.primary_subjects, vec!["Mathematics", "Statistics"]);
        assert_eq!(career.tags, vec!["data", "new_age"]);
        assert_eq!(career.study_paths.len(), 4);
        assert!(career.has_tag("NEW_AGE"));
    }

    #[test]
    fn test_tag_overlap_works_both_ways() {
        let mut career = fixtures::career("c1", "Robotics Engineer", "Engineering", "R");
        career.tags = fixtures::strings(&["robotics", "engineering"]);
        assert!(career.tag_overlaps("Robotics Club"));
        assert!(career.tag_overlaps("robot"));
        assert!(!career.tag_overlaps("Debate"));
        assert!(!career.tag_overlaps("  "));
    }
}
