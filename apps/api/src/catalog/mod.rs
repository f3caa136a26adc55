//! Career catalog: loaded once at startup, read-only afterwards.
//!
//! Raw records may carry list fields as JSON arrays or as bracketed strings;
//! both are parsed here so scorers never re-parse per request.

pub mod handlers;

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::career::{CareerDefinition, CareerRecord};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate career_id '{0}' in catalog")]
    DuplicateId(String),
}

#[derive(Debug, Clone, Default)]
pub struct CareerCatalog {
    careers: Vec<CareerDefinition>,
}

impl CareerCatalog {
    /// Parses raw records, keeping file order. Duplicate ids are rejected.
    pub fn from_records(records: Vec<CareerRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut careers = Vec::with_capacity(records.len());
        for record in records {
            let career = CareerDefinition::from(record);
            if !seen.insert(career.career_id.clone()) {
                return Err(CatalogError::DuplicateId(career.career_id));
            }
            careers.push(career);
        }
        Ok(Self { careers })
    }

    /// Loads a JSON array of career records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let records: Vec<CareerRecord> = serde_json::from_str(&raw)?;
        let catalog = Self::from_records(records)?;
        info!(
            "Loaded {} careers in {} buckets from {}",
            catalog.len(),
            catalog.bucket_count(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn careers(&self) -> &[CareerDefinition] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    pub fn bucket_count(&self) -> usize {
        self.careers
            .iter()
            .map(|c| c.bucket.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn find(&self, career_id: &str) -> Option<&CareerDefinition> {
        self.careers.iter().find(|c| c.career_id == career_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG_JSON: &str = r#"[
        {
            "career_id": "c010",
            "career_name": "Data Scientist",
            "bucket": "Data AI & Analytics",
            "riasec_profile": "IA",
            "primary_subjects": "[\"Mathematics\",\"Computer Science\",\"Statistics\"]",
            "tags": "[\"data\",\"new_age\"]",
            "min_qualification": "B.Sc/B.Tech",
            "top5_college_courses": "B.Sc Statistics,B.Tech CS (AI),B.Stat",
            "base_paragraph": "Work on data to build models and find insights."
        },
        {
            "career_id": "c001",
            "career_name": "Mechanical Engineer",
            "bucket": "Engineering & Core Technology",
            "riasec_profile": "R",
            "primary_subjects": ["Mathematics", "Physics"],
            "tags": ["mechanical", "hands_on"]
        }
    ]"#;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_and_parses_catalog_file() {
        let file = write_temp(CATALOG_JSON);
        let catalog = CareerCatalog::from_json_file(file.path()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.bucket_count(), 2);
        assert_eq!(catalog.careers()[0].career_id, "c010");

        let ds = catalog.find("c010").unwrap();
        assert_eq!(ds.primary_subjects.len(), 3);
        assert_eq!(ds.study_paths, vec!["B.Sc Statistics", "B.Tech CS (AI)", "B.Stat"]);
        assert!(ds.description.starts_with("Work on data"));

        let me = catalog.find("c001").unwrap();
        assert!(me.study_paths.is_empty());
        assert_eq!(me.min_qualification, "");
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let file = write_temp("[]");
        let catalog = CareerCatalog::from_json_file(file.path()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let file = write_temp(
            r#"[{"career_id":"c1","career_name":"A","bucket":"X"},
               {"career_id":"c1","career_name":"B","bucket":"Y"}]"#,
        );
        assert!(matches!(
            CareerCatalog::from_json_file(file.path()),
            Err(CatalogError::DuplicateId(id)) if id == "c1"
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            CareerCatalog::from_json_file("/definitely/not/here.json"),
            Err(CatalogError::Io(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = write_temp("{ not json");
        assert!(matches!(
            CareerCatalog::from_json_file(file.path()),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_bundled_sample_catalog_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/careers.json");
        let catalog = CareerCatalog::from_json_file(path).unwrap();

        assert_eq!(catalog.len(), 7);
        let swe = catalog.find("c002").unwrap();
        assert_eq!(swe.primary_subjects, vec!["Mathematics", "Computer Science"]);
        assert_eq!(swe.tags, vec!["coding", "new_age"]);
        assert_eq!(swe.study_paths.len(), 3);
    }
}
