//! Catalog loading
//!
//! Courses come from a JSON file when one is configured, otherwise from the
//! catalog bundled into the binary.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::Catalog;

/// Catalog compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Errors raised while reading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid catalog JSON
    #[error("Failed to parse catalog {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the catalog from `path`, or the bundled one when no path is given
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .map_err(|source| CatalogError::Read { path: path.to_path_buf(), source })?;
            let catalog = parse_catalog(&contents, &path.display().to_string())?;
            tracing::info!(
                path = %path.display(),
                courses = catalog.courses.len(),
                "loaded catalog"
            );
            Ok(catalog)
        }
        None => bundled_catalog(),
    }
}

/// The catalog shipped with the binary
pub fn bundled_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog(BUNDLED_CATALOG, "bundled catalog")
}

/// Parse catalog JSON, dropping courses and lessons with repeated ids
pub fn parse_catalog(contents: &str, origin: &str) -> Result<Catalog, CatalogError> {
    let mut catalog: Catalog = serde_json::from_str(contents)
        .map_err(|source| CatalogError::Parse { origin: origin.to_string(), source })?;

    let mut seen_courses = HashSet::new();
    catalog.courses.retain(|course| {
        let fresh = seen_courses.insert(course.id.clone());
        if !fresh {
            tracing::warn!(course = %course.id, "skipping course with duplicate id");
        }
        fresh
    });

    for course in &mut catalog.courses {
        let mut seen_lessons = HashSet::new();
        let course_id = course.id.clone();
        course.lessons.retain(|lesson| {
            let fresh = seen_lessons.insert(lesson.id.clone());
            if !fresh {
                tracing::warn!(
                    course = %course_id,
                    lesson = %lesson.id,
                    "skipping lesson with duplicate id"
                );
            }
            fresh
        });
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_catalog_parses() {
        let catalog = bundled_catalog().unwrap();
        assert!(!catalog.courses.is_empty());
        assert!(catalog.courses.iter().all(|c| !c.lessons.is_empty()));
    }

    #[test]
    fn bundled_catalog_starts_with_nothing_complete() {
        let catalog = bundled_catalog().unwrap();
        assert!(catalog.courses.iter().all(|c| c.completed_lessons() == 0));
    }

    #[test]
    fn minimal_catalog_uses_defaults() {
        let json = r#"{"courses":[{"id":"c","title":"C","lessons":[{"id":"l","title":"L"}]}]}"#;
        let catalog = parse_catalog(json, "test").unwrap();
        let lesson = &catalog.courses[0].lessons[0];
        assert!(!lesson.completed);
        assert!(lesson.quiz.is_none());
        assert!(lesson.content.is_empty());
        assert!(catalog.courses[0].icon.is_empty());
    }

    #[test]
    fn duplicate_ids_are_dropped() {
        let json = r#"{"courses":[
            {"id":"c","title":"First","lessons":[{"id":"l","title":"A"},{"id":"l","title":"B"}]},
            {"id":"c","title":"Second"}
        ]}"#;
        let catalog = parse_catalog(json, "test").unwrap();
        assert_eq!(catalog.courses.len(), 1);
        assert_eq!(catalog.courses[0].title, "First");
        assert_eq!(catalog.courses[0].lessons.len(), 1);
        assert_eq!(catalog.courses[0].lessons[0].title, "A");
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse_catalog("{not json", "test").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"courses":[{{"id":"c","title":"From disk"}}]}}"#).unwrap();

        let catalog = load_catalog(Some(file.path())).unwrap();
        assert_eq!(catalog.courses[0].title, "From disk");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
