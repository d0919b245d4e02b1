//! Saved lesson completions
//!
//! The catalog is read-only, so completions are kept here and replayed into
//! the store on startup.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::Config;

/// Progress data for a single course
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseProgress {
    /// Ids of completed lessons
    pub completed: BTreeSet<String>,
}

/// All progress data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Progress per course
    pub courses: BTreeMap<String, CourseProgress>,
}

impl Progress {
    /// Load progress from disk
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::progress_path()?)
    }

    /// Load progress from a specific path; a missing file is empty progress
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read progress from {:?}", path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse progress.json")
        } else {
            Ok(Self::default())
        }
    }

    /// Save progress to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::progress_path()?)
    }

    /// Save progress to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize progress")?;

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write progress to {:?}", path))?;

        Ok(())
    }

    /// Get progress path
    pub fn progress_path() -> Result<PathBuf> {
        Ok(Config::data_dir()?.join("progress.json"))
    }

    /// Record a completed lesson; returns false if it was already recorded
    pub fn record(&mut self, course_id: &str, lesson_id: &str) -> bool {
        self.courses
            .entry(course_id.to_string())
            .or_default()
            .completed
            .insert(lesson_id.to_string())
    }

    /// Forget one course; returns whether anything was stored for it
    pub fn reset_course(&mut self, course_id: &str) -> bool {
        self.courses.remove(course_id).is_some()
    }

    /// Forget everything
    pub fn reset_all(&mut self) {
        self.courses.clear();
    }
}
