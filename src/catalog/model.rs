//! Content model for courses
//!
//! A catalog is an ordered list of courses, each an ordered list of lessons.
//! Progress counts are derived from the lesson flags rather than stored, so a
//! course can never report more completed lessons than it has.

use serde::{Deserialize, Serialize};

/// Top-level catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Courses in display order
    pub courses: Vec<Course>,
}

/// A named collection of ordered lessons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Short summary shown on the course card
    #[serde(default)]
    pub description: String,
    /// Icon tag (e.g. "code", "database"); unknown tags render a default glyph
    #[serde(default)]
    pub icon: String,
    /// Color tag (e.g. "blue", "green"); unknown tags render the theme accent
    #[serde(default)]
    pub color: String,
    /// Lessons in order
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl Course {
    /// Create an empty course
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            icon: String::new(),
            color: String::new(),
            lessons: Vec::new(),
        }
    }

    /// Number of lessons in the course
    pub fn total_lessons(&self) -> usize {
        self.lessons.len()
    }

    /// Number of lessons marked complete
    pub fn completed_lessons(&self) -> usize {
        self.lessons.iter().filter(|l| l.completed).count()
    }

    /// Find a lesson by id
    pub fn lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    /// Find a lesson by id, mutably
    pub fn lesson_mut(&mut self, lesson_id: &str) -> Option<&mut Lesson> {
        self.lessons.iter_mut().find(|l| l.id == lesson_id)
    }

    /// Position of a lesson in the sequence
    pub fn lesson_index(&self, lesson_id: &str) -> Option<usize> {
        self.lessons.iter().position(|l| l.id == lesson_id)
    }
}

/// Difficulty tag for a lesson
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    /// Anything the catalog spells differently
    #[default]
    #[serde(other)]
    Unrated,
}

impl Difficulty {
    /// Label used in lesson cards and the tracker
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Unrated => "unrated",
        }
    }
}

/// A unit of paged content with an optional quiz
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique identifier within the course
    pub id: String,
    /// Display title
    pub title: String,
    /// Short summary
    #[serde(default)]
    pub description: String,
    /// Difficulty tag
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Human-readable duration label (e.g. "15 min")
    #[serde(default)]
    pub duration: String,
    /// Markdown pages shown one at a time
    #[serde(default)]
    pub content: Vec<String>,
    /// Single-question check at the end of the lesson
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
    /// Whether the lesson has been completed
    #[serde(default)]
    pub completed: bool,
}

impl Lesson {
    /// Create a lesson with no content
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            difficulty: Difficulty::default(),
            duration: String::new(),
            content: Vec::new(),
            quiz: None,
            completed: false,
        }
    }

    /// The attached quiz, if it is usable
    ///
    /// A quiz without options, or whose correct index points past the
    /// options, is treated as absent.
    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref().filter(|q| q.is_usable())
    }

    /// Number of reader pages; a lesson always has at least one
    pub fn page_count(&self) -> usize {
        self.content.len().max(1)
    }

    /// Content of a page, empty when out of range
    pub fn page(&self, index: usize) -> &str {
        self.content.get(index).map(String::as_str).unwrap_or("")
    }
}

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Question text
    pub question: String,
    /// Answer options in display order
    #[serde(default)]
    pub options: Vec<String>,
    /// Index of the correct option
    #[serde(default)]
    pub correct: usize,
    /// Shown once an option is chosen
    #[serde(default)]
    pub explanation: String,
}

impl Quiz {
    fn is_usable(&self) -> bool {
        self.correct < self.options.len()
    }

    /// Whether the given option is the correct one
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &str, completed: bool) -> Lesson {
        Lesson { completed, ..Lesson::new(id, id.to_uppercase()) }
    }

    #[test]
    fn counts_follow_lesson_flags() {
        let mut course = Course::new("rust", "Rust");
        course.lessons = vec![lesson("a", true), lesson("b", false), lesson("c", true)];

        assert_eq!(course.total_lessons(), 3);
        assert_eq!(course.completed_lessons(), 2);
    }

    #[test]
    fn lesson_lookup_by_id() {
        let mut course = Course::new("rust", "Rust");
        course.lessons = vec![lesson("a", false), lesson("b", false)];

        assert_eq!(course.lesson("b").map(|l| l.title.as_str()), Some("B"));
        assert_eq!(course.lesson_index("b"), Some(1));
        assert!(course.lesson("zzz").is_none());
    }

    #[test]
    fn unknown_difficulty_reads_as_unrated() {
        let json = r#"{"id":"x","title":"X","difficulty":"legendary"}"#;
        let lesson: Lesson = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.difficulty, Difficulty::Unrated);
    }

    #[test]
    fn known_difficulty_parses() {
        let json = r#"{"id":"x","title":"X","difficulty":"advanced"}"#;
        let lesson: Lesson = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.difficulty, Difficulty::Advanced);
    }

    #[test]
    fn quiz_without_options_is_absent() {
        let mut l = lesson("a", false);
        l.quiz = Some(Quiz {
            question: "?".into(),
            options: vec![],
            correct: 0,
            explanation: String::new(),
        });
        assert!(l.quiz().is_none());
    }

    #[test]
    fn quiz_with_out_of_range_answer_is_absent() {
        let mut l = lesson("a", false);
        l.quiz = Some(Quiz {
            question: "?".into(),
            options: vec!["yes".into(), "no".into()],
            correct: 5,
            explanation: String::new(),
        });
        assert!(l.quiz().is_none());
    }

    #[test]
    fn quiz_explanation_defaults_to_empty() {
        let json = r#"{"question":"Q","options":["a","b"],"correct":1}"#;
        let quiz: Quiz = serde_json::from_str(json).unwrap();
        assert!(quiz.explanation.is_empty());
        assert!(quiz.is_correct(1));
    }

    #[test]
    fn empty_lesson_still_has_one_page() {
        let l = lesson("a", false);
        assert_eq!(l.page_count(), 1);
        assert_eq!(l.page(0), "");
    }
}
