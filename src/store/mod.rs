//! Shared course store
//!
//! The store owns every course and the two selection pointers. Views read it
//! through `&Store` while drawing and change it through `&mut Store` from key
//! handlers; nothing else holds course state.

use thiserror::Error;

use crate::catalog::{Catalog, Course, Lesson};
use crate::config::progress::Progress;

/// Errors returned by store mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No course with this id
    #[error("Unknown course '{0}'")]
    UnknownCourse(String),

    /// A lesson was selected while no course was
    #[error("No course selected")]
    NoCourseSelected,

    /// The course has no lesson with this id
    #[error("Unknown lesson '{lesson_id}' in course '{course_id}'")]
    UnknownLesson { course_id: String, lesson_id: String },
}

/// A change requested by a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    SelectCourse(String),
    ClearCourse,
    SelectLesson(String),
    ClearLesson,
    MarkLessonComplete { course_id: String, lesson_id: String },
}

/// State container for courses and the current selection
#[derive(Debug, Default)]
pub struct Store {
    courses: Vec<Course>,
    selected_course: Option<String>,
    selected_lesson: Option<String>,
}

impl Store {
    /// Create a store holding the given courses, with nothing selected
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses, selected_course: None, selected_lesson: None }
    }

    /// Create a store from a loaded catalog
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::new(catalog.courses)
    }

    /// All courses in catalog order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by id
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Id of the selected course
    pub fn selected_course_id(&self) -> Option<&str> {
        self.selected_course.as_deref()
    }

    /// Id of the selected lesson
    pub fn selected_lesson_id(&self) -> Option<&str> {
        self.selected_lesson.as_deref()
    }

    /// The selected course, if it still exists
    pub fn selected_course(&self) -> Option<&Course> {
        self.selected_course.as_deref().and_then(|id| self.course(id))
    }

    /// The selected lesson within the selected course
    pub fn selected_lesson(&self) -> Option<&Lesson> {
        let lesson_id = self.selected_lesson.as_deref()?;
        self.selected_course()?.lesson(lesson_id)
    }

    /// Select a course; any lesson selection from another course is dropped
    pub fn select_course(&mut self, course_id: &str) -> Result<(), StoreError> {
        if self.course(course_id).is_none() {
            return Err(StoreError::UnknownCourse(course_id.to_string()));
        }
        if self.selected_course.as_deref() != Some(course_id) {
            self.selected_lesson = None;
        }
        tracing::debug!(course = course_id, "selected course");
        self.selected_course = Some(course_id.to_string());
        Ok(())
    }

    /// Clear the course selection, and with it the lesson selection
    pub fn clear_course(&mut self) {
        tracing::debug!("cleared course selection");
        self.selected_course = None;
        self.selected_lesson = None;
    }

    /// Select a lesson of the selected course
    pub fn select_lesson(&mut self, lesson_id: &str) -> Result<(), StoreError> {
        let course = self.selected_course().ok_or(StoreError::NoCourseSelected)?;
        if course.lesson(lesson_id).is_none() {
            return Err(StoreError::UnknownLesson {
                course_id: course.id.clone(),
                lesson_id: lesson_id.to_string(),
            });
        }
        tracing::debug!(lesson = lesson_id, "selected lesson");
        self.selected_lesson = Some(lesson_id.to_string());
        Ok(())
    }

    /// Clear the lesson selection
    pub fn clear_lesson(&mut self) {
        self.selected_lesson = None;
    }

    /// Mark a lesson complete
    ///
    /// Returns `Ok(true)` when the flag changed and `Ok(false)` when the
    /// lesson was already complete. The owning course's counts follow from
    /// the flag.
    pub fn mark_lesson_complete(
        &mut self,
        course_id: &str,
        lesson_id: &str,
    ) -> Result<bool, StoreError> {
        let course = self
            .courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| StoreError::UnknownCourse(course_id.to_string()))?;
        let lesson = course.lesson_mut(lesson_id).ok_or_else(|| StoreError::UnknownLesson {
            course_id: course_id.to_string(),
            lesson_id: lesson_id.to_string(),
        })?;

        if lesson.completed {
            return Ok(false);
        }
        lesson.completed = true;
        tracing::info!(
            course = course_id,
            lesson = lesson_id,
            completed = course.completed_lessons(),
            total = course.total_lessons(),
            "lesson completed"
        );
        Ok(true)
    }

    /// Apply an event from a view
    pub fn dispatch(&mut self, event: StoreEvent) -> Result<(), StoreError> {
        match event {
            StoreEvent::SelectCourse(id) => self.select_course(&id),
            StoreEvent::ClearCourse => {
                self.clear_course();
                Ok(())
            }
            StoreEvent::SelectLesson(id) => self.select_lesson(&id),
            StoreEvent::ClearLesson => {
                self.clear_lesson();
                Ok(())
            }
            StoreEvent::MarkLessonComplete { course_id, lesson_id } => {
                self.mark_lesson_complete(&course_id, &lesson_id).map(|_| ())
            }
        }
    }

    /// Replay saved completions; ids the catalog no longer has are ignored
    pub fn apply_progress(&mut self, progress: &Progress) {
        for course in &mut self.courses {
            let Some(saved) = progress.courses.get(&course.id) else {
                continue;
            };
            for lesson in &mut course.lessons {
                if saved.completed.contains(&lesson.id) {
                    lesson.completed = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> Store {
        let mut rust = Course::new("rust", "Rust");
        rust.lessons = vec![Lesson::new("a", "A"), Lesson::new("b", "B"), Lesson::new("c", "C")];
        let mut sql = Course::new("sql", "SQL");
        sql.lessons = vec![Lesson::new("select", "Select")];
        Store::new(vec![rust, sql])
    }

    #[test]
    fn starts_with_nothing_selected() {
        let store = test_store();
        assert!(store.selected_course().is_none());
        assert!(store.selected_lesson().is_none());
    }

    #[test]
    fn select_course_by_id() {
        let mut store = test_store();
        store.select_course("sql").unwrap();
        assert_eq!(store.selected_course().map(|c| c.title.as_str()), Some("SQL"));
    }

    #[test]
    fn select_unknown_course_fails() {
        let mut store = test_store();
        assert_eq!(
            store.select_course("nope"),
            Err(StoreError::UnknownCourse("nope".into()))
        );
        assert!(store.selected_course_id().is_none());
    }

    #[test]
    fn switching_course_drops_lesson_selection() {
        let mut store = test_store();
        store.select_course("rust").unwrap();
        store.select_lesson("b").unwrap();
        store.select_course("sql").unwrap();
        assert!(store.selected_lesson_id().is_none());
    }

    #[test]
    fn reselecting_same_course_keeps_lesson() {
        let mut store = test_store();
        store.select_course("rust").unwrap();
        store.select_lesson("b").unwrap();
        store.select_course("rust").unwrap();
        assert_eq!(store.selected_lesson_id(), Some("b"));
    }

    #[test]
    fn clearing_course_clears_lesson() {
        let mut store = test_store();
        store.select_course("rust").unwrap();
        store.select_lesson("a").unwrap();
        store.clear_course();
        assert!(store.selected_course_id().is_none());
        assert!(store.selected_lesson_id().is_none());
    }

    #[test]
    fn lesson_needs_a_selected_course() {
        let mut store = test_store();
        assert_eq!(store.select_lesson("a"), Err(StoreError::NoCourseSelected));
    }

    #[test]
    fn lesson_must_belong_to_selected_course() {
        let mut store = test_store();
        store.select_course("sql").unwrap();
        assert!(matches!(store.select_lesson("a"), Err(StoreError::UnknownLesson { .. })));
    }

    #[test]
    fn mark_complete_updates_counts() {
        let mut store = test_store();
        assert_eq!(store.mark_lesson_complete("rust", "b"), Ok(true));

        let course = store.course("rust").unwrap();
        assert_eq!(course.completed_lessons(), 1);
        assert!(course.lesson("b").unwrap().completed);
    }

    #[test]
    fn mark_complete_twice_is_a_no_op() {
        let mut store = test_store();
        store.mark_lesson_complete("rust", "a").unwrap();
        assert_eq!(store.mark_lesson_complete("rust", "a"), Ok(false));
        assert_eq!(store.course("rust").unwrap().completed_lessons(), 1);
    }

    #[test]
    fn mark_complete_unknown_ids() {
        let mut store = test_store();
        assert!(matches!(
            store.mark_lesson_complete("nope", "a"),
            Err(StoreError::UnknownCourse(_))
        ));
        assert!(matches!(
            store.mark_lesson_complete("rust", "nope"),
            Err(StoreError::UnknownLesson { .. })
        ));
    }

    #[test]
    fn dispatch_routes_events() {
        let mut store = test_store();
        store.dispatch(StoreEvent::SelectCourse("rust".into())).unwrap();
        store.dispatch(StoreEvent::SelectLesson("c".into())).unwrap();
        assert_eq!(store.selected_lesson().map(|l| l.title.as_str()), Some("C"));

        store
            .dispatch(StoreEvent::MarkLessonComplete {
                course_id: "rust".into(),
                lesson_id: "c".into(),
            })
            .unwrap();
        store.dispatch(StoreEvent::ClearLesson).unwrap();

        assert!(store.selected_lesson_id().is_none());
        assert_eq!(store.selected_course_id(), Some("rust"));
        assert_eq!(store.course("rust").unwrap().completed_lessons(), 1);

        store.dispatch(StoreEvent::ClearCourse).unwrap();
        assert!(store.selected_course_id().is_none());
    }

    #[test]
    fn apply_progress_replays_known_lessons() {
        let mut progress = Progress::default();
        progress.record("rust", "a");
        progress.record("rust", "gone");
        progress.record("missing-course", "x");

        let mut store = test_store();
        store.apply_progress(&progress);

        let course = store.course("rust").unwrap();
        assert_eq!(course.completed_lessons(), 1);
        assert!(course.lesson("a").unwrap().completed);
        assert_eq!(store.course("sql").unwrap().completed_lessons(), 0);
    }
}
