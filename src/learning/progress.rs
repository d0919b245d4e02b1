//! Derived course statistics

use crate::catalog::{Course, Lesson};

/// Completion percentage, rounded to the nearest whole number
///
/// A course without lessons is at 0%.
pub fn completion_percent(completed: usize, total: usize) -> u16 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    ((completed as f64 / total as f64) * 100.0).round() as u16
}

/// Summary numbers shown on a course card and the progress tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseStats {
    pub completed: usize,
    pub total: usize,
    pub percent: u16,
    pub is_complete: bool,
}

impl CourseStats {
    /// Compute stats for a course
    pub fn of(course: &Course) -> Self {
        let completed = course.completed_lessons();
        let total = course.total_lessons();
        Self {
            completed,
            total,
            percent: completion_percent(completed, total),
            is_complete: completed == total,
        }
    }

    /// Lessons still to do
    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }

    /// Estimated minutes left at a fixed duration per lesson, saturating at `u32::MAX`
    pub fn remaining_minutes(&self, minutes_per_lesson: u32) -> u32 {
        u32::try_from(self.remaining()).unwrap_or(u32::MAX).saturating_mul(minutes_per_lesson)
    }
}

/// First lesson in order that is not complete
pub fn next_lesson(course: &Course) -> Option<&Lesson> {
    course.lessons.iter().find(|l| !l.completed)
}

/// Whether a lesson is locked behind earlier incomplete lessons
pub fn is_locked(course: &Course, index: usize, sequential_unlock: bool) -> bool {
    sequential_unlock && course.lessons.iter().take(index).any(|l| !l.completed)
}

/// Format a minute count as "45 min" or "1h 30m"
pub fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}
