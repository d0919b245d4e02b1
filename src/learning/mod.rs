//! Progress math and the lesson reader

pub mod progress;
pub mod reader;

pub use progress::{CourseStats, completion_percent, format_minutes, is_locked, next_lesson};
pub use reader::{LessonReader, OptionMark, ReaderPhase};
