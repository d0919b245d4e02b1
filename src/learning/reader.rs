//! Lesson reader state machine
//!
//! A reader walks forward through a lesson's pages, then through its quiz if
//! it has one:
//!
//! ```text
//! Paging(0) -> ... -> Paging(last) -> QuizPending -> QuizAnswered(i) -> Completed
//! Paging(last) -> Completed                         (no quiz)
//! ```
//!
//! There are no backward transitions. The state is transient: it is reset
//! every time a lesson is opened and never persisted.

use crate::catalog::Lesson;

/// Where the reader is in a lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderPhase {
    /// Showing the page at this index
    Paging(usize),
    /// Quiz shown, no answer yet
    QuizPending,
    /// Quiz answered with this option; explanation shown
    QuizAnswered(usize),
    /// Lesson finished; the caller should mark it complete
    Completed,
}

/// How a quiz option should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// No answer revealed yet, or an uninvolved option
    Plain,
    /// The correct option, once an answer is in
    Correct,
    /// The chosen option when it was wrong
    Rejected,
}

/// Transient reader state for the selected lesson
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonReader {
    phase: ReaderPhase,
    /// Option under the cursor while the quiz is pending
    highlighted: usize,
}

impl Default for LessonReader {
    fn default() -> Self {
        Self { phase: ReaderPhase::Paging(0), highlighted: 0 }
    }
}

impl LessonReader {
    /// A reader on the first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first page with the quiz hidden
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current phase
    pub fn phase(&self) -> ReaderPhase {
        self.phase
    }

    /// Current page index while paging
    pub fn page(&self) -> Option<usize> {
        match self.phase {
            ReaderPhase::Paging(page) => Some(page),
            _ => None,
        }
    }

    /// Whether the quiz panel is visible
    pub fn quiz_visible(&self) -> bool {
        matches!(self.phase, ReaderPhase::QuizPending | ReaderPhase::QuizAnswered(_))
    }

    /// The chosen option, once answered
    pub fn answer(&self) -> Option<usize> {
        match self.phase {
            ReaderPhase::QuizAnswered(option) => Some(option),
            _ => None,
        }
    }

    /// Whether the explanation is visible
    pub fn explanation_visible(&self) -> bool {
        self.answer().is_some()
    }

    /// Whether the reader has finished the lesson
    pub fn is_completed(&self) -> bool {
        self.phase == ReaderPhase::Completed
    }

    /// Highlighted option while the quiz is pending
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// The "Next" action
    ///
    /// Moves one page forward. On the last page it opens the quiz, or
    /// completes the lesson when there is none. After the quiz has been
    /// answered it completes the lesson. Pending quizzes need an answer
    /// first, so `advance` does nothing there.
    pub fn advance(&mut self, lesson: &Lesson) -> ReaderPhase {
        self.phase = match self.phase {
            ReaderPhase::Paging(page) if page + 1 < lesson.page_count() => {
                ReaderPhase::Paging(page + 1)
            }
            ReaderPhase::Paging(_) if lesson.quiz().is_some() => {
                self.highlighted = 0;
                ReaderPhase::QuizPending
            }
            ReaderPhase::Paging(_) | ReaderPhase::QuizAnswered(_) => ReaderPhase::Completed,
            phase @ (ReaderPhase::QuizPending | ReaderPhase::Completed) => phase,
        };
        self.phase
    }

    /// Choose a quiz option
    ///
    /// Only the first choice counts: once the explanation is showing, or
    /// outside the quiz, this returns false and changes nothing.
    pub fn choose(&mut self, lesson: &Lesson, option: usize) -> bool {
        let Some(quiz) = lesson.quiz() else {
            return false;
        };
        if self.phase != ReaderPhase::QuizPending || option >= quiz.options.len() {
            return false;
        }
        self.phase = ReaderPhase::QuizAnswered(option);
        self.highlighted = option;
        true
    }

    /// Choose whichever option is highlighted
    pub fn choose_highlighted(&mut self, lesson: &Lesson) -> bool {
        self.choose(lesson, self.highlighted)
    }

    /// Move the highlight down, stopping at the last option
    pub fn highlight_next(&mut self, lesson: &Lesson) {
        let Some(quiz) = lesson.quiz() else { return };
        if self.phase == ReaderPhase::QuizPending && self.highlighted + 1 < quiz.options.len() {
            self.highlighted += 1;
        }
    }

    /// Move the highlight up, stopping at the first option
    pub fn highlight_prev(&mut self) {
        if self.phase == ReaderPhase::QuizPending {
            self.highlighted = self.highlighted.saturating_sub(1);
        }
    }

    /// Mark to draw next to an option
    pub fn option_mark(&self, lesson: &Lesson, option: usize) -> OptionMark {
        let (Some(chosen), Some(quiz)) = (self.answer(), lesson.quiz()) else {
            return OptionMark::Plain;
        };
        if quiz.is_correct(option) {
            OptionMark::Correct
        } else if option == chosen {
            OptionMark::Rejected
        } else {
            OptionMark::Plain
        }
    }

    /// Whether the chosen answer was right
    pub fn answered_correctly(&self, lesson: &Lesson) -> Option<bool> {
        let chosen = self.answer()?;
        lesson.quiz().map(|quiz| quiz.is_correct(chosen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Quiz;

    fn lesson(pages: usize, with_quiz: bool) -> Lesson {
        let mut lesson = Lesson::new("l", "Lesson");
        lesson.content = (0..pages).map(|i| format!("page {i}")).collect();
        if with_quiz {
            lesson.quiz = Some(Quiz {
                question: "Pick".into(),
                options: vec!["zero".into(), "one".into(), "two".into()],
                correct: 2,
                explanation: "Two it is".into(),
            });
        }
        lesson
    }

    #[test]
    fn starts_on_first_page() {
        let reader = LessonReader::new();
        assert_eq!(reader.phase(), ReaderPhase::Paging(0));
        assert!(!reader.quiz_visible());
        assert!(!reader.explanation_visible());
    }

    #[test]
    fn pages_forward_then_opens_quiz() {
        let lesson = lesson(3, true);
        let mut reader = LessonReader::new();

        assert_eq!(reader.advance(&lesson), ReaderPhase::Paging(1));
        assert_eq!(reader.advance(&lesson), ReaderPhase::Paging(2));
        assert_eq!(reader.advance(&lesson), ReaderPhase::QuizPending);
        assert!(reader.quiz_visible());
    }

    #[test]
    fn last_page_without_quiz_completes_directly() {
        let lesson = lesson(2, false);
        let mut reader = LessonReader::new();

        reader.advance(&lesson);
        assert_eq!(reader.advance(&lesson), ReaderPhase::Completed);
        assert!(reader.is_completed());
        assert!(!reader.quiz_visible());
    }

    #[test]
    fn empty_lesson_completes_on_first_next() {
        let lesson = lesson(0, false);
        let mut reader = LessonReader::new();
        assert_eq!(reader.advance(&lesson), ReaderPhase::Completed);
    }

    #[test]
    fn pending_quiz_needs_an_answer() {
        let lesson = lesson(1, true);
        let mut reader = LessonReader::new();
        reader.advance(&lesson);

        assert_eq!(reader.advance(&lesson), ReaderPhase::QuizPending);
    }

    #[test]
    fn correct_answer_marks_only_that_option() {
        let lesson = lesson(1, true);
        let mut reader = LessonReader::new();
        reader.advance(&lesson);

        assert!(reader.choose(&lesson, 2));
        assert!(reader.explanation_visible());
        assert_eq!(reader.answered_correctly(&lesson), Some(true));
        assert_eq!(reader.option_mark(&lesson, 2), OptionMark::Correct);
        assert_eq!(reader.option_mark(&lesson, 0), OptionMark::Plain);
    }

    #[test]
    fn wrong_answer_keeps_correct_marker() {
        let lesson = lesson(1, true);
        let mut reader = LessonReader::new();
        reader.advance(&lesson);

        assert!(reader.choose(&lesson, 0));
        assert_eq!(reader.answered_correctly(&lesson), Some(false));
        assert_eq!(reader.option_mark(&lesson, 2), OptionMark::Correct);
        assert_eq!(reader.option_mark(&lesson, 0), OptionMark::Rejected);
        assert_eq!(reader.option_mark(&lesson, 1), OptionMark::Plain);
    }

    #[test]
    fn later_choices_are_ignored() {
        let lesson = lesson(1, true);
        let mut reader = LessonReader::new();
        reader.advance(&lesson);
        reader.choose(&lesson, 0);

        assert!(!reader.choose(&lesson, 2));
        assert_eq!(reader.answer(), Some(0));
    }

    #[test]
    fn choosing_outside_the_quiz_does_nothing() {
        let lesson = lesson(2, true);
        let mut reader = LessonReader::new();

        assert!(!reader.choose(&lesson, 1));
        assert_eq!(reader.phase(), ReaderPhase::Paging(0));
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let lesson = lesson(1, true);
        let mut reader = LessonReader::new();
        reader.advance(&lesson);

        assert!(!reader.choose(&lesson, 7));
        assert_eq!(reader.phase(), ReaderPhase::QuizPending);
    }

    #[test]
    fn answered_quiz_completes_on_next() {
        let lesson = lesson(1, true);
        let mut reader = LessonReader::new();
        reader.advance(&lesson);
        reader.choose(&lesson, 1);

        assert_eq!(reader.advance(&lesson), ReaderPhase::Completed);
    }

    #[test]
    fn highlight_is_clamped() {
        let lesson = lesson(1, true);
        let mut reader = LessonReader::new();
        reader.advance(&lesson);

        reader.highlight_prev();
        assert_eq!(reader.highlighted(), 0);
        for _ in 0..5 {
            reader.highlight_next(&lesson);
        }
        assert_eq!(reader.highlighted(), 2);
        assert!(reader.choose_highlighted(&lesson));
        assert_eq!(reader.answered_correctly(&lesson), Some(true));
    }

    #[test]
    fn reset_returns_to_first_page() {
        let lesson = lesson(1, true);
        let mut reader = LessonReader::new();
        reader.advance(&lesson);
        reader.choose(&lesson, 0);

        reader.reset();
        assert_eq!(reader, LessonReader::new());
    }
}
