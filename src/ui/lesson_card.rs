//! Lesson card component
//!
//! A lesson card is either a compact summary or, when its lesson is the
//! store's selected lesson, the paginated reader for that lesson.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{icons, page, quiz_panel};
use crate::catalog::{Course, Lesson};
use crate::learning::{LessonReader, ReaderPhase, is_locked};
use crate::store::{Store, StoreEvent};
use crate::theme::Theme;

/// Height of a summary card including borders
pub const SUMMARY_HEIGHT: u16 = 4;

/// Display mode of a lesson card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    Summary,
    Reader,
}

/// Card for one lesson of a course
#[derive(Debug, Clone)]
pub struct LessonCard<'a> {
    course: &'a Course,
    lesson: &'a Lesson,
    locked: bool,
}

impl<'a> LessonCard<'a> {
    /// Build a card for a lesson
    pub fn new(course: &'a Course, lesson: &'a Lesson, locked: bool) -> Self {
        Self { course, lesson, locked }
    }

    /// Build a card for the lesson at `index`, applying the lock policy
    pub fn at(course: &'a Course, index: usize, sequential_unlock: bool) -> Option<Self> {
        let lesson = course.lessons.get(index)?;
        Some(Self::new(course, lesson, is_locked(course, index, sequential_unlock)))
    }

    pub fn lesson(&self) -> &'a Lesson {
        self.lesson
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Reader mode when this lesson is the selected one
    pub fn mode(&self, store: &Store) -> CardMode {
        let selected = store.selected_course_id() == Some(self.course.id.as_str())
            && store.selected_lesson_id() == Some(self.lesson.id.as_str());
        if selected { CardMode::Reader } else { CardMode::Summary }
    }

    /// Label of the summary action; locked cards have none
    pub fn action_label(&self) -> Option<&'static str> {
        if self.locked {
            None
        } else if self.lesson.completed {
            Some("Review")
        } else {
            Some("Start")
        }
    }

    /// "Start"/"Review": select the lesson and reset the reader
    ///
    /// Locked cards ignore activation.
    pub fn activate(&self, reader: &mut LessonReader) -> Option<StoreEvent> {
        if self.locked {
            return None;
        }
        reader.reset();
        Some(StoreEvent::SelectLesson(self.lesson.id.clone()))
    }

    /// Events that finish the lesson once the reader reaches `Completed`
    pub fn completion(&self, reader: &LessonReader) -> Vec<StoreEvent> {
        if !reader.is_completed() {
            return Vec::new();
        }
        vec![
            StoreEvent::MarkLessonComplete {
                course_id: self.course.id.clone(),
                lesson_id: self.lesson.id.clone(),
            },
            StoreEvent::ClearLesson,
        ]
    }

    /// Draw the compact summary
    pub fn draw_summary(&self, frame: &mut Frame, area: Rect, theme: &Theme, highlighted: bool) {
        let border_color = if highlighted { theme.border_focused } else { theme.border };
        let background = if highlighted { theme.bg_secondary } else { theme.bg_primary };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(background));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let status_style = if self.lesson.completed {
            Style::default().fg(theme.success)
        } else {
            Style::default().fg(theme.fg_muted)
        };
        let title_style = if self.locked {
            Style::default().fg(theme.fg_muted)
        } else {
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD)
        };

        let mut first = vec![
            Span::styled(
                format!(" {} ", icons::lesson_status(self.lesson.completed, self.locked)),
                status_style,
            ),
            Span::styled(self.lesson.title.clone(), title_style),
            Span::raw("  "),
            difficulty_span(self.lesson, theme),
        ];
        if !self.lesson.duration.is_empty() {
            first.push(Span::styled(
                format!("  {}", self.lesson.duration),
                Style::default().fg(theme.fg_muted),
            ));
        }
        if let Some(label) = self.action_label() {
            if highlighted {
                first.push(Span::styled(
                    format!("  [Enter] {}", label),
                    Style::default().fg(theme.accent_primary),
                ));
            }
        }

        let second = Line::from(Span::styled(
            format!("   {}", self.lesson.description),
            Style::default().fg(theme.fg_primary),
        ));

        frame.render_widget(Paragraph::new(vec![Line::from(first), second]), inner);
    }

    /// Draw the reader for the current reader phase
    pub fn draw_reader(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        reader: &LessonReader,
        scroll: u16,
    ) {
        let block = Block::default()
            .title(format!(" {} ", self.lesson.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .style(Style::default().bg(theme.bg_primary));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows =
            Layout::vertical([Constraint::Length(2), Constraint::Min(1), Constraint::Length(1)])
                .split(inner);

        frame.render_widget(Paragraph::new(self.reader_header(reader, theme)), rows[0]);

        if reader.quiz_visible() {
            if let Some(quiz) = self.lesson.quiz() {
                quiz_panel::draw(frame, rows[1], self.lesson, quiz, reader, theme);
            }
        } else {
            let page_index = reader.page().unwrap_or(0);
            let lines =
                page::render_page(self.lesson.page(page_index), theme, rows[1].width as usize);
            let body = Paragraph::new(lines).wrap(Wrap { trim: false }).scroll((scroll, 0));
            frame.render_widget(body, rows[1]);
        }

        let hint = Line::from(Span::styled(
            self.reader_hint(reader),
            Style::default().fg(theme.fg_muted),
        ));
        frame.render_widget(Paragraph::new(hint), rows[2]);
    }

    fn reader_header(&self, reader: &LessonReader, theme: &Theme) -> Line<'static> {
        let position = match reader.phase() {
            ReaderPhase::Paging(page) => {
                format!("Page {} of {}", page + 1, self.lesson.page_count())
            }
            ReaderPhase::QuizPending | ReaderPhase::QuizAnswered(_) => "Quiz".to_string(),
            ReaderPhase::Completed => "Done".to_string(),
        };
        Line::from(vec![
            Span::styled(format!(" {}", position), Style::default().fg(theme.info)),
            Span::raw("  "),
            difficulty_span(self.lesson, theme),
            Span::styled(
                format!("  {}", self.lesson.duration),
                Style::default().fg(theme.fg_muted),
            ),
        ])
    }

    /// Key hint for the reader footer
    pub fn reader_hint(&self, reader: &LessonReader) -> String {
        let next = match reader.phase() {
            ReaderPhase::Paging(page) if page + 1 < self.lesson.page_count() => "[Enter] Next",
            ReaderPhase::Paging(_) if self.lesson.quiz().is_some() => "[Enter] Take quiz",
            ReaderPhase::Paging(_) => "[Enter] Complete lesson",
            ReaderPhase::QuizPending => "[j/k] Select  [Enter/1-9] Answer",
            ReaderPhase::QuizAnswered(_) => "[Enter] Complete lesson",
            ReaderPhase::Completed => "",
        };
        format!(" {}  [Esc] Close", next)
    }
}

fn difficulty_span(lesson: &Lesson, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!("[{}]", lesson.difficulty.label()),
        Style::default().fg(theme.difficulty_color(lesson.difficulty)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Quiz;
    use ratatui::{Terminal, backend::TestBackend};

    fn course() -> Course {
        let mut course = Course::new("rust", "Rust");
        let mut first = Lesson::new("ownership", "Ownership");
        first.content = vec!["# Moves\n\nValues move.".into(), "Second page".into()];
        first.quiz = Some(Quiz {
            question: "What happens on assignment?".into(),
            options: vec!["copy".into(), "clone".into(), "move".into()],
            correct: 2,
            explanation: "Strings move.".into(),
        });
        let mut second = Lesson::new("borrowing", "Borrowing");
        second.content = vec!["Only page".into()];
        course.lessons = vec![first, second];
        course
    }

    fn render(card: &LessonCard, reader: &LessonReader) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal
            .draw(|frame| card.draw_reader(frame, frame.area(), &theme, reader, 0))
            .unwrap();
        terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn action_label_depends_on_state() {
        let mut course = course();
        assert_eq!(LessonCard::at(&course, 0, false).unwrap().action_label(), Some("Start"));
        assert_eq!(LessonCard::at(&course, 1, true).unwrap().action_label(), None);

        course.lessons[0].completed = true;
        assert_eq!(LessonCard::at(&course, 0, false).unwrap().action_label(), Some("Review"));
        assert_eq!(LessonCard::at(&course, 1, true).unwrap().action_label(), Some("Start"));
    }

    #[test]
    fn activation_selects_and_resets_reader() {
        let course = course();
        let mut store = Store::new(vec![course.clone()]);
        store.select_course("rust").unwrap();

        let card = LessonCard::at(&course, 0, false).unwrap();
        let mut reader = LessonReader::new();
        reader.advance(card.lesson());
        assert_eq!(card.mode(&store), CardMode::Summary);

        let event = card.activate(&mut reader).unwrap();
        store.dispatch(event).unwrap();

        assert_eq!(reader, LessonReader::new());
        assert_eq!(card.mode(&store), CardMode::Reader);
        assert_eq!(LessonCard::at(&course, 1, false).unwrap().mode(&store), CardMode::Summary);
    }

    #[test]
    fn locked_card_ignores_activation() {
        let course = course();
        let card = LessonCard::at(&course, 1, true).unwrap();
        let mut reader = LessonReader::new();
        assert!(card.activate(&mut reader).is_none());
    }

    #[test]
    fn completion_only_after_reader_finishes() {
        let course = course();
        let card = LessonCard::at(&course, 1, false).unwrap();
        let mut reader = LessonReader::new();
        assert!(card.completion(&reader).is_empty());

        reader.advance(card.lesson());
        assert_eq!(
            card.completion(&reader),
            vec![
                StoreEvent::MarkLessonComplete {
                    course_id: "rust".into(),
                    lesson_id: "borrowing".into()
                },
                StoreEvent::ClearLesson,
            ]
        );
    }

    #[test]
    fn reader_shows_page_then_quiz() {
        let course = course();
        let card = LessonCard::at(&course, 0, false).unwrap();
        let mut reader = LessonReader::new();

        let first = render(&card, &reader);
        assert!(first.contains("Page 1 of 2"));
        assert!(first.contains("Values move."));

        reader.advance(card.lesson());
        reader.advance(card.lesson());
        let quiz = render(&card, &reader);
        assert!(quiz.contains("What happens on assignment?"));
        assert!(!quiz.contains("Strings move."));

        reader.choose(card.lesson(), 0);
        let answered = render(&card, &reader);
        assert!(answered.contains("Strings move."));
    }

    #[test]
    fn hint_changes_on_last_page() {
        let course = course();
        let card = LessonCard::at(&course, 1, false).unwrap();
        let reader = LessonReader::new();
        assert!(card.reader_hint(&reader).contains("Complete lesson"));
    }
}
