//! Course card component

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::icons;
use crate::catalog::{Course, Lesson};
use crate::learning::{CourseStats, next_lesson};
use crate::store::StoreEvent;
use crate::theme::Theme;

/// Height of one card including borders
pub const CARD_HEIGHT: u16 = 6;

/// Summary card for one course
///
/// Stats and the next-lesson lookup are computed once when the card is built.
#[derive(Debug, Clone)]
pub struct CourseCard<'a> {
    course: &'a Course,
    stats: CourseStats,
    next: Option<&'a Lesson>,
}

impl<'a> CourseCard<'a> {
    /// Build a card for a course
    pub fn new(course: &'a Course) -> Self {
        Self { course, stats: CourseStats::of(course), next: next_lesson(course) }
    }

    pub fn course(&self) -> &'a Course {
        self.course
    }

    /// Completion percentage (0 for an empty course)
    pub fn percent(&self) -> u16 {
        self.stats.percent
    }

    /// Whether every lesson is complete
    pub fn is_complete(&self) -> bool {
        self.stats.is_complete
    }

    /// First incomplete lesson
    pub fn next_lesson(&self) -> Option<&'a Lesson> {
        self.next
    }

    /// Card activation: ask the store to select this course
    pub fn activate(&self) -> StoreEvent {
        StoreEvent::SelectCourse(self.course.id.clone())
    }

    /// Text of the hint line below the progress bar
    pub fn hint(&self) -> String {
        match self.next {
            Some(lesson) => format!("Next: {}", lesson.title),
            None if self.is_complete() && self.stats.total > 0 => "Course complete".to_string(),
            None => "No lessons yet".to_string(),
        }
    }

    /// Draw the card
    pub fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme, selected: bool) {
        let accent = theme.tag_color(&self.course.color);
        let border_color = if selected { accent } else { theme.border };

        let background = if selected { theme.bg_secondary } else { theme.bg_primary };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(background));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 4 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", icons::course_icon(&self.course.icon)),
                Style::default().fg(accent),
            ),
            Span::styled(
                self.course.title.clone(),
                Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}/{} lessons", self.stats.completed, self.stats.total),
                Style::default().fg(theme.fg_muted),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), rows[0]);

        let description = Paragraph::new(Line::from(Span::styled(
            format!("   {}", self.course.description),
            Style::default().fg(theme.fg_primary),
        )));
        frame.render_widget(description, rows[1]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(accent).bg(theme.bg_tertiary))
            .percent(self.stats.percent)
            .label(format!("{}%", self.stats.percent));
        frame.render_widget(gauge, indent(rows[2], 3));

        let hint_style = if self.is_complete() {
            Style::default().fg(theme.success)
        } else {
            Style::default().fg(theme.fg_muted)
        };
        let mut hint = vec![Span::styled(format!("   {}", self.hint()), hint_style)];
        if selected {
            let action = if self.is_complete() { "  [Enter] Review" } else { "  [Enter] Continue" };
            hint.push(Span::styled(action, Style::default().fg(accent)));
        }
        frame.render_widget(Paragraph::new(Line::from(hint)), rows[3]);
    }
}

/// Shrink a row from both sides
fn indent(area: Rect, by: u16) -> Rect {
    let by = by.min(area.width / 2);
    Rect { x: area.x + by, width: area.width - by * 2, ..area }
}
