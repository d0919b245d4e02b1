//! Progress tracker panel

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::icons;
use crate::catalog::Course;
use crate::learning::{CourseStats, format_minutes, is_locked};
use crate::theme::Theme;

/// Completion statistics and lesson checklist for one course
#[derive(Debug, Clone)]
pub struct ProgressTracker<'a> {
    course: &'a Course,
    stats: CourseStats,
    minutes_per_lesson: u32,
}

impl<'a> ProgressTracker<'a> {
    pub fn new(course: &'a Course, minutes_per_lesson: u32) -> Self {
        Self { course, stats: CourseStats::of(course), minutes_per_lesson }
    }

    pub fn stats(&self) -> CourseStats {
        self.stats
    }

    /// Estimated minutes to finish the course
    pub fn remaining_minutes(&self) -> u32 {
        self.stats.remaining_minutes(self.minutes_per_lesson)
    }

    /// Summary lines, shared with the `progress` subcommand
    pub fn summary(&self) -> Vec<String> {
        vec![
            format!("{} of {} lessons complete", self.stats.completed, self.stats.total),
            format!("About {} remaining", format_minutes(self.remaining_minutes())),
        ]
    }

    /// Draw the tracker
    ///
    /// `current` is the index of the lesson under the cursor, if any.
    pub fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        current: Option<usize>,
        sequential_unlock: bool,
    ) {
        let accent = theme.tag_color(&self.course.color);

        let block = Block::default()
            .title(" Progress ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.bg_primary));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        let title = Line::from(vec![
            Span::styled(
                format!("{} ", icons::course_icon(&self.course.icon)),
                Style::default().fg(accent),
            ),
            Span::styled(
                self.course.title.clone(),
                Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), rows[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(accent).bg(theme.bg_tertiary))
            .percent(self.stats.percent)
            .label(format!("{}%", self.stats.percent));
        frame.render_widget(gauge, rows[2]);

        let summary: Vec<Line> = self
            .summary()
            .into_iter()
            .map(|s| Line::from(Span::styled(s, Style::default().fg(theme.fg_muted))))
            .collect();
        frame.render_widget(Paragraph::new(summary), rows[3]);

        let mut lines: Vec<Line> = Vec::new();
        for (index, lesson) in self.course.lessons.iter().enumerate() {
            let locked = is_locked(self.course, index, sequential_unlock);
            let status_style = if lesson.completed {
                Style::default().fg(theme.success)
            } else {
                Style::default().fg(theme.fg_muted)
            };
            let title_style = if current == Some(index) {
                Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg_secondary)
            };

            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", icons::lesson_status(lesson.completed, locked)),
                    status_style,
                ),
                Span::styled(lesson.title.clone(), title_style),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    lesson.difficulty.label(),
                    Style::default().fg(theme.difficulty_color(lesson.difficulty)),
                ),
                Span::styled(format!("  {}", lesson.duration), Style::default().fg(theme.fg_muted)),
            ]));
        }

        // Keep the cursor's lesson on screen
        let visible = rows[5].height as usize;
        let wanted = current.map(|i| i * 2 + 2).unwrap_or(0);
        let skip = wanted.saturating_sub(visible);
        let visible_lines: Vec<Line> = lines.into_iter().skip(skip).take(visible).collect();
        frame.render_widget(Paragraph::new(visible_lines), rows[5]);
    }
}
