//! Quiz panel shown at the end of a lesson

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::catalog::{Lesson, Quiz};
use crate::learning::{LessonReader, OptionMark};
use crate::theme::Theme;

/// Draw the question, its options and, once answered, the explanation
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    lesson: &Lesson,
    quiz: &Quiz,
    reader: &LessonReader,
    theme: &Theme,
) {
    let title = match reader.answered_correctly(lesson) {
        Some(true) => " Correct! ",
        Some(false) => " Not quite ",
        None => " Quiz ",
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            quiz.question.clone(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, option) in quiz.options.iter().enumerate() {
        lines.push(option_line(i, option, reader, lesson, theme));
    }

    if reader.explanation_visible() && !quiz.explanation.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            quiz.explanation.clone(),
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::ITALIC),
        )));
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}

fn option_line(
    index: usize,
    option: &str,
    reader: &LessonReader,
    lesson: &Lesson,
    theme: &Theme,
) -> Line<'static> {
    let letter = (b'A' + (index % 26) as u8) as char;
    let pending = reader.answer().is_none();
    let highlighted = pending && index == reader.highlighted();

    let (marker, style) = match reader.option_mark(lesson, index) {
        OptionMark::Correct => (
            "\u{2713}", // ✓
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        ),
        OptionMark::Rejected => (
            "\u{2717}", // ✗
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ),
        OptionMark::Plain if highlighted => (
            "\u{25CF}", // ●
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        ),
        OptionMark::Plain => (
            "\u{25CB}", // ○
            Style::default().fg(theme.fg_secondary),
        ),
    };

    Line::from(Span::styled(format!("  {} {}) {}", marker, letter, option), style))
}
