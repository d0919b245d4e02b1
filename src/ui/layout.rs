//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::Theme;

/// Key bindings listed in the help overlay
const HELP_ROWS: &[(&str, &str)] = &[
    ("j / k", "Move down / up"),
    ("g / G", "First / last"),
    ("Enter", "Open, start, next page, answer"),
    ("l / n", "Next page"),
    ("1-9", "Answer the quiz"),
    ("d / u", "Scroll the page"),
    ("Esc", "Close reader, back to catalog"),
    (":", "Command line"),
    ("?", "This help"),
    ("", ""),
    (":open <id>", "Open a course"),
    (":back", "Step back"),
    (":q", "Quit"),
];

/// A rectangle centered in `r`, sized in percent of it
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// First item to show so that `selected` stays inside a window of `visible`
pub fn scroll_window(selected: usize, count: usize, visible: usize) -> usize {
    if visible == 0 || count <= visible {
        return 0;
    }
    let max_first = count - visible;
    selected.saturating_sub(visible - 1).min(max_first)
}

/// Draw the help overlay on top of the current screen
pub fn draw_help(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let mut lines: Vec<Line> = HELP_ROWS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<12}", key),
                    Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(theme.fg_primary)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Press any key to close",
        Style::default().fg(theme.fg_muted),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
