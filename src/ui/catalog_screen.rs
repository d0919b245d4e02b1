//! Catalog screen: one card per course

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::course_card::{CARD_HEIGHT, CourseCard};
use super::layout::scroll_window;
use crate::app::state::AppState;
use crate::store::Store;
use crate::theme::Theme;

/// Draw the course list
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, store: &Store, theme: &Theme) {
    let [header, list] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

    let done = store.courses().iter().filter(|c| CourseCard::new(c).is_complete()).count();
    let title = Line::from(vec![
        Span::styled(
            " Courses",
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} of {} complete", done, store.courses().len()),
            Style::default().fg(theme.fg_muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), header);

    if store.courses().is_empty() {
        let empty = Paragraph::new(" The catalog has no courses.")
            .style(Style::default().fg(theme.fg_muted));
        frame.render_widget(empty, list);
        return;
    }

    let visible = (list.height / CARD_HEIGHT) as usize;
    let first = scroll_window(state.catalog_index, store.courses().len(), visible);

    for (slot, (index, course)) in
        store.courses().iter().enumerate().skip(first).take(visible).enumerate()
    {
        let card_area = Rect {
            y: list.y + slot as u16 * CARD_HEIGHT,
            height: CARD_HEIGHT,
            ..list
        };
        CourseCard::new(course).draw(frame, card_area, theme, index == state.catalog_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Course, Lesson};
    use ratatui::{Terminal, backend::TestBackend};

    fn store(count: usize) -> Store {
        let courses = (0..count)
            .map(|i| {
                let mut course = Course::new(format!("c{i}"), format!("Course {i}"));
                course.lessons.push(Lesson::new("l", "Lesson"));
                course
            })
            .collect();
        Store::new(courses)
    }

    fn render(state: &AppState, store: &Store, height: u16) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(60, height)).unwrap();
        terminal.draw(|frame| draw(frame, frame.area(), state, store, &theme)).unwrap();
        terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn lists_courses() {
        let text = render(&AppState::default(), &store(2), 20);
        assert!(text.contains("0 of 2 complete"));
        assert!(text.contains("Course 0"));
        assert!(text.contains("Course 1"));
    }

    #[test]
    fn scrolls_to_selection() {
        let state = AppState { catalog_index: 4, ..Default::default() };
        // Room for two cards
        let text = render(&state, &store(5), 2 + CARD_HEIGHT * 2);
        assert!(text.contains("Course 4"));
        assert!(!text.contains("Course 0"));
    }

    #[test]
    fn empty_catalog_message() {
        let text = render(&AppState::default(), &store(0), 10);
        assert!(text.contains("no courses"));
    }
}
