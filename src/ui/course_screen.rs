//! Course screen: progress tracker beside the lesson cards

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use super::layout::scroll_window;
use super::lesson_card::{CardMode, LessonCard, SUMMARY_HEIGHT};
use super::progress_tracker::ProgressTracker;
use crate::app::state::AppState;
use crate::catalog::Course;
use crate::config::Config;
use crate::store::Store;
use crate::theme::Theme;

/// Minimum width for the tracker panel
const TRACKER_MIN_WIDTH: u16 = 28;

/// Draw the selected course
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    store: &Store,
    config: &Config,
    theme: &Theme,
) {
    let Some(course) = store.selected_course() else {
        return;
    };

    let tracker_width = (area.width / 3).max(TRACKER_MIN_WIDTH).min(area.width);
    let [left, right] =
        Layout::horizontal([Constraint::Length(tracker_width), Constraint::Min(0)]).areas(area);

    ProgressTracker::new(course, config.minutes_per_lesson).draw(
        frame,
        left,
        theme,
        Some(state.lesson_index),
        config.sequential_unlock,
    );

    let reader_card = course
        .lessons
        .iter()
        .enumerate()
        .filter_map(|(i, _)| LessonCard::at(course, i, config.sequential_unlock))
        .find(|card| card.mode(store) == CardMode::Reader);

    match reader_card {
        Some(card) => card.draw_reader(frame, right, theme, &state.reader, state.page_scroll),
        None => draw_summaries(frame, right, state, course, config, theme),
    }
}

fn draw_summaries(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    course: &Course,
    config: &Config,
    theme: &Theme,
) {
    if course.lessons.is_empty() {
        let empty = Paragraph::new(" This course has no lessons yet.")
            .style(Style::default().fg(theme.fg_muted));
        frame.render_widget(empty, area);
        return;
    }

    let visible = (area.height / SUMMARY_HEIGHT) as usize;
    let first = scroll_window(state.lesson_index, course.lessons.len(), visible);

    for slot in 0..visible {
        let index = first + slot;
        let Some(card) = LessonCard::at(course, index, config.sequential_unlock) else {
            break;
        };
        let card_area = Rect {
            y: area.y + slot as u16 * SUMMARY_HEIGHT,
            height: SUMMARY_HEIGHT,
            ..area
        };
        card.draw_summary(frame, card_area, theme, index == state.lesson_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Lesson;
    use ratatui::{Terminal, backend::TestBackend};

    fn store() -> Store {
        let mut course = Course::new("rust", "Rust");
        let mut first = Lesson::new("own", "Ownership");
        first.content = vec!["Moves happen".into()];
        course.lessons = vec![first, Lesson::new("borrow", "Borrowing")];
        let mut store = Store::new(vec![course]);
        store.select_course("rust").unwrap();
        store
    }

    fn render(state: &AppState, store: &Store) -> String {
        let theme = Theme::default();
        let config = Config::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), state, store, &config, &theme))
            .unwrap();
        terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn shows_tracker_and_summaries() {
        let text = render(&AppState::default(), &store());
        assert!(text.contains("Progress"));
        assert!(text.contains("0 of 2 lessons complete"));
        assert!(text.contains("[Enter] Start"));
        assert!(text.contains("Borrowing"));
    }

    #[test]
    fn selected_lesson_shows_reader() {
        let mut store = store();
        store.select_lesson("own").unwrap();
        let text = render(&AppState::default(), &store);
        assert!(text.contains("Page 1 of 1"));
        assert!(text.contains("Moves happen"));
        assert!(!text.contains("[Enter] Start"));
    }
}
