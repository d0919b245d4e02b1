//! UI rendering components

pub mod catalog_screen;
pub mod command_line;
pub mod course_card;
pub mod course_screen;
pub mod icons;
pub mod layout;
pub mod lesson_card;
pub mod page;
pub mod progress_tracker;
pub mod quiz_panel;

pub use course_card::CourseCard;
pub use lesson_card::{CardMode, LessonCard};
pub use progress_tracker::ProgressTracker;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
};

use crate::app::state::{AppState, Screen};
use crate::config::Config;
use crate::store::Store;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState, store: &Store, config: &Config) {
    let theme = config.active_theme();

    let background = Block::default().style(Style::default().bg(theme.bg_primary));
    frame.render_widget(background, frame.area());

    let [main_area, command_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

    match Screen::of(store) {
        Screen::Catalog => catalog_screen::draw(frame, main_area, state, store, &theme),
        Screen::Course => course_screen::draw(frame, main_area, state, store, config, &theme),
    }

    command_line::draw(frame, command_area, &state.command_line, &theme);

    if state.show_help {
        layout::draw_help(frame, &theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::bundled_catalog;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(state: &AppState, store: &Store) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, state, store, &Config::default())).unwrap();
        terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn bundled_catalog_renders_on_both_screens() {
        let mut store = Store::from_catalog(bundled_catalog().unwrap());
        let state = AppState::default();

        let catalog = render(&state, &store);
        assert!(catalog.contains("Courses"));
        assert!(catalog.contains("Press : for commands"));

        let first = store.courses()[0].id.clone();
        store.select_course(&first).unwrap();
        let course = render(&state, &store);
        assert!(course.contains("Progress"));
    }

    #[test]
    fn help_overlay_is_drawn() {
        let store = Store::default();
        let state = AppState { show_help: true, ..Default::default() };
        assert!(render(&state, &store).contains("Press any key to close"));
    }
}
