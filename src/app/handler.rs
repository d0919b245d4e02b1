//! Key handling
//!
//! Handlers mutate the app state and the store, and tell the loop when a
//! lesson was completed so the progress file can be updated.

use crossterm::event::{KeyCode, KeyModifiers};

use super::command::{Command, ParseResult, parse_command};
use super::input::{Action, key_with_modifier_to_action};
use super::state::{AppState, Screen};
use crate::config::Config;
use crate::learning::{ReaderPhase, next_lesson};
use crate::store::{Store, StoreEvent};
use crate::ui::{CourseCard, LessonCard};

/// Lines moved by a page scroll
const SCROLL_STEP: u16 = 10;

/// What the loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
    LessonCompleted { course_id: String, lesson_id: String },
}

/// Handle one key press
pub fn handle_key(
    state: &mut AppState,
    store: &mut Store,
    config: &Config,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> Outcome {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Outcome::Quit;
    }

    if state.command_line.is_input_mode() {
        return handle_command_key(state, store, code);
    }

    if state.show_help {
        state.show_help = false;
        return Outcome::Continue;
    }

    let Some(action) = key_with_modifier_to_action(code, modifiers) else {
        return Outcome::Continue;
    };

    match action {
        Action::Quit => return Outcome::Quit,
        Action::Help => {
            state.show_help = true;
            return Outcome::Continue;
        }
        Action::Command => {
            state.command_line.enter_command_mode();
            return Outcome::Continue;
        }
        _ => {}
    }

    let outcome = match Screen::of(store) {
        Screen::Catalog => {
            handle_catalog(state, store, action);
            Outcome::Continue
        }
        Screen::Course if store.selected_lesson().is_some() => handle_reader(state, store, action),
        Screen::Course => {
            handle_course(state, store, config, action);
            Outcome::Continue
        }
    };
    state.clamp_to(store);
    outcome
}

fn handle_catalog(state: &mut AppState, store: &mut Store, action: Action) {
    let count = store.courses().len();
    match action {
        Action::Down => {
            state.catalog_index = (state.catalog_index + 1).min(count.saturating_sub(1))
        }
        Action::Up => state.catalog_index = state.catalog_index.saturating_sub(1),
        Action::Top => state.catalog_index = 0,
        Action::Bottom => state.catalog_index = count.saturating_sub(1),
        Action::Select | Action::Next => {
            let Some(course) = store.courses().get(state.catalog_index) else {
                return;
            };
            let event = CourseCard::new(course).activate();
            apply(state, store, event);
            state.lesson_index = first_incomplete_index(store);
        }
        _ => {}
    }
}

fn handle_course(state: &mut AppState, store: &mut Store, config: &Config, action: Action) {
    let Some(course) = store.selected_course() else {
        return;
    };
    let count = course.lessons.len();
    match action {
        Action::Down => state.lesson_index = (state.lesson_index + 1).min(count.saturating_sub(1)),
        Action::Up => state.lesson_index = state.lesson_index.saturating_sub(1),
        Action::Top => state.lesson_index = 0,
        Action::Bottom => state.lesson_index = count.saturating_sub(1),
        Action::Select | Action::Next => {
            let Some(card) = LessonCard::at(course, state.lesson_index, config.sequential_unlock)
            else {
                return;
            };
            match card.activate(&mut state.reader) {
                Some(event) => {
                    state.page_scroll = 0;
                    apply(state, store, event);
                }
                None => state.command_line.set_error("Finish the earlier lessons first"),
            }
        }
        Action::Back => {
            store.clear_course();
            state.lesson_index = 0;
        }
        _ => {}
    }
}

fn handle_reader(state: &mut AppState, store: &mut Store, action: Action) -> Outcome {
    let (Some(course), Some(lesson)) = (store.selected_course(), store.selected_lesson()) else {
        return Outcome::Continue;
    };
    let quiz_pending = state.reader.phase() == ReaderPhase::QuizPending;

    match action {
        Action::Select if quiz_pending => {
            state.reader.choose_highlighted(lesson);
        }
        Action::Choose(option) => {
            state.reader.choose(lesson, option);
        }
        Action::Select | Action::Next if !quiz_pending => {
            state.reader.advance(lesson);
            state.page_scroll = 0;

            let Some(index) = course.lesson_index(&lesson.id) else {
                return Outcome::Continue;
            };
            let events = LessonCard::new(course, lesson, false).completion(&state.reader);
            if events.is_empty() {
                return Outcome::Continue;
            }

            let course_id = course.id.clone();
            let lesson_id = lesson.id.clone();
            state.command_line.set_message(format!("Completed: {}", lesson.title));
            for event in events {
                apply(state, store, event);
            }
            state.reader.reset();
            state.lesson_index = index;
            return Outcome::LessonCompleted { course_id, lesson_id };
        }
        Action::Down if quiz_pending => state.reader.highlight_next(lesson),
        Action::Up if quiz_pending => state.reader.highlight_prev(),
        Action::Down => state.page_scroll = state.page_scroll.saturating_add(1),
        Action::Up => state.page_scroll = state.page_scroll.saturating_sub(1),
        Action::ScrollDown => state.page_scroll = state.page_scroll.saturating_add(SCROLL_STEP),
        Action::ScrollUp => state.page_scroll = state.page_scroll.saturating_sub(SCROLL_STEP),
        Action::Top => state.page_scroll = 0,
        Action::Back => close_reader(state, store),
        _ => {}
    }
    Outcome::Continue
}

fn close_reader(state: &mut AppState, store: &mut Store) {
    state.reader.reset();
    state.page_scroll = 0;
    store.clear_lesson();
}

fn handle_command_key(state: &mut AppState, store: &mut Store, code: KeyCode) -> Outcome {
    let cl = &mut state.command_line;
    match code {
        KeyCode::Esc => cl.exit_input_mode(),
        KeyCode::Enter => {
            let input = cl.input.clone();
            cl.add_to_history(input.trim().to_string());
            cl.exit_input_mode();
            return execute(state, store, parse_command(&input));
        }
        KeyCode::Backspace if cl.input.is_empty() => cl.exit_input_mode(),
        KeyCode::Backspace => cl.delete_char(),
        KeyCode::Left => cl.move_left(),
        KeyCode::Right => cl.move_right(),
        KeyCode::Up => cl.history_up(),
        KeyCode::Down => cl.history_down(),
        KeyCode::Char(c) => cl.insert_char(c),
        _ => {}
    }
    Outcome::Continue
}

fn execute(state: &mut AppState, store: &mut Store, parsed: ParseResult) -> Outcome {
    let command = match parsed {
        ParseResult::Ok(command) => command,
        ParseResult::UnknownCommand(cmd) => {
            state.command_line.set_error(format!("Unknown command: {}", cmd));
            return Outcome::Continue;
        }
        ParseResult::MissingArgument(cmd) => {
            state.command_line.set_error(format!("Missing argument for :{}", cmd));
            return Outcome::Continue;
        }
    };

    match command {
        Command::Quit => return Outcome::Quit,
        Command::Nop => state.command_line.clear_message(),
        Command::Help => state.show_help = true,
        Command::Back => {
            if store.selected_lesson().is_some() {
                close_reader(state, store);
            } else {
                store.clear_course();
            }
        }
        Command::Open(course_id) => {
            let same_course = store.selected_course_id() == Some(course_id.as_str());
            match store.select_course(&course_id) {
                // Reopening the current course keeps the reader where it is
                Ok(()) if same_course => {}
                Ok(()) => {
                    state.reader.reset();
                    state.page_scroll = 0;
                    if let Some(index) = store.courses().iter().position(|c| c.id == course_id) {
                        state.catalog_index = index;
                    }
                    state.lesson_index = first_incomplete_index(store);
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    state.command_line.set_error(e.to_string());
                }
            }
        }
    }
    state.clamp_to(store);
    Outcome::Continue
}

/// Dispatch a view event, logging failures
fn apply(state: &mut AppState, store: &mut Store, event: StoreEvent) {
    if let Err(e) = store.dispatch(event) {
        tracing::warn!("{}", e);
        state.command_line.set_error(e.to_string());
    }
}

/// Index of the selected course's next lesson, or 0
fn first_incomplete_index(store: &Store) -> usize {
    store
        .selected_course()
        .and_then(|course| next_lesson(course).and_then(|l| course.lesson_index(&l.id)))
        .unwrap_or(0)
}
