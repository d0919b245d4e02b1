//! Application state definitions

use crate::learning::LessonReader;
use crate::store::Store;

/// Which screen is currently displayed
///
/// The screen follows from the store's selection: a selected course shows
/// the course screen, otherwise the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Catalog,
    Course,
}

impl Screen {
    pub fn of(store: &Store) -> Self {
        if store.selected_course().is_some() { Screen::Course } else { Screen::Catalog }
    }
}

/// Command line mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    /// Command line shows status or a hint
    #[default]
    Normal,
    /// Accepting `:` commands
    Command,
}

/// State for the command line input
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    /// Current mode
    pub mode: CommandMode,
    /// Input buffer
    pub input: String,
    /// Cursor position in input, in characters
    pub cursor: usize,
    /// Status/error message to display (when not in input mode)
    pub message: Option<String>,
    /// Whether message is an error
    pub is_error: bool,
    /// Command history
    pub history: Vec<String>,
    /// Current history index when navigating
    pub history_index: Option<usize>,
}

impl CommandLineState {
    /// Maximum number of history entries to keep
    const MAX_HISTORY: usize = 100;

    /// Start command mode
    pub fn enter_command_mode(&mut self) {
        self.mode = CommandMode::Command;
        self.input.clear();
        self.cursor = 0;
        self.message = None;
        self.history_index = None;
    }

    /// Exit input mode
    pub fn exit_input_mode(&mut self) {
        self.mode = CommandMode::Normal;
        self.input.clear();
        self.cursor = 0;
    }

    pub fn is_input_mode(&self) -> bool {
        self.mode == CommandMode::Command
    }

    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    pub fn clear_message(&mut self) {
        self.message = None;
        self.is_error = false;
    }

    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.input.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.input.len())
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.input.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.input.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Add to history, skipping repeats of the last entry
    pub fn add_to_history(&mut self, cmd: String) {
        if !cmd.is_empty() && self.history.last() != Some(&cmd) {
            if self.history.len() >= Self::MAX_HISTORY {
                self.history.remove(0);
            }
            self.history.push(cmd);
        }
    }

    /// Step back through history
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_index = Some(index);
        self.input = self.history[index].clone();
        self.cursor = self.char_count();
    }

    /// Step forward through history, ending on an empty line
    pub fn history_down(&mut self) {
        let Some(i) = self.history_index else {
            return;
        };
        if i + 1 < self.history.len() {
            self.history_index = Some(i + 1);
            self.input = self.history[i + 1].clone();
            self.cursor = self.char_count();
        } else {
            self.history_index = None;
            self.input.clear();
            self.cursor = 0;
        }
    }
}

/// Full application state outside the store
#[derive(Debug, Default)]
pub struct AppState {
    /// Highlighted course on the catalog screen
    pub catalog_index: usize,

    /// Highlighted lesson on the course screen
    pub lesson_index: usize,

    /// Reader for the selected lesson
    pub reader: LessonReader,

    /// Scroll offset of the current page
    pub page_scroll: u16,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Command line state
    pub command_line: CommandLineState,
}

impl AppState {
    /// Keep the highlight indices inside the store's current lists
    pub fn clamp_to(&mut self, store: &Store) {
        let courses = store.courses().len();
        self.catalog_index = self.catalog_index.min(courses.saturating_sub(1));

        let lessons = store.selected_course().map_or(0, |c| c.lessons.len());
        self.lesson_index = self.lesson_index.min(lessons.saturating_sub(1));
    }
}
