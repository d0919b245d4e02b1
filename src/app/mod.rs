//! Application state and event handling

pub mod command;
pub mod handler;
pub mod input;
pub mod state;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Config;
use crate::config::progress::Progress;
use crate::store::Store;
use crate::ui;
use handler::Outcome;
use state::AppState;

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Course data and selection
    store: Store,

    /// Saved completions, written after every completed lesson
    progress: Progress,

    /// UI state outside the store
    state: AppState,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, store: Store, progress: Progress) -> Result<Self> {
        let terminal = Self::setup_terminal()?;

        Ok(Self { config, store, progress, state: AppState::default(), terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Restore the terminal before a panic message is printed
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        loop {
            self.terminal.draw(|frame| {
                ui::draw(frame, &self.state, &self.store, &self.config);
            })?;

            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match handler::handle_key(
                        &mut self.state,
                        &mut self.store,
                        &self.config,
                        key.code,
                        key.modifiers,
                    ) {
                        Outcome::Continue => {}
                        Outcome::Quit => break,
                        Outcome::LessonCompleted { course_id, lesson_id } => {
                            self.save_completion(&course_id, &lesson_id);
                        }
                    }
                }
            }
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Record a completion and write the progress file
    fn save_completion(&mut self, course_id: &str, lesson_id: &str) {
        if !self.progress.record(course_id, lesson_id) {
            return;
        }
        if let Err(e) = self.progress.save() {
            tracing::error!("Failed to save progress: {:#}", e);
            self.state.command_line.set_error("Could not save progress");
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
