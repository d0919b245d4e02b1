use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use coursedeck::catalog::load_catalog;
use coursedeck::config::progress::Progress;
use coursedeck::learning::{CourseStats, is_locked};
use coursedeck::ui::{ProgressTracker, icons};
use coursedeck::{App, Config, Store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "coursedeck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog file to load instead of the configured or bundled one
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List courses with their completion
    List,
    /// Show the progress tracker for one course
    Progress {
        /// Id of the course
        course: String,
    },
    /// Forget saved progress
    Reset {
        /// Id of the course to reset; all courses when omitted
        course: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.command.is_none())?;

    let config = Config::load()?;
    if !config.theme_is_known() {
        tracing::warn!(theme = %config.theme, "unknown theme, using Tokyo Night");
    }
    let catalog_path = cli.catalog.or_else(|| config.catalog_path.clone());
    let catalog = load_catalog(catalog_path.as_deref()).context("Failed to load the catalog")?;
    let mut progress = Progress::load()?;

    let mut store = Store::from_catalog(catalog);
    store.apply_progress(&progress);

    match cli.command {
        Some(Commands::List) => {
            for course in store.courses() {
                let stats = CourseStats::of(course);
                println!(
                    "{:<16} {:<32} {:>3}%  ({}/{})",
                    course.id, course.title, stats.percent, stats.completed, stats.total
                );
            }
        }
        Some(Commands::Progress { course }) => {
            let Some(course) = store.course(&course) else {
                bail!("Unknown course '{}'", course);
            };
            let tracker = ProgressTracker::new(course, config.minutes_per_lesson);
            println!(
                "{} {} ({}%)",
                icons::course_icon(&course.icon),
                course.title,
                tracker.stats().percent
            );
            for line in tracker.summary() {
                println!("  {}", line);
            }
            println!();
            for (index, lesson) in course.lessons.iter().enumerate() {
                let locked = is_locked(course, index, config.sequential_unlock);
                println!(
                    "  {} {:<32} {:<12} {}",
                    icons::lesson_status(lesson.completed, locked),
                    lesson.title,
                    lesson.difficulty.label(),
                    lesson.duration
                );
            }
        }
        Some(Commands::Reset { course }) => {
            match course {
                Some(id) => {
                    if !progress.reset_course(&id) {
                        println!("No saved progress for '{}'", id);
                        return Ok(());
                    }
                    println!("Reset progress for '{}'", id);
                }
                None => {
                    progress.reset_all();
                    println!("Reset all progress");
                }
            }
            progress.save()?;
        }
        None => {
            let mut app = App::new(config, store, progress)?;
            app.run()?;
        }
    }

    Ok(())
}

/// Log to stderr for subcommands, and to a file while the TUI owns the screen
fn init_logging(to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "coursedeck=info".into());

    if to_file {
        let path = Config::log_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {:?}", parent))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {:?}", path))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}
