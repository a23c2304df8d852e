//! Terminal typing tutor (default binary).
//!
//! Runs every lesson not yet completed, then offers the redo / stats / quit
//! menu. Progress is saved after each completed lesson.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tui_typist::core::{LessonStore, MenuView, ProgressionController, SystemClock};
use tui_typist::input::CrosstermKeyboard;
use tui_typist::lessons::DirLessonSource;
use tui_typist::store::JsonFileStore;
use tui_typist::term::TerminalRenderer;
use tui_typist::types::RunOutcome;
use tui_typist::{logging, restore, App, AppConfig, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    restore::install_panic_hook();
    let config = args.apply(AppConfig::from_env());
    logging::init(config.log_path.as_deref())?;
    info!(?config, "starting");

    let mut store = JsonFileStore::open(&config.progress_path)
        .with_context(|| format!("opening progress file {}", config.progress_path.display()))?;

    if args.reset {
        store.reset_all().context("resetting progress")?;
    }

    let mut term = TerminalRenderer::new();
    if args.stats {
        let records = store.read_all().context("reading progress")?;
        term.lesson_stats(&records)?;
        return Ok(());
    }

    term.clear()?;
    let controller = ProgressionController::new(SystemClock, config.pacing, config.best_speed);
    let mut app = App::new(
        controller,
        DirLessonSource::new(&config.lessons_dir),
        store,
        CrosstermKeyboard::new(),
        term,
    );

    let result = app.run();

    // Always try to restore terminal state.
    let _ = app.view_mut().restore();

    match result.context("lesson run failed")? {
        RunOutcome::Completed => info!("finished"),
        RunOutcome::Interrupted => info!("interrupted"),
    }
    Ok(())
}
