//! Lesson directory + JSON progress file driven through the full app.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use tui_typist::core::testing::ScriptedKeyboard;
use tui_typist::core::{LessonStore, ManualClock, Pacing, ProgressionController};
use tui_typist::lessons::DirLessonSource;
use tui_typist::store::JsonFileStore;
use tui_typist::term::TerminalRenderer;
use tui_typist::types::{BestSpeedPolicy, RunOutcome};
use tui_typist::App;

fn write_lessons(root: &Path) {
    fs::create_dir_all(root.join("basics")).unwrap();
    fs::write(root.join("basics/01_home.txt"), "asdf\njkl;\n").unwrap();
    fs::write(root.join("basics/02_top.txt"), "qwer\n").unwrap();
    fs::write(root.join("03_words.txt"), "cat\n").unwrap();
}

fn run_app(lessons: &Path, progress: &Path, keys: &str) -> (RunOutcome, String) {
    let store = JsonFileStore::open(progress).unwrap();
    let mut app = App::new(
        ProgressionController::new(ManualClock::new(), Pacing::none(), BestSpeedPolicy::KeepBest),
        DirLessonSource::new(lessons),
        store,
        ScriptedKeyboard::from_str(keys),
        TerminalRenderer::with_writer(Vec::new()),
    );
    let outcome = app.run().unwrap();
    let screen = String::from_utf8(app.into_view().into_inner()).unwrap();
    (outcome, screen)
}

#[test]
fn test_progress_survives_restart() {
    let tmp = TempDir::new().unwrap();
    let lessons = tmp.path().join("lessons");
    let progress = tmp.path().join("progress.json");
    write_lessons(&lessons);

    // Finish the first lesson, leave during the second. Lessons of the root
    // directory come before the "basics" subdirectory.
    let (outcome, screen) = run_app(&lessons, &progress, "cat\rasd\u{1b}");
    assert_eq!(outcome, RunOutcome::Interrupted);
    assert!(screen.contains("Lesson: 03_words"));
    assert!(screen.contains("You have completed lesson 03_words"));
    assert!(screen.contains("Exiting lesson"));

    let store = JsonFileStore::open(&progress).unwrap();
    let done = store.read_completed().unwrap();
    assert_eq!(done.len(), 1);
    assert!(done.contains("03_words"));

    // The next start resumes at the exited lesson.
    let (outcome, screen) = run_app(&lessons, &progress, "asdf\rjkl;\rqwer\r\u{1b}");
    assert_eq!(outcome, RunOutcome::Completed);
    assert!(!screen.contains("Lesson: 03_words"));
    assert!(screen.contains("Lesson: 01_home"));
    assert!(screen.contains("Lesson: 02_top"));
    assert!(screen.contains("completed all the lessons"));

    let store = JsonFileStore::open(&progress).unwrap();
    assert_eq!(store.read_completed().unwrap().len(), 3);
}

#[test]
fn test_stats_from_menu() {
    let tmp = TempDir::new().unwrap();
    let lessons = tmp.path().join("lessons");
    let progress = tmp.path().join("progress.json");
    write_lessons(&lessons);

    let (outcome, screen) = run_app(&lessons, &progress, "cat\rasdf\rjkl;\rqwer\r \u{1b}");
    assert_eq!(outcome, RunOutcome::Completed);
    assert!(screen.contains("Lesson Title: 03_words"));
    assert!(screen.contains("Lesson Title: 01_home"));
    assert!(screen.contains("Lesson Title: 02_top"));
}

#[test]
fn test_redo_clears_progress_on_disk() {
    let tmp = TempDir::new().unwrap();
    let lessons = tmp.path().join("lessons");
    let progress = tmp.path().join("progress.json");
    write_lessons(&lessons);

    // Complete everything, choose redo, then leave during the first lesson.
    let (outcome, _) = run_app(&lessons, &progress, "cat\rasdf\rjkl;\rqwer\r\r\u{1b}");
    assert_eq!(outcome, RunOutcome::Interrupted);

    let store = JsonFileStore::open(&progress).unwrap();
    assert!(store.read_completed().unwrap().is_empty());
    assert_eq!(store.read_all().unwrap().len(), 3);
}
