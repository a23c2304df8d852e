//! Top-level flow: lesson run followed by the "all lessons complete" menu.

use tracing::{debug, info, warn};

use crate::core::{
    menu_action, Clock, KeyReader, KeySource, LessonSource, LessonStore, MenuAction, MenuView,
    ProgressionController, RunError, SessionView,
};
use crate::types::RunOutcome;

/// The application wired to its collaborators.
pub struct App<L, S, K, V, C: Clock> {
    controller: ProgressionController<C>,
    source: L,
    store: S,
    keyboard: K,
    view: V,
}

impl<L, S, K, V, C> App<L, S, K, V, C>
where
    L: LessonSource,
    S: LessonStore,
    K: KeySource,
    V: SessionView + MenuView,
    C: Clock,
{
    pub fn new(
        controller: ProgressionController<C>,
        source: L,
        store: S,
        keyboard: K,
        view: V,
    ) -> Self {
        Self {
            controller,
            source,
            store,
            keyboard,
            view,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn keyboard(&self) -> &K {
        &self.keyboard
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Run pending lessons, then serve the menu until the user quits.
    ///
    /// Returns [`RunOutcome::Interrupted`] if any lesson was exited, which
    /// ends the program without showing the menu.
    pub fn run(&mut self) -> Result<RunOutcome, RunError> {
        if self.run_pending()? == RunOutcome::Interrupted {
            return Ok(RunOutcome::Interrupted);
        }
        self.view.all_lessons_complete()?;

        loop {
            match self.next_menu_action()? {
                MenuAction::Redo => {
                    info!("redoing all lessons");
                    self.store.reset_all()?;
                    if self.run_pending()? == RunOutcome::Interrupted {
                        return Ok(RunOutcome::Interrupted);
                    }
                    self.view.all_lessons_complete()?;
                }
                MenuAction::Quit => {
                    info!("quit from menu");
                    return Ok(RunOutcome::Completed);
                }
                // Handled while the keyboard is open.
                MenuAction::ShowStats => {}
            }
        }
    }

    fn run_pending(&mut self) -> Result<RunOutcome, RunError> {
        let completed = self.store.read_completed()?;
        self.controller.run_all(
            &self.source,
            &completed,
            &mut self.store,
            &mut self.keyboard,
            &mut self.view,
        )
    }

    /// Read menu keys until one ends the menu screen.
    ///
    /// Stats are printed in place; the keyboard is released before returning
    /// so a redo can open it again.
    fn next_menu_action(&mut self) -> Result<MenuAction, RunError> {
        let mut reader = self.keyboard.open()?;
        loop {
            let key = match reader.read_key() {
                Ok(key) => key,
                Err(err) => {
                    warn!(error = %err, "keyboard read failed on menu; quitting");
                    return Ok(MenuAction::Quit);
                }
            };

            match menu_action(key) {
                Some(MenuAction::ShowStats) => {
                    let records = self.store.read_all()?;
                    debug!(lessons = records.len(), "showing stats");
                    self.view.lesson_stats(&records)?;
                }
                Some(action) => return Ok(action),
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{RecordingView, ScriptedKeyboard, ViewEvent};
    use crate::core::{ManualClock, MemoryLessonSource, MemoryStore, Pacing};
    use crate::types::{BestSpeedPolicy, Lesson, LessonRecord};

    type TestApp = App<MemoryLessonSource, MemoryStore, ScriptedKeyboard, RecordingView, ManualClock>;

    fn app(keys: &str, store: MemoryStore) -> TestApp {
        App::new(
            ProgressionController::new(ManualClock::new(), Pacing::none(), BestSpeedPolicy::Latest),
            MemoryLessonSource::new(vec![
                Lesson::new("lesson1", vec!["cat".into()]),
                Lesson::new("lesson2", vec!["dog".into()]),
            ]),
            store,
            ScriptedKeyboard::from_str(keys),
            RecordingView::new(),
        )
    }

    #[test]
    fn test_menu_shown_after_all_lessons_then_quit() {
        let mut app = app("cat\rdog\r\u{1b}", MemoryStore::new());
        assert_eq!(app.run().unwrap(), RunOutcome::Completed);

        let view = app.view_mut();
        assert_eq!(view.intros(), vec!["lesson1", "lesson2"]);
        assert_eq!(view.count(&ViewEvent::AllComplete), 1);
        assert!(!app.keyboard().is_open());
    }

    #[test]
    fn test_interrupt_skips_menu() {
        let mut app = app("ca\u{1b}", MemoryStore::new());
        assert_eq!(app.run().unwrap(), RunOutcome::Interrupted);
        assert_eq!(app.view_mut().count(&ViewEvent::AllComplete), 0);
        assert!(app.store().read_all().unwrap().is_empty());
    }

    #[test]
    fn test_already_complete_goes_straight_to_menu() {
        let store = MemoryStore::with_records([
            LessonRecord::completed("lesson1", 10.0, 10.0),
            LessonRecord::completed("lesson2", 20.0, 20.0),
        ]);
        let mut app = app(" \u{1b}", store);
        assert_eq!(app.run().unwrap(), RunOutcome::Completed);

        let view = app.view_mut();
        assert!(view.intros().is_empty());
        let stats: Vec<_> = view
            .events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Stats(records) => Some(records.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].len(), 2);
        assert_eq!(stats[0][1].best_speed, 20.0);
    }

    #[test]
    fn test_redo_presents_every_lesson_again() {
        let store = MemoryStore::with_records([
            LessonRecord::completed("lesson1", 10.0, 10.0),
            LessonRecord::completed("lesson2", 20.0, 20.0),
        ]);
        let mut app = app("x\rcat\rdog\r\u{1b}", store);
        assert_eq!(app.run().unwrap(), RunOutcome::Completed);

        let view = app.view_mut();
        assert_eq!(view.intros(), vec!["lesson1", "lesson2"]);
        assert_eq!(view.count(&ViewEvent::AllComplete), 2);
        assert_eq!(app.store().read_completed().unwrap().len(), 2);
    }

    #[test]
    fn test_menu_read_error_quits() {
        let store = MemoryStore::with_records([
            LessonRecord::completed("lesson1", 10.0, 10.0),
            LessonRecord::completed("lesson2", 20.0, 20.0),
        ]);
        let mut app = app("", store);
        assert_eq!(app.run().unwrap(), RunOutcome::Completed);
        assert_eq!(app.keyboard().opens(), 1);
    }
}
