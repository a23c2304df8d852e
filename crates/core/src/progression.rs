//! Lesson progression controller
//!
//! Presents every lesson of a [`LessonSource`] in order, skipping titles that
//! are already complete. A completed lesson is saved before the post-lesson
//! pause; an exited lesson saves nothing and ends the whole run.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::RunError;
use crate::keyboard::KeySource;
use crate::session::{Pacing, SessionRunner};
use crate::source::LessonSource;
use crate::store::LessonStore;
use crate::types::{BestSpeedPolicy, RunOutcome};
use crate::view::SessionView;

/// Walks lessons and records completions.
#[derive(Debug, Clone)]
pub struct ProgressionController<C: Clock> {
    runner: SessionRunner<C>,
    policy: BestSpeedPolicy,
}

impl<C: Clock> ProgressionController<C> {
    pub fn new(clock: C, pacing: Pacing, policy: BestSpeedPolicy) -> Self {
        Self {
            runner: SessionRunner::new(clock, pacing),
            policy,
        }
    }

    pub fn runner(&self) -> &SessionRunner<C> {
        &self.runner
    }

    pub fn policy(&self) -> BestSpeedPolicy {
        self.policy
    }

    /// Run every lesson not in `completed`.
    ///
    /// Returns [`RunOutcome::Interrupted`] as soon as a lesson is exited.
    /// Source and store errors abort the run.
    pub fn run_all<L, S, K, V>(
        &self,
        source: &L,
        completed: &HashSet<String>,
        store: &mut S,
        keyboard: &mut K,
        view: &mut V,
    ) -> Result<RunOutcome, RunError>
    where
        L: LessonSource + ?Sized,
        S: LessonStore + ?Sized,
        K: KeySource,
        V: SessionView + ?Sized,
    {
        let titles = source.list()?;
        info!(
            lessons = titles.len(),
            completed = completed.len(),
            "starting lesson run"
        );

        for title in titles {
            if completed.contains(&title) {
                debug!(lesson = %title, "skipping completed lesson");
                continue;
            }

            let lesson = source.load(&title)?;
            let result = self.runner.run(&lesson, keyboard, view)?;
            if result.exited {
                return Ok(RunOutcome::Interrupted);
            }

            let previous_best = store.record(&title)?.map(|r| r.best_speed);
            let best = self.policy.merge(previous_best, result.best_speed);
            store.complete(&title, result.current_speed, best)?;
            debug!(
                lesson = %title,
                current = result.current_speed,
                best,
                policy = self.policy.as_str(),
                "lesson saved"
            );

            self.runner.clock().sleep(self.runner.pacing().post_lesson);
        }

        Ok(RunOutcome::Completed)
    }
}
