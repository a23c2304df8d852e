//! Lesson session runner
//!
//! Runs one lesson: intro, pacing delay, then every sentence through a
//! [`SentenceEvaluator`]. Typed text of all sentences is collected into one
//! continuous string and scored once at the end. The timer starts after the
//! pacing delay and before the first sentence is shown.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::clock::Clock;
use crate::error::RunError;
use crate::evaluator::{EvalState, SentenceEvaluator};
use crate::keyboard::{KeyReader, KeySource};
use crate::speed::compute_speed;
use crate::types::{Lesson, SessionResult, POST_LESSON_DELAY_MS, PRE_LESSON_DELAY_MS};
use crate::view::SessionView;

/// Fixed UX pauses around a lesson. Never part of the measured time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// After the typing cue, before the keyboard opens.
    pub pre_lesson: Duration,
    /// After a completed lesson has been saved.
    pub post_lesson: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            pre_lesson: Duration::from_millis(PRE_LESSON_DELAY_MS),
            post_lesson: Duration::from_millis(POST_LESSON_DELAY_MS),
        }
    }
}

impl Pacing {
    pub fn none() -> Self {
        Self {
            pre_lesson: Duration::ZERO,
            post_lesson: Duration::ZERO,
        }
    }
}

/// How a sentence ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceOutcome {
    Done,
    Exited,
}

/// Drive one sentence to completion.
///
/// Every appended character (overflow included) goes into `typed_text`.
/// A read error ends the sentence like Enter would.
pub fn type_sentence<R, V>(
    sentence: &str,
    typed_text: &mut String,
    reader: &mut R,
    view: &mut V,
) -> Result<SentenceOutcome, RunError>
where
    R: KeyReader + ?Sized,
    V: SessionView + ?Sized,
{
    let mut eval = SentenceEvaluator::new(sentence);

    while !eval.is_finished() {
        let step = match reader.read_key() {
            Ok(key) => eval.feed(key),
            Err(err) => {
                warn!(error = %err, "keyboard read failed; ending sentence");
                eval.interrupt()
            }
        };

        if let Some(ch) = step.typed {
            typed_text.push(ch);
        }
        if let Some(echo) = step.echo {
            view.echo(echo)?;
        }
    }

    Ok(match eval.state() {
        EvalState::LessonExited => SentenceOutcome::Exited,
        _ => SentenceOutcome::Done,
    })
}

/// Ephemeral state of one running lesson.
#[derive(Debug, Clone)]
struct SessionState {
    typed: String,
    started_at: Instant,
    sentence_index: usize,
    exited: bool,
}

/// Runs single lessons.
#[derive(Debug, Clone)]
pub struct SessionRunner<C: Clock> {
    clock: C,
    pacing: Pacing,
}

impl<C: Clock> SessionRunner<C> {
    pub fn new(clock: C, pacing: Pacing) -> Self {
        Self { clock, pacing }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Run `lesson` to completion or exit.
    ///
    /// The keyboard is held only while sentences are typed and is released on
    /// every return path. Nothing is persisted here.
    pub fn run<K, V>(
        &self,
        lesson: &Lesson,
        keyboard: &mut K,
        view: &mut V,
    ) -> Result<SessionResult, RunError>
    where
        K: KeySource,
        V: SessionView + ?Sized,
    {
        info!(lesson = %lesson.title, sentences = lesson.sentence_count(), "lesson started");

        view.lesson_intro(&lesson.title)?;
        view.typing_cue()?;
        self.clock.sleep(self.pacing.pre_lesson);

        let mut reader = keyboard.open()?;
        let mut state = SessionState {
            typed: String::new(),
            started_at: self.clock.now(),
            sentence_index: 0,
            exited: false,
        };

        for (index, sentence) in lesson.sentences.iter().enumerate() {
            state.sentence_index = index;
            view.sentence(sentence)?;

            let outcome = type_sentence(sentence, &mut state.typed, &mut reader, view)?;
            if outcome == SentenceOutcome::Exited {
                state.exited = true;
                break;
            }
        }
        drop(reader);

        if state.exited {
            info!(
                lesson = %lesson.title,
                sentence = state.sentence_index,
                "lesson exited by user"
            );
            view.lesson_exited()?;
            return Ok(SessionResult::exited());
        }

        let elapsed = self.clock.now().saturating_duration_since(state.started_at);
        let wpm = compute_speed(&state.typed, elapsed);
        debug!(
            lesson = %lesson.title,
            chars = state.typed.chars().count(),
            ?elapsed,
            "lesson timed"
        );
        info!(lesson = %lesson.title, wpm, "lesson completed");

        view.lesson_completed(&lesson.title, wpm)?;
        Ok(SessionResult::completed(wpm))
    }
}
