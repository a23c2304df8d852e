//! Core session engine - pure, deterministic, and testable
//!
//! This crate contains the typing rules, session state, and lesson progression.
//! It has **no dependencies** on a terminal library or the filesystem, making it:
//!
//! - **Deterministic**: time comes from a [`Clock`], keys from a [`KeySource`]
//! - **Testable**: every collaborator has an in-memory double
//! - **Portable**: the same engine drives a real terminal or a scripted test
//!
//! # Module Structure
//!
//! - [`speed`]: WPM calculation from typed text and elapsed time
//! - [`evaluator`]: per-sentence keystroke state machine
//! - [`session`]: runs one lesson sentence by sentence and measures speed
//! - [`progression`]: walks all lessons, skips completed ones, persists results
//! - [`menu`]: key bindings of the "all lessons complete" screen
//! - [`clock`], [`keyboard`], [`source`], [`store`], [`view`]: collaborator seams
//! - [`testing`]: scripted keyboard and recording view
//!
//! # Typing Rules
//!
//! - Each typed character is compared with the sentence character at the same
//!   index; a match echoes the character, a mismatch echoes `^`
//! - Enter finishes the sentence, Escape abandons the whole run
//! - Typing one character past the end of the sentence finishes it
//! - Speed is characters / 5 per minute over the whole lesson
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use std::time::Duration;
//!
//! use tui_typist_core::testing::{RecordingView, ScriptedKeyboard};
//! use tui_typist_core::{
//!     LessonStore, ManualClock, MemoryLessonSource, MemoryStore, Pacing, ProgressionController,
//! };
//! use tui_typist_types::{BestSpeedPolicy, Lesson, RunOutcome};
//!
//! let clock = ManualClock::new();
//! let source = MemoryLessonSource::new(vec![Lesson::new("lesson1", vec!["cat".into()])]);
//! let mut store = MemoryStore::new();
//! let mut keyboard = ScriptedKeyboard::from_str("cat\r").with_clock(clock.clone(), Duration::from_secs(2));
//! let mut view = RecordingView::new();
//!
//! let controller = ProgressionController::new(clock, Pacing::none(), BestSpeedPolicy::Latest);
//! let outcome = controller
//!     .run_all(&source, &HashSet::new(), &mut store, &mut keyboard, &mut view)
//!     .unwrap();
//!
//! assert_eq!(outcome, RunOutcome::Completed);
//! assert!(store.read_completed().unwrap().contains("lesson1"));
//! ```

pub mod clock;
pub mod error;
pub mod evaluator;
pub mod keyboard;
pub mod menu;
pub mod progression;
pub mod session;
pub mod source;
pub mod speed;
pub mod store;
pub mod testing;
pub mod view;

pub use tui_typist_types as types;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{DeviceError, ReadError, RunError, SourceError, StoreError};
pub use evaluator::{EvalState, SentenceEvaluator, Step};
pub use keyboard::{KeyReader, KeySource};
pub use menu::{menu_action, MenuAction};
pub use progression::ProgressionController;
pub use session::{type_sentence, Pacing, SentenceOutcome, SessionRunner};
pub use source::{LessonSource, MemoryLessonSource};
pub use speed::{compute_speed, word_count};
pub use store::{LessonStore, MemoryStore};
pub use view::{MenuView, SessionView};
