//! TUI Typist (workspace facade crate).
//!
//! This package exposes `tui_typist::{core,input,lessons,store,term,types}` as
//! one public API while the implementation lives in dedicated crates under
//! `crates/`. The application shell (configuration, CLI, logging and the
//! top-level menu loop) lives here.

pub use tui_typist_core as core;
pub use tui_typist_input as input;
pub use tui_typist_lessons as lessons;
pub use tui_typist_store as store;
pub use tui_typist_term as term;
pub use tui_typist_types as types;

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod restore;

pub use app::App;
pub use cli::Args;
pub use config::AppConfig;
