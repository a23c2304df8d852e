//! Error types for the session engine and its collaborators.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The keyboard could not be acquired; no typing can happen.
#[derive(Debug, Error)]
#[error("keyboard unavailable: {0}")]
pub struct DeviceError(#[from] pub io::Error);

/// Reading a key failed mid-session (device closed, terminal gone).
///
/// Treated as a soft stop of the current sentence, never as an exit.
#[derive(Debug, Error)]
#[error("keyboard read failed: {0}")]
pub struct ReadError(#[from] pub io::Error);

impl ReadError {
    /// Read error for an input stream that has nothing left to give.
    pub fn closed() -> Self {
        Self(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "keyboard closed",
        ))
    }
}

/// Errors produced while listing or loading lessons.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read lessons at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("duplicate lesson title {title:?}: {first} and {second}")]
    DuplicateTitle {
        title: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("unknown lesson: {0}")]
    UnknownLesson(String),
}

/// Errors produced by a progress store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("progress store I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("progress file {path} is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },
}

/// Anything that aborts a lesson run.
///
/// User exit is not an error; it is reported as
/// [`RunOutcome::Interrupted`](crate::types::RunOutcome::Interrupted).
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Device(#[from] DeviceError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("terminal output failed: {0}")]
    Output(#[from] io::Error),
}
