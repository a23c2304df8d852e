//! Application configuration.
//!
//! Values come from defaults, then environment variables, then command-line
//! flags (see [`crate::cli::Args`]). Unparsable environment values fall back
//! to the default.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TYPIST_LESSONS_DIR` | `lessons` | Root of the lesson files |
//! | `TYPIST_PROGRESS_PATH` | `progress.json` | Progress store file |
//! | `TYPIST_LOG_PATH` | unset | Log file (logging is off when unset) |
//! | `TYPIST_BEST_SPEED` | `latest` | `latest` or `keep-best` |
//! | `TYPIST_PRE_DELAY_MS` | `1000` | Pause before a lesson starts |
//! | `TYPIST_POST_DELAY_MS` | `3000` | Pause after a completed lesson |

use std::path::PathBuf;
use std::time::Duration;

use crate::core::Pacing;
use crate::types::BestSpeedPolicy;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub lessons_dir: PathBuf,
    pub progress_path: PathBuf,
    pub log_path: Option<PathBuf>,
    pub best_speed: BestSpeedPolicy,
    pub pacing: Pacing,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lessons_dir: PathBuf::from("lessons"),
            progress_path: PathBuf::from("progress.json"),
            log_path: None,
            best_speed: BestSpeedPolicy::default(),
            pacing: Pacing::default(),
        }
    }
}

impl AppConfig {
    /// Create from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };
        let millis = |key: &str, default: Duration| {
            non_empty(key)
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(default)
        };

        Self {
            lessons_dir: non_empty("TYPIST_LESSONS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.lessons_dir),
            progress_path: non_empty("TYPIST_PROGRESS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.progress_path),
            log_path: non_empty("TYPIST_LOG_PATH").map(PathBuf::from),
            best_speed: non_empty("TYPIST_BEST_SPEED")
                .and_then(|s| BestSpeedPolicy::from_str(&s))
                .unwrap_or(defaults.best_speed),
            pacing: Pacing {
                pre_lesson: millis("TYPIST_PRE_DELAY_MS", defaults.pacing.pre_lesson),
                post_lesson: millis("TYPIST_POST_DELAY_MS", defaults.pacing.post_lesson),
            },
        }
    }
}
