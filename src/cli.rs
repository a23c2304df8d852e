//! Command-line flags. Flags override [`AppConfig`] values from the environment.

use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;
use crate::core::Pacing;
use crate::types::BestSpeedPolicy;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tui-typist")]
#[command(about = "Terminal touch-typing tutor with lesson progress tracking")]
pub struct Args {
    /// Directory containing lesson files
    #[arg(short, long)]
    pub lessons: Option<PathBuf>,

    /// Path of the JSON progress file
    #[arg(short, long)]
    pub progress: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// How the stored best speed is updated: latest | keep-best
    #[arg(long, value_parser = parse_policy)]
    pub best_speed: Option<BestSpeedPolicy>,

    /// Skip the pauses before and after each lesson
    #[arg(long)]
    pub no_pacing: bool,

    /// Clear every completed flag before starting
    #[arg(long)]
    pub reset: bool,

    /// Print lesson statistics and exit
    #[arg(long)]
    pub stats: bool,
}

fn parse_policy(s: &str) -> Result<BestSpeedPolicy, String> {
    BestSpeedPolicy::from_str(s)
        .ok_or_else(|| format!("unknown policy '{}' (expected latest or keep-best)", s))
}

impl Args {
    /// Layer the flags over `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(dir) = &self.lessons {
            config.lessons_dir = dir.clone();
        }
        if let Some(path) = &self.progress {
            config.progress_path = path.clone();
        }
        if let Some(path) = &self.log_file {
            config.log_path = Some(path.clone());
        }
        if let Some(policy) = self.best_speed {
            config.best_speed = policy;
        }
        if self.no_pacing {
            config.pacing = Pacing::none();
        }
        config
    }
}
