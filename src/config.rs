use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use env_logger::{Builder, Env, Target};

use crate::constants::{DEFAULT_POOL_SIZE, DEFAULT_QUIZ_PATH, DEFAULT_TICK_MS};
use crate::error::AppError;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "quizris", version, about = "Falling blocks with a quiz on the side")]
pub struct Config {
    /// Question file (JSON array of {question, options, answer})
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_QUIZ_PATH)]
    pub quiz: PathBuf,

    /// Gravity interval in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TICK_MS,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Number of questions drawn into the session pool
    #[arg(long, value_name = "N", default_value_t = DEFAULT_POOL_SIZE)]
    pub pool_size: usize,

    /// Seed for piece and question order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs here (the terminal is taken by the game)
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Sends logs to the configured file. Without one, logging stays off.
pub fn init_logging(config: &Config) -> Result<(), AppError> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.clone(),
        source,
    })?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
