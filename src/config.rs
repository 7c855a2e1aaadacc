use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::swipe::{DEFAULT_SWIPE_THRESHOLD, is_valid_threshold};

#[derive(Parser, Debug)]
#[command(name = "twenty48", about = "2048 in the terminal")]
pub struct Args {
    /// Seed for tile spawning. Omit for a random game.
    #[arg(long)]
    pub seed: Option<u64>,
    /// JSON file holding the best score.
    #[arg(long, default_value = "high_score.json")]
    pub high_score_file: PathBuf,
    /// Keep the best score in memory only.
    #[arg(long)]
    pub no_persist: bool,
    /// Minimum mouse drag, in nominal pixels, that counts as a swipe.
    #[arg(long, default_value_t = DEFAULT_SWIPE_THRESHOLD, value_parser = parse_swipe_threshold)]
    pub swipe_threshold: f64,
    /// Where log output goes; the terminal itself is taken by the game.
    #[arg(long, default_value = "twenty48.log")]
    pub log_file: PathBuf,
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

fn parse_swipe_threshold(s: &str) -> Result<f64, String> {
    let threshold: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !is_valid_threshold(threshold) {
        return Err(format!("{} is not a finite, non-negative distance", s));
    }
    Ok(threshold)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
