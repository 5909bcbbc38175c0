//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};
use clap::Parser;

/// Refresh cadence floor; faster ticks only burn CPU
const MIN_TICK_MS: u64 = 10;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "tap-stopwatch")]
#[command(about = "A full-screen terminal stopwatch: click to start/stop, F5 to reset")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Display refresh interval in milliseconds
    #[arg(long, default_value = "100")]
    pub tick_ms: u64,

    /// Start in windowed mode instead of fullscreen
    #[arg(long)]
    pub windowed: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to this file (logs are discarded otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Refresh interval, clamped to a sane minimum
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(MIN_TICK_MS))
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
