//! Tap Stopwatch - a full-screen terminal stopwatch
//!
//! This library provides the stopwatch state, the background refresh task
//! that turns it into clock text, and the terminal UI that displays it.

pub mod config;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, TimerState};
pub use utils::format::{format_duration, parse_hms};
