//! Utility functions module
//!
//! This module contains clock formatting and signal handling.

pub mod format;
pub mod signals;

// Re-export main functions
pub use format::{format_duration, parse_hms};
pub use signals::shutdown_signal;
