//! Background tasks module
//!
//! This module contains background tasks that run alongside the UI event loop.

pub mod refresh;

// Re-export main functions
pub use refresh::refresh_task;
