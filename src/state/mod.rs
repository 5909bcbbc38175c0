//! State management module
//!
//! This module contains the stopwatch state, its time source and the shared
//! application state the UI and the refresh task work against.

pub mod app_state;
pub mod clock;
pub mod timer_state;

// Re-export main types
pub use app_state::{Action, AppState};
pub use clock::{Clock, ManualClock, SystemClock};
pub use timer_state::{TimerSnapshot, TimerState};
