//! Main application state management

use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};
use chrono::{DateTime, Local};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{Clock, SystemClock, TimerSnapshot, TimerState};
use crate::utils::format_duration;

/// User actions recorded for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Started,
    Stopped,
    Reset,
    Fullscreen(bool),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Started => f.write_str("start"),
            Action::Stopped => f.write_str("stop"),
            Action::Reset => f.write_str("reset"),
            Action::Fullscreen(true) => f.write_str("fullscreen on"),
            Action::Fullscreen(false) => f.write_str("fullscreen off"),
        }
    }
}

/// Shared application state: the timer behind a lock, display mode, and the
/// channel carrying the rendered clock text to the UI
#[derive(Debug)]
pub struct AppState {
    /// Timer state, only ever read and written under this lock
    pub timer_state: Arc<Mutex<TimerState>>,
    /// UI-only display mode, never affects the timer
    fullscreen: AtomicBool,
    /// Last action tracking
    last_action: Mutex<Option<(Action, DateTime<Local>)>>,
    /// Channel for display text updates
    display_tx: watch::Sender<String>,
}

impl AppState {
    /// Create a new AppState with a stopped timer on the system clock
    pub fn new(fullscreen: bool) -> Self {
        Self::with_clock(Arc::new(SystemClock), fullscreen)
    }

    /// Create a new AppState reading time from `clock`
    pub fn with_clock(clock: Arc<dyn Clock>, fullscreen: bool) -> Self {
        let (display_tx, _) = watch::channel(format_duration(Duration::ZERO));

        Self {
            timer_state: Arc::new(Mutex::new(TimerState::with_clock(clock))),
            fullscreen: AtomicBool::new(fullscreen),
            last_action: Mutex::new(None),
            display_tx,
        }
    }

    /// Start or stop the timer. Returns the new running flag.
    pub fn toggle(&self) -> Result<bool, String> {
        let mut timer = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        let running = timer.toggle();
        let elapsed = timer.elapsed();
        drop(timer);

        let action = if running { Action::Started } else { Action::Stopped };
        info!("Timer {} at {}", action, format_duration(elapsed));
        self.record(action);

        // Stopping freezes the value, make sure the display shows it exactly
        if !running {
            self.publish(format_duration(elapsed));
        }

        Ok(running)
    }

    /// Stop the timer and clear it. The display is cleared immediately.
    pub fn reset(&self) -> Result<(), String> {
        let mut timer = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        timer.reset();
        drop(timer);

        info!("Timer reset");
        self.record(Action::Reset);
        self.publish(format_duration(Duration::ZERO));
        Ok(())
    }

    /// Get current elapsed time
    pub fn elapsed(&self) -> Result<Duration, String> {
        self.timer_state.lock()
            .map(|timer| timer.elapsed())
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Get a consistent read of the running flag and elapsed time
    pub fn snapshot(&self) -> Result<TimerSnapshot, String> {
        self.timer_state.lock()
            .map(|timer| timer.snapshot())
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Flip fullscreen display mode. Returns the new mode.
    pub fn toggle_fullscreen(&self) -> bool {
        let fullscreen = !self.fullscreen.fetch_xor(true, Ordering::SeqCst);
        debug!("Fullscreen set to: {}", fullscreen);
        self.record(Action::Fullscreen(fullscreen));
        fullscreen
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.load(Ordering::SeqCst)
    }

    /// Get last action information
    pub fn last_action(&self) -> Option<(Action, DateTime<Local>)> {
        self.last_action.lock().ok().and_then(|last| *last)
    }

    /// Publish display text. Receivers are only notified when it changed.
    pub fn publish(&self, text: String) -> bool {
        let changed = self.display_tx.send_if_modified(|current| {
            if *current == text {
                false
            } else {
                *current = text;
                true
            }
        });

        if changed {
            debug!("Display updated to {}", *self.display_tx.borrow());
        }
        changed
    }

    /// Subscribe to display text updates
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.display_tx.subscribe()
    }

    /// Text currently shown on the display
    pub fn display_text(&self) -> String {
        self.display_tx.borrow().clone()
    }

    fn record(&self, action: Action) {
        match self.last_action.lock() {
            Ok(mut last) => *last = Some((action, Local::now())),
            Err(e) => warn!("Failed to record last action: {}", e),
        }
    }
}
