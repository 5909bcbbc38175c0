//! Time sources for the stopwatch

use std::{
    fmt,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

/// Source of the current monotonic instant
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Clock backed by `Instant::now()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Furthest a [`ManualClock`] can be advanced past its base instant
pub const MAX_MANUAL_OFFSET: Duration = Duration::from_secs(100 * 365 * 24 * 3600);

/// Manually advanced clock, shared between clones.
///
/// Time only moves when [`ManualClock::advance`] is called, which makes
/// timer arithmetic reproducible. The offset stops at
/// [`MAX_MANUAL_OFFSET`] so the resulting instant is always representable.
#[derive(Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Move the clock forward by `by`
    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(|e| e.into_inner());
        *offset = offset.saturating_add(by).min(MAX_MANUAL_OFFSET);
    }

    fn offset(&self) -> Duration {
        *self.offset.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = self.offset();
        self.base.checked_add(offset).unwrap_or(self.base)
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("offset", &self.offset())
            .finish()
    }
}
