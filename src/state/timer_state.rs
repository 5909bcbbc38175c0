//! Timer state structure and management

use std::{
    fmt,
    sync::Arc,
    time::{Duration, Instant},
};

use super::clock::{Clock, SystemClock};

/// Point-in-time read of the timer, taken under a single lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub running: bool,
    pub elapsed: Duration,
}

/// Stopwatch state: a running flag, the start of the open interval and the
/// sum of all closed intervals
pub struct TimerState {
    clock: Arc<dyn Clock>,
    running: bool,
    start: Instant,
    accumulated: Duration,
}

impl TimerState {
    /// Create a stopped timer reading the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a stopped timer reading the given clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let start = clock.now();
        Self {
            clock,
            running: false,
            start,
            accumulated: Duration::ZERO,
        }
    }

    /// Start if stopped, stop if running. Returns the new running flag.
    pub fn toggle(&mut self) -> bool {
        let now = self.clock.now();
        if self.running {
            let interval = now.saturating_duration_since(self.start);
            self.accumulated = self.accumulated.saturating_add(interval);
            self.running = false;
        } else {
            self.start = now;
            self.running = true;
        }
        self.running
    }

    /// Stop and clear the accumulated time
    pub fn reset(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    /// Accumulated time plus the open interval, if any
    pub fn elapsed(&self) -> Duration {
        if self.running {
            let open = self.clock.now().saturating_duration_since(self.start);
            self.accumulated.saturating_add(open)
        } else {
            self.accumulated
        }
    }

    /// Check if the timer is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            running: self.running,
            elapsed: self.elapsed(),
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerState")
            .field("running", &self.running)
            .field("start", &self.start)
            .field("accumulated", &self.accumulated)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::clock::ManualClock;

    fn manual() -> (ManualClock, TimerState) {
        let clock = ManualClock::new();
        let timer = TimerState::with_clock(Arc::new(clock.clone()));
        (clock, timer)
    }

    #[test]
    fn starts_stopped_at_zero() {
        let (_, timer) = manual();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn toggle_returns_new_running_flag() {
        let (_, mut timer) = manual();
        assert!(timer.toggle());
        assert!(!timer.toggle());
    }

    #[test]
    fn elapsed_grows_only_while_running() {
        let (clock, mut timer) = manual();
        timer.toggle();
        clock.advance(Duration::from_secs(5));
        assert_eq!(timer.elapsed(), Duration::from_secs(5));
        assert!(timer.is_running());

        timer.toggle();
        assert_eq!(timer.elapsed(), Duration::from_secs(5));
        assert!(!timer.is_running());

        clock.advance(Duration::from_secs(3));
        assert_eq!(timer.elapsed(), Duration::from_secs(5));
    }

    #[test]
    fn running_reads_never_decrease() {
        let (clock, mut timer) = manual();
        timer.toggle();

        let mut previous = timer.elapsed();
        for step in [0, 1, 250, 999, 0, 60_000, 3] {
            clock.advance(Duration::from_millis(step));
            let current = timer.elapsed();
            assert!(current >= previous, "{:?} < {:?}", current, previous);
            previous = current;
        }
        assert_eq!(previous, Duration::from_millis(61_253));
    }

    #[test]
    fn intervals_accumulate_across_toggles() {
        let (clock, mut timer) = manual();
        timer.toggle();
        clock.advance(Duration::from_secs(2));
        timer.toggle();
        clock.advance(Duration::from_secs(60));
        timer.toggle();
        clock.advance(Duration::from_millis(2500));

        assert_eq!(timer.elapsed(), Duration::from_millis(4500));
    }

    #[test]
    fn reset_clears_from_any_state() {
        let (clock, mut timer) = manual();
        timer.toggle();
        clock.advance(Duration::from_secs(7));
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(), Duration::ZERO);

        timer.toggle();
        clock.advance(Duration::from_secs(1));
        timer.toggle();
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn stopped_reads_are_constant() {
        let (clock, mut timer) = manual();
        timer.toggle();
        clock.advance(Duration::from_secs(9));
        timer.toggle();

        let first = timer.elapsed();
        for _ in 0..3 {
            clock.advance(Duration::from_secs(1));
            assert_eq!(timer.elapsed(), first);
        }
    }

    #[test]
    fn accumulation_saturates() {
        let (clock, mut timer) = manual();
        timer.accumulated = Duration::MAX - Duration::from_secs(1);
        timer.toggle();
        clock.advance(Duration::from_secs(10));

        assert_eq!(timer.elapsed(), Duration::MAX);
        timer.toggle();
        assert_eq!(timer.elapsed(), Duration::MAX);
    }

    #[test]
    fn snapshot_matches_fields() {
        let (clock, mut timer) = manual();
        timer.toggle();
        clock.advance(Duration::from_secs(3));

        let snapshot = timer.snapshot();
        assert!(snapshot.running);
        assert_eq!(snapshot.elapsed, Duration::from_secs(3));
    }

    #[test]
    fn real_clock_measures_delay() {
        let mut timer = TimerState::new();
        timer.toggle();
        std::thread::sleep(Duration::from_millis(50));
        timer.toggle();

        let elapsed = timer.elapsed();
        assert!(!timer.is_running());
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < Duration::from_secs(2));
    }
}
