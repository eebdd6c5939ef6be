//! Quiet-interval debounce for search input.

use std::time::Duration;
use tokio::time::Instant;

/// Quiet interval before a search fetch is scheduled (milliseconds)
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

/// Coalesces bursts of input into one trigger.
///
/// Every [`schedule`](Self::schedule) pushes the deadline out by the quiet
/// interval, cancelling the previous one. Only the pending trigger is
/// cancelled; nothing already fired is affected.
#[derive(Debug, Clone)]
pub struct SearchDebounce {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl SearchDebounce {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    pub fn quiet_interval(&self) -> Duration {
        self.quiet
    }

    /// Arm (or re-arm) the trigger relative to `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once per armed trigger, when `now` reaches the
    /// deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for SearchDebounce {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_after_quiet_interval() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::default();
        debounce.schedule(start);

        assert!(!debounce.fire_if_due(start + ms(499)));
        assert!(debounce.fire_if_due(start + ms(500)));
        assert!(!debounce.is_pending());
        assert!(!debounce.fire_if_due(start + ms(1000)));
    }

    #[test]
    fn test_reschedule_pushes_deadline() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::new(ms(300));
        debounce.schedule(start);
        debounce.schedule(start + ms(200));

        assert!(!debounce.fire_if_due(start + ms(300)));
        assert!(debounce.fire_if_due(start + ms(500)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::default();
        debounce.schedule(start);
        debounce.cancel();
        assert!(!debounce.fire_if_due(start + ms(10_000)));
    }
}
