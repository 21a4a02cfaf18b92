//! Clock-agnostic debouncing.
//!
//! `Debouncer` only tracks the pending value and its deadline. The platform
//! layer owns the timer: it calls `call` on every invocation and `flush` (or
//! `poll`) when its timer fires.

use web_time::{Duration, Instant};

/// Default quiet period in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Collapses bursts of calls into one, keeping the most recent value.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<T>,
    deadline: Option<Instant>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS as u64))
    }
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
            deadline: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Record a call. Replaces any pending value and restarts the quiet period.
    pub fn call(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        self.deadline = Some(now + self.wait);
    }

    /// Take the pending value if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline {
            Some(deadline) if now >= deadline => self.flush(),
            _ => None,
        }
    }

    /// Take the pending value regardless of the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.deadline = None;
        self.pending.take()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_burst_collapses_to_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));

        let mut fired = Vec::new();
        for i in 0..5u64 {
            let now = start + ms(i * 50);
            debouncer.call(i, now);
            if let Some(v) = debouncer.poll(now) {
                fired.push(v);
            }
        }
        assert!(fired.is_empty());

        // 299ms after the last call: still quiet.
        assert_eq!(debouncer.poll(start + ms(200 + 299)), None);
        assert_eq!(debouncer.poll(start + ms(200 + 300)), Some(4));
        assert_eq!(debouncer.poll(start + ms(2000)), None);
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(100));

        debouncer.call("a", start);
        assert_eq!(debouncer.poll(start + ms(100)), Some("a"));

        debouncer.call("b", start + ms(500));
        assert_eq!(debouncer.poll(start + ms(550)), None);
        assert_eq!(debouncer.poll(start + ms(600)), Some("b"));
    }

    #[test]
    fn test_flush_ignores_deadline() {
        let mut debouncer = Debouncer::default();
        assert_eq!(debouncer.wait(), ms(300));

        debouncer.call(7, Instant::now());
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.flush(), Some(7));
        assert!(!debouncer.is_pending());
        assert!(debouncer.deadline().is_none());
    }
}
