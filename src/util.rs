//! Shared utilities: debouncing and word tokenization

use std::time::{Duration, Instant};

/// Count words in a text: runs of non-whitespace, empty tokens excluded
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Trailing-edge timer debounce.
///
/// `touch` arms (or re-arms) the timer; `poll` reports readiness once after
/// the quiet period elapses; `flush` fires immediately. Callers drive `poll`
/// from their own scheduling loop, so the debouncer holds no thread or timer
/// handle to leak on teardown.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm the timer, pushing any pending deadline back by the full delay
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True exactly once when the quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Fire immediately if pending. Returns whether anything was pending.
    pub fn flush(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Drop any pending deadline without firing
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_basic() {
        assert_eq!(count_words("hello world"), 2);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("  a\tb\nc  "), 3);
    }

    #[test]
    fn test_debouncer_fires_after_quiet_period() {
        let mut d = Debouncer::new(Duration::from_millis(100));
        let t0 = Instant::now();
        d.touch(t0);
        assert!(!d.poll(t0 + Duration::from_millis(50)));
        assert!(d.poll(t0 + Duration::from_millis(100)));
        // fires once
        assert!(!d.poll(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_debouncer_touch_extends_deadline() {
        let mut d = Debouncer::new(Duration::from_millis(100));
        let t0 = Instant::now();
        d.touch(t0);
        d.touch(t0 + Duration::from_millis(80));
        assert!(!d.poll(t0 + Duration::from_millis(120)));
        assert!(d.poll(t0 + Duration::from_millis(180)));
    }

    #[test]
    fn test_debouncer_flush_fires_immediately() {
        let mut d = Debouncer::new(Duration::from_secs(10));
        d.touch(Instant::now());
        assert!(d.flush());
        assert!(!d.is_pending());
        assert!(!d.flush());
    }

    #[test]
    fn test_debouncer_cancel_discards() {
        let mut d = Debouncer::new(Duration::from_millis(10));
        let t0 = Instant::now();
        d.touch(t0);
        d.cancel();
        assert!(!d.poll(t0 + Duration::from_secs(1)));
    }
}
