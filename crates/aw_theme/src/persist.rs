//! Trailing-edge debounce for theme persistence
//!
//! Each `schedule` replaces the pending payload and pushes the deadline out,
//! so a burst of edits produces a single write once the burst settles.

use std::time::{Duration, Instant};

/// Default quiet period before a scheduled write happens.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Holds at most one pending value and its deadline.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value; the deadline restarts at `now + delay`.
    pub fn schedule_at(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    pub fn schedule(&mut self, value: T) {
        self.schedule_at(value, Instant::now());
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Take the pending value if its deadline has passed at `now`.
    pub fn poll_at(&mut self, now: Instant) -> Option<T> {
        let due = self.pending.as_ref().is_some_and(|p| p.deadline <= now);
        if due {
            self.take()
        } else {
            None
        }
    }

    pub fn poll(&mut self) -> Option<T> {
        self.poll_at(Instant::now())
    }

    /// Take the pending value regardless of its deadline.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Put back a value whose write failed, due again at `now`.
    ///
    /// A value scheduled since it was taken is newer and wins.
    pub fn restore_at(&mut self, value: T, now: Instant) {
        if self.pending.is_none() {
            self.pending = Some(Pending {
                value,
                deadline: now,
            });
        }
    }

    pub fn restore(&mut self, value: T) {
        self.restore_at(value, Instant::now());
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn burst_collapses_to_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule_at(1, start);
        debouncer.schedule_at(2, start + Duration::from_millis(100));
        debouncer.schedule_at(3, start + Duration::from_millis(200));

        // 300ms after the first edit, but only 100ms after the last
        assert_eq!(debouncer.poll_at(start + Duration::from_millis(300)), None);
        assert_eq!(debouncer.poll_at(start + Duration::from_millis(500)), Some(3));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn take_ignores_deadline() {
        let mut debouncer = Debouncer::default();
        debouncer.schedule("x");
        assert_eq!(debouncer.take(), Some("x"));
        assert_eq!(debouncer.take(), None);
    }

    #[test]
    fn restore_requeues_without_clobbering_newer_values() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule_at("old", start);
        let taken = debouncer.take().unwrap();
        debouncer.restore_at(taken, start + Duration::from_millis(10));
        assert_eq!(
            debouncer.deadline(),
            Some(start + Duration::from_millis(10))
        );
        assert_eq!(
            debouncer.poll_at(start + Duration::from_millis(10)),
            Some("old")
        );

        debouncer.schedule_at("old", start);
        let taken = debouncer.take().unwrap();
        debouncer.schedule_at("new", start);
        debouncer.restore_at(taken, start);
        assert_eq!(debouncer.take(), Some("new"));
    }
}
