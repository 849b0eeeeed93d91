//! Single-deadline debounce timer.
//!
//! Every `schedule` replaces the pending deadline, so a burst of calls
//! fires once, `delay` after the last one.

use std::time::Duration;

use tokio::time::Instant;

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

    pub fn schedule(&mut self, now: Instant) -> Instant {
        let deadline = now + self.delay;
        self.deadline = Some(deadline);
        deadline
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(20));
        d.schedule(start);
        assert!(!d.take_due(start + Duration::from_millis(19)));
        assert!(d.take_due(start + Duration::from_millis(20)));
        assert!(!d.take_due(start + Duration::from_millis(40)));
    }

    #[test]
    fn reschedule_pushes_deadline_back() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(20));
        d.schedule(start);
        d.schedule(start + Duration::from_millis(15));
        assert!(!d.take_due(start + Duration::from_millis(25)));
        assert!(d.take_due(start + Duration::from_millis(35)));
    }

    #[test]
    fn cancel_drops_pending() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(20));
        d.schedule(start);
        assert!(d.is_pending());
        d.cancel();
        assert!(d.deadline().is_none());
        assert!(!d.take_due(start + Duration::from_secs(1)));
    }

    #[test]
    fn zero_delay_is_due_immediately() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::ZERO);
        d.schedule(start);
        assert!(d.take_due(start));
    }
}
