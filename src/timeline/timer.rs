//! Cancelable deadline timers
//!
//! Both timers are passive: they hold a deadline and report whether it has
//! passed when polled with the current [`Instant`]. The owner polls them from
//! its event loop, so a canceled or rescheduled timer can never fire late.

use std::time::{Duration, Instant};

/// Collapses a burst of triggers into one firing after a quiet period
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            deadline: None,
        }
    }

    /// (Re)start the quiet period; any pending firing is superseded
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once per schedule, when the quiet period has elapsed
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Fixed-interval repeating timer; the first tick is due immediately
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Ticker {
            interval,
            next: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.next = Some(now);
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    /// True when a tick is due; schedules the following tick
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now >= next => {
                self.next = Some(now + self.interval);
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
    fn test_debounce_collapses_bursts() {
        let start = Instant::now();
        let ms = Duration::from_millis;
        let mut debounce = Debouncer::new(ms(100));

        debounce.schedule(start);
        debounce.schedule(start + ms(50));
        assert!(!debounce.fire(start + ms(120)));
        assert!(debounce.fire(start + ms(150)));
        assert!(!debounce.fire(start + ms(300)));
    }

    #[test]
    fn test_debounce_cancel() {
        let start = Instant::now();
        let mut debounce = Debouncer::new(Duration::from_millis(10));
        debounce.schedule(start);
        debounce.cancel();
        assert!(!debounce.is_pending());
        assert!(!debounce.fire(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_ticker_interval() {
        let start = Instant::now();
        let ms = Duration::from_millis;
        let mut ticker = Ticker::new(ms(100));
        assert!(!ticker.fire(start));

        ticker.start(start);
        assert!(ticker.fire(start));
        assert!(!ticker.fire(start + ms(50)));
        assert!(ticker.fire(start + ms(100)));

        ticker.stop();
        assert!(!ticker.fire(start + ms(500)));
    }
}
