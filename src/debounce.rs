//! Cooperative search debouncing.
//!
//! The engine is single-threaded, so the debouncer carries no timer thread.
//! The host calls [`Debouncer::poke`] on every keystroke and polls from its
//! own event loop; [`Debouncer::poll`] reports readiness exactly once after
//! the delay elapses with no further pokes.

use std::time::{Duration, Instant};

#[derive(Debug)]
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

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Arm, or push back, the deadline.
    pub fn poke(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// True exactly once, when an armed deadline has elapsed.
    pub fn poll(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
