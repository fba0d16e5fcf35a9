//! Footer status text and its refresh timer

use std::time::{Duration, Instant};

use chrono::Local;

/// Produces the text shown in the footer's status area
pub trait StatusSource {
    fn status(&mut self) -> String;
}

impl<F: FnMut() -> String> StatusSource for F {
    fn status(&mut self) -> String {
        self()
    }
}

/// Local wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockStatus;

impl StatusSource for ClockStatus {
    fn status(&mut self) -> String {
        Local::now().format("%a %d %b %H:%M").to_string()
    }
}

/// Decides when the status text is due for a refresh
#[derive(Debug, Clone)]
pub struct StatusTicker {
    interval: Duration,
    last: Option<Instant>,
}

impl StatusTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Whether a refresh is due at `now`; marks it done if so
    pub fn due(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// How long the input loop may block before the next refresh
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last {
            Some(last) => self.interval.saturating_sub(now.duration_since(last)),
            None => Duration::ZERO,
        }
    }
}
