use std::time::{Duration, Instant};

/// Recurring redraw timer, polled by whoever drives the renderer.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    running: bool,
    // `None` while running means the next poll fires immediately.
    next_due: Option<Instant>,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
            next_due: None,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.next_due = None;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.running && self.next_due.map_or(true, |due| now >= due)
    }

    /// Record a tick at `now` and schedule the next one.
    pub fn fire(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Time left until the next tick, `None` when stopped.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        Some(
            self.next_due
                .map_or(Duration::ZERO, |due| due.saturating_duration_since(now)),
        )
    }
}
