use std::time::{Duration, Instant};

pub const TIME_LIMIT_SECS: u32 = 30;
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running(u32),
    Expired,
}

/// One second off the clock. Reaching zero expires the session on the same tick.
pub fn tick(time_left: u32) -> TickOutcome {
    match time_left.saturating_sub(1) {
        0 => TickOutcome::Expired,
        remaining => TickOutcome::Running(remaining),
    }
}

/// The single recurring schedule driving a session's clock.
///
/// The countdown does not own a thread or a callback: the event loop polls it
/// with the current instant, and it reports whether a tick has come due. Once
/// cancelled it never fires again until re-armed for a new session.
#[derive(Debug, Clone)]
pub struct Countdown {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Countdown {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns true and schedules the following tick if one is due at `now`.
    /// Call repeatedly to drain ticks missed during a long stall.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(due + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}
