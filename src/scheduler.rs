use std::time::{Duration, Instant};

/// Keeps track of when the next tick of the game is due.
///
/// The ticker is "armed" when a deadline has been set.  The event loop arms
/// it before waiting for input while the game is being played, disarms it
/// once the tick has fired, and keeps it disarmed while the game is paused or
/// over, so that resuming always waits a full period before the next tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    pub(crate) fn new(period: Duration) -> Ticker {
        Ticker {
            period,
            deadline: None,
        }
    }

    /// Arm the ticker if it isn't armed already, and return how long there is
    /// from `now` until the next tick is due
    pub(crate) fn arm(&mut self, now: Instant) -> Duration {
        let deadline = *self.deadline.get_or_insert(now + self.period);
        deadline.saturating_duration_since(now)
    }

    pub(crate) fn disarm(&mut self) {
        self.deadline = None;
    }

    #[cfg(test)]
    pub(crate) fn armed(&self) -> bool {
        self.deadline.is_some()
    }
}
