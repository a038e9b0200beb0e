use std::time::{Duration, Instant};

/// One-shot deadline checked cooperatively from the UI tick.
///
/// Replaces a platform timer: nothing fires on its own, the owner asks
/// [`is_due`](Self::is_due) with the tick's timestamp.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    pub const fn disarmed() -> Self {
        Self { at: None }
    }

    /// Arms (or re-arms) the deadline `after` from `now`.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.at = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.at = None;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.at.is_some()
    }

    /// `true` once `now` has reached the armed instant. A disarmed deadline is never due.
    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        self.at.is_some_and(|at| now >= at)
    }

    pub fn instant(&self) -> Option<Instant> {
        self.at
    }
}
