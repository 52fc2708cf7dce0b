//! Time management: turn a requested think time into a search deadline.

use std::time::{Duration, Instant};

/// A wall-clock deadline measured from the moment it is created.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    /// A deadline `limit` from now.
    pub fn after(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit: Some(limit),
        }
    }

    /// A deadline that never expires.
    pub fn never() -> Self {
        Self {
            start: Instant::now(),
            limit: None,
        }
    }

    /// Whether more than the allowed time has passed.
    pub fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() > limit)
    }

    /// Time since the deadline was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    #[cfg(test)]
    fn limit(&self) -> Option<Duration> {
        self.limit
    }
}

/// Compute the think time for one request.
///
/// `requested` is in seconds. Missing, negative or non-finite requests use
/// the whole `budget`; anything longer than the budget is capped to it.
pub fn think_time(requested: Option<f64>, budget: Duration) -> Duration {
    requested
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .map_or(budget, |d| d.min(budget))
}
