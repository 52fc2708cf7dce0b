//! Search control: deadline plus a latched stop flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error::SearchError;
use crate::time::Deadline;

/// Controls when a search should stop.
///
/// Polled at the top of every negamax and quiescence call. Supports two
/// modes:
/// - **Infinite**: never cancels; depth alone bounds the search
/// - **Timed**: the clock starts immediately and runs for a fixed duration
pub struct SearchControl {
    stopped: AtomicBool,
    deadline: Deadline,
}

impl SearchControl {
    /// Create control without a time limit.
    pub fn new_infinite() -> Self {
        Self {
            stopped: AtomicBool::new(false),
            deadline: Deadline::never(),
        }
    }

    /// Create control that expires `limit` from now.
    pub fn new_timed(limit: Duration) -> Self {
        Self {
            stopped: AtomicBool::new(false),
            deadline: Deadline::after(limit),
        }
    }

    /// Fail with [`SearchError::Cancelled`] once the search must abort.
    ///
    /// When the deadline fires, the stop flag is set so subsequent calls
    /// return immediately without re-reading the clock.
    pub fn check(&self) -> Result<(), SearchError> {
        if self.should_stop() {
            Err(SearchError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Whether the search should abort immediately.
    pub fn should_stop(&self) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }
        if self.deadline.expired() {
            self.stopped.store(true, Ordering::Release);
            return true;
        }
        false
    }

    /// Whether iterative deepening may start another depth.
    pub fn should_stop_iterating(&self) -> bool {
        self.should_stop()
    }

    /// Elapsed time since the control was created.
    pub fn elapsed(&self) -> Duration {
        self.deadline.elapsed()
    }
}
