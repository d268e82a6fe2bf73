//! Time source for history timestamps.

use chrono::{DateTime, Utc};

/// Source of the wall-clock time stamped on history entries.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// [`Clock`] backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
