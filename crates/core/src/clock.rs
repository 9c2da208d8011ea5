//! Clock abstraction: the single source of "now".
//!
//! Domain code never reads the wall clock directly; it is handed a `Clock`
//! so tests and the poller can control time explicitly.

use chrono::Local;

use crate::time::{DayKey, Timestamp};

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Current time as a canonical timestamp.
    fn now(&self) -> Timestamp;

    /// Current date as a canonical day key.
    fn today(&self) -> DayKey {
        self.now().day()
    }
}

/// Wall-clock time in the machine's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_datetime(Local::now().naive_local())
    }
}

/// A clock pinned to one instant. Test double.
#[derive(Debug, Clone)]
pub struct FixedClock(Timestamp);

impl FixedClock {
    pub fn at(now: Timestamp) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0.clone()
    }
}
