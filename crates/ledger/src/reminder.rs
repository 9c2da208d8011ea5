//! A timed reminder on a business day.

use serde::{Deserialize, Serialize};
use shopstock_core::{DomainError, DomainResult, Timestamp};

/// A message due at a timestamp, surfaced by the background poller.
///
/// The `shown` flag is the only mutable state: the poller sets it when the
/// reminder is handed out, and once set it never clears, which is what
/// bounds delivery to at most once per process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    timestamp: Timestamp,
    message: String,
    shown: bool,
}

impl Reminder {
    pub fn new(timestamp: Timestamp, message: impl Into<String>) -> DomainResult<Self> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(DomainError::validation("reminder message must not be blank"));
        }
        Ok(Self {
            timestamp,
            message,
            shown: false,
        })
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the poller has already surfaced this reminder.
    pub fn shown(&self) -> bool {
        self.shown
    }

    /// Mark as surfaced. Idempotent.
    pub fn mark_shown(&mut self) {
        self.shown = true;
    }

    /// Due means scheduled at or before `now`.
    pub fn is_due(&self, now: &Timestamp) -> bool {
        self.timestamp <= *now
    }
}
