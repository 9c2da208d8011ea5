//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a recoverable, deterministic business failure. Callers
/// (the command layer) translate these into user-facing messages; none of
/// them should ever abort the process. Infrastructure concerns (IO,
/// serialization) belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An entity with the same identity key already exists.
    #[error("duplicate entity: {0}")]
    DuplicateEntity(String),

    /// No entity with the given identity key exists.
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// The business day no longer accepts transactions.
    #[error("business day {0} is closed")]
    DayClosed(String),

    /// A transaction with the same timestamp already exists on the day.
    #[error("duplicate transaction at {0}")]
    DuplicateTransaction(String),

    /// A reminder with the same timestamp already exists on the day.
    #[error("duplicate reminder at {0}")]
    DuplicateReminder(String),

    /// No reminder is scheduled at the given timestamp.
    #[error("no reminder scheduled at {0}")]
    ReminderNotFound(String),

    /// No business day is recorded for the given date.
    #[error("no business day recorded for {0}")]
    DayNotFound(String),

    /// A time string did not match the canonical timestamp format.
    #[error("invalid time format: {0:?}")]
    InvalidTimeFormat(String),

    /// Undo requested with no earlier committed state.
    #[error("no previous state to restore")]
    NoPreviousState,

    /// Redo requested with no undone state ahead of the cursor.
    #[error("no undone state to restore")]
    NoNextState,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_entity(what: impl Into<String>) -> Self {
        Self::DuplicateEntity(what.into())
    }

    pub fn entity_not_found(what: impl Into<String>) -> Self {
        Self::EntityNotFound(what.into())
    }

    pub fn day_closed(day: impl Into<String>) -> Self {
        Self::DayClosed(day.into())
    }

    pub fn duplicate_transaction(at: impl Into<String>) -> Self {
        Self::DuplicateTransaction(at.into())
    }

    pub fn duplicate_reminder(at: impl Into<String>) -> Self {
        Self::DuplicateReminder(at.into())
    }

    pub fn reminder_not_found(at: impl Into<String>) -> Self {
        Self::ReminderNotFound(at.into())
    }

    pub fn day_not_found(day: impl Into<String>) -> Self {
        Self::DayNotFound(day.into())
    }

    pub fn invalid_time(raw: impl Into<String>) -> Self {
        Self::InvalidTimeFormat(raw.into())
    }
}
