//! Canonical timestamps: fixed-width, lexicographically sortable time strings.
//!
//! Every time value in the domain is a `"YYYY/MM/DD HH:MM:SS"` string
//! (zero-padded, width 19). The format is chosen so that plain string
//! comparison equals chronological comparison; the ordered maps in the
//! ledger rely on this.

use core::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// chrono format string for a full timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
/// chrono format string for a date key (the timestamp's date prefix).
pub const DAY_FORMAT: &str = "%Y/%m/%d";

const TIMESTAMP_WIDTH: usize = 19;
const DAY_WIDTH: usize = 10;

/// A validated point in time, second resolution.
///
/// `Ord` is the lexicographic order of the underlying string, which by
/// construction equals chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(String);

impl Timestamp {
    /// Parse a timestamp, rejecting anything that is not exactly the
    /// canonical shape (width, padding and calendar validity).
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if raw.len() != TIMESTAMP_WIDTH {
            return Err(DomainError::invalid_time(raw));
        }
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
            .map_err(|_| DomainError::invalid_time(raw))?;
        Ok(Self(raw.to_string()))
    }

    /// Format a datetime as a canonical timestamp (infallible).
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self(datetime.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The date this timestamp falls on.
    pub fn day(&self) -> DayKey {
        DayKey(self.0[..DAY_WIDTH].to_string())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::parse(&value)
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

/// A validated calendar date key, `"YYYY/MM/DD"`.
///
/// Keys business days; ordering is lexicographic (= chronological).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(String);

impl DayKey {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if raw.len() != DAY_WIDTH {
            return Err(DomainError::invalid_time(raw));
        }
        NaiveDate::parse_from_str(raw, DAY_FORMAT).map_err(|_| DomainError::invalid_time(raw))?;
        Ok(Self(raw.to_string()))
    }

    /// Format a date as a canonical day key (infallible).
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DAY_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DayKey {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::parse(&value)
    }
}

impl From<DayKey> for String {
    fn from(value: DayKey) -> Self {
        value.0
    }
}
