//! `shopstock-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod clock;
pub mod entity;
pub mod error;
pub mod time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Keyed;
pub use error::{DomainError, DomainResult};
pub use time::{DayKey, Timestamp};
