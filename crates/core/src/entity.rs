//! Identity-key trait: "same real-world entity" vs full-field equality.

use core::fmt;

/// Types carrying an identity key used for duplicate rejection.
///
/// The key is the minimal field subset that determines "same real-world
/// entity". It is deliberately distinct from `PartialEq` on the type
/// itself, which compares every field and is used for replacement and
/// snapshot comparison.
pub trait Keyed {
    /// Strongly-typed identity key.
    type Key: Clone + Eq + fmt::Debug + fmt::Display;

    /// Returns the identity key of this entity.
    fn key(&self) -> Self::Key;
}
