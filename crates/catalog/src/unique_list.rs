//! Insertion-ordered collection with identity-key uniqueness.

use serde::{Deserialize, Serialize};
use shopstock_core::{DomainError, DomainResult, Keyed};

/// A list of entities that preserves insertion order and rejects any two
/// items sharing an identity key.
///
/// Serialized as a plain vector; deserialization goes back through
/// [`UniqueList::add`], so a snapshot containing duplicates is rejected
/// rather than silently accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<T>", into = "Vec<T>")]
pub struct UniqueList<T: Keyed + Clone> {
    items: Vec<T>,
}

impl<T: Keyed + Clone> UniqueList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item, preserving insertion order.
    pub fn add(&mut self, item: T) -> DomainResult<()> {
        if self.contains(&item.key()) {
            return Err(DomainError::duplicate_entity(item.key().to_string()));
        }
        self.items.push(item);
        Ok(())
    }

    /// Replace the item keyed by `target` with `replacement`, in place
    /// (same position).
    ///
    /// The replacement may keep the target's key or move to a fresh one;
    /// colliding with a *different* existing item is rejected.
    pub fn replace(&mut self, target: &T::Key, replacement: T) -> DomainResult<()> {
        let position = self
            .position(target)
            .ok_or_else(|| DomainError::entity_not_found(target.to_string()))?;
        let new_key = replacement.key();
        if new_key != *target && self.contains(&new_key) {
            return Err(DomainError::duplicate_entity(new_key.to_string()));
        }
        self.items[position] = replacement;
        Ok(())
    }

    /// Remove and return the item keyed by `key`.
    pub fn remove(&mut self, key: &T::Key) -> DomainResult<T> {
        let position = self
            .position(key)
            .ok_or_else(|| DomainError::entity_not_found(key.to_string()))?;
        Ok(self.items.remove(position))
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.position(key).map(|i| &self.items[i])
    }

    /// Read-only ordered view.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, key: &T::Key) -> Option<usize> {
        self.items.iter().position(|item| item.key() == *key)
    }
}

impl<T: Keyed + Clone> Default for UniqueList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed + Clone> TryFrom<Vec<T>> for UniqueList<T> {
    type Error = DomainError;

    fn try_from(items: Vec<T>) -> DomainResult<Self> {
        let mut list = Self::new();
        for item in items {
            list.add(item)?;
        }
        Ok(list)
    }
}

impl<T: Keyed + Clone> From<UniqueList<T>> for Vec<T> {
    fn from(list: UniqueList<T>) -> Self {
        list.items
    }
}

impl<'a, T: Keyed + Clone> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
