//! In-memory snapshot store. Intended for tests/dev.

use std::sync::RwLock;

use crate::error::StoreError;
use crate::SnapshotStore;

/// Holds at most one snapshot behind a lock.
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    slot: RwLock<Option<T>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// A store pre-seeded with a snapshot, as if saved earlier.
    pub fn seeded(snapshot: T) -> Self {
        Self {
            slot: RwLock::new(Some(snapshot)),
        }
    }
}

impl<T: Clone + Send + Sync> SnapshotStore<T> for MemoryStore<T> {
    fn load(&self) -> Result<Option<T>, StoreError> {
        let slot = self.slot.read().map_err(|_| StoreError::Poisoned)?;
        Ok(slot.clone())
    }

    fn save(&self, snapshot: &T) -> Result<(), StoreError> {
        let mut slot = self.slot.write().map_err(|_| StoreError::Poisoned)?;
        *slot = Some(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_none() {
        let store: MemoryStore<String> = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        store.save(&"snapshot".to_string()).unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("snapshot"));
    }

    #[test]
    fn seeded_store_loads_the_seed() {
        let store = MemoryStore::seeded(42u32);
        assert_eq!(store.load().unwrap(), Some(42));
    }
}
