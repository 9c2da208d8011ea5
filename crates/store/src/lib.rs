//! `shopstock-store` — snapshot persistence abstraction.
//!
//! The core never defines an on-disk format; it only asks a store to load
//! or save whole snapshots. Implementations here: an in-memory store for
//! tests/dev and a JSON-file store for the single-user desktop case.

pub mod error;
pub mod json_file;
pub mod memory;

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Load/save interface for one snapshot type.
///
/// `load` returns `Ok(None)` when nothing has been persisted yet — a fresh
/// install, not an error. A snapshot that exists but cannot be decoded is
/// an error; the caller decides whether to degrade to a default.
pub trait SnapshotStore<T>: Send + Sync {
    fn load(&self) -> Result<Option<T>, StoreError>;

    fn save(&self, snapshot: &T) -> Result<(), StoreError>;
}
