//! Linear undo/redo over committed catalog snapshots.

use shopstock_core::{DomainError, DomainResult};

use crate::catalog::Catalog;

/// A sequence of committed catalog snapshots with a cursor.
///
/// Snapshot-based rather than diff-based: the catalog is bounded by the
/// number of distinct products one shop carries, so whole-copy history is
/// the simpler trade.
///
/// Invariant: the cursor always points at a valid snapshot; committing
/// truncates everything after the cursor before appending.
#[derive(Debug, Clone)]
pub struct VersionedCatalog {
    states: Vec<Catalog>,
    cursor: usize,
}

impl VersionedCatalog {
    /// History seeded with the initial state as the first snapshot.
    pub fn new(initial: Catalog) -> Self {
        Self {
            states: vec![initial],
            cursor: 0,
        }
    }

    /// Record `snapshot` as the newest state and move the cursor onto it.
    ///
    /// Any snapshots ahead of the cursor (undone states) are discarded:
    /// a commit after undo forks history and the old future is gone.
    pub fn commit(&mut self, snapshot: Catalog) {
        self.states.truncate(self.cursor + 1);
        self.states.push(snapshot);
        self.cursor += 1;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.states.len()
    }

    /// Step the cursor back and return the restored snapshot.
    pub fn undo(&mut self) -> DomainResult<&Catalog> {
        if !self.can_undo() {
            return Err(DomainError::NoPreviousState);
        }
        self.cursor -= 1;
        Ok(&self.states[self.cursor])
    }

    /// Step the cursor forward and return the restored snapshot.
    pub fn redo(&mut self) -> DomainResult<&Catalog> {
        if !self.can_redo() {
            return Err(DomainError::NoNextState);
        }
        self.cursor += 1;
        Ok(&self.states[self.cursor])
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &Catalog {
        &self.states[self.cursor]
    }

    /// Number of snapshots currently held.
    pub fn depth(&self) -> usize {
        self.states.len()
    }
}
