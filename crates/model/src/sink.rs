//! Change notification seam.
//!
//! After every successful mutation the model calls the sink synchronously
//! with the new snapshot. This replaces publish/subscribe fan-out with one
//! explicit, injected callback — the persistence layer is the usual
//! implementor.

use std::sync::Arc;

use shopstock_catalog::Catalog;
use shopstock_ledger::SalesHistory;
use shopstock_store::SnapshotStore;

/// Receives snapshots after successful mutations.
pub trait ChangeSink: Send + Sync {
    fn catalog_changed(&self, snapshot: &Catalog);

    fn history_changed(&self, history: &SalesHistory);
}

/// Sink that ignores all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ChangeSink for NullSink {
    fn catalog_changed(&self, _snapshot: &Catalog) {}

    fn history_changed(&self, _history: &SalesHistory) {}
}

/// Sink that persists every snapshot to the injected stores.
///
/// A failed save is logged, not propagated: the in-memory mutation already
/// succeeded and the next successful save will carry the same state.
pub struct StoreSink {
    catalog: Arc<dyn SnapshotStore<Catalog>>,
    history: Arc<dyn SnapshotStore<SalesHistory>>,
}

impl StoreSink {
    pub fn new(
        catalog: Arc<dyn SnapshotStore<Catalog>>,
        history: Arc<dyn SnapshotStore<SalesHistory>>,
    ) -> Self {
        Self { catalog, history }
    }
}

impl ChangeSink for StoreSink {
    fn catalog_changed(&self, snapshot: &Catalog) {
        if let Err(err) = self.catalog.save(snapshot) {
            tracing::error!(%err, "failed to persist catalog snapshot");
        }
    }

    fn history_changed(&self, history: &SalesHistory) {
        if let Err(err) = self.history.save(history) {
            tracing::error!(%err, "failed to persist sales history snapshot");
        }
    }
}
