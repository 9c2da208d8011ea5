//! The model facade: catalog CRUD, undo/redo bookkeeping, ledger routing.

use std::sync::{Arc, Mutex, MutexGuard};

use shopstock_catalog::{
    Catalog, Distributor, DistributorName, Product, ProductKey, VersionedCatalog,
};
use shopstock_core::{Clock, DayKey, DomainError, DomainResult, Timestamp};
use shopstock_ledger::{Reminder, SalesHistory, Transaction};
use shopstock_store::SnapshotStore;

use crate::sink::ChangeSink;

/// Application model: owns the live catalog and its snapshot history,
/// shares the sales history with the background poller behind one coarse
/// lock, and notifies the change sink after each successful mutation.
///
/// Command execution is single-threaded with respect to domain state; the
/// poller is the only other actor and it only flips reminder shown-flags,
/// under the same lock.
pub struct Model {
    catalog: Catalog,
    versions: VersionedCatalog,
    history: Arc<Mutex<SalesHistory>>,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn ChangeSink>,
}

impl Model {
    pub fn new(
        catalog: Catalog,
        history: SalesHistory,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn ChangeSink>,
    ) -> Self {
        let versions = VersionedCatalog::new(catalog.clone());
        Self {
            catalog,
            versions,
            history: Arc::new(Mutex::new(history)),
            clock,
            sink,
        }
    }

    /// Build a model from persisted snapshots.
    ///
    /// An unreadable snapshot degrades to the empty default for that store
    /// only — the process always starts, with a warning in the log.
    pub fn load(
        catalog_store: &dyn SnapshotStore<Catalog>,
        history_store: &dyn SnapshotStore<SalesHistory>,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn ChangeSink>,
    ) -> Self {
        let catalog = match catalog_store.load() {
            Ok(Some(catalog)) => catalog,
            Ok(None) => Catalog::new(),
            Err(err) => {
                tracing::warn!(%err, "catalog snapshot unreadable, starting empty");
                Catalog::new()
            }
        };
        let history = match history_store.load() {
            Ok(Some(history)) => history,
            Ok(None) => SalesHistory::new(clock.today()),
            Err(err) => {
                tracing::warn!(%err, "sales history snapshot unreadable, starting fresh");
                SalesHistory::new(clock.today())
            }
        };
        Self::new(catalog, history, clock, sink)
    }

    /// The live catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shared handle for the reminder poller.
    pub fn history_handle(&self) -> Arc<Mutex<SalesHistory>> {
        Arc::clone(&self.history)
    }

    /// Snapshots currently held by the undo/redo history.
    pub fn history_depth(&self) -> usize {
        self.versions.depth()
    }

    fn lock_history(&self) -> MutexGuard<'_, SalesHistory> {
        // Poison recovery: the only cross-thread writes are idempotent
        // shown-flag flips, so the state is usable even after a panic.
        self.history.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Commit the live catalog as a new undoable snapshot and notify.
    fn commit_catalog(&mut self) {
        self.versions.commit(self.catalog.clone());
        self.sink.catalog_changed(&self.catalog);
    }

    fn notify_history(&self, history: &SalesHistory) {
        self.sink.history_changed(history);
    }

    // catalog commands

    pub fn add_product(&mut self, product: Product) -> DomainResult<()> {
        self.catalog.add_product(product)?;
        self.commit_catalog();
        Ok(())
    }

    pub fn update_product(&mut self, target: &ProductKey, edited: Product) -> DomainResult<()> {
        self.catalog.update_product(target, edited)?;
        self.commit_catalog();
        Ok(())
    }

    pub fn remove_product(&mut self, key: &ProductKey) -> DomainResult<()> {
        self.catalog.remove_product(key)?;
        self.commit_catalog();
        Ok(())
    }

    pub fn add_distributor(&mut self, distributor: Distributor) -> DomainResult<()> {
        self.catalog.add_distributor(distributor)?;
        self.commit_catalog();
        Ok(())
    }

    pub fn update_distributor(
        &mut self,
        target: &DistributorName,
        edited: Distributor,
    ) -> DomainResult<()> {
        self.catalog.update_distributor(target, edited)?;
        self.commit_catalog();
        Ok(())
    }

    pub fn remove_distributor(&mut self, name: &DistributorName) -> DomainResult<()> {
        self.catalog.remove_distributor(name)?;
        self.commit_catalog();
        Ok(())
    }

    // undo/redo

    pub fn can_undo(&self) -> bool {
        self.versions.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.versions.can_redo()
    }

    pub fn undo(&mut self) -> DomainResult<()> {
        self.catalog = self.versions.undo()?.clone();
        self.sink.catalog_changed(&self.catalog);
        Ok(())
    }

    pub fn redo(&mut self) -> DomainResult<()> {
        self.catalog = self.versions.redo()?.clone();
        self.sink.catalog_changed(&self.catalog);
        Ok(())
    }

    // ledger commands

    /// Record a sale on the active day and deduct the sold items from the
    /// product's stock (one committed catalog change).
    ///
    /// The ledger accepts or rejects first; stock is only touched after
    /// the transaction is in.
    pub fn record_sale(
        &mut self,
        time: Timestamp,
        product: &ProductKey,
        quantity: u32,
        amount: i64,
    ) -> DomainResult<()> {
        let current = self
            .catalog
            .product(product)
            .ok_or_else(|| DomainError::entity_not_found(product.to_string()))?
            .clone();
        let transaction = Transaction::new(time, product.clone(), quantity, amount)?;
        {
            let mut history = self.lock_history();
            history.record_transaction(transaction)?;
            self.notify_history(&history);
        }
        self.catalog.update_product(product, current.after_sale(quantity))?;
        self.commit_catalog();
        Ok(())
    }

    pub fn add_reminder(&mut self, time: Timestamp, message: &str) -> DomainResult<()> {
        let reminder = Reminder::new(time, message)?;
        let mut history = self.lock_history();
        history.add_reminder(reminder)?;
        self.notify_history(&history);
        Ok(())
    }

    pub fn remove_reminder(&mut self, at: &Timestamp) -> DomainResult<()> {
        let mut history = self.lock_history();
        history.remove_reminder(at)?;
        self.notify_history(&history);
        Ok(())
    }

    /// Explicit day rollover to the clock's current date.
    pub fn end_day(&mut self) {
        let next = self.clock.today();
        let mut history = self.lock_history();
        history.end_day(next);
        self.notify_history(&history);
    }

    // ledger queries

    /// Formatted transaction listing for the active day.
    pub fn active_day_summary(&self) -> String {
        self.lock_history().active_day().transactions_summary()
    }

    /// Formatted transaction listing for a recorded day.
    pub fn day_summary(&self, day: &DayKey) -> DomainResult<String> {
        Ok(self.lock_history().day(day)?.transactions_summary())
    }

    /// The most recently recorded sale.
    pub fn last_transaction(&self) -> Option<Transaction> {
        self.lock_history().last_transaction().cloned()
    }

    /// Read-only: reminders due right now on the active day, shown or not.
    pub fn due_reminders(&self) -> Vec<Reminder> {
        let now = self.clock.now();
        self.lock_history()
            .due_reminders(&now)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Due, not-yet-shown reminders; marks them shown (poller surface).
    pub fn due_pending_reminders(&self) -> Vec<Reminder> {
        let now = self.clock.now();
        self.lock_history().due_pending_reminders(&now)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use shopstock_catalog::{Phone, ProductName, SerialNumber, Tag};
    use shopstock_core::{FixedClock, Keyed};
    use shopstock_store::{MemoryStore, StoreError};

    use super::*;
    use crate::sink::{NullSink, StoreSink};

    fn ts(raw: &str) -> Timestamp {
        Timestamp::parse(raw).unwrap()
    }

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock::at(ts("2024/03/05 09:30:00")))
    }

    fn product(name: &str, serial: &str, items: u32) -> Product {
        Product::new(
            ProductName::new(name).unwrap(),
            SerialNumber::new(serial).unwrap(),
            DistributorName::new("Acme Wholesale").unwrap(),
            "shelf 3",
            items,
            BTreeSet::new(),
        )
    }

    fn distributor(name: &str) -> Distributor {
        Distributor::new(
            DistributorName::new(name).unwrap(),
            Phone::new("5551234").unwrap(),
            BTreeSet::new(),
            BTreeSet::from([Tag::new("wholesale").unwrap()]),
        )
    }

    fn empty_model() -> Model {
        let clock = clock();
        let history = SalesHistory::new(clock.today());
        Model::new(Catalog::new(), history, clock, Arc::new(NullSink))
    }

    #[test]
    fn mutations_commit_and_undo_redo_restore() {
        let mut model = empty_model();
        model.add_product(product("Green Tea", "100", 5)).unwrap();
        model.add_distributor(distributor("Acme Wholesale")).unwrap();
        assert_eq!(model.history_depth(), 3); // initial + 2 commits

        let full = model.catalog().clone();
        model.undo().unwrap();
        assert!(model.catalog().distributors().is_empty());
        model.undo().unwrap();
        assert!(model.catalog().products().is_empty());
        assert_eq!(model.undo().unwrap_err(), DomainError::NoPreviousState);

        model.redo().unwrap();
        model.redo().unwrap();
        assert_eq!(model.catalog(), &full);
        assert_eq!(model.redo().unwrap_err(), DomainError::NoNextState);
    }

    #[test]
    fn commit_after_undo_discards_redo_tail() {
        let mut model = empty_model();
        model.add_product(product("Green Tea", "100", 5)).unwrap();
        model.add_product(product("Hammer", "200", 2)).unwrap();
        model.undo().unwrap();

        model.add_product(product("Nails", "300", 90)).unwrap();
        assert!(!model.can_redo());
        assert_eq!(model.redo().unwrap_err(), DomainError::NoNextState);
    }

    #[test]
    fn record_sale_updates_ledger_and_stock() {
        let mut model = empty_model();
        model.add_product(product("Green Tea", "100", 5)).unwrap();
        let key = product("Green Tea", "100", 5).key();

        model
            .record_sale(ts("2024/03/05 09:00:00"), &key, 2, 700)
            .unwrap();

        assert_eq!(model.catalog().product(&key).unwrap().remaining_items(), 3);
        let last = model.last_transaction().unwrap();
        assert_eq!(last.quantity(), 2);
        assert_eq!(last.product(), &key);
        assert!(model.active_day_summary().contains("09:00:00"));

        // the stock change is one more undoable commit
        model.undo().unwrap();
        assert_eq!(model.catalog().product(&key).unwrap().remaining_items(), 5);
    }

    #[test]
    fn sale_of_unknown_product_fails_without_side_effects() {
        let mut model = empty_model();
        let key = product("Ghost", "999", 1).key();
        assert!(matches!(
            model.record_sale(ts("2024/03/05 09:00:00"), &key, 1, 100),
            Err(DomainError::EntityNotFound(_))
        ));
        assert!(model.last_transaction().is_none());
        assert_eq!(model.history_depth(), 1);
    }

    #[test]
    fn sale_on_closed_day_leaves_stock_untouched() {
        let mut model = empty_model();
        model.add_product(product("Green Tea", "100", 5)).unwrap();
        let key = product("Green Tea", "100", 5).key();
        model.end_day(); // same date: active day is now closed

        assert!(matches!(
            model.record_sale(ts("2024/03/05 10:00:00"), &key, 1, 350),
            Err(DomainError::DayClosed(_))
        ));
        assert_eq!(model.catalog().product(&key).unwrap().remaining_items(), 5);
    }

    #[test]
    fn reminder_flow_through_the_model() {
        let mut model = empty_model();
        model.add_reminder(ts("2024/03/05 08:00:00"), "restock").unwrap();
        model.add_reminder(ts("2024/03/05 10:00:00"), "order stock").unwrap();
        assert!(matches!(
            model.add_reminder(ts("2024/03/05 08:00:00"), "again"),
            Err(DomainError::DuplicateReminder(_))
        ));

        // clock is pinned at 09:30
        assert_eq!(model.due_reminders().len(), 1);
        assert_eq!(model.due_pending_reminders().len(), 1);
        assert!(model.due_pending_reminders().is_empty());

        model.remove_reminder(&ts("2024/03/05 10:00:00")).unwrap();
        assert!(matches!(
            model.remove_reminder(&ts("2024/03/05 10:00:00")),
            Err(DomainError::ReminderNotFound(_))
        ));
    }

    #[test]
    fn day_summary_for_unknown_date_fails() {
        let model = empty_model();
        assert!(matches!(
            model.day_summary(&DayKey::parse("1999/01/01").unwrap()),
            Err(DomainError::DayNotFound(_))
        ));
    }

    #[test]
    fn store_sink_persists_each_mutation() {
        let catalog_store: Arc<MemoryStore<Catalog>> = Arc::new(MemoryStore::new());
        let history_store: Arc<MemoryStore<SalesHistory>> = Arc::new(MemoryStore::new());
        let sink = StoreSink::new(catalog_store.clone(), history_store.clone());

        let clock = clock();
        let history = SalesHistory::new(clock.today());
        let mut model = Model::new(Catalog::new(), history, clock, Arc::new(sink));

        model.add_product(product("Green Tea", "100", 5)).unwrap();
        model.add_reminder(ts("2024/03/05 08:00:00"), "restock").unwrap();

        let persisted_catalog = catalog_store.load().unwrap().unwrap();
        assert_eq!(&persisted_catalog, model.catalog());
        let persisted_history = history_store.load().unwrap().unwrap();
        assert_eq!(persisted_history.active_day().reminders().count(), 1);
    }

    #[test]
    fn load_round_trips_persisted_state() {
        let catalog_store: Arc<MemoryStore<Catalog>> = Arc::new(MemoryStore::new());
        let history_store: Arc<MemoryStore<SalesHistory>> = Arc::new(MemoryStore::new());
        {
            let sink = StoreSink::new(catalog_store.clone(), history_store.clone());
            let clock = clock();
            let history = SalesHistory::new(clock.today());
            let mut model = Model::new(Catalog::new(), history, clock, Arc::new(sink));
            model.add_product(product("Green Tea", "100", 5)).unwrap();
        }

        let reloaded = Model::load(
            catalog_store.as_ref(),
            history_store.as_ref(),
            clock(),
            Arc::new(NullSink),
        );
        assert_eq!(reloaded.catalog().products().len(), 1);
        assert!(reloaded.catalog().has_product(&product("Green Tea", "100", 5).key()));
    }

    /// Store whose load always fails, for the degraded-startup path.
    struct BrokenStore;

    impl<T: Send + Sync> shopstock_store::SnapshotStore<T> for BrokenStore {
        fn load(&self) -> Result<Option<T>, StoreError> {
            Err(StoreError::Poisoned)
        }

        fn save(&self, _snapshot: &T) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
    }

    #[test]
    fn unreadable_snapshots_degrade_to_defaults() {
        let model = Model::load(&BrokenStore, &BrokenStore, clock(), Arc::new(NullSink));
        assert!(model.catalog().products().is_empty());
        assert_eq!(
            model.history_handle().lock().unwrap().active_day_key().as_str(),
            "2024/03/05"
        );
    }
}
