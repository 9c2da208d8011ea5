//! The full sales history: business days keyed by date, one active.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shopstock_core::{DayKey, DomainError, DomainResult, Timestamp};

use crate::business_day::BusinessDay;
use crate::reminder::Reminder;
use crate::transaction::Transaction;

/// Owns every [`BusinessDay`]; exactly one is active (accepting sales).
///
/// Errors from the active day propagate unchanged — this layer adds no
/// re-wrapping, only routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SalesHistorySnapshot", into = "SalesHistorySnapshot")]
pub struct SalesHistory {
    days: BTreeMap<DayKey, BusinessDay>,
    active: DayKey,
    last_transaction: Option<Transaction>,
}

/// Serde representation; `TryFrom` re-checks the active-day invariant so a
/// hand-edited or corrupt snapshot cannot load into an invalid history.
#[derive(Serialize, Deserialize)]
struct SalesHistorySnapshot {
    days: BTreeMap<DayKey, BusinessDay>,
    active: DayKey,
    last_transaction: Option<Transaction>,
}

impl TryFrom<SalesHistorySnapshot> for SalesHistory {
    type Error = DomainError;

    fn try_from(snapshot: SalesHistorySnapshot) -> DomainResult<Self> {
        if !snapshot.days.contains_key(&snapshot.active) {
            return Err(DomainError::validation(format!(
                "active day {} missing from the day map",
                snapshot.active
            )));
        }
        for (key, day) in &snapshot.days {
            if day.day() != key {
                return Err(DomainError::validation(format!(
                    "day recorded under {} says it is {}",
                    key,
                    day.day()
                )));
            }
        }
        Ok(Self {
            days: snapshot.days,
            active: snapshot.active,
            last_transaction: snapshot.last_transaction,
        })
    }
}

impl From<SalesHistory> for SalesHistorySnapshot {
    fn from(history: SalesHistory) -> Self {
        Self {
            days: history.days,
            active: history.active,
            last_transaction: history.last_transaction,
        }
    }
}

impl SalesHistory {
    /// History with a single open day for `today`.
    pub fn new(today: DayKey) -> Self {
        let mut days = BTreeMap::new();
        days.insert(today.clone(), BusinessDay::new(today.clone()));
        Self {
            days,
            active: today,
            last_transaction: None,
        }
    }

    pub fn active_day_key(&self) -> &DayKey {
        &self.active
    }

    /// The day currently accepting sales.
    pub fn active_day(&self) -> &BusinessDay {
        // Every constructor and mutation keeps the active key in the map.
        self.days
            .get(&self.active)
            .expect("active day is always present in the day map")
    }

    fn active_day_mut(&mut self) -> &mut BusinessDay {
        let key = self.active.clone();
        self.days
            .entry(key.clone())
            .or_insert_with(|| BusinessDay::new(key))
    }

    /// Look up a recorded day.
    pub fn day(&self, key: &DayKey) -> DomainResult<&BusinessDay> {
        self.days
            .get(key)
            .ok_or_else(|| DomainError::day_not_found(key.as_str()))
    }

    /// All recorded days in date order.
    pub fn days(&self) -> impl Iterator<Item = &BusinessDay> {
        self.days.values()
    }

    /// Record a sale on the active day.
    pub fn record_transaction(&mut self, transaction: Transaction) -> DomainResult<()> {
        self.active_day_mut().add_transaction(transaction.clone())?;
        self.last_transaction = Some(transaction);
        Ok(())
    }

    /// The most recently recorded sale, if any.
    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.last_transaction.as_ref()
    }

    /// Schedule a reminder on the active day.
    pub fn add_reminder(&mut self, reminder: Reminder) -> DomainResult<()> {
        self.active_day_mut().add_reminder(reminder)
    }

    /// Remove the active day's reminder scheduled at `at`.
    pub fn remove_reminder(&mut self, at: &Timestamp) -> DomainResult<Reminder> {
        self.active_day_mut().remove_reminder(at)
    }

    /// Read-only due reminders on the active day.
    pub fn due_reminders(&self, now: &Timestamp) -> Vec<&Reminder> {
        self.active_day().due_reminders(now)
    }

    /// Due, not-yet-shown reminders on the active day; marks them shown.
    pub fn due_pending_reminders(&mut self, now: &Timestamp) -> Vec<Reminder> {
        self.active_day_mut().due_pending_reminders(now)
    }

    /// Explicit day rollover: close the active day, then activate `next`
    /// (created if new, reopened if it is a different known date).
    ///
    /// Rolling onto the currently active date just closes it — the day has
    /// been ended and stays closed until a later rollover moves on.
    pub fn end_day(&mut self, next: DayKey) {
        self.active_day_mut().close();
        if next != self.active {
            let day = self
                .days
                .entry(next.clone())
                .or_insert_with(|| BusinessDay::new(next.clone()));
            day.reopen();
            self.active = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use shopstock_catalog::{ProductKey, ProductName, SerialNumber};

    use super::*;

    fn ts(raw: &str) -> Timestamp {
        Timestamp::parse(raw).unwrap()
    }

    fn dk(raw: &str) -> DayKey {
        DayKey::parse(raw).unwrap()
    }

    fn sale(at: &str) -> Transaction {
        let key = ProductKey {
            name: ProductName::new("Green Tea").unwrap(),
            serial: SerialNumber::new("100").unwrap(),
        };
        Transaction::new(ts(at), key, 1, 350).unwrap()
    }

    fn history() -> SalesHistory {
        SalesHistory::new(dk("2024/03/05"))
    }

    #[test]
    fn starts_with_one_open_active_day() {
        let history = history();
        assert_eq!(history.active_day_key(), &dk("2024/03/05"));
        assert!(!history.active_day().is_closed());
        assert_eq!(history.days().count(), 1);
    }

    #[test]
    fn records_route_to_the_active_day() {
        let mut history = history();
        history.record_transaction(sale("2024/03/05 10:00:00")).unwrap();
        assert_eq!(history.active_day().transaction_count(), 1);
        assert_eq!(
            history.last_transaction().unwrap().timestamp(),
            &ts("2024/03/05 10:00:00")
        );
        // duplicate propagates unchanged from the day
        assert!(matches!(
            history.record_transaction(sale("2024/03/05 10:00:00")),
            Err(DomainError::DuplicateTransaction(_))
        ));
    }

    #[test]
    fn unknown_day_lookup_fails() {
        let history = history();
        assert!(matches!(
            history.day(&dk("1999/01/01")),
            Err(DomainError::DayNotFound(_))
        ));
        assert!(history.day(&dk("2024/03/05")).is_ok());
    }

    #[test]
    fn end_day_closes_and_advances() {
        let mut history = history();
        history.record_transaction(sale("2024/03/05 10:00:00")).unwrap();
        history.end_day(dk("2024/03/06"));

        assert!(history.day(&dk("2024/03/05")).unwrap().is_closed());
        assert_eq!(history.active_day_key(), &dk("2024/03/06"));
        assert!(!history.active_day().is_closed());

        // sales to the old day are over; the new active day accepts them
        history.record_transaction(sale("2024/03/06 09:00:00")).unwrap();
        assert_eq!(history.active_day().transaction_count(), 1);
    }

    #[test]
    fn ending_the_same_day_leaves_it_closed() {
        let mut history = history();
        history.end_day(dk("2024/03/05"));
        assert!(history.active_day().is_closed());
        assert!(matches!(
            history.record_transaction(sale("2024/03/05 10:00:00")),
            Err(DomainError::DayClosed(_))
        ));
    }

    #[test]
    fn rolling_back_onto_a_known_date_reopens_it() {
        let mut history = history();
        history.end_day(dk("2024/03/06"));
        history.end_day(dk("2024/03/05")); // back to the first date
        assert_eq!(history.active_day_key(), &dk("2024/03/05"));
        assert!(!history.active_day().is_closed());
        history.record_transaction(sale("2024/03/05 23:00:00")).unwrap();
    }

    #[test]
    fn reminder_routing_and_due_queries() {
        let mut history = history();
        history
            .add_reminder(Reminder::new(ts("2024/03/05 08:00:00"), "restock").unwrap())
            .unwrap();
        history
            .add_reminder(Reminder::new(ts("2024/03/05 10:00:00"), "order stock").unwrap())
            .unwrap();

        let now = ts("2024/03/05 09:30:00");
        assert_eq!(history.due_reminders(&now).len(), 1);
        assert_eq!(history.due_pending_reminders(&now).len(), 1);
        assert!(history.due_pending_reminders(&now).is_empty());

        assert!(history.remove_reminder(&ts("2024/03/05 10:00:00")).is_ok());
        assert!(matches!(
            history.remove_reminder(&ts("2024/03/05 10:00:00")),
            Err(DomainError::ReminderNotFound(_))
        ));
    }

    #[test]
    fn snapshot_round_trip() {
        let mut history = history();
        history.record_transaction(sale("2024/03/05 10:00:00")).unwrap();
        history.end_day(dk("2024/03/06"));

        let json = serde_json::to_string(&history).unwrap();
        let loaded: SalesHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, history);
    }

    #[test]
    fn snapshot_with_dangling_active_day_is_rejected() {
        let history = history();
        let mut json = serde_json::to_value(&history).unwrap();
        json["active"] = serde_json::Value::String("2030/01/01".to_string());
        assert!(serde_json::from_value::<SalesHistory>(json).is_err());
    }
}
