//! One calendar day of the sales ledger.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use shopstock_core::{DayKey, DomainError, DomainResult, Timestamp};

use crate::reminder::Reminder;
use crate::transaction::Transaction;

/// A day's transactions and reminder schedule.
///
/// Both maps are keyed by timestamp. For transactions the key only serves
/// lookup and duplicate rejection; for reminders the ascending key order is
/// load-bearing — due-reminder queries walk the map in time order and stop
/// at the first entry past "now".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDay {
    day: DayKey,
    transactions: BTreeMap<Timestamp, Transaction>,
    reminders: BTreeMap<Timestamp, Reminder>,
    closed: bool,
}

impl BusinessDay {
    /// A fresh, open day with no entries.
    pub fn new(day: DayKey) -> Self {
        Self {
            day,
            transactions: BTreeMap::new(),
            reminders: BTreeMap::new(),
            closed: false,
        }
    }

    pub fn day(&self) -> &DayKey {
        &self.day
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Stop accepting transactions. Idempotent.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Start accepting transactions again (day rollover onto a known date).
    pub fn reopen(&mut self) {
        self.closed = false;
    }

    /// Record a sale on this day.
    ///
    /// A closed day rejects everything, before any duplicate check.
    pub fn add_transaction(&mut self, transaction: Transaction) -> DomainResult<()> {
        if self.closed {
            return Err(DomainError::day_closed(self.day.as_str()));
        }
        match self.transactions.entry(transaction.timestamp().clone()) {
            Entry::Occupied(existing) => Err(DomainError::duplicate_transaction(
                existing.key().as_str(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(transaction);
                Ok(())
            }
        }
    }

    /// Transactions in ascending timestamp order.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.values()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Schedule a reminder. Reminders are independent of the closed flag.
    pub fn add_reminder(&mut self, reminder: Reminder) -> DomainResult<()> {
        match self.reminders.entry(reminder.timestamp().clone()) {
            Entry::Occupied(existing) => {
                Err(DomainError::duplicate_reminder(existing.key().as_str()))
            }
            Entry::Vacant(slot) => {
                slot.insert(reminder);
                Ok(())
            }
        }
    }

    /// Remove the reminder scheduled at `at`.
    pub fn remove_reminder(&mut self, at: &Timestamp) -> DomainResult<Reminder> {
        self.reminders
            .remove(at)
            .ok_or_else(|| DomainError::reminder_not_found(at.as_str()))
    }

    /// Reminders in ascending timestamp order.
    pub fn reminders(&self) -> impl Iterator<Item = &Reminder> {
        self.reminders.values()
    }

    /// All reminders due at `now`, ascending, shown or not. Read-only.
    ///
    /// The range query never visits entries past `now`.
    pub fn due_reminders(&self, now: &Timestamp) -> Vec<&Reminder> {
        self.reminders.range(..=now.clone()).map(|(_, r)| r).collect()
    }

    /// Due reminders not yet surfaced, each marked shown as it is returned.
    ///
    /// Calling this twice with the same `now` yields the due set once and
    /// then nothing — the at-most-once guarantee for the poller lives here.
    pub fn due_pending_reminders(&mut self, now: &Timestamp) -> Vec<Reminder> {
        let mut pending = Vec::new();
        for (_, reminder) in self.reminders.range_mut(..=now.clone()) {
            if !reminder.shown() {
                reminder.mark_shown();
                pending.push(reminder.clone());
            }
        }
        pending
    }

    /// Human-readable listing of the day's transactions.
    pub fn transactions_summary(&self) -> String {
        let mut out = format!("Transactions on {}:\n", self.day);
        for transaction in self.transactions.values() {
            let _ = writeln!(
                out,
                "{} | {} x{} | amount {}",
                transaction.timestamp(),
                transaction.product(),
                transaction.quantity(),
                transaction.amount(),
            );
        }
        out
    }
}
