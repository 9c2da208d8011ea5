//! `shopstock-ledger` — the time-indexed sales ledger.
//!
//! Transactions and reminders are partitioned into [`BusinessDay`]s keyed
//! by date; [`SalesHistory`] owns the days and routes operations to the
//! single active one.

pub mod business_day;
pub mod reminder;
pub mod sales_history;
pub mod transaction;

pub use business_day::BusinessDay;
pub use reminder::Reminder;
pub use sales_history::SalesHistory;
pub use transaction::Transaction;
