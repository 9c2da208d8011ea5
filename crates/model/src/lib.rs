//! `shopstock-model` — the application model.
//!
//! Wires the catalog, its undo/redo history and the sales ledger together
//! behind one facade, with explicit dependency injection: the model holds
//! its collaborators, nothing is ambient.

pub mod model;
pub mod operation;
pub mod sink;

pub use model::Model;
pub use operation::Operation;
pub use sink::{ChangeSink, NullSink, StoreSink};
