//! `shopstock-catalog` — the versioned product/distributor catalog.
//!
//! A [`Catalog`] is two insertion-ordered, identity-unique collections
//! (products and distributors). [`VersionedCatalog`] layers linear
//! undo/redo over committed catalog snapshots.

pub mod catalog;
pub mod distributor;
pub mod product;
pub mod tag;
pub mod unique_list;
pub mod versioned;

pub use catalog::Catalog;
pub use distributor::{Distributor, DistributorName, Phone};
pub use product::{Product, ProductKey, ProductName, SerialNumber};
pub use tag::Tag;
pub use unique_list::UniqueList;
pub use versioned::VersionedCatalog;
