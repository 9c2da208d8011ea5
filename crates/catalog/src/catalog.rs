//! The catalog: unique-keyed products and distributors, one snapshot unit.

use serde::{Deserialize, Serialize};
use shopstock_core::{DomainResult, Keyed};

use crate::distributor::{Distributor, DistributorName};
use crate::product::{Product, ProductKey};
use crate::tag::Tag;
use crate::unique_list::UniqueList;

/// All catalog data at one point in time.
///
/// Pure collection: no persistence or versioning side effects here — the
/// model layer commits snapshots and notifies the store after each
/// successful mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: UniqueList<Product>,
    distributors: UniqueList<Distributor>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    // product operations

    pub fn add_product(&mut self, product: Product) -> DomainResult<()> {
        self.products.add(product)
    }

    /// Replace `target` with `edited`, in place. The edited product may
    /// change identity as long as it does not collide with another entry.
    pub fn update_product(&mut self, target: &ProductKey, edited: Product) -> DomainResult<()> {
        self.products.replace(target, edited)
    }

    pub fn remove_product(&mut self, key: &ProductKey) -> DomainResult<Product> {
        self.products.remove(key)
    }

    pub fn has_product(&self, key: &ProductKey) -> bool {
        self.products.contains(key)
    }

    pub fn product(&self, key: &ProductKey) -> Option<&Product> {
        self.products.get(key)
    }

    /// Read-only ordered view of the products.
    pub fn products(&self) -> &[Product] {
        self.products.as_slice()
    }

    pub fn products_with_tag(&self, tag: &Tag) -> Vec<&Product> {
        self.products.iter().filter(|p| p.has_tag(tag)).collect()
    }

    // distributor operations

    pub fn add_distributor(&mut self, distributor: Distributor) -> DomainResult<()> {
        self.distributors.add(distributor)
    }

    pub fn update_distributor(
        &mut self,
        target: &DistributorName,
        edited: Distributor,
    ) -> DomainResult<()> {
        self.distributors.replace(target, edited)
    }

    pub fn remove_distributor(&mut self, name: &DistributorName) -> DomainResult<Distributor> {
        self.distributors.remove(name)
    }

    pub fn has_distributor(&self, name: &DistributorName) -> bool {
        self.distributors.contains(name)
    }

    pub fn distributor(&self, name: &DistributorName) -> Option<&Distributor> {
        self.distributors.get(name)
    }

    /// Read-only ordered view of the distributors.
    pub fn distributors(&self) -> &[Distributor] {
        self.distributors.as_slice()
    }

    pub fn distributors_with_tag(&self, tag: &Tag) -> Vec<&Distributor> {
        self.distributors.iter().filter(|d| d.has_tag(tag)).collect()
    }
}
