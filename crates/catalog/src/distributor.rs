//! Distributor entity: identity is the distributor name.

use core::fmt;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shopstock_core::{DomainError, DomainResult, Keyed};

use crate::product::ProductName;
use crate::tag::Tag;

/// Distributor name: starts alphanumeric, then alphanumerics and spaces.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DistributorName(String);

impl DistributorName {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let mut chars = raw.chars();
        let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphanumeric())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == ' ');
        if !valid {
            return Err(DomainError::validation(format!(
                "distributor name must be alphanumeric words, got {raw:?}"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DistributorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DistributorName {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(&value)
    }
}

impl From<DistributorName> for String {
    fn from(value: DistributorName) -> Self {
        value.0
    }
}

/// Phone number: at least three digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> DomainResult<Self> {
        if raw.len() < 3 || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "phone must be at least 3 digits, got {raw:?}"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(&value)
    }
}

impl From<Phone> for String {
    fn from(value: Phone) -> Self {
        value.0
    }
}

/// A supplier of catalog products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distributor {
    name: DistributorName,
    phone: Phone,
    products: BTreeSet<ProductName>,
    tags: BTreeSet<Tag>,
}

impl Distributor {
    pub fn new(
        name: DistributorName,
        phone: Phone,
        products: BTreeSet<ProductName>,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            products,
            tags,
        }
    }

    pub fn name(&self) -> &DistributorName {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Names of the products this distributor supplies.
    pub fn products(&self) -> &BTreeSet<ProductName> {
        &self.products
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Copy of this distributor with one more supplied product recorded.
    pub fn with_product(&self, product: ProductName) -> Self {
        let mut updated = self.clone();
        updated.products.insert(product);
        updated
    }
}

impl Keyed for Distributor {
    type Key = DistributorName;

    fn key(&self) -> DistributorName {
        self.name.clone()
    }
}
