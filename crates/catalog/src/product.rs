//! Product entity: identity is (name, serial number).

use core::fmt;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shopstock_core::{DomainError, DomainResult, Keyed};

use crate::distributor::DistributorName;
use crate::tag::Tag;

/// Product name: starts alphanumeric, then alphanumerics and spaces.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let mut chars = raw.chars();
        let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphanumeric())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == ' ');
        if !valid {
            return Err(DomainError::validation(format!(
                "product name must be alphanumeric words, got {raw:?}"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProductName {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(&value)
    }
}

impl From<ProductName> for String {
    fn from(value: ProductName) -> Self {
        value.0
    }
}

/// Manufacturer serial number: one or more digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SerialNumber(String);

impl SerialNumber {
    pub fn new(raw: &str) -> DomainResult<Self> {
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "serial number must be digits, got {raw:?}"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SerialNumber {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(&value)
    }
}

impl From<SerialNumber> for String {
    fn from(value: SerialNumber) -> Self {
        value.0
    }
}

/// Product identity key: name + serial number.
///
/// Two products with the same key are "the same product" for duplicate
/// rejection, regardless of their other fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductKey {
    pub name: ProductName,
    pub serial: SerialNumber,
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (s/n {})", self.name, self.serial)
    }
}

/// A catalog entry for one stocked product.
///
/// Mutation is always update-with-replacement: build a new `Product` and
/// replace the old one through the catalog, never edit in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: ProductName,
    serial: SerialNumber,
    distributor: DistributorName,
    info: String,
    remaining_items: u32,
    tags: BTreeSet<Tag>,
}

impl Product {
    pub fn new(
        name: ProductName,
        serial: SerialNumber,
        distributor: DistributorName,
        info: impl Into<String>,
        remaining_items: u32,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            serial,
            distributor,
            info: info.into(),
            remaining_items,
            tags,
        }
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn serial(&self) -> &SerialNumber {
        &self.serial
    }

    pub fn distributor(&self) -> &DistributorName {
        &self.distributor
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn remaining_items(&self) -> u32 {
        self.remaining_items
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Copy of this product with `quantity` items deducted from stock.
    ///
    /// Saturates at zero; stock cannot go negative.
    pub fn after_sale(&self, quantity: u32) -> Self {
        let mut sold = self.clone();
        sold.remaining_items = self.remaining_items.saturating_sub(quantity);
        sold
    }
}

impl Keyed for Product {
    type Key = ProductKey;

    fn key(&self) -> ProductKey {
        ProductKey {
            name: self.name.clone(),
            serial: self.serial.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, serial: &str, items: u32) -> Product {
        Product::new(
            ProductName::new(name).unwrap(),
            SerialNumber::new(serial).unwrap(),
            DistributorName::new("Acme Wholesale").unwrap(),
            "shelf 3",
            items,
            BTreeSet::new(),
        )
    }

    #[test]
    fn name_validation() {
        assert!(ProductName::new("Green Tea").is_ok());
        assert!(ProductName::new("500g Flour").is_ok());
        assert!(ProductName::new("").is_err());
        assert!(ProductName::new(" leading space").is_err());
        assert!(ProductName::new("semi;colon").is_err());
    }

    #[test]
    fn serial_validation() {
        assert!(SerialNumber::new("0042").is_ok());
        assert!(SerialNumber::new("").is_err());
        assert!(SerialNumber::new("42a").is_err());
    }

    #[test]
    fn identity_ignores_non_key_fields() {
        let a = sample("Green Tea", "100", 5);
        let b = sample("Green Tea", "100", 99);
        assert_eq!(a.key(), b.key());
        assert_ne!(a, b); // full-field equality still differs
    }

    #[test]
    fn after_sale_saturates_at_zero() {
        let p = sample("Green Tea", "100", 3);
        assert_eq!(p.after_sale(2).remaining_items(), 1);
        assert_eq!(p.after_sale(5).remaining_items(), 0);
        // original untouched
        assert_eq!(p.remaining_items(), 3);
    }
}
