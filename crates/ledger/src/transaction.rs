//! A single recorded sale. Immutable once created.

use serde::{Deserialize, Serialize};
use shopstock_catalog::ProductKey;
use shopstock_core::{DomainError, DomainResult, Timestamp};

/// One sale: what was sold, when, how many, for how much.
///
/// No business operation removes or edits a past sale; the type has no
/// mutating methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    timestamp: Timestamp,
    product: ProductKey,
    quantity: u32,
    /// Sale total in the smallest currency unit (e.g. cents).
    amount: i64,
}

impl Transaction {
    pub fn new(
        timestamp: Timestamp,
        product: ProductKey,
        quantity: u32,
        amount: i64,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("sale quantity must be at least 1"));
        }
        Ok(Self {
            timestamp,
            product,
            quantity,
            amount,
        })
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    pub fn product(&self) -> &ProductKey {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Sale total in the smallest currency unit.
    pub fn amount(&self) -> i64 {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use shopstock_catalog::{ProductName, SerialNumber};

    use super::*;

    fn key() -> ProductKey {
        ProductKey {
            name: ProductName::new("Green Tea").unwrap(),
            serial: SerialNumber::new("100").unwrap(),
        }
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let ts = Timestamp::parse("2024/03/05 10:00:00").unwrap();
        assert!(matches!(
            Transaction::new(ts, key(), 0, 500),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn accessors_expose_the_record() {
        let ts = Timestamp::parse("2024/03/05 10:00:00").unwrap();
        let t = Transaction::new(ts.clone(), key(), 2, 1198).unwrap();
        assert_eq!(t.timestamp(), &ts);
        assert_eq!(t.product(), &key());
        assert_eq!(t.quantity(), 2);
        assert_eq!(t.amount(), 1198);
    }
}
