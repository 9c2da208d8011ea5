//! The closed set of model operations.
//!
//! The command layer builds one of these variants and hands it to
//! [`Model::execute`]; the enum replaces open-ended polymorphic command
//! objects with a single dispatch point.

use shopstock_catalog::{Distributor, DistributorName, Product, ProductKey};
use shopstock_core::{DomainResult, Timestamp};

use crate::model::Model;

/// One externally requested mutation.
#[derive(Debug, Clone)]
pub enum Operation {
    AddProduct(Product),
    UpdateProduct {
        target: ProductKey,
        edited: Product,
    },
    RemoveProduct(ProductKey),
    AddDistributor(Distributor),
    UpdateDistributor {
        target: DistributorName,
        edited: Distributor,
    },
    RemoveDistributor(DistributorName),
    RecordSale {
        time: Timestamp,
        product: ProductKey,
        quantity: u32,
        amount: i64,
    },
    AddReminder {
        time: Timestamp,
        message: String,
    },
    RemoveReminder(Timestamp),
    EndDay,
    Undo,
    Redo,
}

impl Model {
    /// Dispatch an operation to the matching model method.
    ///
    /// Pure routing; every contract (error kinds, commit bookkeeping,
    /// notifications) lives in the methods themselves.
    pub fn execute(&mut self, operation: Operation) -> DomainResult<()> {
        match operation {
            Operation::AddProduct(product) => self.add_product(product),
            Operation::UpdateProduct { target, edited } => self.update_product(&target, edited),
            Operation::RemoveProduct(key) => self.remove_product(&key),
            Operation::AddDistributor(distributor) => self.add_distributor(distributor),
            Operation::UpdateDistributor { target, edited } => {
                self.update_distributor(&target, edited)
            }
            Operation::RemoveDistributor(name) => self.remove_distributor(&name),
            Operation::RecordSale {
                time,
                product,
                quantity,
                amount,
            } => self.record_sale(time, &product, quantity, amount),
            Operation::AddReminder { time, message } => self.add_reminder(time, &message),
            Operation::RemoveReminder(at) => self.remove_reminder(&at),
            Operation::EndDay => {
                self.end_day();
                Ok(())
            }
            Operation::Undo => self.undo(),
            Operation::Redo => self.redo(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use shopstock_catalog::{Catalog, ProductName, SerialNumber};
    use shopstock_core::{Clock, DomainError, FixedClock, Keyed};
    use shopstock_ledger::SalesHistory;

    use super::*;
    use crate::sink::NullSink;

    fn ts(raw: &str) -> Timestamp {
        Timestamp::parse(raw).unwrap()
    }

    fn product(name: &str, serial: &str) -> Product {
        Product::new(
            ProductName::new(name).unwrap(),
            SerialNumber::new(serial).unwrap(),
            DistributorName::new("Acme Wholesale").unwrap(),
            "",
            4,
            BTreeSet::new(),
        )
    }

    fn model() -> Model {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::at(ts("2024/03/05 09:30:00")));
        let history = SalesHistory::new(clock.today());
        Model::new(Catalog::new(), history, clock, Arc::new(NullSink))
    }

    #[test]
    fn execute_routes_a_full_session() {
        let mut model = model();
        let key = product("Green Tea", "100").key();

        model.execute(Operation::AddProduct(product("Green Tea", "100"))).unwrap();
        model
            .execute(Operation::RecordSale {
                time: ts("2024/03/05 09:00:00"),
                product: key.clone(),
                quantity: 1,
                amount: 350,
            })
            .unwrap();
        model
            .execute(Operation::AddReminder {
                time: ts("2024/03/05 17:00:00"),
                message: "order stock".to_string(),
            })
            .unwrap();
        model.execute(Operation::Undo).unwrap();
        model.execute(Operation::Redo).unwrap();
        model.execute(Operation::EndDay).unwrap();

        assert_eq!(model.catalog().product(&key).unwrap().remaining_items(), 3);
        assert_eq!(model.last_transaction().unwrap().quantity(), 1);
    }

    #[test]
    fn execute_surfaces_domain_errors_unchanged() {
        let mut model = model();
        assert_eq!(model.execute(Operation::Undo).unwrap_err(), DomainError::NoPreviousState);
        assert!(matches!(
            model.execute(Operation::RemoveProduct(product("Ghost", "999").key())),
            Err(DomainError::EntityNotFound(_))
        ));
    }
}
