use crate::entities::{InventoryTransaction, TransactionId};

/// Ordered collection of transactions, in insertion order.
pub trait TransactionsRepository {
    fn all(&self) -> &[InventoryTransaction];

    fn find(&self, id: &TransactionId) -> Option<&InventoryTransaction> {
        self.all().iter().find(|t| &t.id == id)
    }

    fn append(&mut self, transaction: InventoryTransaction);

    /// Replaces the transaction with the same id in place. Returns false if no
    /// such transaction exists.
    fn replace(&mut self, transaction: InventoryTransaction) -> bool;

    /// Returns false if no such transaction exists.
    fn remove(&mut self, id: &TransactionId) -> bool;
}
