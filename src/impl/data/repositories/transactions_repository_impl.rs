use crate::{
    data::{
        datasources::key_value_datasource::KeyValueDatasource,
        models::transaction_model::TransactionModel,
    },
    domain::repositories::transactions_repository::TransactionsRepository,
    entities::{InventoryTransaction, TransactionId},
};

use super::storage_adapter::{StorageAdapter, STOCK_TRANSACTIONS_KEY};

pub(crate) struct TransactionsRepositoryImpl<DS: KeyValueDatasource> {
    storage: StorageAdapter<DS>,
    transactions: Vec<InventoryTransaction>,
    /// Stored records that could not be read back, written back untouched
    /// after the readable ones on every write.
    unreadable: Vec<serde_json::Value>,
}

impl<DS: KeyValueDatasource> TransactionsRepositoryImpl<DS> {
    /// Loads the stored collection. Records that cannot be read back are
    /// left out of the collection but kept in storage.
    pub(crate) fn new(storage: StorageAdapter<DS>) -> Self {
        let raw: Vec<serde_json::Value> = storage.get(STOCK_TRANSACTIONS_KEY, vec![]);
        let mut transactions = vec![];
        let mut unreadable = vec![];
        for (i, value) in raw.into_iter().enumerate() {
            match read_transaction(value.clone()) {
                Ok(t) => transactions.push(t),
                Err(reason) => {
                    log::warn!("skipping stored transaction #{}: {}", i, reason);
                    unreadable.push(value);
                }
            }
        }
        Self {
            storage,
            transactions,
            unreadable,
        }
    }

    fn persist(&self) {
        let mut values = Vec::with_capacity(self.transactions.len() + self.unreadable.len());
        for t in &self.transactions {
            match serde_json::to_value(TransactionModel::from(t)) {
                Ok(v) => values.push(v),
                Err(e) => {
                    log::warn!(
                        "failed to serialize transaction {}, change not persisted: {}",
                        t.id,
                        e
                    );
                    return;
                }
            }
        }
        values.extend(self.unreadable.iter().cloned());
        self.storage.set(STOCK_TRANSACTIONS_KEY, &values);
    }
}

fn read_transaction(value: serde_json::Value) -> Result<InventoryTransaction, String> {
    let model: TransactionModel = serde_json::from_value(value).map_err(|e| e.to_string())?;
    InventoryTransaction::try_from(model).map_err(|e| format!("{:?}", e))
}

impl<DS: KeyValueDatasource> TransactionsRepository for TransactionsRepositoryImpl<DS> {
    fn all(&self) -> &[InventoryTransaction] {
        &self.transactions
    }

    fn append(&mut self, transaction: InventoryTransaction) {
        self.transactions.push(transaction);
        self.persist();
    }

    fn replace(&mut self, transaction: InventoryTransaction) -> bool {
        let Some(slot) = self.transactions.iter_mut().find(|t| t.id == transaction.id) else {
            return false;
        };
        *slot = transaction;
        self.persist();
        true
    }

    fn remove(&mut self, id: &TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| &t.id != id);
        if self.transactions.len() == before {
            return false;
        }
        self.persist();
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        data::{
            datasources::key_value_datasource::MemoryDatasource,
            repositories::storage_adapter::tests::ReadOnlyDatasource,
        },
        entities::TransactionType,
    };

    const STORED: &str = r#"[
        {"id":"2024-01-01T10:00:00.000Z0.123","type":"entrada","productName":"Parafuso",
         "location":"Depósito","category":"Ferragens","quantity":5,"date":"2024-01-01",
         "notes":""},
        {"id":"broken","type":"entrada","productName":"Porca","location":"Loja",
         "category":"Ferragens","quantity":2,"date":"not a date"},
        {"id":"b","type":"saida","productName":"Porca","location":"Loja",
         "category":"Ferragens","quantity":2,"date":"2024-02-01"}
    ]"#;

    fn transaction(id: &str) -> InventoryTransaction {
        InventoryTransaction {
            id: TransactionId::from(id),
            transaction_type: TransactionType::Inbound,
            product_name: "Arruela".to_string(),
            location: "Depósito".to_string(),
            category: "Ferragens".to_string(),
            quantity: 3,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            notes: Some("lote 7".to_string()),
        }
    }

    #[test]
    fn test_loads_stored_layout_and_skips_invalid_records() {
        let ds = MemoryDatasource::new();
        ds.write(STOCK_TRANSACTIONS_KEY, STORED).unwrap();
        let repo = TransactionsRepositoryImpl::new(StorageAdapter::new(ds));

        let ids: Vec<&str> = repo.all().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2024-01-01T10:00:00.000Z0.123", "b"]);
        assert_eq!(repo.all()[1].transaction_type, TransactionType::Outbound);
        assert_eq!(repo.all()[1].notes, None);
    }

    #[test]
    fn test_unreadable_records_survive_writes() {
        let ds = MemoryDatasource::new();
        ds.write(STOCK_TRANSACTIONS_KEY, STORED).unwrap();
        let storage = StorageAdapter::new(ds);
        let mut repo = TransactionsRepositoryImpl::new(storage.clone());
        repo.append(transaction("new"));
        assert!(repo.remove(&TransactionId::from("b")));

        let raw: Vec<serde_json::Value> = storage.get(STOCK_TRANSACTIONS_KEY, vec![]);
        let ids: Vec<&str> = raw.iter().filter_map(|v| v["id"].as_str()).collect();
        assert_eq!(ids, vec!["2024-01-01T10:00:00.000Z0.123", "new", "broken"]);
        let broken = raw.iter().find(|v| v["id"] == "broken").unwrap();
        assert_eq!(broken["date"], "not a date");

        let reloaded = TransactionsRepositoryImpl::new(storage);
        assert_eq!(reloaded.all().len(), 2);
        assert_eq!(reloaded.unreadable.len(), 1);
    }

    #[test]
    fn test_mutations_persist() {
        let storage = StorageAdapter::new(MemoryDatasource::new());
        let mut repo = TransactionsRepositoryImpl::new(storage.clone());
        repo.append(transaction("a"));
        repo.append(transaction("b"));

        let mut edited = transaction("a");
        edited.quantity = 9;
        assert!(repo.replace(edited));
        assert!(repo.remove(&TransactionId::from("b")));
        assert!(!repo.remove(&TransactionId::from("missing")));
        assert!(!repo.replace(transaction("missing")));

        let reloaded = TransactionsRepositoryImpl::new(storage);
        assert_eq!(reloaded.all().len(), 1);
        assert_eq!(reloaded.all()[0].quantity, 9);
        assert_eq!(reloaded.all()[0].notes.as_deref(), Some("lote 7"));
    }

    #[test]
    fn test_in_memory_state_survives_failed_writes() {
        let mut repo = TransactionsRepositoryImpl::new(StorageAdapter::new(ReadOnlyDatasource));
        repo.append(transaction("a"));
        assert_eq!(repo.all().len(), 1);
        assert!(repo.find(&TransactionId::from("a")).is_some());
    }
}
