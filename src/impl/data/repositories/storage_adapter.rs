use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::data::datasources::key_value_datasource::KeyValueDatasource;

pub(crate) const USER_CREDENTIALS_KEY: &str = "userCredentials";
pub(crate) const IS_AUTHENTICATED_KEY: &str = "isAuthenticated";
pub(crate) const STOCK_TRANSACTIONS_KEY: &str = "stockTransactions";

/// Typed JSON access on top of a raw key-value datasource.
///
/// Reads never fail: a missing, unreadable or unparsable value yields the
/// caller's default and leaves storage untouched. Writes never fail either:
/// errors are logged and dropped, so callers keep working from their
/// in-memory copy and only durability of that write is lost.
pub(crate) struct StorageAdapter<DS: KeyValueDatasource> {
    datasource: Arc<DS>,
}

impl<DS: KeyValueDatasource> Clone for StorageAdapter<DS> {
    fn clone(&self) -> Self {
        Self {
            datasource: Arc::clone(&self.datasource),
        }
    }
}

impl<DS: KeyValueDatasource> StorageAdapter<DS> {
    pub(crate) fn new(datasource: DS) -> Self {
        Self {
            datasource: Arc::new(datasource),
        }
    }

    pub(crate) fn get<T>(&self, key: &str, default: T) -> T
    where
        T: DeserializeOwned,
    {
        match self.datasource.read(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("ignoring unparsable value for '{}': {}", key, e);
                    default
                }
            },
            Ok(None) => {
                log::debug!("no stored value for '{}', using default", key);
                default
            }
            Err(e) => {
                log::warn!("failed to read '{}', using default: {:?}", key, e);
                default
            }
        }
    }

    pub(crate) fn set<T>(&self, key: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to serialize '{}', change not persisted: {}", key, e);
                return;
            }
        };
        if let Err(e) = self.datasource.write(key, &raw) {
            log::warn!("failed to write '{}', change not persisted: {:?}", key, e);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use fractic_server_error::ServerError;

    use super::*;
    use crate::{data::datasources::key_value_datasource::MemoryDatasource, errors::StorageError};

    /// Reads like an empty store, rejects every write.
    pub(crate) struct ReadOnlyDatasource;

    impl KeyValueDatasource for ReadOnlyDatasource {
        fn read(&self, _key: &str) -> Result<Option<String>, ServerError> {
            Ok(None)
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), ServerError> {
            Err(StorageError::new(key))
        }
    }

    #[test]
    fn test_get_returns_default_when_absent() {
        let storage = StorageAdapter::new(MemoryDatasource::new());
        assert!(!storage.get(IS_AUTHENTICATED_KEY, false));
    }

    #[test]
    fn test_get_returns_default_when_unparsable_and_keeps_raw_value() {
        let ds = MemoryDatasource::new();
        ds.write(STOCK_TRANSACTIONS_KEY, "{not json").unwrap();
        let storage = StorageAdapter::new(ds);
        let value: Vec<u32> = storage.get(STOCK_TRANSACTIONS_KEY, vec![]);
        assert!(value.is_empty());
        assert_eq!(
            storage.datasource.read(STOCK_TRANSACTIONS_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_set_then_get() {
        let storage = StorageAdapter::new(MemoryDatasource::new());
        storage.set(IS_AUTHENTICATED_KEY, &true);
        assert!(storage.get(IS_AUTHENTICATED_KEY, false));
        assert_eq!(
            storage.datasource.read(IS_AUTHENTICATED_KEY).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_failed_write_is_swallowed() {
        let storage = StorageAdapter::new(ReadOnlyDatasource);
        storage.set(IS_AUTHENTICATED_KEY, &true);
        assert!(!storage.get(IS_AUTHENTICATED_KEY, false));
    }
}
