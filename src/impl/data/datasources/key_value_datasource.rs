use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

use fractic_server_error::ServerError;

use crate::errors::StorageError;

/// Raw string storage keyed by name, the persistence boundary of the crate.
pub trait KeyValueDatasource {
    /// `Ok(None)` if the key has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, ServerError>;

    fn write(&self, key: &str, value: &str) -> Result<(), ServerError>;
}

/// Stores each key as `<dir>/<key>.json`.
pub struct JsonFileDatasource {
    dir: PathBuf,
}

impl JsonFileDatasource {
    /// Creates the directory if needed.
    pub fn new<P>(dir: P) -> Result<Self, ServerError>
    where
        P: AsRef<Path>,
    {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .map_err(|e| StorageError::with_debug(&dir.display().to_string(), &e))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueDatasource for JsonFileDatasource {
    fn read(&self, key: &str) -> Result<Option<String>, ServerError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::with_debug(key, &e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ServerError> {
        fs::write(self.path_for(key), value).map_err(|e| StorageError::with_debug(key, &e))
    }
}

/// Non-durable storage, for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryDatasource {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryDatasource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueDatasource for MemoryDatasource {
    fn read(&self, key: &str) -> Result<Option<String>, ServerError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::with_debug(key, &e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ServerError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::with_debug(key, &e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_file_datasource_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let ds = JsonFileDatasource::new(dir.path().join("nested")).unwrap();
        assert_eq!(ds.read("stockTransactions").unwrap(), None);
        ds.write("stockTransactions", "[]").unwrap();
        assert_eq!(ds.read("stockTransactions").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested/stockTransactions.json").exists());
    }

    #[test]
    fn test_memory_datasource_overwrites() {
        let ds = MemoryDatasource::new();
        ds.write("isAuthenticated", "false").unwrap();
        ds.write("isAuthenticated", "true").unwrap();
        assert_eq!(ds.read("isAuthenticated").unwrap().as_deref(), Some("true"));
        assert_eq!(ds.read("other").unwrap(), None);
    }
}
