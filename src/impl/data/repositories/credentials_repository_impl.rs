use crate::{
    data::{
        datasources::key_value_datasource::KeyValueDatasource,
        models::credentials_model::CredentialsModel,
    },
    domain::repositories::credentials_repository::CredentialsRepository,
    entities::UserCredentials,
};

use super::storage_adapter::{StorageAdapter, USER_CREDENTIALS_KEY};

pub(crate) struct CredentialsRepositoryImpl<DS: KeyValueDatasource> {
    storage: StorageAdapter<DS>,
    credentials: UserCredentials,
}

impl<DS: KeyValueDatasource> CredentialsRepositoryImpl<DS> {
    /// Loads the stored record, falling back to the default seed.
    pub(crate) fn new(storage: StorageAdapter<DS>) -> Self {
        let default = CredentialsModel::from(&UserCredentials::default());
        let credentials = storage.get(USER_CREDENTIALS_KEY, default).into();
        Self {
            storage,
            credentials,
        }
    }
}

impl<DS: KeyValueDatasource> CredentialsRepository for CredentialsRepositoryImpl<DS> {
    fn credentials(&self) -> &UserCredentials {
        &self.credentials
    }

    fn replace(&mut self, credentials: UserCredentials) {
        self.storage
            .set(USER_CREDENTIALS_KEY, &CredentialsModel::from(&credentials));
        self.credentials = credentials;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::datasources::key_value_datasource::MemoryDatasource;

    #[test]
    fn test_seeds_default_credentials() {
        let repo = CredentialsRepositoryImpl::new(StorageAdapter::new(MemoryDatasource::new()));
        assert_eq!(repo.credentials(), &UserCredentials::new("admin", "admin123"));
    }

    #[test]
    fn test_replace_persists() {
        let storage = StorageAdapter::new(MemoryDatasource::new());
        let mut repo = CredentialsRepositoryImpl::new(storage.clone());
        repo.replace(UserCredentials::new("gerente", "segredo1"));

        let reloaded = CredentialsRepositoryImpl::new(storage);
        assert_eq!(reloaded.credentials(), &UserCredentials::new("gerente", "segredo1"));
    }
}
