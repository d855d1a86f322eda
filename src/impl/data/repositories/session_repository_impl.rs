use crate::{
    data::datasources::key_value_datasource::KeyValueDatasource,
    domain::repositories::session_repository::SessionRepository,
};

use super::storage_adapter::{StorageAdapter, IS_AUTHENTICATED_KEY};

pub(crate) struct SessionRepositoryImpl<DS: KeyValueDatasource> {
    storage: StorageAdapter<DS>,
    authenticated: bool,
}

impl<DS: KeyValueDatasource> SessionRepositoryImpl<DS> {
    pub(crate) fn new(storage: StorageAdapter<DS>) -> Self {
        let authenticated = storage.get(IS_AUTHENTICATED_KEY, false);
        Self {
            storage,
            authenticated,
        }
    }
}

impl<DS: KeyValueDatasource> SessionRepository for SessionRepositoryImpl<DS> {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn set_authenticated(&mut self, authenticated: bool) {
        self.storage.set(IS_AUTHENTICATED_KEY, &authenticated);
        self.authenticated = authenticated;
    }
}
