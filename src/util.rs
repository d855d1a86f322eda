use chrono::Local;
use fractic_server_error::ServerError;

use crate::{
    config::StockLedgerConfig,
    data::{
        datasources::key_value_datasource::{JsonFileDatasource, KeyValueDatasource},
        repositories::{
            credentials_repository_impl::CredentialsRepositoryImpl,
            session_repository_impl::SessionRepositoryImpl, storage_adapter::StorageAdapter,
            transactions_repository_impl::TransactionsRepositoryImpl,
        },
    },
    domain::usecases::{
        auth_usecase::{AuthUsecase as _, AuthUsecaseImpl},
        export_usecase::ExportUsecase,
        transactions_usecase::{today, TransactionsUsecase as _, TransactionsUsecaseImpl},
    },
    entities::{
        AppState, ConfirmPrompt, ExportFormat, ExportedFile, FilterOptions, InventoryTransaction,
        Page, ProfileUpdate, ProfileUpdated, SortConfig, TransactionEditor, TransactionId,
        ViewFilter, VisibleSet,
    },
    errors::NotAuthenticated,
};

/// Single-user stock ledger: session gate, transaction store, list view and
/// exports, backed by a key-value datasource.
///
/// Everything except login requires an authenticated session.
pub struct StockLedgerUtil<DS = JsonFileDatasource>
where
    DS: KeyValueDatasource,
{
    config: StockLedgerConfig,
    state: AppState,
    auth_usecase: AuthUsecaseImpl<CredentialsRepositoryImpl<DS>, SessionRepositoryImpl<DS>>,
    transactions_usecase: TransactionsUsecaseImpl<TransactionsRepositoryImpl<DS>>,
    export_usecase: ExportUsecase,
}

impl StockLedgerUtil<JsonFileDatasource> {
    /// Opens (creating if needed) the ledger stored under `config.data_dir`.
    pub fn open(config: StockLedgerConfig) -> Result<Self, ServerError> {
        let datasource = JsonFileDatasource::new(&config.data_dir)?;
        Ok(Self::with_datasource(datasource, config))
    }
}

impl<DS> StockLedgerUtil<DS>
where
    DS: KeyValueDatasource,
{
    pub fn with_datasource(datasource: DS, config: StockLedgerConfig) -> Self {
        let storage = StorageAdapter::new(datasource);
        let auth_usecase = AuthUsecaseImpl::new(storage.clone());
        let state = auth_usecase.restore_state();
        Self {
            config,
            state,
            auth_usecase,
            transactions_usecase: TransactionsUsecaseImpl::new(storage),
            export_usecase: ExportUsecase::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &StockLedgerConfig {
        &self.config
    }

    // Session.
    // ---

    pub fn login(&mut self, username: &str, password: &str) -> Result<(), ServerError> {
        self.auth_usecase.login(&mut self.state, username, password)
    }

    pub fn logout(&mut self) {
        self.auth_usecase.logout(&mut self.state);
    }

    pub fn navigate(&mut self, page: Page) -> Result<(), ServerError> {
        self.require_authenticated()?;
        self.state.page = page;
        Ok(())
    }

    pub fn username(&self) -> Result<&str, ServerError> {
        self.require_authenticated()?;
        Ok(self.auth_usecase.username())
    }

    /// On success the session is logged out and the new credentials are
    /// required to log back in.
    pub fn update_profile(
        &mut self,
        update: &ProfileUpdate,
    ) -> Result<ProfileUpdated, ServerError> {
        self.require_authenticated()?;
        self.auth_usecase.update_profile(&mut self.state, update)
    }

    // Transactions.
    // ---

    pub fn transactions(&self) -> Result<&[InventoryTransaction], ServerError> {
        self.require_authenticated()?;
        Ok(self.transactions_usecase.transactions())
    }

    pub fn filter_options(&self) -> Result<FilterOptions, ServerError> {
        self.require_authenticated()?;
        Ok(self.transactions_usecase.filter_options())
    }

    pub fn visible(
        &self,
        filter: &ViewFilter,
        sort: &SortConfig,
    ) -> Result<VisibleSet, ServerError> {
        self.require_authenticated()?;
        Ok(self.transactions_usecase.visible(filter, sort))
    }

    /// Opens the editor on an existing transaction, or on a new one when
    /// `existing` is `None`.
    pub fn open_editor(
        &self,
        existing: Option<&TransactionId>,
    ) -> Result<TransactionEditor, ServerError> {
        self.require_authenticated()?;
        self.transactions_usecase.open_editor(existing, today())
    }

    pub fn save(
        &mut self,
        editor: &TransactionEditor,
    ) -> Result<InventoryTransaction, ServerError> {
        self.require_authenticated()?;
        self.transactions_usecase.save(editor)
    }

    /// Returns false if the user declined the confirmation.
    pub fn delete(
        &mut self,
        id: &TransactionId,
        prompt: &dyn ConfirmPrompt,
    ) -> Result<bool, ServerError> {
        self.require_authenticated()?;
        self.transactions_usecase.delete(id, prompt)
    }

    // Export.
    // ---

    /// Exports exactly the rows `visible` would show for the same filter and
    /// sort, named after the configured export file name.
    pub fn export(
        &self,
        filter: &ViewFilter,
        sort: &SortConfig,
        format: ExportFormat,
    ) -> Result<ExportedFile, ServerError> {
        let visible = self.visible(filter, sort)?;
        self.export_usecase.export(
            &visible.transactions,
            format,
            &self.config.export_file_name,
            &self.config.report_title,
            Local::now().naive_local(),
        )
    }

    fn require_authenticated(&self) -> Result<(), ServerError> {
        if self.state.authenticated {
            Ok(())
        } else {
            Err(NotAuthenticated::new())
        }
    }
}
