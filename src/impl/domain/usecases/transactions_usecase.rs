use chrono::{Local, NaiveDate};
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::key_value_datasource::KeyValueDatasource,
        repositories::{
            storage_adapter::StorageAdapter,
            transactions_repository_impl::TransactionsRepositoryImpl,
        },
    },
    domain::{
        logic::{
            form_parsing::{build_transaction, FormError},
            id_generator::mint_transaction_id,
            pipeline::TransactionPipeline,
        },
        repositories::transactions_repository::TransactionsRepository,
    },
    entities::{
        ConfirmPrompt, FilterOptions, InventoryTransaction, SortConfig, TransactionEditor,
        TransactionId, ViewFilter, VisibleSet, DELETE_CONFIRMATION_MESSAGE,
    },
    errors::{InvalidIsoDate, MissingRequiredField, TransactionNotFound},
};

pub trait TransactionsUsecase {
    fn transactions(&self) -> &[InventoryTransaction];

    fn filter_options(&self) -> FilterOptions;

    fn visible(&self, filter: &ViewFilter, sort: &SortConfig) -> VisibleSet;

    /// Opens the editor on `existing`, or on a blank form dated `today`.
    fn open_editor(
        &self,
        existing: Option<&TransactionId>,
        today: NaiveDate,
    ) -> Result<TransactionEditor, ServerError>;

    /// Creates (fresh id) or updates (same id) the transaction described by
    /// the editor's form.
    fn save(&mut self, editor: &TransactionEditor) -> Result<InventoryTransaction, ServerError>;

    /// Removes the transaction once `prompt` confirms. Returns false if the
    /// user declined.
    fn delete(&mut self, id: &TransactionId, prompt: &dyn ConfirmPrompt)
        -> Result<bool, ServerError>;
}

pub(crate) struct TransactionsUsecaseImpl<R1>
where
    R1: TransactionsRepository,
{
    transactions_repository: R1,
}

impl<R1> TransactionsUsecase for TransactionsUsecaseImpl<R1>
where
    R1: TransactionsRepository,
{
    fn transactions(&self) -> &[InventoryTransaction] {
        self.transactions_repository.all()
    }

    fn filter_options(&self) -> FilterOptions {
        TransactionPipeline::new(self.transactions_repository.all()).filter_options()
    }

    fn visible(&self, filter: &ViewFilter, sort: &SortConfig) -> VisibleSet {
        TransactionPipeline::new(self.transactions_repository.all()).visible(filter, sort)
    }

    fn open_editor(
        &self,
        existing: Option<&TransactionId>,
        today: NaiveDate,
    ) -> Result<TransactionEditor, ServerError> {
        let existing = existing
            .map(|id| {
                self.transactions_repository
                    .find(id)
                    .ok_or_else(|| TransactionNotFound::new(id.as_str()))
            })
            .transpose()?;
        Ok(TransactionEditor::open(existing, today))
    }

    fn save(&mut self, editor: &TransactionEditor) -> Result<InventoryTransaction, ServerError> {
        let id = match editor.editing() {
            Some(id) => id.clone(),
            None => mint_transaction_id(),
        };
        let transaction = build_transaction(id, &editor.form).map_err(|e| match e {
            FormError::MissingField(field) => MissingRequiredField::new(field),
            FormError::InvalidDate(date) => InvalidIsoDate::new(&date),
        })?;
        if editor.editing().is_some() {
            if !self.transactions_repository.replace(transaction.clone()) {
                return Err(TransactionNotFound::new(transaction.id.as_str()));
            }
            log::info!("updated transaction {}", transaction.id);
        } else {
            self.transactions_repository.append(transaction.clone());
            log::info!("created transaction {}", transaction.id);
        }
        Ok(transaction)
    }

    fn delete(
        &mut self,
        id: &TransactionId,
        prompt: &dyn ConfirmPrompt,
    ) -> Result<bool, ServerError> {
        if self.transactions_repository.find(id).is_none() {
            return Err(TransactionNotFound::new(id.as_str()));
        }
        if !prompt.confirm(DELETE_CONFIRMATION_MESSAGE) {
            return Ok(false);
        }
        self.transactions_repository.remove(id);
        log::info!("deleted transaction {}", id);
        Ok(true)
    }
}

impl<R1> TransactionsUsecaseImpl<R1>
where
    R1: TransactionsRepository,
{
    pub(crate) fn with_repository(transactions_repository: R1) -> Self {
        TransactionsUsecaseImpl {
            transactions_repository,
        }
    }
}

impl<DS: KeyValueDatasource> TransactionsUsecaseImpl<TransactionsRepositoryImpl<DS>> {
    pub(crate) fn new(storage: StorageAdapter<DS>) -> Self {
        Self::with_repository(TransactionsRepositoryImpl::new(storage))
    }
}

/// Today's date in local time, the default date of a new transaction.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        data::datasources::key_value_datasource::MemoryDatasource, entities::TransactionType,
    };

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn usecase() -> (
        TransactionsUsecaseImpl<TransactionsRepositoryImpl<MemoryDatasource>>,
        StorageAdapter<MemoryDatasource>,
    ) {
        let storage = StorageAdapter::new(MemoryDatasource::new());
        (TransactionsUsecaseImpl::new(storage.clone()), storage)
    }

    fn fill(editor: &mut TransactionEditor, product: &str, quantity: &str) {
        editor.form.product_name = product.to_string();
        editor.form.location = "Depósito".to_string();
        editor.form.category = "Ferragens".to_string();
        editor.form.quantity = quantity.to_string();
    }

    #[test]
    fn test_new_editor_defaults() {
        let (uc, _) = usecase();
        let editor = uc.open_editor(None, day(2024, 6, 30)).unwrap();
        assert!(editor.editing().is_none());
        assert_eq!(editor.form.transaction_type, TransactionType::Inbound);
        assert_eq!(editor.form.quantity, "1");
        assert_eq!(editor.form.date, "2024-06-30");
        assert!(editor.form.product_name.is_empty());
        assert!(editor.form.notes.is_empty());
    }

    #[test]
    fn test_save_new_then_read_back() {
        let (mut uc, storage) = usecase();
        let mut editor = uc.open_editor(None, day(2024, 6, 30)).unwrap();
        fill(&mut editor, "Parafuso", "0");
        let saved = uc.save(&editor).unwrap();

        assert!(!saved.id.as_str().is_empty());
        assert_eq!(saved.quantity, 1);
        assert_eq!(uc.transactions(), &[saved.clone()]);

        let reloaded = TransactionsUsecaseImpl::new(storage);
        assert_eq!(reloaded.transactions(), &[saved]);
    }

    #[test]
    fn test_editing_preserves_id() {
        let (mut uc, _) = usecase();
        let mut editor = uc.open_editor(None, day(2024, 6, 30)).unwrap();
        fill(&mut editor, "Parafuso", "5");
        let first = uc.save(&editor).unwrap();
        let mut editor = uc.open_editor(None, day(2024, 6, 30)).unwrap();
        fill(&mut editor, "Porca", "2");
        uc.save(&editor).unwrap();

        let mut editor = uc.open_editor(Some(&first.id), day(2025, 1, 1)).unwrap();
        assert_eq!(editor.editing(), Some(&first.id));
        assert_eq!(editor.form.product_name, "Parafuso");
        assert_eq!(editor.form.date, "2024-06-30");
        editor.form.quantity = "42".to_string();
        editor.form.transaction_type = TransactionType::Outbound;
        let edited = uc.save(&editor).unwrap();

        assert_eq!(edited.id, first.id);
        let matching: Vec<_> = uc.transactions().iter().filter(|t| t.id == first.id).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].quantity, 42);
        assert_eq!(matching[0].transaction_type, TransactionType::Outbound);
        assert_eq!(uc.transactions().len(), 2);
        assert_eq!(uc.transactions()[0].id, first.id);
    }

    #[test]
    fn test_invalid_form_is_not_saved() {
        let (mut uc, _) = usecase();
        let mut editor = uc.open_editor(None, day(2024, 6, 30)).unwrap();
        fill(&mut editor, "", "3");
        assert!(uc.save(&editor).is_err());
        assert!(uc.transactions().is_empty());
    }

    #[test]
    fn test_open_editor_on_unknown_id() {
        let (uc, _) = usecase();
        assert!(uc
            .open_editor(Some(&TransactionId::from("ghost")), day(2024, 1, 1))
            .is_err());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (mut uc, _) = usecase();
        let mut editor = uc.open_editor(None, day(2024, 6, 30)).unwrap();
        fill(&mut editor, "Parafuso", "5");
        let saved = uc.save(&editor).unwrap();

        let asked = Cell::new(0);
        let decline = |message: &str| {
            assert_eq!(message, DELETE_CONFIRMATION_MESSAGE);
            asked.set(asked.get() + 1);
            false
        };
        assert!(!uc.delete(&saved.id, &decline).unwrap());
        assert_eq!(asked.get(), 1);
        assert_eq!(uc.transactions().len(), 1);

        let accept = |_: &str| true;
        assert!(uc.delete(&saved.id, &accept).unwrap());
        assert!(uc.transactions().is_empty());
        assert!(uc.delete(&saved.id, &accept).is_err());
    }

    #[test]
    fn test_visible_and_filter_options() {
        let (mut uc, _) = usecase();
        for (product, location, date) in [
            ("Parafuso", "Depósito", "2024-01-01"),
            ("Porca", "Loja", "2024-02-01"),
        ] {
            let mut editor = uc.open_editor(None, day(2024, 6, 30)).unwrap();
            fill(&mut editor, product, "1");
            editor.form.location = location.to_string();
            editor.form.date = date.to_string();
            uc.save(&editor).unwrap();
        }
        let visible = uc.visible(&ViewFilter::default(), &SortConfig::default());
        let names: Vec<&str> = visible
            .transactions
            .iter()
            .map(|t| t.product_name.as_str())
            .collect();
        assert_eq!(names, vec!["Porca", "Parafuso"]);
        assert_eq!(uc.filter_options().locations, vec!["Depósito", "Loja"]);
    }
}
