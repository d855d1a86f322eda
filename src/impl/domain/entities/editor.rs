use chrono::NaiveDate;

use super::inventory_transaction::{InventoryTransaction, TransactionId, TransactionType};

pub const DELETE_CONFIRMATION_MESSAGE: &str =
    "Tem certeza que deseja excluir este lançamento? A ação não pode ser desfeita.";

/// Raw values of the transaction form, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionForm {
    pub transaction_type: TransactionType,
    pub product_name: String,
    pub location: String,
    pub category: String,
    /// Free text; parsed leniently on save.
    pub quantity: String,
    /// Expected as yyyy-mm-dd.
    pub date: String,
    pub notes: String,
}

impl TransactionForm {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            transaction_type: TransactionType::Inbound,
            product_name: String::new(),
            location: String::new(),
            category: String::new(),
            quantity: "1".to_string(),
            date: today.format("%Y-%m-%d").to_string(),
            notes: String::new(),
        }
    }

    pub fn from_transaction(t: &InventoryTransaction) -> Self {
        Self {
            transaction_type: t.transaction_type,
            product_name: t.product_name.clone(),
            location: t.location.clone(),
            category: t.category.clone(),
            quantity: t.quantity.to_string(),
            date: t.date.format("%Y-%m-%d").to_string(),
            notes: t.notes.clone().unwrap_or_default(),
        }
    }
}

/// An open editor. Dropping it closes the editor without changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEditor {
    pub(crate) editing: Option<TransactionId>,
    pub form: TransactionForm,
}

impl TransactionEditor {
    pub fn open(existing: Option<&InventoryTransaction>, today: NaiveDate) -> Self {
        match existing {
            Some(t) => Self {
                editing: Some(t.id.clone()),
                form: TransactionForm::from_transaction(t),
            },
            None => Self {
                editing: None,
                form: TransactionForm::blank(today),
            },
        }
    }

    /// Id of the transaction being edited, `None` when creating.
    pub fn editing(&self) -> Option<&TransactionId> {
        self.editing.as_ref()
    }
}

/// Interactive yes/no confirmation for destructive actions.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
