use std::str::FromStr as _;

use fractic_server_error::ServerError;

use crate::entities::{InventoryTransaction, TransactionId, TransactionType};

use super::iso_date_model::ISODateModel;

#[derive(Debug, Clone, Copy, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TransactionTypeModel {
    Entrada,
    Saida,
}

/// Persisted shape of one transaction under `stockTransactions`.
#[derive(Debug, Clone, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransactionModel {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionTypeModel,
    pub product_name: String,
    pub location: String,
    pub category: String,
    pub quantity: u32,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<TransactionTypeModel> for TransactionType {
    fn from(m: TransactionTypeModel) -> Self {
        match m {
            TransactionTypeModel::Entrada => TransactionType::Inbound,
            TransactionTypeModel::Saida => TransactionType::Outbound,
        }
    }
}

impl From<TransactionType> for TransactionTypeModel {
    fn from(t: TransactionType) -> Self {
        match t {
            TransactionType::Inbound => TransactionTypeModel::Entrada,
            TransactionType::Outbound => TransactionTypeModel::Saida,
        }
    }
}

impl TryFrom<TransactionModel> for InventoryTransaction {
    type Error = ServerError;

    fn try_from(m: TransactionModel) -> Result<Self, Self::Error> {
        let date = ISODateModel::from_str(&m.date)?;
        Ok(InventoryTransaction {
            id: TransactionId(m.id),
            transaction_type: m.transaction_type.into(),
            product_name: m.product_name,
            location: m.location,
            category: m.category,
            quantity: m.quantity.max(1),
            date: date.into(),
            notes: m.notes,
        })
    }
}

impl From<&InventoryTransaction> for TransactionModel {
    fn from(t: &InventoryTransaction) -> Self {
        TransactionModel {
            id: t.id.0.clone(),
            transaction_type: t.transaction_type.into(),
            product_name: t.product_name.clone(),
            location: t.location.clone(),
            category: t.category.clone(),
            quantity: t.quantity,
            date: ISODateModel::from(t.date).to_string(),
            notes: t.notes.clone(),
        }
    }
}
