use std::{fmt, str::FromStr};

use chrono::NaiveDate;

/// Opaque transaction identifier. Newly minted ids are UUID v4 strings, but
/// ids of any shape found in storage are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(pub(crate) String);

impl TransactionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        TransactionId(s)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        TransactionId(s.to_string())
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Direction of the stock movement.
///
/// Variant order matches the lexicographic order of the stored codes
/// ("entrada" < "saida"), so the derived `Ord` is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum TransactionType {
    #[default]
    Inbound,
    Outbound,
}

impl TransactionType {
    /// Code used in storage and filter values.
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::Inbound => "entrada",
            TransactionType::Outbound => "saida",
        }
    }

    /// Label used on screen and in exports.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Inbound => "Entrada",
            TransactionType::Outbound => "Saída",
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entrada" => Ok(TransactionType::Inbound),
            "saida" => Ok(TransactionType::Outbound),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryTransaction {
    pub id: TransactionId,
    pub transaction_type: TransactionType,
    pub product_name: String,
    pub location: String,
    pub category: String,
    /// Always >= 1.
    pub quantity: u32,
    pub date: NaiveDate,
    pub notes: Option<String>,
}
