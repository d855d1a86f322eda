use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::entities::{InventoryTransaction, TransactionForm, TransactionId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FormError {
    MissingField(&'static str),
    InvalidDate(String),
}

/// Lenient integer parsing of the quantity field: leading whitespace and an
/// optional sign, then digits; anything after the digits is ignored. Input
/// without a leading integer yields 1, and the result is never below 1.
pub(crate) fn parse_quantity(raw: &str) -> u32 {
    static LEADING_INTEGER: OnceLock<Regex> = OnceLock::new();
    let re = LEADING_INTEGER
        .get_or_init(|| Regex::new(r"^\s*([+-]?)(\d+)").expect("hardcoded regex should be valid"));
    let Some(caps) = re.captures(raw) else {
        return 1;
    };
    if &caps[1] == "-" {
        return 1;
    }
    caps[2].parse::<u32>().unwrap_or(u32::MAX).max(1)
}

/// Builds the transaction the form describes, under the given id.
pub(crate) fn build_transaction(
    id: TransactionId,
    form: &TransactionForm,
) -> Result<InventoryTransaction, FormError> {
    let required = [
        ("productName", &form.product_name),
        ("location", &form.location),
        ("category", &form.category),
        ("date", &form.date),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(FormError::MissingField(*field));
    }
    let date = NaiveDate::parse_from_str(&form.date, "%Y-%m-%d")
        .map_err(|_| FormError::InvalidDate(form.date.clone()))?;
    Ok(InventoryTransaction {
        id,
        transaction_type: form.transaction_type,
        product_name: form.product_name.clone(),
        location: form.location.clone(),
        category: form.category.clone(),
        quantity: parse_quantity(&form.quantity),
        date,
        notes: Some(form.notes.clone()),
    })
}
