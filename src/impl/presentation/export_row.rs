use chrono::NaiveDate;

use crate::entities::InventoryTransaction;

/// Column headers shared by the spreadsheet and CSV exports.
pub(crate) const SHEET_HEADERS: [&str; 7] = [
    "Tipo",
    "Produto",
    "Local",
    "Categoria",
    "Quantidade",
    "Data",
    "Observações",
];

/// Display-ready cells of one exported transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExportRow {
    pub type_label: &'static str,
    pub product_name: String,
    pub location: String,
    pub category: String,
    pub quantity: u32,
    /// dd/mm/yyyy.
    pub date: String,
    pub notes: Option<String>,
}

impl From<&InventoryTransaction> for ExportRow {
    fn from(t: &InventoryTransaction) -> Self {
        ExportRow {
            type_label: t.transaction_type.label(),
            product_name: t.product_name.clone(),
            location: t.location.clone(),
            category: t.category.clone(),
            quantity: t.quantity,
            date: format_date(t.date),
            notes: t.notes.clone().filter(|n| !n.is_empty()),
        }
    }
}

impl ExportRow {
    /// Cells as text, with `missing_notes` standing in for absent notes.
    pub(crate) fn cells(&self, missing_notes: &str) -> [String; 7] {
        [
            self.type_label.to_string(),
            self.product_name.clone(),
            self.location.clone(),
            self.category.clone(),
            self.quantity.to_string(),
            self.date.clone(),
            self.notes.clone().unwrap_or_else(|| missing_notes.to_string()),
        ]
    }
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub(crate) fn export_rows(transactions: &[InventoryTransaction]) -> Vec<ExportRow> {
    transactions.iter().map(ExportRow::from).collect()
}
