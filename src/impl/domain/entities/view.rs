use super::inventory_transaction::{InventoryTransaction, TransactionType};

/// A categorical filter: either everything ("all") or one exact value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoricalFilter<T> {
    All,
    Only(T),
}

impl<T: PartialEq> CategoricalFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            CategoricalFilter::All => true,
            CategoricalFilter::Only(v) => v == value,
        }
    }
}

impl<T> Default for CategoricalFilter<T> {
    fn default() -> Self {
        CategoricalFilter::All
    }
}

/// Session-only filter state of the transaction list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewFilter {
    /// Case-insensitive substring of the product name; empty matches all.
    pub search_term: String,
    pub transaction_type: CategoricalFilter<TransactionType>,
    pub location: CategoricalFilter<String>,
    pub category: CategoricalFilter<String>,
}

impl ViewFilter {
    pub fn cleared() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Type,
    ProductName,
    Location,
    Category,
    Quantity,
    Date,
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Sort config after the user selects `key`: re-selecting the current
    /// ascending key flips it to descending, anything else sorts ascending.
    pub fn request_sort(&self, key: SortKey) -> SortConfig {
        let direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        SortConfig { key, direction }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::new(SortKey::Date, SortDirection::Descending)
    }
}

/// Distinct values offered in the location/category filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub categories: Vec<String>,
}

/// The filtered and sorted transactions currently on screen. This is also
/// exactly what gets exported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibleSet {
    pub transactions: Vec<InventoryTransaction>,
    /// No transactions stored at all (as opposed to none matching).
    pub store_is_empty: bool,
}

impl VisibleSet {
    pub fn no_matches(&self) -> bool {
        !self.store_is_empty && self.transactions.is_empty()
    }
}
