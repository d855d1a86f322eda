use std::{cmp::Ordering, collections::BTreeSet};

use crate::entities::{
    FilterOptions, InventoryTransaction, SortConfig, SortDirection, SortKey, ViewFilter,
    VisibleSet,
};

/// Derives what the transaction list shows from the full stored collection.
/// Everything is recomputed from scratch on every call.
pub(crate) struct TransactionPipeline<'a> {
    transactions: &'a [InventoryTransaction],
}

impl<'a> TransactionPipeline<'a> {
    pub(crate) fn new(transactions: &'a [InventoryTransaction]) -> Self {
        Self { transactions }
    }

    pub(crate) fn filter_options(&self) -> FilterOptions {
        let locations: BTreeSet<&String> = self.transactions.iter().map(|t| &t.location).collect();
        let categories: BTreeSet<&String> =
            self.transactions.iter().map(|t| &t.category).collect();
        FilterOptions {
            locations: locations.into_iter().cloned().collect(),
            categories: categories.into_iter().cloned().collect(),
        }
    }

    pub(crate) fn visible(&self, filter: &ViewFilter, sort: &SortConfig) -> VisibleSet {
        let mut transactions = filter_transactions(self.transactions, filter);
        sort_transactions(&mut transactions, sort);
        log::debug!(
            "visible set: {} of {} transactions",
            transactions.len(),
            self.transactions.len()
        );
        VisibleSet {
            transactions,
            store_is_empty: self.transactions.is_empty(),
        }
    }
}

pub(crate) fn matches_filter(t: &InventoryTransaction, filter: &ViewFilter) -> bool {
    let search_match = t
        .product_name
        .to_lowercase()
        .contains(&filter.search_term.to_lowercase());
    search_match
        && filter.transaction_type.matches(&t.transaction_type)
        && filter.location.matches(&t.location)
        && filter.category.matches(&t.category)
}

/// Keeps collection order.
pub(crate) fn filter_transactions(
    transactions: &[InventoryTransaction],
    filter: &ViewFilter,
) -> Vec<InventoryTransaction> {
    transactions
        .iter()
        .filter(|t| matches_filter(t, filter))
        .cloned()
        .collect()
}

/// Stable sort on a single key; equal keys keep their relative order in both
/// directions (there is no secondary key).
pub(crate) fn sort_transactions(transactions: &mut [InventoryTransaction], sort: &SortConfig) {
    transactions.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, sort.key);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_by_key(a: &InventoryTransaction, b: &InventoryTransaction, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Type => a.transaction_type.cmp(&b.transaction_type),
        SortKey::ProductName => a.product_name.cmp(&b.product_name),
        SortKey::Location => a.location.cmp(&b.location),
        SortKey::Category => a.category.cmp(&b.category),
        SortKey::Quantity => a.quantity.cmp(&b.quantity),
        SortKey::Date => a.date.cmp(&b.date),
        // Missing notes sort as empty text.
        SortKey::Notes => a
            .notes
            .as_deref()
            .unwrap_or("")
            .cmp(b.notes.as_deref().unwrap_or("")),
    }
}
