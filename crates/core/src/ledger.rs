//! Purchase ledger
//!
//! The persisted, append-only list of purchase records. Records are
//! prepended on write, so storage order is newest first. The ledger is the
//! sole writer of the `purchases` entry; nothing updates or deletes a
//! record once written (there is no cancel/refund path).

use rust_decimal::Decimal;
use tracing::instrument;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::invariants::assert_purchase_invariants;
use crate::models::PurchaseRecord;
use crate::storage::{keys, KeyValueStore};

/// Smallest quantity a purchase can carry
pub const QTY_MIN: u32 = 1;
/// Cap applied to caller-supplied quantities
pub const QTY_MAX: u32 = 999;

/// Clamp a raw quantity input to the valid range.
///
/// Non-numeric input and values below 1 clamp to 1; values above the cap
/// clamp to the cap. Matches the buy-form behavior of clamping rather than
/// rejecting.
pub fn clamp_qty(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(n) => n.clamp(i64::from(QTY_MIN), i64::from(QTY_MAX)) as u32,
        Err(_) => QTY_MIN,
    }
}

/// Sort key for the purchase-history view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistorySort {
    /// Date descending
    #[default]
    DateNew,
    /// Date ascending
    DateOld,
    /// Total descending
    TotalHigh,
    /// Total ascending
    TotalLow,
}

impl HistorySort {
    /// Parse a raw sort key; unknown keys yield `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "date-new" => Some(Self::DateNew),
            "date-old" => Some(Self::DateOld),
            "total-high" => Some(Self::TotalHigh),
            "total-low" => Some(Self::TotalLow),
            _ => None,
        }
    }
}

/// Store for purchase records
pub struct PurchaseLedger<'a, S: KeyValueStore> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> PurchaseLedger<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Record a purchase.
    ///
    /// An out-of-range quantity is clamped to the valid range rather than
    /// rejected (see [`clamp_qty`] for raw text input). An unknown product
    /// id does not fail the purchase: the record falls back to the raw id
    /// as its display name and a unit price of zero. The new record is
    /// prepended to the persisted list and is visible to reads
    /// immediately.
    #[instrument(skip(self, catalog))]
    pub fn record(&self, catalog: &Catalog, product_id: &str, qty: u32) -> Result<PurchaseRecord> {
        let qty = qty.clamp(QTY_MIN, QTY_MAX);
        let (name, unit_price) = match catalog.find(product_id) {
            Some(product) => (product.name.clone(), product.price),
            None => (product_id.to_string(), Decimal::ZERO),
        };

        let record = PurchaseRecord::new(product_id.to_string(), name, unit_price, qty);
        assert_purchase_invariants(&record);

        let mut list = self.all();
        list.insert(0, record.clone());
        self.store.set_json(keys::PURCHASES, &list)?;

        Ok(record)
    }

    /// All records in storage order (newest first)
    pub fn all(&self) -> Vec<PurchaseRecord> {
        self.store.get_json(keys::PURCHASES, Vec::new())
    }

    /// Query records for display. Pure read.
    ///
    /// `search` filters by case-insensitive substring match on the product
    /// name; an empty string matches everything.
    pub fn query(&self, search: &str, sort: HistorySort) -> Vec<PurchaseRecord> {
        let needle = search.trim().to_lowercase();
        let mut rows = self.all();
        if !needle.is_empty() {
            rows.retain(|r| r.product_name.to_lowercase().contains(&needle));
        }

        match sort {
            HistorySort::DateNew => rows.sort_by(|a, b| b.date.cmp(&a.date)),
            HistorySort::DateOld => rows.sort_by(|a, b| a.date.cmp(&b.date)),
            HistorySort::TotalHigh => rows.sort_by(|a, b| b.total.cmp(&a.total)),
            HistorySort::TotalLow => rows.sort_by(|a, b| a.total.cmp(&b.total)),
        }

        rows
    }
}
