//! Purchase record model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed purchase. Created on "buy", never mutated or deleted.
///
/// The id is best-effort unique; records are never looked up by it.
/// Field names match the persisted `purchases` entry layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub id: Uuid,
    pub product_id: String,
    pub product_name: String,
    /// Snapshot of the product price at purchase time
    pub unit_price: Decimal,
    pub qty: u32,
    pub total: Decimal,
    pub date: DateTime<Utc>,
}

impl PurchaseRecord {
    pub fn new(product_id: String, product_name: String, unit_price: Decimal, qty: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            product_name,
            unit_price,
            qty,
            total: unit_price * Decimal::from(qty),
            date: Utc::now(),
        }
    }
}
