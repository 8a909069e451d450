//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::models::{Product, PurchaseRecord};

/// Validate that a catalog is internally consistent
pub fn assert_catalog_invariants(products: &[Product]) {
    // Ids must be unique across the catalog
    let mut seen = HashSet::new();
    for product in products {
        debug_assert!(
            seen.insert(product.id.as_str()),
            "Catalog contains duplicate product id {}",
            product.id
        );

        debug_assert!(
            product.price >= Decimal::ZERO,
            "Product {} has negative price {}",
            product.id,
            product.price
        );

        debug_assert!(
            !product.name.trim().is_empty(),
            "Product {} has empty name",
            product.id
        );
    }
}

/// Validate that a purchase record is internally consistent
pub fn assert_purchase_invariants(record: &PurchaseRecord) {
    debug_assert!(
        record.qty >= 1,
        "Purchase {} has non-positive qty {}",
        record.id,
        record.qty
    );

    debug_assert!(
        record.total == record.unit_price * Decimal::from(record.qty),
        "Purchase {} total {} does not match {} x {}",
        record.id,
        record.total,
        record.unit_price,
        record.qty
    );
}
