//! AllSafe Core Library
//!
//! Catalog, filter/sort engine, purchase ledger, session/account store,
//! and the durable key-value storage layer for the AllSafe storefront.

pub mod accounts;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod invariants;
pub mod ledger;
pub mod models;
pub mod storage;

pub use accounts::{AccountStore, MIN_PASSWORD_LEN};
pub use catalog::{Catalog, FEATURED_COUNT};
pub use engine::{compute_view, CategoryFilter, ProductSort};
pub use error::{Error, Result};
pub use ledger::{clamp_qty, HistorySort, PurchaseLedger, QTY_MAX, QTY_MIN};
pub use models::*;
pub use storage::{keys, Database, KeyValueStore, MemoryStore};
