//! Application state management
//!
//! All state lives in one place and every mutation runs synchronously
//! inside a single input handler, so there is never a second writer racing
//! on the ledger or the account store.

use std::path::PathBuf;

use allsafe_core::{
    compute_view, AccountStore, Catalog, CategoryFilter, Database, Error, HistorySort,
    KeyValueStore, Product, ProductSort, PurchaseLedger, PurchaseRecord, Result,
};
use directories::ProjectDirs;

use crate::debounce::Debouncer;
use crate::modal::AuthModal;
use crate::notify::Notifier;
use crate::router::ViewRouter;

/// Main application state, generic over the backing store so tests can
/// run against the in-memory fake
pub struct AppState<S: KeyValueStore> {
    pub store: S,
    pub catalog: Catalog,
    pub router: ViewRouter,
    pub modal: AuthModal,
    pub notifier: Notifier,
    pub search: Debouncer,
    /// Product-grid selections
    pub category_filter: CategoryFilter,
    pub product_sort: Option<ProductSort>,
    /// Purchase-history selections
    pub history_search: String,
    pub history_sort: HistorySort,
    /// Product shown in the detail section
    pub selected_product: Option<String>,
}

impl AppState<Database> {
    /// Open the app against the on-disk database
    pub fn open() -> Result<Self> {
        let db_path = Self::data_path()?.join("allsafe.db");

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self::new(Database::open(db_path)?))
    }

    fn data_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "allsafe", "allsafe").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;

        Ok(dirs.data_dir().to_path_buf())
    }
}

impl<S: KeyValueStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            catalog: Catalog::builtin(),
            router: ViewRouter::new(),
            modal: AuthModal::new(),
            notifier: Notifier::new(),
            search: Debouncer::default(),
            category_filter: CategoryFilter::All,
            product_sort: Some(ProductSort::PriceLow),
            history_search: String::new(),
            history_sort: HistorySort::DateNew,
            selected_product: None,
        }
    }

    pub fn ledger(&self) -> PurchaseLedger<'_, S> {
        PurchaseLedger::new(&self.store)
    }

    pub fn accounts(&self) -> AccountStore<'_, S> {
        AccountStore::new(&self.store)
    }

    /// The product grid under the current filter and sort selections
    pub fn product_view(&self) -> Vec<Product> {
        compute_view(&self.catalog, self.category_filter, self.product_sort)
    }

    /// The purchase-history rows under the current search and sort
    pub fn history_view(&self) -> Vec<PurchaseRecord> {
        self.ledger().query(&self.history_search, self.history_sort)
    }

    /// The product for the detail section. An unknown or unset selection
    /// falls back to the first catalog entry.
    pub fn detail_product(&self) -> Option<&Product> {
        self.selected_product
            .as_deref()
            .and_then(|id| self.catalog.find(id))
            .or_else(|| self.catalog.products().first())
    }
}
