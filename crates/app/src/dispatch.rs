//! Command dispatch
//!
//! Maps discrete user actions onto state transitions. The view layer is a
//! thin adapter that translates raw input events into [`Command`]s; every
//! transition here runs to completion before the next event is processed.
//! Domain failures are recovered here and surfaced as toasts — none is
//! fatal. Storage failures propagate.

use std::time::Instant;

use allsafe_core::{clamp_qty, CategoryFilter, Error, HistorySort, KeyValueStore, ProductSort, Result};
use tracing::debug;

use crate::modal::AuthTab;
use crate::router::Section;
use crate::state::AppState;

/// A discrete user action
#[derive(Debug, Clone)]
pub enum Command {
    /// Follow a nav entry. Login/Register open the auth modal instead of
    /// switching sections.
    Navigate(Section),
    /// Open the detail section for a product
    ViewProduct { product_id: String },
    /// Return from the detail section to the grid
    Back,
    /// Buy the product currently offered, with the raw quantity input
    Buy { product_id: String, qty_raw: String },
    /// Change the product-grid category filter
    Filter { category_raw: String },
    /// Change the product-grid sort key
    Sort { key_raw: String },
    /// Purchase-history search input (debounced)
    Search { text: String },
    /// Change the purchase-history sort key
    SortHistory { key_raw: String },
    OpenAuth(AuthTab),
    CloseAuth,
    SwitchTab(AuthTab),
    Login { email: String, password: String },
    Register { name: String, email: String, password: String },
    Logout,
}

/// Apply a command to the application state
pub fn dispatch<S: KeyValueStore>(
    state: &mut AppState<S>,
    command: Command,
    now: Instant,
) -> Result<()> {
    debug!(?command, "Dispatching");

    match command {
        Command::Navigate(section) => match section {
            Section::Login => state.modal.open(AuthTab::Login),
            Section::Register => state.modal.open(AuthTab::Register),
            other => state.router.activate(other),
        },

        Command::ViewProduct { product_id } => {
            state.selected_product = Some(product_id);
            state.router.activate(Section::Detail);
        }

        Command::Back => state.router.activate(Section::Products),

        Command::Buy { product_id, qty_raw } => {
            let qty = clamp_qty(&qty_raw);
            let record = state.ledger().record(&state.catalog, &product_id, qty)?;
            state.notifier.show(
                format!("Purchased {} ×{}", record.product_name, record.qty),
                now,
            );
            state.router.activate(Section::PurchaseHistory);
        }

        Command::Filter { category_raw } => {
            state.category_filter = CategoryFilter::parse(&category_raw);
        }

        Command::Sort { key_raw } => {
            state.product_sort = ProductSort::parse(&key_raw);
        }

        Command::Search { text } => state.search.submit(text, now),

        Command::SortHistory { key_raw } => {
            if let Some(sort) = HistorySort::parse(&key_raw) {
                state.history_sort = sort;
            }
        }

        Command::OpenAuth(tab) => state.modal.open(tab),
        Command::CloseAuth => state.modal.close(),
        Command::SwitchTab(tab) => state.modal.switch_tab(tab),

        Command::Login { email, password } => {
            let outcome = state.accounts().login(&email, &password);
            match outcome {
                Ok(session) => {
                    state.notifier.show(format!("Welcome back, {}", session.name), now);
                    state.modal.close();
                }
                Err(Error::InvalidCredentials) => {
                    state.notifier.show("Invalid credentials", now);
                }
                Err(e) => return Err(e),
            }
        }

        Command::Register { name, email, password } => {
            let outcome = state.accounts().register(&name, &email, &password);
            match outcome {
                Ok(session) => {
                    state.notifier.show(format!("Welcome, {}!", session.name), now);
                    state.modal.close();
                }
                Err(Error::Validation(_)) => {
                    state.notifier.show("Please fill the form correctly", now);
                }
                Err(Error::DuplicateAccount) => {
                    state.notifier.show("Account already exists", now);
                }
                Err(e) => return Err(e),
            }
        }

        Command::Logout => {
            state.accounts().logout()?;
            state.notifier.show("Signed out", now);
        }
    }

    Ok(())
}

/// Advance deferred work: release a debounced search once its window has
/// elapsed. Returns whether the history view changed.
pub fn tick<S: KeyValueStore>(state: &mut AppState<S>, now: Instant) -> bool {
    if let Some(text) = state.search.poll(now) {
        state.history_search = text;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounce::SEARCH_DEBOUNCE;
    use allsafe_core::MemoryStore;
    use rust_decimal::Decimal;

    fn fresh() -> AppState<MemoryStore> {
        AppState::new(MemoryStore::new())
    }

    #[test]
    fn test_buy_flow() {
        let mut state = fresh();
        let now = Instant::now();

        dispatch(
            &mut state,
            Command::Buy {
                product_id: "secure-firewall".to_string(),
                qty_raw: "2".to_string(),
            },
            now,
        )
        .unwrap();

        // Ledger gained the record, newest first, with the snapshot total
        let rows = state.history_view();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total, Decimal::new(7998, 2));

        // Toast shown, history section activated
        assert_eq!(state.notifier.active(now), Some("Purchased SecureFirewall ×2"));
        assert_eq!(state.router.active(), Section::PurchaseHistory);
    }

    #[test]
    fn test_buy_clamps_bad_quantity() {
        let mut state = fresh();
        dispatch(
            &mut state,
            Command::Buy {
                product_id: "secure-vpn".to_string(),
                qty_raw: "garbage".to_string(),
            },
            Instant::now(),
        )
        .unwrap();

        assert_eq!(state.history_view()[0].qty, 1);
    }

    #[test]
    fn test_view_product_and_back() {
        let mut state = fresh();
        let now = Instant::now();

        dispatch(
            &mut state,
            Command::ViewProduct {
                product_id: "secure-cloud".to_string(),
            },
            now,
        )
        .unwrap();
        assert_eq!(state.router.active(), Section::Detail);
        assert_eq!(state.detail_product().unwrap().id, "secure-cloud");

        dispatch(&mut state, Command::Back, now).unwrap();
        assert_eq!(state.router.active(), Section::Products);
    }

    #[test]
    fn test_nav_to_login_opens_modal_instead_of_routing() {
        let mut state = fresh();
        let now = Instant::now();

        dispatch(&mut state, Command::Navigate(Section::Login), now).unwrap();
        assert_eq!(state.modal.active_tab(), Some(AuthTab::Login));
        // The visible section did not change
        assert_eq!(state.router.active(), Section::Home);
    }

    #[test]
    fn test_register_then_login_roundtrip() {
        let mut state = fresh();
        let now = Instant::now();

        dispatch(&mut state, Command::OpenAuth(AuthTab::Register), now).unwrap();
        dispatch(
            &mut state,
            Command::Register {
                name: "Darlene".to_string(),
                email: "Darlene@allsafe.com".to_string(),
                password: "fsociety".to_string(),
            },
            now,
        )
        .unwrap();

        assert_eq!(state.notifier.active(now), Some("Welcome, Darlene!"));
        assert!(!state.modal.is_open());
        assert!(state.accounts().current_session().is_some());

        dispatch(&mut state, Command::Logout, now).unwrap();
        assert_eq!(state.accounts().current_session(), None);
        assert_eq!(state.notifier.active(now), Some("Signed out"));

        // Case-insensitive email on login
        dispatch(
            &mut state,
            Command::Login {
                email: "DARLENE@ALLSAFE.COM".to_string(),
                password: "fsociety".to_string(),
            },
            now,
        )
        .unwrap();
        assert_eq!(state.notifier.active(now), Some("Welcome back, Darlene"));
    }

    #[test]
    fn test_auth_failures_surface_as_toasts() {
        let mut state = fresh();
        let now = Instant::now();

        dispatch(
            &mut state,
            Command::Login {
                email: "nobody@allsafe.com".to_string(),
                password: "whatever".to_string(),
            },
            now,
        )
        .unwrap();
        assert_eq!(state.notifier.active(now), Some("Invalid credentials"));

        dispatch(
            &mut state,
            Command::Register {
                name: "Darlene".to_string(),
                email: "darlene@allsafe.com".to_string(),
                password: "short".to_string(),
            },
            now,
        )
        .unwrap();
        assert_eq!(state.notifier.active(now), Some("Please fill the form correctly"));
        assert!(state.accounts().accounts().is_empty());
    }

    #[test]
    fn test_filter_and_sort_selections_drive_the_grid() {
        let mut state = fresh();
        let now = Instant::now();

        dispatch(
            &mut state,
            Command::Filter {
                category_raw: "vpn".to_string(),
            },
            now,
        )
        .unwrap();
        assert_eq!(state.product_view().len(), 1);

        // Unrecognized filter passes everything through
        dispatch(
            &mut state,
            Command::Filter {
                category_raw: "mystery".to_string(),
            },
            now,
        )
        .unwrap();
        assert_eq!(state.product_view().len(), 4);

        // Unrecognized sort falls back to catalog order
        dispatch(
            &mut state,
            Command::Sort {
                key_raw: "bogus".to_string(),
            },
            now,
        )
        .unwrap();
        assert_eq!(state.product_view()[0].id, "secure-antivirus");
    }

    #[test]
    fn test_search_is_debounced() {
        let mut state = fresh();
        let now = Instant::now();

        dispatch(&mut state, Command::Buy {
            product_id: "secure-vpn".to_string(),
            qty_raw: "1".to_string(),
        }, now)
        .unwrap();

        dispatch(&mut state, Command::Search { text: "cloud".to_string() }, now).unwrap();

        // Not applied until the window elapses
        assert!(!tick(&mut state, now));
        assert_eq!(state.history_view().len(), 1);

        assert!(tick(&mut state, now + SEARCH_DEBOUNCE));
        assert_eq!(state.history_search, "cloud");
        assert!(state.history_view().is_empty());
    }

    #[test]
    fn test_unknown_history_sort_keeps_current_selection() {
        let mut state = fresh();
        state.history_sort = HistorySort::TotalHigh;

        dispatch(
            &mut state,
            Command::SortHistory {
                key_raw: "sideways".to_string(),
            },
            Instant::now(),
        )
        .unwrap();
        assert_eq!(state.history_sort, HistorySort::TotalHigh);
    }
}
