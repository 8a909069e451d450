//! Plain-text view rendering
//!
//! The text-mode counterpart of the storefront's template strings. These
//! functions only format state that the router, engine, and stores own;
//! they hold no state of their own.

use allsafe_core::{Catalog, Product, PurchaseRecord, Session, FEATURED_COUNT};
use rust_decimal::Decimal;

use crate::router::{Section, ViewRouter};

pub fn money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// The nav bar, with the entry for the active section marked as current
pub fn render_nav(router: &ViewRouter) -> String {
    const NAV_ENTRIES: [Section; 3] = [Section::Home, Section::Products, Section::PurchaseHistory];

    let mut out = String::new();
    for entry in NAV_ENTRIES {
        if router.is_current(entry) {
            out.push_str(&format!("[{}]  ", entry.nav_label()));
        } else {
            out.push_str(&format!(" {}   ", entry.nav_label()));
        }
    }
    out.push('\n');
    out
}

/// The home-page featured strip
pub fn render_home(catalog: &Catalog) -> String {
    let mut out = String::from("AllSafe — Security products for everyone\n\nFeatured:\n");
    for product in catalog.featured(FEATURED_COUNT) {
        out.push_str(&format!(
            "  {:<16} {:<10} {}{}\n",
            product.name,
            product.category.label(),
            money(product.price),
            product.per
        ));
    }
    out
}

/// The product grid
pub fn render_products(list: &[Product]) -> String {
    let mut out = String::from("Products:\n");
    for product in list {
        out.push_str(&format!(
            "  [{}] {:<16} {:<10} {}{}  — {}\n",
            product.id,
            product.name,
            product.category.label(),
            money(product.price),
            product.per,
            product.short
        ));
    }
    out
}

/// The product detail section
pub fn render_detail(product: &Product) -> String {
    let mut out = format!(
        "{}\n{}\n\n[{}] [{}]\n{}{}\n",
        product.name,
        product.description,
        product.category.label(),
        product.stock,
        money(product.price),
        product.per
    );
    if let Some(hero) = product.hero_image() {
        out.push_str(&format!("Hero: {}\n", hero));
    }
    for (i, thumb) in product.thumbnails().iter().enumerate() {
        out.push_str(&format!("Screenshot {}: {}\n", i + 1, thumb));
    }
    out
}

/// The purchase-history table
pub fn render_history(rows: &[PurchaseRecord]) -> String {
    if rows.is_empty() {
        return "No purchases yet.\n".to_string();
    }

    let mut out = format!(
        "{:<16} {:<20} {:>4} {:>10} {:>10}\n",
        "Product", "Date", "Qty", "Unit", "Total"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<16} {:<20} {:>4} {:>10} {:>10}\n",
            row.product_name,
            row.date.format("%Y-%m-%d %H:%M:%S"),
            row.qty,
            money(row.unit_price),
            money(row.total)
        ));
    }
    out
}

/// The header user pill: the session name, or nothing when signed out
pub fn render_user_pill(session: Option<&Session>) -> String {
    match session {
        Some(session) => format!("{} • Logout\n", session.name),
        None => String::new(),
    }
}
