//! Filter/sort engine for the product grid
//!
//! Derives a display list from the catalog. Purely functional: the catalog
//! is never mutated, and every call returns a fresh list. Sorting is stable,
//! so equal-key products keep their catalog order.

use crate::catalog::Catalog;
use crate::models::{Category, Product};

/// Category filter for the product grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Sentinel: every product passes
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a raw filter value.
    ///
    /// Unrecognized values behave as "all" (pass-through) rather than
    /// yielding an empty grid.
    pub fn parse(raw: &str) -> Self {
        match Category::parse(raw) {
            Some(category) => Self::Only(category),
            None => Self::All,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

/// Sort key for the product grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    /// Price ascending
    PriceLow,
    /// Price descending
    PriceHigh,
    /// Popularity rank descending (numeric)
    Popularity,
    /// Creation date descending
    Newest,
}

impl ProductSort {
    /// Parse a raw sort key; unknown keys yield `None` (catalog order)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "price-low" => Some(Self::PriceLow),
            "price-high" => Some(Self::PriceHigh),
            "popularity" => Some(Self::Popularity),
            "newest" => Some(Self::Newest),
            _ => None,
        }
    }
}

/// Compute the product display list for a filter and sort selection.
///
/// `sort` of `None` leaves the list in catalog order.
pub fn compute_view(
    catalog: &Catalog,
    filter: CategoryFilter,
    sort: Option<ProductSort>,
) -> Vec<Product> {
    let mut list: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    // Vec::sort_by is stable: ties keep catalog order
    match sort {
        Some(ProductSort::PriceLow) => list.sort_by(|a, b| a.price.cmp(&b.price)),
        Some(ProductSort::PriceHigh) => list.sort_by(|a, b| b.price.cmp(&a.price)),
        Some(ProductSort::Popularity) => list.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
        Some(ProductSort::Newest) => list.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        None => {}
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn make_product(id: &str, category: Category, cents: i64, popularity: u32) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            category,
            price: Decimal::new(cents, 2),
            per: "/year".to_string(),
            popularity,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            stock: "In Stock".to_string(),
            short: String::new(),
            description: String::new(),
            images: vec![],
        }
    }

    fn prices(list: &[Product]) -> Vec<Decimal> {
        list.iter().map(|p| p.price).collect()
    }

    fn ids(list: &[Product]) -> Vec<&str> {
        list.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_price_ascending() {
        let catalog = Catalog::builtin();
        let list = compute_view(&catalog, CategoryFilter::All, Some(ProductSort::PriceLow));
        assert_eq!(
            prices(&list),
            vec![
                Decimal::new(2999, 2),
                Decimal::new(3999, 2),
                Decimal::new(4999, 2),
                Decimal::new(5999, 2),
            ]
        );
    }

    #[test]
    fn test_price_descending() {
        let catalog = Catalog::builtin();
        let list = compute_view(&catalog, CategoryFilter::All, Some(ProductSort::PriceHigh));
        assert_eq!(ids(&list)[0], "secure-cloud");
        assert_eq!(ids(&list)[3], "secure-antivirus");
    }

    #[test]
    fn test_popularity_is_numeric_descending() {
        let catalog = Catalog::builtin();
        let list = compute_view(&catalog, CategoryFilter::All, Some(ProductSort::Popularity));
        let ranks: Vec<u32> = list.iter().map(|p| p.popularity).collect();
        assert_eq!(ranks, vec![98, 90, 82, 75]);
    }

    #[test]
    fn test_newest_first() {
        let catalog = Catalog::builtin();
        let list = compute_view(&catalog, CategoryFilter::All, Some(ProductSort::Newest));
        assert_eq!(ids(&list), vec![
            "secure-cloud",
            "secure-vpn",
            "secure-firewall",
            "secure-antivirus",
        ]);
    }

    #[test]
    fn test_category_filter_excludes_non_matching() {
        let catalog = Catalog::builtin();
        let list = compute_view(
            &catalog,
            CategoryFilter::parse("vpn"),
            Some(ProductSort::PriceLow),
        );
        assert_eq!(ids(&list), vec!["secure-vpn"]);
    }

    #[test]
    fn test_unrecognized_filter_passes_through() {
        let catalog = Catalog::builtin();
        let list = compute_view(&catalog, CategoryFilter::parse("quantum"), None);
        assert_eq!(list.len(), catalog.len());
    }

    #[test]
    fn test_unrecognized_sort_keeps_catalog_order() {
        let catalog = Catalog::builtin();
        let list = compute_view(&catalog, CategoryFilter::All, ProductSort::parse("bogus"));
        assert_eq!(ids(&list), vec![
            "secure-antivirus",
            "secure-vpn",
            "secure-firewall",
            "secure-cloud",
        ]);
    }

    #[test]
    fn test_equal_keys_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            make_product("a", Category::Vpn, 1999, 50),
            make_product("b", Category::Cloud, 1999, 50),
            make_product("c", Category::Vpn, 999, 50),
        ]);

        let by_price = compute_view(&catalog, CategoryFilter::All, Some(ProductSort::PriceLow));
        assert_eq!(ids(&by_price), vec!["c", "a", "b"]);

        let by_rank = compute_view(&catalog, CategoryFilter::All, Some(ProductSort::Popularity));
        assert_eq!(ids(&by_rank), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_catalog_is_untouched() {
        let catalog = Catalog::builtin();
        let before = ids(catalog.products());
        let _ = compute_view(&catalog, CategoryFilter::All, Some(ProductSort::PriceHigh));
        assert_eq!(ids(catalog.products()), before);
    }
}
