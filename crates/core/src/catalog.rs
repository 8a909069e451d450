//! The product catalog
//!
//! An immutable, hardcoded list of products held in memory for the
//! lifetime of the process. The catalog is the only source of product
//! data; nothing edits it after construction.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::invariants::assert_catalog_invariants;
use crate::models::{Category, Product};

/// Number of products shown on the home-page featured strip
pub const FEATURED_COUNT: usize = 3;

/// The fixed, read-only product list
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list.
    ///
    /// Product ids must be unique; this is checked by a debug invariant.
    pub fn new(products: Vec<Product>) -> Self {
        assert_catalog_invariants(&products);
        Self { products }
    }

    /// The built-in AllSafe product line
    pub fn builtin() -> Self {
        Self::new(vec![
            Product {
                id: "secure-antivirus".into(),
                name: "SecureAntivirus".into(),
                category: Category::Antivirus,
                price: Decimal::new(2999, 2),
                per: "/year".into(),
                popularity: 90,
                created_at: date(2024, 8, 1),
                stock: "In Stock".into(),
                short: "Comprehensive, real-time protection against malware and viruses.".into(),
                description: "SecureAntivirus delivers AI-assisted threat detection, ransomware \
                              rollback, and scheduled scans. Lightweight on resources and robust \
                              against zero-day exploits."
                    .into(),
                images: vec![
                    "https://via.placeholder.com/960x540?text=SecureAntivirus+Hero".into(),
                    "https://via.placeholder.com/300?text=Antivirus+UI+1".into(),
                    "https://via.placeholder.com/300?text=Antivirus+UI+2".into(),
                    "https://via.placeholder.com/300?text=Antivirus+UI+3".into(),
                    "https://via.placeholder.com/300?text=Antivirus+UI+4".into(),
                ],
            },
            Product {
                id: "secure-vpn".into(),
                name: "SecureVPN".into(),
                category: Category::Vpn,
                price: Decimal::new(4999, 2),
                per: "/year".into(),
                popularity: 98,
                created_at: date(2025, 3, 17),
                stock: "In Stock".into(),
                short: "Private and secure browsing with global servers.".into(),
                description: "SecureVPN masks your IP, prevents ISP throttling, and supports \
                              streaming-friendly endpoints. WireGuard compatible with blazing \
                              performance."
                    .into(),
                images: vec![
                    "https://via.placeholder.com/960x540?text=SecureVPN+Hero".into(),
                    "https://via.placeholder.com/300?text=VPN+Servers".into(),
                    "https://via.placeholder.com/300?text=VPN+App".into(),
                    "https://via.placeholder.com/300?text=VPN+Speed".into(),
                    "https://via.placeholder.com/300?text=VPN+Privacy".into(),
                ],
            },
            Product {
                id: "secure-firewall".into(),
                name: "SecureFirewall".into(),
                category: Category::Firewall,
                price: Decimal::new(3999, 2),
                per: "/year".into(),
                popularity: 75,
                created_at: date(2024, 10, 2),
                stock: "Limited".into(),
                short: "Robust network security and intrusion prevention.".into(),
                description: "SecureFirewall adds adaptive rules, intrusion detection (IDS), and \
                              simple profiles for home and office networks."
                    .into(),
                images: vec![
                    "https://via.placeholder.com/960x540?text=SecureFirewall+Hero".into(),
                    "https://via.placeholder.com/300?text=Firewall+Rules".into(),
                    "https://via.placeholder.com/300?text=Firewall+Alerts".into(),
                    "https://via.placeholder.com/300?text=Firewall+Graphs".into(),
                    "https://via.placeholder.com/300?text=Firewall+Setup".into(),
                ],
            },
            Product {
                id: "secure-cloud".into(),
                name: "SecureCloud".into(),
                category: Category::Cloud,
                price: Decimal::new(5999, 2),
                per: "/year".into(),
                popularity: 82,
                created_at: date(2025, 6, 2),
                stock: "In Stock".into(),
                short: "Protect and encrypt your data in the cloud.".into(),
                description: "SecureCloud brings end-to-end encryption, zero-knowledge sharing \
                              links, and automatic device backup for teams and individuals."
                    .into(),
                images: vec![
                    "https://via.placeholder.com/960x540?text=SecureCloud+Hero".into(),
                    "https://via.placeholder.com/300?text=Cloud+Backup".into(),
                    "https://via.placeholder.com/300?text=Cloud+Restore".into(),
                    "https://via.placeholder.com/300?text=Cloud+Share".into(),
                    "https://via.placeholder.com/300?text=Cloud+Settings".into(),
                ],
            },
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The leading products for the home-page featured strip
    pub fn featured(&self, count: usize) -> &[Product] {
        let count = count.min(self.products.len());
        &self.products[..count]
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
