//! Product model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product category, a fixed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Antivirus,
    Vpn,
    Firewall,
    Cloud,
}

impl Category {
    /// Parse a raw category value; unknown values yield `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "antivirus" => Some(Self::Antivirus),
            "vpn" => Some(Self::Vpn),
            "firewall" => Some(Self::Firewall),
            "cloud" => Some(Self::Cloud),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Antivirus => "antivirus",
            Self::Vpn => "vpn",
            Self::Firewall => "firewall",
            Self::Cloud => "cloud",
        }
    }
}

/// A sellable product. Catalog entries are read-only after initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Price in USD; non-negative
    pub price: Decimal,
    /// Billing period label, e.g. "/year"
    pub per: String,
    pub popularity: u32,
    pub created_at: NaiveDate,
    /// Stock display label, e.g. "In Stock"
    pub stock: String,
    pub short: String,
    pub description: String,
    /// Ordered image URLs; the first is the hero image
    pub images: Vec<String>,
}

impl Product {
    pub fn hero_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Thumbnail images (everything after the hero)
    pub fn thumbnails(&self) -> &[String] {
        self.images.get(1..).unwrap_or(&[])
    }
}
