//! Catalog configuration: vocabulary and listing limits.
//!
//! The concrete category names and price buckets are store configuration, not
//! query logic. Every field has a default matching the shop's standard setup,
//! so a partial JSON document is enough to override one setting.

use serde::{Deserialize, Serialize};

use crate::filter::PriceBucket;
use crate::page::DEFAULT_PAGE_SIZE;
use shopfront_core::{DomainError, DomainResult, Money};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Currency label used when rendering prices (e.g. "GHS").
    pub currency: String,
    /// Known product categories. Empty means "accept any category".
    pub categories: Vec<String>,
    /// Price buckets offered by the price-range control (excluding "all").
    pub price_buckets: Vec<PriceBucket>,
    pub featured_limit: usize,
    pub featured_services_limit: usize,
    pub related_limit: usize,
    pub low_stock_threshold: u32,
    /// Products per page on the main listing.
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            currency: "GHS".to_string(),
            categories: ["computers", "phones", "accessories", "stationary"]
                .into_iter()
                .map(String::from)
                .collect(),
            price_buckets: vec![
                PriceBucket::between(Money::ZERO, Money::from_major(500)),
                PriceBucket::between(Money::from_major(500), Money::from_major(2000)),
                PriceBucket::between(Money::from_major(2000), Money::from_major(5000)),
                PriceBucket::at_least(Money::from_major(5000)),
            ],
            featured_limit: 4,
            featured_services_limit: 6,
            related_limit: 4,
            low_stock_threshold: 5,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CatalogConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("catalog config: {e}")))
    }

    pub fn knows_category(&self, category: &str) -> bool {
        self.categories.is_empty() || self.categories.iter().any(|c| c == category)
    }
}
