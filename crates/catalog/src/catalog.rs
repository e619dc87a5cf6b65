//! Read-only catalog and its queries.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::filter::{FilterState, PriceBucket, SortKey};
use crate::page::Page;
use crate::product::{Product, Service};
use shopfront_core::{DomainError, DomainResult, ProductId};

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

/// Serialized catalog document: configuration plus entries, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub config: CatalogConfig,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub services: Vec<Service>,
}

/// Result of a free-text search.
///
/// A blank term is its own state, so the UI can prompt for input instead of
/// reporting "no products found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    NoQuery,
    Results(Vec<&'a Product>),
}

impl<'a> SearchOutcome<'a> {
    pub fn results(&self) -> &[&'a Product] {
        match self {
            SearchOutcome::NoQuery => &[],
            SearchOutcome::Results(found) => found,
        }
    }

    pub fn is_no_query(&self) -> bool {
        matches!(self, SearchOutcome::NoQuery)
    }
}

/// Products and services for one session. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: CatalogConfig,
    products: Vec<Product>,
    services: Vec<Service>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, validating entries against the configuration.
    ///
    /// Rejects blank names/ids, duplicate ids and categories outside the
    /// configured vocabulary.
    pub fn new(
        config: CatalogConfig,
        products: Vec<Product>,
        services: Vec<Service>,
    ) -> DomainResult<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            product.validate()?;
            if !config.knows_category(&product.category) {
                return Err(DomainError::validation(format!(
                    "product {}: unknown category '{}'",
                    product.id, product.category
                )));
            }
            if index.insert(product.id.clone(), pos).is_some() {
                return Err(DomainError::validation(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }

        let mut service_ids = HashSet::with_capacity(services.len());
        for service in &services {
            service.validate()?;
            if !service_ids.insert(&service.id) {
                return Err(DomainError::validation(format!(
                    "duplicate service id {}",
                    service.id
                )));
            }
        }

        tracing::debug!(
            products = products.len(),
            services = services.len(),
            "catalog loaded"
        );

        Ok(Self {
            config,
            products,
            services,
            index,
        })
    }

    pub fn load(data: CatalogData) -> DomainResult<Self> {
        Self::new(data.config, data.products, data.services)
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        let data: CatalogData = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("catalog document: {e}")))?;
        Self::load(data)
    }

    /// The shop's bundled sample catalog.
    pub fn sample() -> DomainResult<Self> {
        Self::from_json(SAMPLE_CATALOG)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn categories(&self) -> &[String] {
        &self.config.categories
    }

    pub fn price_buckets(&self) -> &[PriceBucket] {
        &self.config.price_buckets
    }

    /// All products, catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).map(|&pos| &self.products[pos])
    }

    /// Like [`Catalog::product`], but an unknown id is a `NotFound` error.
    pub fn require(&self, id: &ProductId) -> DomainResult<&Product> {
        self.product(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))
    }

    /// First `limit` featured products, catalog order.
    pub fn list_featured(&self, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_featured)
            .take(limit)
            .collect()
    }

    /// First `limit` featured services, catalog order.
    pub fn list_featured_services(&self, limit: usize) -> Vec<&Service> {
        self.services
            .iter()
            .filter(|s| s.is_featured)
            .take(limit)
            .collect()
    }

    /// Filter by category, then price bucket, then sort.
    ///
    /// All sorts are stable. Featured-first breaks ties by name so the order
    /// does not depend on catalog position.
    pub fn query(&self, filter: &FilterState) -> Vec<&Product> {
        let mut found: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| filter.category.matches(&p.category))
            .filter(|p| filter.price.contains(p.price))
            .collect();

        match filter.sort {
            SortKey::Name => found.sort_by_cached_key(|p| p.name.to_lowercase()),
            SortKey::PriceLow => found.sort_by_key(|p| p.price),
            SortKey::PriceHigh => found.sort_by_key(|p| Reverse(p.price)),
            SortKey::Featured => {
                found.sort_by_cached_key(|p| (Reverse(p.is_featured), p.name.to_lowercase()))
            }
        }

        found
    }

    /// One page of [`Catalog::query`], sized by `config.page_size`.
    pub fn query_page(&self, filter: &FilterState, page: usize) -> Page<'_> {
        Page::paginate(self.query(filter), self.config.page_size, page)
    }

    /// Case-insensitive substring search over name, short description,
    /// category and brand. Matches come back in catalog order.
    pub fn search(&self, term: &str) -> SearchOutcome<'_> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return SearchOutcome::NoQuery;
        }

        SearchOutcome::Results(
            self.products
                .iter()
                .filter(|p| p.matches_lowercase(&needle))
                .collect(),
        )
    }

    /// Other products from the same category, catalog order.
    pub fn related(&self, id: &ProductId, limit: usize) -> DomainResult<Vec<&Product>> {
        let product = self.require(id)?;
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect())
    }

    /// Products with `stock <= threshold`, catalog order.
    pub fn low_stock(&self, threshold: u32) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.stock <= threshold)
            .collect()
    }
}
