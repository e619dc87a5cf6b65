//! Catalog module: products, services and the queries layered on them.
//!
//! The catalog is read-only for the lifetime of a session. Everything here is
//! deterministic domain logic (no IO, no rendering).

pub mod catalog;
pub mod config;
pub mod filter;
pub mod page;
pub mod product;

pub use catalog::{Catalog, CatalogData, SearchOutcome};
pub use config::CatalogConfig;
pub use filter::{CategoryFilter, FilterState, PriceBucket, SortKey};
pub use page::Page;
pub use product::{Product, Service};
