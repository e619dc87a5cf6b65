use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult, Entity, Money, ProductId, ServiceId};

/// A sellable catalog product.
///
/// Created when the catalog is loaded and never mutated afterwards (stock is
/// informational; purchases do not decrement it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    pub brand: String,
    /// Price in smallest currency unit (e.g., pesewas).
    pub price: Money,
    pub short_description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Product {
    /// First image reference, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Case-insensitive substring match against name, short description,
    /// category and brand. `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        [
            self.name.as_str(),
            self.short_description.as_str(),
            self.category.as_str(),
            self.brand.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }

    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::validation("product id cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: name cannot be empty",
                self.id
            )));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: category cannot be empty",
                self.id
            )));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A bookable in-store service (repairs, printing, mobile money...).
///
/// Services are listed, never added to the cart, so pricing stays free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub duration_estimate: String,
    #[serde(default)]
    pub price_range: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub is_featured: bool,
}

impl Service {
    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(DomainError::validation("service id cannot be empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "service {}: name cannot be empty",
                self.id
            )));
        }
        Ok(())
    }
}

impl Entity for Service {
    type Id = ServiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
