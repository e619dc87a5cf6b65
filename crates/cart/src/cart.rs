use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::event::{CartEvent, CartTotals, Cleared, ItemAdded, ItemRemoved, QuantityChanged};
use shopfront_catalog::{Catalog, Product};
use shopfront_core::{DomainResult, Entity, Money, ProductId};

/// One product's cart entry: cached display fields plus a quantity (>= 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    pub brand: String,
    /// Price in smallest currency unit at the time the line was created.
    pub unit_price: Money,
    pub image: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            brand: product.brand.clone(),
            unit_price: product.price,
            image: product.primary_image().map(str::to_string),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

impl Entity for CartLine {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

/// Session cart. Lines keep insertion order; at most one line per product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

/// Coerce a requested quantity into the valid range `1..=u32::MAX`.
fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(1)).unwrap_or(u32::MAX)
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities; 0 for an empty cart.
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Exact sum of unit price times quantity; 0.00 for an empty cart.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self.total_item_count(),
            total: self.total_price(),
        }
    }

    /// Add one unit of a catalog product.
    ///
    /// An existing line is incremented; otherwise a new line with quantity 1
    /// is appended. Unknown products fail with `NotFound`.
    pub fn add(&mut self, catalog: &Catalog, id: &ProductId) -> DomainResult<CartEvent> {
        let product = catalog.require(id)?;

        let quantity = match self.lines.iter_mut().find(|l| &l.product_id == id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine::from_product(product));
                1
            }
        };

        tracing::debug!(product_id = %id, quantity, "cart item added");

        Ok(CartEvent::ItemAdded(ItemAdded {
            product_id: id.clone(),
            quantity,
            totals: self.totals(),
            occurred_at: Utc::now(),
        }))
    }

    /// Remove a product's line. Absent ids are a no-op (`None`).
    pub fn remove(&mut self, id: &ProductId) -> Option<CartEvent> {
        let pos = self.lines.iter().position(|l| &l.product_id == id)?;
        self.lines.remove(pos);

        tracing::debug!(product_id = %id, "cart item removed");

        Some(CartEvent::ItemRemoved(ItemRemoved {
            product_id: id.clone(),
            totals: self.totals(),
            occurred_at: Utc::now(),
        }))
    }

    /// Set a line's quantity, clamping anything below 1 up to 1.
    ///
    /// Absent ids are a no-op (`None`).
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> Option<CartEvent> {
        let line = self.lines.iter_mut().find(|l| &l.product_id == id)?;
        line.quantity = clamp_quantity(quantity);
        let quantity = line.quantity;

        tracing::debug!(product_id = %id, quantity, "cart quantity changed");

        Some(CartEvent::QuantityChanged(QuantityChanged {
            product_id: id.clone(),
            quantity,
            totals: self.totals(),
            occurred_at: Utc::now(),
        }))
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> CartEvent {
        self.lines.clear();
        tracing::debug!("cart cleared");
        CartEvent::Cleared(Cleared {
            occurred_at: Utc::now(),
        })
    }
}
