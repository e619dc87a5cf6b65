use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfront_core::{Money, ProductId};
use shopfront_events::Event;

/// Cart figures right after a change, for badge/total refreshes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub item_count: u64,
    pub total: Money,
}

/// Event: ItemAdded. `quantity` is the line's quantity after the add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub product_id: ProductId,
    pub quantity: u32,
    pub totals: CartTotals,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub product_id: ProductId,
    pub totals: CartTotals,
    pub occurred_at: DateTime<Utc>,
}

/// Event: QuantityChanged. `quantity` is the clamped value actually stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChanged {
    pub product_id: ProductId,
    pub quantity: u32,
    pub totals: CartTotals,
    pub occurred_at: DateTime<Utc>,
}

/// Event: Cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cleared {
    pub occurred_at: DateTime<Utc>,
}

/// Cart-changed notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
    QuantityChanged(QuantityChanged),
    Cleared(Cleared),
}

impl CartEvent {
    pub fn totals(&self) -> CartTotals {
        match self {
            CartEvent::ItemAdded(e) => e.totals,
            CartEvent::ItemRemoved(e) => e.totals,
            CartEvent::QuantityChanged(e) => e.totals,
            CartEvent::Cleared(_) => CartTotals::default(),
        }
    }

    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            CartEvent::ItemAdded(e) => Some(&e.product_id),
            CartEvent::ItemRemoved(e) => Some(&e.product_id),
            CartEvent::QuantityChanged(e) => Some(&e.product_id),
            CartEvent::Cleared(_) => None,
        }
    }
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item_added",
            CartEvent::ItemRemoved(_) => "cart.item_removed",
            CartEvent::QuantityChanged(_) => "cart.quantity_changed",
            CartEvent::Cleared(_) => "cart.cleared",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::ItemRemoved(e) => e.occurred_at,
            CartEvent::QuantityChanged(e) => e.occurred_at,
            CartEvent::Cleared(e) => e.occurred_at,
        }
    }
}
