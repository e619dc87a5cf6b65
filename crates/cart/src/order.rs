//! Order submission.
//!
//! Checkout snapshots the cart into an [`OrderRecord`], hands it to an
//! [`OrderSink`] and clears the cart. There is no payment or fulfilment step.

use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};
use crate::event::CartEvent;
use shopfront_core::{DomainError, DomainResult, Money};

/// Display token identifying a placed order, e.g. `NG123456042`.
///
/// `NG` + last 6 digits of the millisecond timestamp + 3 random digits. Not
/// unique; never use it for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderReference(String);

impl OrderReference {
    pub const PREFIX: &'static str = "NG";

    pub fn generate(placed_at: DateTime<Utc>, random: u16) -> Self {
        let millis = placed_at.timestamp_millis().rem_euclid(1_000_000);
        Self(format!("{}{:06}{:03}", Self::PREFIX, millis, random % 1000))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for OrderReference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of the random 3-digit part of an order reference.
pub trait ReferenceSource {
    /// A value in `0..=999`.
    fn next_suffix(&mut self) -> u16;
}

/// Thread-local RNG backed source.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl ReferenceSource for ThreadRngSource {
    fn next_suffix(&mut self) -> u16 {
        rand::thread_rng().gen_range(0..1000)
    }
}

/// Deterministic source: every reference gets the same suffix.
///
/// For hosts that need stable references, such as demos or replaying a
/// recorded session. Values above 999 wrap modulo 1000.
#[derive(Debug, Clone, Copy)]
pub struct FixedReferenceSource(pub u16);

impl ReferenceSource for FixedReferenceSource {
    fn next_suffix(&mut self) -> u16 {
        self.0 % 1000
    }
}

/// Customer fields from the order form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

/// Snapshot of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub reference: OrderReference,
    pub customer: CustomerDetails,
    pub lines: Vec<CartLine>,
    pub total: Money,
    pub placed_at: DateTime<Utc>,
}

impl OrderRecord {
    /// Snapshot a non-empty cart. Fails with `EmptyCart` otherwise.
    pub fn from_cart(
        cart: &Cart,
        customer: CustomerDetails,
        reference: OrderReference,
        placed_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if cart.is_empty() {
            return Err(DomainError::EmptyCart);
        }
        Ok(Self {
            reference,
            customer,
            lines: cart.lines().to_vec(),
            total: cart.total_price(),
            placed_at,
        })
    }

    /// ISO-8601 timestamp with millisecond precision (`2026-10-17T09:30:00.000Z`).
    pub fn placed_at_iso(&self) -> String {
        self.placed_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

/// Receives placed orders (a log, a queue, a test collector...).
pub trait OrderSink {
    fn record_order(&mut self, order: &OrderRecord);
}

impl OrderSink for Vec<OrderRecord> {
    fn record_order(&mut self, order: &OrderRecord) {
        self.push(order.clone());
    }
}

/// Outcome of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub order: OrderRecord,
    /// The cart-cleared notification produced by emptying the cart.
    pub cleared: CartEvent,
}

/// Place an order for the current cart contents.
///
/// An empty cart fails with `EmptyCart` before anything happens: no reference
/// is generated, the sink is not called and the cart is left as is. On success
/// the sink receives the record and the cart is cleared.
pub fn place_order(
    cart: &mut Cart,
    customer: CustomerDetails,
    placed_at: DateTime<Utc>,
    references: &mut dyn ReferenceSource,
    sink: &mut dyn OrderSink,
) -> DomainResult<Checkout> {
    if cart.is_empty() {
        tracing::warn!("order rejected: cart is empty");
        return Err(DomainError::EmptyCart);
    }

    let reference = OrderReference::generate(placed_at, references.next_suffix());
    let order = OrderRecord::from_cart(cart, customer, reference, placed_at)?;

    sink.record_order(&order);
    let cleared = cart.clear();

    tracing::info!(
        reference = %order.reference,
        total = %order.total,
        items = order.item_count(),
        "order placed"
    );

    Ok(Checkout { order, cleared })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shopfront_catalog::Catalog;
    use shopfront_core::ProductId;

    struct CountingSource(u32);

    impl ReferenceSource for CountingSource {
        fn next_suffix(&mut self) -> u16 {
            self.0 += 1;
            7
        }
    }

    fn test_time() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_760_693_400_123).unwrap()
    }

    fn customer() -> CustomerDetails {
        CustomerDetails {
            name: "Ama Mensah".to_string(),
            phone: "0241234567".to_string(),
            message: "Call before delivery".to_string(),
        }
    }

    fn filled_cart() -> Cart {
        let catalog = Catalog::sample().unwrap();
        let mut cart = Cart::new();
        for key in ["laptop-hp-001", "accessory-mouse-001", "accessory-mouse-001"] {
            cart.add(&catalog, &ProductId::new(key).unwrap()).unwrap();
        }
        cart
    }

    #[test]
    fn reference_uses_last_six_millis_digits_and_padded_suffix() {
        let reference = OrderReference::generate(test_time(), 7);
        assert_eq!(reference.as_str(), "NG400123007");

        let early = Utc.timestamp_millis_opt(42).unwrap();
        assert_eq!(OrderReference::generate(early, 999).to_string(), "NG000042999");
    }

    #[test]
    fn thread_rng_suffix_stays_in_range() {
        let mut source = ThreadRngSource;
        for _ in 0..200 {
            assert!(source.next_suffix() <= 999);
        }
    }

    #[test]
    fn empty_cart_is_rejected_without_side_effects() {
        let mut cart = Cart::new();
        let mut source = CountingSource(0);
        let mut sink: Vec<OrderRecord> = Vec::new();

        let err = place_order(&mut cart, customer(), test_time(), &mut source, &mut sink)
            .unwrap_err();

        assert_eq!(err, DomainError::EmptyCart);
        assert_eq!(source.0, 0, "no reference should be generated");
        assert!(sink.is_empty());
        assert!(cart.is_empty());
    }

    #[test]
    fn successful_order_snapshots_and_clears_cart() {
        let mut cart = filled_cart();
        let expected_total = cart.total_price();
        let expected_lines = cart.lines().to_vec();
        let mut sink: Vec<OrderRecord> = Vec::new();

        let checkout = place_order(
            &mut cart,
            customer(),
            test_time(),
            &mut FixedReferenceSource(42),
            &mut sink,
        )
        .unwrap();

        assert!(cart.is_empty());
        assert!(matches!(checkout.cleared, CartEvent::Cleared(_)));

        let order = &checkout.order;
        assert_eq!(order.total, expected_total);
        assert_eq!(order.total, Money::from_major(3670));
        assert_eq!(order.lines, expected_lines);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.reference.as_str(), "NG400123042");
        assert_eq!(order.customer.name, "Ama Mensah");
        assert_eq!(sink, vec![order.clone()]);
    }

    #[test]
    fn placed_at_renders_as_iso_8601() {
        let order = OrderRecord::from_cart(
            &filled_cart(),
            customer(),
            OrderReference::generate(test_time(), 1),
            test_time(),
        )
        .unwrap();
        assert_eq!(order.placed_at_iso(), "2025-10-17T09:30:00.123Z");
    }

    #[test]
    fn order_record_serializes_reference_as_string() {
        let order = OrderRecord::from_cart(
            &filled_cart(),
            customer(),
            OrderReference::generate(test_time(), 5),
            test_time(),
        )
        .unwrap();
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["reference"], "NG400123005");
        assert_eq!(json["total"], 367_000);
        assert_eq!(json["lines"].as_array().unwrap().len(), 2);
    }
}
