//! Storefront session state.
//!
//! [`Storefront`] is the one object the presentation layer holds: it owns the
//! catalog, the cart and the active filter, and publishes cart changes on an
//! event bus.

pub mod storefront;

pub use storefront::{CartBus, Storefront};
