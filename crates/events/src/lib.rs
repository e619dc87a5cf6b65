//! Change notifications emitted by storefront state.
//!
//! Cart mutations describe what happened as events; the session publishes them
//! on a bus so the presentation layer can refresh counts and totals.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
