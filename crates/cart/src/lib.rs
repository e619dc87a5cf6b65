//! Shopping cart and checkout.
//!
//! Cart mutations, order and contact submission, implemented as deterministic
//! domain logic. Submitted records are handed to caller-supplied sinks; this
//! crate performs no IO of its own.

pub mod cart;
pub mod contact;
pub mod event;
pub mod order;
pub mod sink;

pub use cart::{Cart, CartLine};
pub use contact::{ContactDetails, ContactRecord, ContactSink, submit_contact};
pub use event::{CartEvent, CartTotals};
pub use order::{
    Checkout, CustomerDetails, FixedReferenceSource, OrderRecord, OrderReference, OrderSink,
    ReferenceSource, ThreadRngSource, place_order,
};
pub use sink::LogSink;
