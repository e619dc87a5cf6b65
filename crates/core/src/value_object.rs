//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values:
/// two `Money` amounts of 85.00 are the same amount. They are immutable; to
/// "change" one, build a new value.
///
/// ```ignore
/// let a = Money::from_major(85);
/// let b = Money::from_minor(8500);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
