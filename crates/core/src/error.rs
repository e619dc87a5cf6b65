//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Both cart failures (`NotFound`, `EmptyCart`) are local and recoverable; the
/// caller decides what to show the user. Everything else the storefront does
/// (blank search, quantity clamping, removing an absent line) is a no-op or an
/// empty result, never an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An operation referenced an identity absent from the catalog.
    #[error("not found: {0}")]
    NotFound(String),

    /// Order submission was attempted with no cart lines.
    #[error("cart is empty")]
    EmptyCart,

    /// A value failed validation (e.g. malformed catalog data or form input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. blank key).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
