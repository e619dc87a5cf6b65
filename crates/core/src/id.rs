//! Strongly-typed identifiers used across the storefront.
//!
//! Catalog keys are human-readable slugs (`laptop-hp-001`) rather than UUIDs,
//! since the catalog is supplied as configuration data.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a catalog service.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

macro_rules! impl_key_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create an identifier, rejecting blank keys.
            pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
                let key = key.into();
                if key.trim().is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: blank key", $name)));
                }
                Ok(Self(key))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

impl_key_newtype!(ProductId, "ProductId");
impl_key_newtype!(ServiceId, "ServiceId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_non_blank_keys() {
        let id: ProductId = "laptop-hp-001".parse().unwrap();
        assert_eq!(id.as_str(), "laptop-hp-001");
        assert_eq!(id.to_string(), "laptop-hp-001");
    }

    #[test]
    fn rejects_blank_keys() {
        match "   ".parse::<ServiceId>().unwrap_err() {
            DomainError::InvalidId(msg) => assert!(msg.contains("ServiceId")),
            other => panic!("Expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ProductId::new("phone-iphone-001").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"phone-iphone-001\"");
    }
}
