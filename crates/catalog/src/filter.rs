//! Filter/sort selection driving catalog queries.
//!
//! Every selector round-trips through the short tokens the presentation layer
//! uses for its controls (`all`, `computers`, `500-2000`, `5000+`, `price-low`).

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, Money};

const ALL: &str = "all";

/// Category selection: everything, or one exact category value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn only(category: impl Into<String>) -> Self {
        Self::Only(category.into())
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        if s == ALL {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.to_string()
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

/// Price-range bucket. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriceBucket {
    #[default]
    All,
    Range { min: Money, max: Option<Money> },
}

impl PriceBucket {
    pub fn between(min: Money, max: Money) -> Self {
        Self::Range { min, max: Some(max) }
    }

    pub fn at_least(min: Money) -> Self {
        Self::Range { min, max: None }
    }

    pub fn contains(&self, price: Money) -> bool {
        match *self {
            PriceBucket::All => true,
            PriceBucket::Range { min, max: None } => price >= min,
            PriceBucket::Range { min, max: Some(max) } => min <= price && price <= max,
        }
    }
}

/// Parses an amount in currency units: `500`, `0.5` or `0.50`.
fn parse_major(raw: &str, token: &str) -> Result<Money, DomainError> {
    let invalid =
        |reason: String| DomainError::validation(format!("price bucket '{token}': {reason}"));
    let raw = raw.trim();
    let (whole, fraction) = raw.split_once('.').unwrap_or((raw, ""));
    if raw.contains('.') && (fraction.is_empty() || fraction.len() > 2) {
        return Err(invalid("expected at most two decimal places".to_string()));
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(format!("invalid fraction '{fraction}'")));
    }
    let whole = whole.parse::<u64>().map_err(|e| invalid(e.to_string()))?;
    let cents = match fraction.len() {
        0 => 0,
        1 => u64::from(fraction.as_bytes()[0] - b'0') * 10,
        _ => fraction.parse::<u64>().map_err(|e| invalid(e.to_string()))?,
    };
    whole
        .checked_mul(100)
        .and_then(|minor| minor.checked_add(cents))
        .map(Money::from_minor)
        .ok_or_else(|| invalid("amount is too large".to_string()))
}

impl FromStr for PriceBucket {
    type Err = DomainError;

    /// Parses `all`, `min-max` or `min+`, in currency units with up to two decimals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token == ALL {
            return Ok(Self::All);
        }
        if let Some(min) = token.strip_suffix('+') {
            return Ok(Self::at_least(parse_major(min, token)?));
        }
        match token.split_once('-') {
            Some((min, max)) => {
                let min = parse_major(min, token)?;
                let max = parse_major(max, token)?;
                if max < min {
                    return Err(DomainError::validation(format!(
                        "price bucket '{token}': max is below min"
                    )));
                }
                Ok(Self::between(min, max))
            }
            None => Err(DomainError::validation(format!(
                "price bucket '{token}': expected 'all', 'min-max' or 'min+'"
            ))),
        }
    }
}

impl TryFrom<String> for PriceBucket {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PriceBucket> for String {
    fn from(value: PriceBucket) -> Self {
        value.to_string()
    }
}

impl core::fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Whole units when exact, otherwise the full two-decimal amount.
        fn bound(m: Money) -> String {
            if m.minor() % 100 == 0 {
                (m.minor() / 100).to_string()
            } else {
                m.to_string()
            }
        }
        match *self {
            PriceBucket::All => f.write_str(ALL),
            PriceBucket::Range { min, max: None } => write!(f, "{}+", bound(min)),
            PriceBucket::Range { min, max: Some(max) } => {
                write!(f, "{}-{}", bound(min), bound(max))
            }
        }
    }
}

/// Sort order for catalog queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Case-insensitive name, ascending.
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    /// Featured items first, then by name.
    Featured,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Featured => "featured",
        }
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortKey::Name),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "featured" => Ok(SortKey::Featured),
            other => Err(DomainError::validation(format!("unknown sort key '{other}'"))),
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active category / price bucket / sort selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub price: PriceBucket,
    #[serde(default)]
    pub sort: SortKey,
}

impl FilterState {
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_price(mut self, price: PriceBucket) -> Self {
        self.price = price;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}
