//! Typed ID for type-safe record references.
//!
//! Using a typed ID prevents accidentally passing an unrelated integer where
//! a currency id is expected. The wrapper is deliberately permissive beyond
//! that: ids are caller-assigned, any value is accepted, and nothing enforces
//! uniqueness.

use serde::{Deserialize, Serialize};

/// Unique-by-convention identifier for a currency record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyId(pub i64);

impl CurrencyId {
    /// Creates an ID from a raw integer.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CurrencyId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<i64> for CurrencyId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
