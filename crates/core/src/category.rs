//! Land-use category identifiers
//!
//! Categories form a closed vocabulary, but the vocabulary is supplied by
//! configuration (the keys of the configured rate tables), not hard-coded:
//! different deployments use different category sets and different rates.

use crate::error::BenefitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for a land-use category, e.g. `tropical_forest`,
/// `conventional_cropland`, `peatland`.
///
/// Must be non-empty; whether an identifier is *known* is decided against
/// the configured rate tables, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Result<Self, BenefitError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(BenefitError::EmptyCategory);
        }
        Ok(CategoryId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Builder path for rate tables; emptiness is re-checked by
    // `BenefitConfig::validate`.
    pub(crate) fn from_raw(id: &str) -> Self {
        CategoryId(id.to_string())
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CategoryId {
    type Err = BenefitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryId::new(s)
    }
}

impl TryFrom<String> for CategoryId {
    type Error = BenefitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CategoryId::new(value)
    }
}

impl From<CategoryId> for String {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}
