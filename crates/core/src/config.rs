//! Calculator configuration
//!
//! The rate tables and the missing-category policy form one external
//! configuration document (category → metric → rate), loaded once at
//! startup. The observed deployments of this tool shipped at least four
//! divergent rate-table variants for the same conceptual metrics, so the
//! vocabulary and the numbers are data, not code.

use crate::category::CategoryId;
use crate::error::BenefitError;
use crate::rates::RateTable;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// What to do when a category is present in some tables but missing from the
/// one being evaluated.
///
/// A category missing from *every* table is always an
/// [`UnknownCategory`](BenefitError::UnknownCategory) error, regardless of
/// policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingCategoryPolicy {
    /// Substitute rate 0 and flag the affected side of the metric.
    /// Majority behavior of the observed deployments.
    #[default]
    ZeroFill,
    /// Fail the whole calculation with `UnknownCategory`.
    Strict,
}

/// The full configuration document for a calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitConfig {
    #[serde(default)]
    pub missing_category: MissingCategoryPolicy,
    pub tables: Vec<RateTable>,
}

impl BenefitConfig {
    pub fn new(tables: Vec<RateTable>) -> Self {
        BenefitConfig {
            missing_category: MissingCategoryPolicy::default(),
            tables,
        }
    }

    pub fn with_policy(mut self, policy: MissingCategoryPolicy) -> Self {
        self.missing_category = policy;
        self
    }

    /// Parse a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, BenefitError> {
        serde_json::from_str(json)
            .map_err(|e| BenefitError::config(format!("failed to parse configuration: {e}")))
    }

    /// Serialize to a pretty-printed JSON document (the same shape
    /// `from_json_str` accepts).
    pub fn to_json_pretty(&self) -> Result<String, BenefitError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BenefitError::config(format!("failed to serialize configuration: {e}")))
    }

    /// Check that the configuration is usable. Called once by
    /// `BenefitCalculator::new`; failure is fatal to the calculator's
    /// availability, not per-request.
    pub fn validate(&self) -> Result<(), BenefitError> {
        if self.tables.is_empty() {
            return Err(BenefitError::config("no rate tables configured"));
        }

        let mut seen = FxHashSet::default();
        for table in &self.tables {
            if table.metric.trim().is_empty() {
                return Err(BenefitError::config("rate table with empty metric name"));
            }
            if !seen.insert(table.metric.as_str()) {
                return Err(BenefitError::config(format!(
                    "duplicate metric name: {}",
                    table.metric
                )));
            }
            if table.is_empty() {
                return Err(BenefitError::config(format!(
                    "rate table for metric {} is empty",
                    table.metric
                )));
            }
            for (category, rate) in &table.rates {
                if category.as_str().trim().is_empty() {
                    return Err(BenefitError::config(format!(
                        "empty category identifier in table {}",
                        table.metric
                    )));
                }
                // Rates are non-negative reals; anything else would flow
                // straight into result deltas
                if !rate.is_finite() || *rate < 0.0 {
                    return Err(BenefitError::config(format!(
                        "invalid rate {rate} for {category} in table {}",
                        table.metric
                    )));
                }
            }
        }
        Ok(())
    }

    /// True if the category appears in at least one table.
    pub fn knows(&self, category: &CategoryId) -> bool {
        self.tables.iter().any(|t| t.contains(category))
    }

    /// Union of categories across all tables, sorted for stable display.
    pub fn vocabulary(&self) -> Vec<&CategoryId> {
        let mut all: Vec<&CategoryId> = self
            .tables
            .iter()
            .flat_map(RateTable::categories)
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();
        all.sort();
        all
    }
}
