//! Per-metric rate tables
//!
//! One table per tracked environmental metric, mapping land-use category to
//! a non-negative rate. Tables are immutable for the lifetime of a
//! calculator; they are built once from configuration at startup.

use crate::category::CategoryId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// How a metric's rate combines with the parcel area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// `total = rate × area`; deltas scale with parcel size
    /// (sequestration mass, retention volume, habitat score over area)
    AreaScaled,
    /// Rate reported as-is; area is ignored
    /// (infiltration percentage, runoff depth)
    DirectRate,
}

/// Rates for one environmental metric, keyed by land-use category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Metric name, unique within a configuration (e.g. `carbon_sequestration`)
    pub metric: String,
    /// Display unit for the metric's values (e.g. `t CO₂/yr`)
    pub unit: String,
    pub kind: MetricKind,
    pub rates: FxHashMap<CategoryId, f64>,
}

impl RateTable {
    pub fn new(metric: impl Into<String>, unit: impl Into<String>, kind: MetricKind) -> Self {
        RateTable {
            metric: metric.into(),
            unit: unit.into(),
            kind,
            rates: FxHashMap::default(),
        }
    }

    /// Add one category rate (builder style). Identifier validity is
    /// enforced when the table reaches `BenefitConfig::validate`.
    pub fn with_rate(mut self, category: &str, rate: f64) -> Self {
        self.rates.insert(CategoryId::from_raw(category), rate);
        self
    }

    pub fn rate_for(&self, category: &CategoryId) -> Option<f64> {
        self.rates.get(category).copied()
    }

    pub fn contains(&self, category: &CategoryId) -> bool {
        self.rates.contains_key(category)
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn categories(&self) -> impl Iterator<Item = &CategoryId> {
        self.rates.keys()
    }
}
