//! The benefit calculator
//!
//! Deterministic, side-effect-free computation of environmental-change
//! metrics for a land-use transition over a given area. One calculation per
//! call; no state is held between calls and the rate tables are read-only
//! after construction, so a calculator can be shared freely across threads.
//!
//! Rounding and formatting are presentation concerns: no value is rounded
//! here, the caller formats the raw totals.

use crate::category::CategoryId;
use crate::config::{BenefitConfig, MissingCategoryPolicy};
use crate::error::BenefitError;
use crate::rates::{MetricKind, RateTable};
use crate::units::Hectares;
use serde::Serialize;
use tracing::{info, warn};

/// One metric's contribution to a transition result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricChange {
    pub metric: String,
    pub unit: String,
    pub kind: MetricKind,
    /// Total (area-scaled metrics) or rate (direct-rate metrics) for the
    /// current category
    pub current: f64,
    /// Same, for the future category
    pub future: f64,
    /// `future - current`; positive means the transition gains this metric
    pub delta: f64,
    /// The current category had no entry in this table and rate 0 was
    /// substituted; the `current` value is a placeholder, not a measurement
    pub current_rate_missing: bool,
    /// Same, for the future category
    pub future_rate_missing: bool,
}

impl MetricChange {
    /// True if either side of this metric was zero-filled
    pub fn is_partial(&self) -> bool {
        self.current_rate_missing || self.future_rate_missing
    }
}

/// Result of a land-use transition calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitResult {
    /// The input area, echoed back
    pub area: Hectares,
    /// One entry per configured table, in table order
    pub metrics: Vec<MetricChange>,
}

/// One metric's value for a single category (no transition).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentValue {
    pub metric: String,
    pub unit: String,
    pub kind: MetricKind,
    pub value: f64,
    pub rate_missing: bool,
}

/// Result of quantifying a single category's standing value over an area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentValues {
    pub area: Hectares,
    pub metrics: Vec<CurrentValue>,
}

/// Computes environmental deltas for land-use transitions against a fixed
/// set of configured rate tables.
#[derive(Debug)]
pub struct BenefitCalculator {
    config: BenefitConfig,
}

impl BenefitCalculator {
    /// Build a calculator from a configuration, validating it once.
    /// A bad configuration makes the calculator unavailable; it is never
    /// re-reported per request.
    pub fn new(config: BenefitConfig) -> Result<Self, BenefitError> {
        config.validate()?;
        info!(
            tables = config.tables.len(),
            categories = config.vocabulary().len(),
            policy = ?config.missing_category,
            "benefit calculator ready"
        );
        Ok(BenefitCalculator { config })
    }

    pub fn config(&self) -> &BenefitConfig {
        &self.config
    }

    /// Compute current/future/delta for every configured metric over the
    /// given transition and area.
    ///
    /// The two categories need not be distinct; a no-op transition yields
    /// zero deltas. Each category must appear in at least one table.
    pub fn compute_benefits(
        &self,
        current: &CategoryId,
        future: &CategoryId,
        area: Hectares,
    ) -> Result<BenefitResult, BenefitError> {
        check_area(area)?;
        self.check_known(current)?;
        self.check_known(future)?;

        let mut metrics = Vec::with_capacity(self.config.tables.len());
        for table in &self.config.tables {
            let (current_rate, current_rate_missing) = self.resolve_rate(table, current)?;
            let (future_rate, future_rate_missing) = self.resolve_rate(table, future)?;

            let (current_value, future_value) = match table.kind {
                MetricKind::AreaScaled => (current_rate * area.value(), future_rate * area.value()),
                MetricKind::DirectRate => (current_rate, future_rate),
            };

            metrics.push(MetricChange {
                metric: table.metric.clone(),
                unit: table.unit.clone(),
                kind: table.kind,
                current: current_value,
                future: future_value,
                delta: future_value - current_value,
                current_rate_missing,
                future_rate_missing,
            });
        }

        Ok(BenefitResult { area, metrics })
    }

    /// Quantify the standing value of a single category over an area,
    /// without a transition.
    pub fn quantify_current(
        &self,
        current: &CategoryId,
        area: Hectares,
    ) -> Result<CurrentValues, BenefitError> {
        check_area(area)?;
        self.check_known(current)?;

        let mut metrics = Vec::with_capacity(self.config.tables.len());
        for table in &self.config.tables {
            let (rate, rate_missing) = self.resolve_rate(table, current)?;
            let value = match table.kind {
                MetricKind::AreaScaled => rate * area.value(),
                MetricKind::DirectRate => rate,
            };
            metrics.push(CurrentValue {
                metric: table.metric.clone(),
                unit: table.unit.clone(),
                kind: table.kind,
                value,
                rate_missing,
            });
        }

        Ok(CurrentValues { area, metrics })
    }

    fn check_known(&self, category: &CategoryId) -> Result<(), BenefitError> {
        if category.as_str().trim().is_empty() {
            return Err(BenefitError::EmptyCategory);
        }
        if self.config.knows(category) {
            Ok(())
        } else {
            Err(BenefitError::UnknownCategory {
                category: category.clone(),
            })
        }
    }

    /// Look up one side's rate in one table, applying the missing-category
    /// policy. Returns the rate and whether it was zero-filled.
    fn resolve_rate(
        &self,
        table: &RateTable,
        category: &CategoryId,
    ) -> Result<(f64, bool), BenefitError> {
        match table.rate_for(category) {
            Some(rate) => Ok((rate, false)),
            None => match self.config.missing_category {
                MissingCategoryPolicy::ZeroFill => {
                    warn!(
                        metric = %table.metric,
                        category = %category,
                        "category missing from rate table, substituting rate 0"
                    );
                    Ok((0.0, true))
                }
                MissingCategoryPolicy::Strict => Err(BenefitError::UnknownCategory {
                    category: category.clone(),
                }),
            },
        }
    }
}

fn check_area(area: Hectares) -> Result<(), BenefitError> {
    if area.is_valid_area() {
        Ok(())
    } else {
        Err(BenefitError::InvalidArea {
            value: area.value(),
        })
    }
}
