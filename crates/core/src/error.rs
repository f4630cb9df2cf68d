//! Error taxonomy for benefit calculations
//!
//! Every error is returned synchronously to the immediate caller and scoped
//! to a single request, except [`BenefitError::Configuration`] which is
//! raised once at calculator construction and makes the calculator
//! unavailable rather than failing per request.

use crate::category::CategoryId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenefitError {
    /// Area is zero, negative, or not finite. The caller should prompt for
    /// a redrawn polygon rather than display a result.
    #[error("invalid area: {value} ha (area must be finite and greater than zero)")]
    InvalidArea { value: f64 },

    /// The category appears in no configured rate table (or, under the
    /// strict missing-category policy, is missing from a required table).
    #[error("unknown land-use category: {category}")]
    UnknownCategory { category: CategoryId },

    /// A category identifier was constructed from an empty string.
    #[error("land-use category identifier is empty")]
    EmptyCategory,

    /// The rate-table configuration is unusable: no tables, an empty table,
    /// or duplicate metric names.
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },
}

impl BenefitError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        BenefitError::Configuration {
            reason: reason.into(),
        }
    }
}
