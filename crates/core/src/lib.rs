//! Land-Use Benefit Calculator Library
//!
//! Estimates the environmental impact of changing a parcel's land-use
//! category: given a current category, a future category, and an area in
//! hectares, looks up per-category rates in a set of configured metric
//! tables and returns current totals, future totals, and signed deltas.
//!
//! The vocabulary of categories and the rates themselves are configuration,
//! not code: deployments supply a JSON document (or pick a built-in profile)
//! with one table per metric, each tagged area-scaled or direct-rate.
//!
//! Map rendering, polygon drawing, and geodesic area measurement belong to
//! external collaborators; this library consumes an area value and two
//! category identifiers and produces a result record. It performs no I/O
//! and holds no state between calls.
//!
//! ```
//! use land_benefit_core::{BenefitCalculator, BenefitConfig, CategoryId, Hectares};
//!
//! let calc = BenefitCalculator::new(BenefitConfig::carbon_water_habitat()).unwrap();
//! let current: CategoryId = "conventional_cropland".parse().unwrap();
//! let future: CategoryId = "temperate_forest".parse().unwrap();
//! let result = calc.compute_benefits(&current, &future, Hectares::new(2.0)).unwrap();
//! assert!(result.metrics[0].delta > 0.0); // reforestation sequesters carbon
//! ```

pub mod calculator;
pub mod category;
pub mod config;
pub mod error;
pub mod presets;
pub mod rates;
pub mod units;

pub use calculator::{BenefitCalculator, BenefitResult, CurrentValue, CurrentValues, MetricChange};
pub use category::CategoryId;
pub use config::{BenefitConfig, MissingCategoryPolicy};
pub use error::BenefitError;
pub use rates::{MetricKind, RateTable};
pub use units::{Hectares, SquareMeters, SQUARE_METERS_PER_HECTARE};
