//! Area quantity newtypes
//!
//! Wrappers for the two area units at the system boundary so hectares and
//! square meters cannot be mixed accidentally. The external geometry
//! collaborator measures polygons in square meters; calculations run in
//! hectares.
//!
//! No validation happens at construction; the calculator rejects
//! non-positive or non-finite areas per request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Deref, Mul, Sub};

/// Square meters in one hectare
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Parcel area in hectares
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Hectares(f64);

impl Hectares {
    pub const fn new(value: f64) -> Self {
        Hectares(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True when the value can be used as a calculation area
    pub fn is_valid_area(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

/// Measured polygon area in square meters, as produced by the geometry
/// collaborator
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SquareMeters(f64);

impl SquareMeters {
    pub const fn new(value: f64) -> Self {
        SquareMeters(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<SquareMeters> for Hectares {
    fn from(area: SquareMeters) -> Self {
        Hectares(area.0 / SQUARE_METERS_PER_HECTARE)
    }
}

impl From<Hectares> for SquareMeters {
    fn from(area: Hectares) -> Self {
        SquareMeters(area.0 * SQUARE_METERS_PER_HECTARE)
    }
}

impl Deref for Hectares {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for SquareMeters {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Hectares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ha", self.0)
    }
}

impl fmt::Display for SquareMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m²", self.0)
    }
}

impl Add for Hectares {
    type Output = Hectares;

    fn add(self, rhs: Hectares) -> Hectares {
        Hectares(self.0 + rhs.0)
    }
}

impl Sub for Hectares {
    type Output = Hectares;

    fn sub(self, rhs: Hectares) -> Hectares {
        Hectares(self.0 - rhs.0)
    }
}

impl Mul<f64> for Hectares {
    type Output = Hectares;

    fn mul(self, rhs: f64) -> Hectares {
        Hectares(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_meters_to_hectares() {
        let area: Hectares = SquareMeters::new(25_000.0).into();
        assert_relative_eq!(area.value(), 2.5);

        let back: SquareMeters = area.into();
        assert_relative_eq!(back.value(), 25_000.0);
    }

    #[test]
    fn test_area_validity() {
        assert!(Hectares::new(1e-9).is_valid_area());
        assert!(!Hectares::new(0.0).is_valid_area());
        assert!(!Hectares::new(-5.0).is_valid_area());
        assert!(!Hectares::new(f64::NAN).is_valid_area());
        assert!(!Hectares::new(f64::INFINITY).is_valid_area());
    }

    #[test]
    fn test_display_carries_unit() {
        assert_eq!(Hectares::new(2.5).to_string(), "2.5 ha");
        assert_eq!(SquareMeters::new(100.0).to_string(), "100 m²");
    }

    #[test]
    fn test_arithmetic() {
        let total = Hectares::new(1.5) + Hectares::new(0.5);
        assert_eq!(total, Hectares::new(2.0));
        assert_eq!(total - Hectares::new(0.5), Hectares::new(1.5));
        assert_eq!(Hectares::new(2.0) * 3.0, Hectares::new(6.0));
    }
}
