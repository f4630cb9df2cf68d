//! Built-in deployment profiles
//!
//! The rate-table variants observed across deployments of the original
//! browser tool, packaged as ready-made configurations. Production
//! deployments usually load their own JSON document instead; these profiles
//! double as working examples of the document shape.

use crate::config::BenefitConfig;
use crate::rates::{MetricKind, RateTable};

fn sequestration_table() -> RateTable {
    RateTable::new("carbon_sequestration", "t CO₂/yr", MetricKind::AreaScaled)
        .with_rate("tropical_forest", 8.5)
        .with_rate("temperate_forest", 4.0)
        .with_rate("boreal_forest", 2.0)
        .with_rate("conventional_cropland", 0.2)
        .with_rate("improved_cropland", 1.0)
        .with_rate("managed_grassland", 1.0)
        .with_rate("degraded_grassland", 0.1)
        .with_rate("peatland", 0.035)
        .with_rate("mangrove", 5.5)
        .with_rate("urban_green_space", 0.6)
        .with_rate("other_land", 0.1)
}

impl BenefitConfig {
    /// Carbon / stormwater / habitat profile.
    ///
    /// Sequestration in t CO₂/ha/yr, retention in m³/ha/yr, habitat as a
    /// unitless per-hectare score; all three metrics scale with area. Note
    /// that `bare_soil` appears only in the retention table, so transitions
    /// involving it exercise the missing-category policy for the other two
    /// metrics.
    pub fn carbon_water_habitat() -> Self {
        let retention =
            RateTable::new("stormwater_retention", "m³ water/yr", MetricKind::AreaScaled)
                .with_rate("tropical_forest", 126800.0)
                .with_rate("temperate_forest", 126800.0)
                .with_rate("boreal_forest", 126800.0)
                .with_rate("conventional_cropland", 511000.0)
                .with_rate("improved_cropland", 300000.0)
                .with_rate("managed_grassland", 202000.0)
                .with_rate("degraded_grassland", 202000.0)
                .with_rate("peatland", 100000.0)
                .with_rate("mangrove", 150000.0)
                .with_rate("urban_green_space", 800000.0)
                .with_rate("bare_soil", 50000.0)
                .with_rate("other_land", 10000.0);

        let habitat = RateTable::new("habitat_score", "habitat score", MetricKind::AreaScaled)
            .with_rate("tropical_forest", 100.0)
            .with_rate("temperate_forest", 80.0)
            .with_rate("boreal_forest", 60.0)
            .with_rate("conventional_cropland", 10.0)
            .with_rate("improved_cropland", 20.0)
            .with_rate("managed_grassland", 50.0)
            .with_rate("degraded_grassland", 5.0)
            .with_rate("peatland", 90.0)
            .with_rate("mangrove", 95.0)
            .with_rate("urban_green_space", 30.0)
            .with_rate("other_land", 0.0);

        BenefitConfig::new(vec![sequestration_table(), retention, habitat])
    }

    /// Water-movement profile.
    ///
    /// Infiltration and runoff are direct-rate metrics (a percentage of
    /// precipitation and a surface-flow depth), so they do not scale with
    /// parcel area; sequestration is carried alongside as in the carbon
    /// profile.
    pub fn hydrology() -> Self {
        let infiltration = RateTable::new(
            "infiltration",
            "% of precipitation",
            MetricKind::DirectRate,
        )
        .with_rate("tropical_forest", 80.0)
        .with_rate("temperate_forest", 75.0)
        .with_rate("boreal_forest", 70.0)
        .with_rate("conventional_cropland", 40.0)
        .with_rate("improved_cropland", 50.0)
        .with_rate("managed_grassland", 55.0)
        .with_rate("degraded_grassland", 35.0)
        .with_rate("peatland", 85.0)
        .with_rate("mangrove", 80.0)
        .with_rate("urban_green_space", 45.0)
        .with_rate("bare_soil", 20.0)
        .with_rate("other_land", 30.0);

        let runoff = RateTable::new("surface_runoff", "mm/yr", MetricKind::DirectRate)
            .with_rate("tropical_forest", 120.0)
            .with_rate("temperate_forest", 150.0)
            .with_rate("boreal_forest", 180.0)
            .with_rate("conventional_cropland", 420.0)
            .with_rate("improved_cropland", 320.0)
            .with_rate("managed_grassland", 260.0)
            .with_rate("degraded_grassland", 380.0)
            .with_rate("peatland", 90.0)
            .with_rate("mangrove", 110.0)
            .with_rate("urban_green_space", 340.0)
            .with_rate("bare_soil", 520.0)
            .with_rate("other_land", 400.0);

        BenefitConfig::new(vec![sequestration_table(), infiltration, runoff])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryId;

    #[test]
    fn test_profiles_validate() {
        BenefitConfig::carbon_water_habitat().validate().unwrap();
        BenefitConfig::hydrology().validate().unwrap();
    }

    #[test]
    fn test_carbon_profile_vocabulary() {
        let config = BenefitConfig::carbon_water_habitat();
        assert_eq!(config.tables.len(), 3);
        // bare_soil only has a retention rate
        let bare = CategoryId::new("bare_soil").unwrap();
        assert!(config.knows(&bare));
        assert!(config.tables[0].rate_for(&bare).is_none());
        assert_eq!(config.tables[1].rate_for(&bare), Some(50000.0));
    }

    #[test]
    fn test_hydrology_profile_metric_kinds() {
        let config = BenefitConfig::hydrology();
        assert_eq!(config.tables[0].kind, MetricKind::AreaScaled);
        assert_eq!(config.tables[1].kind, MetricKind::DirectRate);
        assert_eq!(config.tables[2].kind, MetricKind::DirectRate);
    }
}
