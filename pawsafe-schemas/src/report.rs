//! Walk report
//!
//! Everything a screen needs to show for one estimate, flattened into a
//! single serializable value.

use serde::Serialize;

use pawsafe_core::{
    can_hold_hand_for_5_seconds, surface::surface_name, AmbientConditions, HeatBreakdown,
    RiskLevel, SurfaceCalculationFactors, SurfaceEstimator, SurfaceType, TemperatureUnit,
};

use crate::UserPreferences;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkReport {
    /// Surface name, `ground` when unknown
    pub surface: &'static str,
    pub risk_level: RiskLevel,
    pub is_safe_for_paws: bool,
    pub surface_temp: f32,
    pub surface_temp_f: f32,
    pub unit: TemperatureUnit,
    /// Temperature in `unit`, e.g. `131°F`
    pub display: String,
    pub recommendation: &'static str,
    /// Five-second hand test, independent of the tier
    pub hand_test_passed: bool,
    pub breakdown: HeatBreakdown,
}

impl WalkReport {
    pub fn new(
        estimator: &SurfaceEstimator,
        factors: &SurfaceCalculationFactors,
        unit: TemperatureUnit,
    ) -> Self {
        let (result, breakdown) = estimator.evaluate(factors);

        Self {
            surface: surface_name(factors.surface_type),
            risk_level: result.risk_level,
            is_safe_for_paws: result.is_safe_for_paws,
            surface_temp: result.surface_temp,
            surface_temp_f: result.surface_temp_f,
            unit,
            display: result.display(unit).to_string(),
            recommendation: result.recommendation,
            hand_test_passed: can_hold_hand_for_5_seconds(breakdown.clamped),
            breakdown,
        }
    }

    /// Report in the default unit
    pub fn from_conditions(
        estimator: &SurfaceEstimator,
        conditions: AmbientConditions,
        surface: Option<SurfaceType>,
        fallback_hour: u8,
    ) -> Self {
        let factors = SurfaceCalculationFactors::from_conditions(conditions, surface, fallback_hour);
        Self::new(estimator, &factors, TemperatureUnit::default())
    }

    /// Report for the user's default surface and preferred unit
    pub fn for_preferences(
        estimator: &SurfaceEstimator,
        conditions: AmbientConditions,
        preferences: &UserPreferences,
        fallback_hour: u8,
    ) -> Self {
        let factors = SurfaceCalculationFactors::from_conditions(
            conditions,
            Some(preferences.default_surface_type),
            fallback_hour,
        );
        Self::new(estimator, &factors, preferences.temperature_unit)
    }

    pub fn to_json(&self) -> Result<String, crate::SchemaError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn afternoon() -> AmbientConditions {
        AmbientConditions {
            air_temp: 30.0,
            humidity: 50.0,
            wind_speed: 0.0,
            uv_index: 10.0,
            cloud_cover: 0.0,
            local_hour: Some(15),
        }
    }

    #[test]
    fn report_matches_estimate() {
        let report = WalkReport::from_conditions(
            &SurfaceEstimator::STANDARD,
            afternoon(),
            Some(SurfaceType::Asphalt),
            0,
        );

        assert_eq!(report.surface, "asphalt");
        assert_eq!(report.surface_temp, 55.0);
        assert_eq!(report.surface_temp_f, 131.0);
        assert_eq!(report.risk_level, RiskLevel::Dangerous);
        assert!(!report.is_safe_for_paws);
        assert!(!report.hand_test_passed);
        assert_eq!(report.display, "131°F");
        assert_eq!(report.breakdown.base, 42.0);
        assert!(report.recommendation.contains("asphalt"));
    }

    #[test]
    fn preferences_choose_surface_and_unit() {
        let preferences = UserPreferences {
            temperature_unit: TemperatureUnit::Celsius,
            default_surface_type: SurfaceType::Grass,
            ..UserPreferences::default()
        };
        let report = WalkReport::for_preferences(
            &SurfaceEstimator::STANDARD,
            afternoon(),
            &preferences,
            0,
        );

        // 30 * 0.8 + 8 + 5 = 37
        assert_eq!(report.surface, "grass");
        assert_eq!(report.display, "37°C");
        assert!(report.is_safe_for_paws);
        assert!(report.hand_test_passed);
    }

    #[test]
    fn hand_test_reads_unrounded_temperature() {
        // 40 + 12.45 / 10 * 8 = 49.96, shown as 50.0
        let conditions = AmbientConditions {
            air_temp: 40.0,
            humidity: 0.0,
            wind_speed: 0.0,
            uv_index: 12.45,
            cloud_cover: 0.0,
            local_hour: Some(10),
        };
        let report =
            WalkReport::from_conditions(&SurfaceEstimator::STANDARD, conditions, None, 0);

        assert!(report.breakdown.clamped < 50.0);
        assert_eq!(report.surface_temp, 50.0);
        assert_eq!(report.risk_level, RiskLevel::Dangerous);
        assert!(report.hand_test_passed);
    }

    #[test]
    fn unknown_surface_reported_as_ground() {
        let report =
            WalkReport::from_conditions(&SurfaceEstimator::STANDARD, afternoon(), None, 0);
        assert_eq!(report.surface, "ground");

        let json = report.to_json().unwrap();
        assert!(json.contains(r#""surface":"ground""#));
        assert!(json.contains(r#""riskLevel":"#));
        assert!(json.contains(r#""handTestPassed":"#));
    }
}
