//! Walk scenarios end to end
//!
//! Each scenario starts from provider-style conditions, validates them the
//! way the boundary does, and checks the advice a user would see.

use pawsafe_core::{
    can_hold_hand_for_5_seconds, AmbientConditions, ConditionsValidator, FixedHour, FixedWeather,
    HourSource, RiskLevel, SurfaceCalculationFactors, SurfaceEstimator, SurfaceType,
    TemperatureUnit, ValidationError, Validator, WeatherProvider,
};

/// Test provider that always fails, like a provider with no network
struct Offline;

#[derive(Debug, PartialEq)]
struct NoNetwork;

impl WeatherProvider for Offline {
    type Error = NoNetwork;

    fn current_conditions(&self) -> Result<AmbientConditions, Self::Error> {
        Err(NoNetwork)
    }
}

fn phoenix_july() -> AmbientConditions {
    AmbientConditions {
        air_temp: 41.0,
        humidity: 15.0,
        wind_speed: 8.0,
        uv_index: 11.0,
        cloud_cover: 0.0,
        local_hour: Some(15),
    }
}

fn seattle_morning() -> AmbientConditions {
    AmbientConditions {
        air_temp: 17.0,
        humidity: 82.0,
        wind_speed: 14.0,
        uv_index: 3.0,
        cloud_cover: 90.0,
        local_hour: Some(9),
    }
}

#[test]
fn desert_afternoon_on_every_surface() {
    let weather = FixedWeather::new(phoenix_july());
    ConditionsValidator::default()
        .validate(&phoenix_july())
        .expect("plausible weather");

    let estimator = SurfaceEstimator::default();

    let metal = estimator.assess(&weather, Some(SurfaceType::Metal), 12).unwrap();
    let asphalt = estimator.assess(&weather, Some(SurfaceType::Asphalt), 12).unwrap();
    let grass = estimator.assess(&weather, Some(SurfaceType::Grass), 12).unwrap();

    // 41 * 1.5 + 8.8 - 2.4 + 5 = 72.9, capped at 71
    assert_eq!(metal.surface_temp, 71.0);
    assert_eq!(metal.risk_level, RiskLevel::Extreme);

    assert_eq!(asphalt.risk_level, RiskLevel::Extreme);
    assert!(asphalt.surface_temp <= metal.surface_temp);

    // 41 * 0.8 + 8.8 - 2.4 + 5 = 44.2
    assert_eq!(grass.surface_temp, 44.2);
    assert_eq!(grass.risk_level, RiskLevel::Caution);
    assert!(!grass.is_safe_for_paws);
}

#[test]
fn humid_overcast_morning_is_safe() {
    let weather = FixedWeather::new(seattle_morning());
    let result = SurfaceEstimator::STANDARD
        .assess(&weather, Some(SurfaceType::Concrete), 0)
        .unwrap();

    // 17 * 1.2 + 2.4 - 4.5 - 3 + 0.8 + 0 = 16.1
    assert_eq!(result.surface_temp, 16.1);
    assert_eq!(result.risk_level, RiskLevel::Safe);
    assert!(result.is_safe_for_paws);
    assert_eq!(result.display(TemperatureUnit::Celsius).to_string(), "16.1°C");
}

#[test]
fn missing_provider_hour_uses_clock() {
    let mut conditions = phoenix_july();
    conditions.local_hour = None;
    let weather = FixedWeather::new(conditions);

    let clock = FixedHour::new(22);
    let night = SurfaceEstimator::STANDARD
        .assess(&weather, Some(SurfaceType::Sand), clock.current_hour())
        .unwrap();

    let factors = SurfaceCalculationFactors::from_conditions(conditions, Some(SurfaceType::Sand), 22);
    assert_eq!(factors.time_of_day, 22);
    assert_eq!(night, SurfaceEstimator::STANDARD.estimate(&factors));

    // 41 * 1.1 + 8.8 - 2.4 - 2 = 49.5
    assert_eq!(night.surface_temp, 49.5);
    assert_eq!(night.risk_level, RiskLevel::Dangerous);
    // Dangerous by tier, yet the hand test still passes
    assert!(can_hold_hand_for_5_seconds(night.surface_temp));
}

#[test]
fn provider_failure_passes_through() {
    let result = SurfaceEstimator::STANDARD.assess(&Offline, Some(SurfaceType::Asphalt), 12);
    assert_eq!(result, Err(NoNetwork));
}

#[test]
fn garbage_is_caught_before_estimation() {
    let mut conditions = seattle_morning();
    conditions.humidity = 250.0;

    assert!(matches!(
        ConditionsValidator::default().validate(&conditions),
        Err(ValidationError::OutOfRange { field: "humidity", .. })
    ));
}
