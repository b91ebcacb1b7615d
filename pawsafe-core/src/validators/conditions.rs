//! Weather input validator
//!
//! Rejects provider data that cannot describe real weather before it reaches
//! the estimator. The estimator would happily compute a result for 300% cloud
//! cover; the number would just be meaningless.

use crate::{
    constants::weather::{
        AIR_TEMP_MAX_C, AIR_TEMP_MIN_C, CLOUD_COVER_MAX_PCT, CLOUD_COVER_MIN_PCT,
        HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT, UV_INDEX_MAX, UV_INDEX_MIN, WIND_MAX_KPH,
        WIND_MIN_KPH,
    },
    errors::ValidationResult,
    factors::{AmbientConditions, SurfaceCalculationFactors},
    traits::Validator,
};

use super::utils;

/// Validator for [`AmbientConditions`]
#[derive(Debug, Clone)]
pub struct ConditionsValidator {
    min_air_temp: f32,
    max_air_temp: f32,
    max_wind_kph: f32,
    max_uv_index: f32,
}

impl Default for ConditionsValidator {
    fn default() -> Self {
        Self {
            min_air_temp: AIR_TEMP_MIN_C,
            max_air_temp: AIR_TEMP_MAX_C,
            max_wind_kph: WIND_MAX_KPH,
            max_uv_index: UV_INDEX_MAX,
        }
    }
}

impl ConditionsValidator {
    /// Custom air temperature limits
    pub fn new_with_limits(min_air_temp: f32, max_air_temp: f32) -> Self {
        let (min_air_temp, max_air_temp) = if min_air_temp > max_air_temp {
            (max_air_temp, min_air_temp)
        } else {
            (min_air_temp, max_air_temp)
        };

        Self {
            min_air_temp,
            max_air_temp,
            ..Self::default()
        }
    }
}

impl Validator for ConditionsValidator {
    type Value = AmbientConditions;

    fn validate(&self, value: &Self::Value) -> ValidationResult<()> {
        utils::check_range("air_temp", value.air_temp, self.min_air_temp, self.max_air_temp)?;
        utils::check_range("humidity", value.humidity, HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT)?;
        utils::check_range("wind_speed", value.wind_speed, WIND_MIN_KPH, self.max_wind_kph)?;
        utils::check_range("uv_index", value.uv_index, UV_INDEX_MIN, self.max_uv_index)?;
        utils::check_range(
            "cloud_cover",
            value.cloud_cover,
            CLOUD_COVER_MIN_PCT,
            CLOUD_COVER_MAX_PCT,
        )?;

        if let Some(hour) = value.local_hour {
            utils::check_hour(hour)?;
        }

        Ok(())
    }
}

/// Validator for complete [`SurfaceCalculationFactors`]
#[derive(Debug, Clone, Default)]
pub struct FactorsValidator {
    conditions: ConditionsValidator,
}

impl FactorsValidator {
    /// Use a custom conditions validator
    pub fn new(conditions: ConditionsValidator) -> Self {
        Self { conditions }
    }
}

impl Validator for FactorsValidator {
    type Value = SurfaceCalculationFactors;

    fn validate(&self, value: &Self::Value) -> ValidationResult<()> {
        self.conditions.validate(&value.conditions())
    }
}
