//! Estimator inputs
//!
//! [`AmbientConditions`] is what a weather provider knows. [`SurfaceCalculationFactors`]
//! adds what the user chose (surface) and pins the hour, and is the only
//! input the estimator takes.

use crate::surface::SurfaceType;

/// Weather at the walker's location
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmbientConditions {
    /// Air temperature (°C)
    pub air_temp: f32,
    /// Relative humidity (%)
    pub humidity: f32,
    /// Wind speed (km/h)
    pub wind_speed: f32,
    /// UV index
    pub uv_index: f32,
    /// Cloud cover (%)
    pub cloud_cover: f32,
    /// Local hour of the observation, when the provider knows it
    pub local_hour: Option<u8>,
}

/// Everything the estimator needs for one estimate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceCalculationFactors {
    /// Air temperature (°C)
    pub air_temp: f32,
    /// Relative humidity (%)
    pub humidity: f32,
    /// Wind speed (km/h)
    pub wind_speed: f32,
    /// UV index
    pub uv_index: f32,
    /// Cloud cover (%)
    pub cloud_cover: f32,
    /// Surface material; `None` when unknown
    pub surface_type: Option<SurfaceType>,
    /// Hour of day, 0-23
    pub time_of_day: u8,
}

impl SurfaceCalculationFactors {
    /// Combine provider conditions with the user's surface
    ///
    /// `fallback_hour` is used when the provider did not report a local hour.
    pub fn from_conditions(
        conditions: AmbientConditions,
        surface_type: Option<SurfaceType>,
        fallback_hour: u8,
    ) -> Self {
        Self {
            air_temp: conditions.air_temp,
            humidity: conditions.humidity,
            wind_speed: conditions.wind_speed,
            uv_index: conditions.uv_index,
            cloud_cover: conditions.cloud_cover,
            surface_type,
            time_of_day: conditions.local_hour.unwrap_or(fallback_hour),
        }
    }

    /// Weather part of the factors
    pub fn conditions(&self) -> AmbientConditions {
        AmbientConditions {
            air_temp: self.air_temp,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
            uv_index: self.uv_index,
            cloud_cover: self.cloud_cover,
            local_hour: Some(self.time_of_day),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon_conditions(local_hour: Option<u8>) -> AmbientConditions {
        AmbientConditions {
            air_temp: 28.0,
            humidity: 45.0,
            wind_speed: 6.0,
            uv_index: 7.0,
            cloud_cover: 20.0,
            local_hour,
        }
    }

    #[test]
    fn provider_hour_wins() {
        let factors = SurfaceCalculationFactors::from_conditions(
            noon_conditions(Some(12)),
            Some(SurfaceType::Concrete),
            9,
        );
        assert_eq!(factors.time_of_day, 12);
        assert_eq!(factors.surface_type, Some(SurfaceType::Concrete));
    }

    #[test]
    fn fallback_hour_when_missing() {
        let factors = SurfaceCalculationFactors::from_conditions(noon_conditions(None), None, 9);
        assert_eq!(factors.time_of_day, 9);
        assert_eq!(factors.conditions().local_hour, Some(9));
    }
}
