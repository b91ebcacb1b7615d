//! Surface Temperature Estimator
//!
//! ## Model
//!
//! Ground temperature is estimated as a linear composition on top of the
//! material-scaled air temperature, applied in a fixed order:
//!
//! ```text
//! temp  = air * multiplier(surface)
//! temp += (uv / 10) * 8                       UV heating, +8°C at UV 10
//! temp += (cloud / 100) * -5                  cloud shading, -5°C overcast
//! temp += min(wind / 10, 1) * -3              convection, saturates at 10 km/h
//! temp += max(humidity - 70, 0) / 30 * 2      only above 70% RH, +2°C at 100%
//! temp += time_of_day(hour)                   +5°C at 15h, -2°C at night
//! temp  = clamp(temp, air - 5, air + 30)
//! ```
//!
//! The result is rounded half-up to one decimal. Fahrenheit is derived from
//! the clamped value *before* rounding and rounded on its own, so the two
//! displayed numbers never drift apart by double rounding. The risk tier is
//! also taken from the unrounded value.
//!
//! This is a heuristic, not a heat-transfer model. It is tuned so typical
//! summer conditions land in the right tier.
//!
//! ## Contract
//!
//! Pure and total: no I/O, no state between calls, no failure. Any finite
//! input yields a result. Validate provider data with
//! [`ConditionsValidator`](crate::validators::ConditionsValidator) before it
//! gets here if it may be garbage.
//!
//! ```rust
//! use pawsafe_core::{estimate, RiskLevel, SurfaceCalculationFactors, SurfaceType};
//!
//! let result = estimate(&SurfaceCalculationFactors {
//!     air_temp: 30.0,
//!     humidity: 50.0,
//!     wind_speed: 0.0,
//!     uv_index: 10.0,
//!     cloud_cover: 0.0,
//!     surface_type: Some(SurfaceType::Asphalt),
//!     time_of_day: 15,
//! });
//!
//! assert_eq!(result.surface_temp, 55.0);
//! assert_eq!(result.risk_level, RiskLevel::Dangerous);
//! assert!(!result.is_safe_for_paws);
//! ```

use crate::{
    constants::heat::{
        CLOUD_MAX_EFFECT_C, HUMIDITY_MAX_EFFECT_C, HUMIDITY_RAMP_PCT, HUMIDITY_THRESHOLD_PCT,
        MAX_ABOVE_AIR_C, MAX_BELOW_AIR_C, NIGHT_EFFECT_C, NIGHT_END_HOUR, NIGHT_START_HOUR,
        PEAK_EFFECT_C, PEAK_FALLOFF_C_PER_HOUR, PEAK_HOUR, PEAK_WINDOW_END_HOUR,
        PEAK_WINDOW_START_HOUR, UV_MAX_EFFECT_C, UV_REFERENCE_INDEX, WIND_MAX_EFFECT_C,
        WIND_SATURATION_KPH,
    },
    factors::SurfaceCalculationFactors,
    recommendation::recommendation,
    risk::{PawSafetyThresholds, RiskLevel},
    surface::{surface_name, SurfaceMultipliers, SurfaceType},
    traits::WeatherProvider,
    units::{celsius_to_fahrenheit, format_temperature, round_to_tenth, DisplayTemperature, TemperatureUnit},
};

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Outcome of one estimate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SurfaceTemperatureResult {
    /// Estimated surface temperature (°C, one decimal)
    pub surface_temp: f32,
    /// Estimated surface temperature (°F, one decimal)
    pub surface_temp_f: f32,
    /// True exactly when `risk_level` is `Safe`
    pub is_safe_for_paws: bool,
    /// Risk tier
    pub risk_level: RiskLevel,
    /// Advice naming the surface
    pub recommendation: &'static str,
}

impl SurfaceTemperatureResult {
    /// Surface temperature in the requested unit
    pub fn temperature_in(&self, unit: TemperatureUnit) -> f32 {
        match unit {
            TemperatureUnit::Celsius => self.surface_temp,
            TemperatureUnit::Fahrenheit => self.surface_temp_f,
        }
    }

    /// Surface temperature ready for display in the requested unit
    pub fn display(&self, unit: TemperatureUnit) -> DisplayTemperature {
        format_temperature(self.temperature_in(unit), unit)
    }
}

/// Per-term contributions of one estimate, all in °C
///
/// `clamped` is the unrounded value the result is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatBreakdown {
    /// Air temperature scaled by the surface multiplier
    pub base: f32,
    /// UV heating
    pub uv: f32,
    /// Cloud shading (≤ 0)
    pub cloud: f32,
    /// Wind cooling (≤ 0)
    pub wind: f32,
    /// High-humidity heating (≥ 0)
    pub humidity: f32,
    /// Time-of-day adjustment
    pub time_of_day: f32,
    /// Sum of all terms before clamping
    pub raw: f32,
    /// `raw` clamped to `[air - 5, air + 30]`
    pub clamped: f32,
}

impl HeatBreakdown {
    /// True when the clamp changed the raw sum
    pub fn was_clamped(&self) -> bool {
        self.raw != self.clamped
    }
}

/// Estimator with a frozen configuration
///
/// Holds no state between calls; share one instance freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceEstimator {
    multipliers: SurfaceMultipliers,
    thresholds: PawSafetyThresholds,
}

impl SurfaceEstimator {
    /// Published multipliers and thresholds
    pub const STANDARD: Self = Self {
        multipliers: SurfaceMultipliers::STANDARD,
        thresholds: PawSafetyThresholds::STANDARD,
    };

    /// Estimator with custom configuration
    pub const fn new(multipliers: SurfaceMultipliers, thresholds: PawSafetyThresholds) -> Self {
        Self { multipliers, thresholds }
    }

    /// Replace the multiplier table
    pub const fn with_multipliers(mut self, multipliers: SurfaceMultipliers) -> Self {
        self.multipliers = multipliers;
        self
    }

    /// Replace the risk thresholds
    pub const fn with_thresholds(mut self, thresholds: PawSafetyThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Multiplier table in use
    pub const fn multipliers(&self) -> &SurfaceMultipliers {
        &self.multipliers
    }

    /// Risk thresholds in use
    pub const fn thresholds(&self) -> &PawSafetyThresholds {
        &self.thresholds
    }

    /// Contribution of every term for these factors
    pub fn breakdown(&self, factors: &SurfaceCalculationFactors) -> HeatBreakdown {
        if factors.surface_type.is_none() {
            log_warn!(
                "Surface type unknown, using multiplier {}",
                self.multipliers.get(None)
            );
        }

        let air = factors.air_temp;
        let base = air * self.multipliers.get(factors.surface_type);
        let uv = uv_effect(factors.uv_index);
        let cloud = cloud_effect(factors.cloud_cover);
        let wind = wind_effect(factors.wind_speed);
        let humidity = humidity_effect(factors.humidity);
        let time_of_day = time_of_day_effect(factors.time_of_day);

        let raw = base + uv + cloud + wind + humidity + time_of_day;

        let clamped = libm::fmaxf(air - MAX_BELOW_AIR_C, raw);
        let clamped = libm::fminf(air + MAX_ABOVE_AIR_C, clamped);

        HeatBreakdown {
            base,
            uv,
            cloud,
            wind,
            humidity,
            time_of_day,
            raw,
            clamped,
        }
    }

    /// Estimate surface temperature and paw-safety tier
    pub fn estimate(&self, factors: &SurfaceCalculationFactors) -> SurfaceTemperatureResult {
        self.evaluate(factors).0
    }

    /// Estimate together with the breakdown it was derived from
    pub fn evaluate(
        &self,
        factors: &SurfaceCalculationFactors,
    ) -> (SurfaceTemperatureResult, HeatBreakdown) {
        let breakdown = self.breakdown(factors);
        let celsius = breakdown.clamped;
        let risk_level = self.thresholds.classify(celsius);

        let result = SurfaceTemperatureResult {
            surface_temp: round_to_tenth(celsius),
            surface_temp_f: round_to_tenth(celsius_to_fahrenheit(celsius)),
            is_safe_for_paws: risk_level == RiskLevel::Safe,
            risk_level,
            recommendation: recommendation(risk_level, factors.surface_type),
        };

        log_debug!(
            "Estimated {} at {}°C (air {}°C, hour {}): {}",
            surface_name(factors.surface_type),
            result.surface_temp,
            factors.air_temp,
            factors.time_of_day,
            risk_level
        );

        (result, breakdown)
    }

    /// Pull conditions from a provider and estimate for a surface
    ///
    /// `fallback_hour` is used when the provider reports no local hour.
    /// Provider errors are returned as-is; nothing is retried.
    pub fn assess<P: WeatherProvider>(
        &self,
        provider: &P,
        surface: Option<SurfaceType>,
        fallback_hour: u8,
    ) -> Result<SurfaceTemperatureResult, P::Error> {
        let conditions = provider.current_conditions()?;
        let factors = SurfaceCalculationFactors::from_conditions(conditions, surface, fallback_hour);
        Ok(self.estimate(&factors))
    }
}

/// Estimate with the standard configuration
pub fn estimate(factors: &SurfaceCalculationFactors) -> SurfaceTemperatureResult {
    SurfaceEstimator::STANDARD.estimate(factors)
}

/// UV heating (°C)
pub fn uv_effect(uv_index: f32) -> f32 {
    (uv_index / UV_REFERENCE_INDEX) * UV_MAX_EFFECT_C
}

/// Cloud shading (°C)
pub fn cloud_effect(cloud_cover: f32) -> f32 {
    (cloud_cover / 100.0) * CLOUD_MAX_EFFECT_C
}

/// Wind cooling (°C)
pub fn wind_effect(wind_speed: f32) -> f32 {
    libm::fminf(wind_speed / WIND_SATURATION_KPH, 1.0) * WIND_MAX_EFFECT_C
}

/// High-humidity heating (°C)
pub fn humidity_effect(humidity: f32) -> f32 {
    if humidity > HUMIDITY_THRESHOLD_PCT {
        ((humidity - HUMIDITY_THRESHOLD_PCT) / HUMIDITY_RAMP_PCT) * HUMIDITY_MAX_EFFECT_C
    } else {
        0.0
    }
}

/// Time-of-day adjustment (°C)
///
/// Triangular bump over 12-16h peaking at 15h, flat cooling at night
/// (≤7h, ≥20h), nothing in between.
pub fn time_of_day_effect(hour: u8) -> f32 {
    if (PEAK_WINDOW_START_HOUR..=PEAK_WINDOW_END_HOUR).contains(&hour) {
        let distance = libm::fabsf(f32::from(hour) - PEAK_HOUR);
        libm::fmaxf(0.0, PEAK_EFFECT_C - distance * PEAK_FALLOFF_C_PER_HOUR)
    } else if hour <= NIGHT_END_HOUR || hour >= NIGHT_START_HOUR {
        NIGHT_EFFECT_C
    } else {
        0.0
    }
}
