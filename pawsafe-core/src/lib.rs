//! Core estimation engine for PawSafe
//!
//! Estimates how hot the ground is from ambient weather and tells you
//! whether it is safe for a dog to walk on.
//!
//! Key constraints:
//! - Pure: no I/O, no state between calls
//! - Total: every finite input produces a result
//! - No heap allocation, usable from `no_std`
//!
//! ```rust
//! use pawsafe_core::{estimate, RiskLevel, SurfaceCalculationFactors, SurfaceType};
//!
//! let result = estimate(&SurfaceCalculationFactors {
//!     air_temp: 31.0,
//!     humidity: 55.0,
//!     wind_speed: 6.0,
//!     uv_index: 8.0,
//!     cloud_cover: 20.0,
//!     surface_type: Some(SurfaceType::Concrete),
//!     time_of_day: 14,
//! });
//!
//! assert_eq!(result.risk_level, RiskLevel::Caution);
//! if !result.is_safe_for_paws {
//!     // Show result.recommendation
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
pub mod estimator;
pub mod factors;
pub mod recommendation;
pub mod risk;
pub mod surface;
pub mod time;
pub mod traits;
pub mod units;
pub mod validators;

// Public API
pub use errors::{ValidationError, ValidationResult};
pub use estimator::{
    estimate, time_of_day_effect, HeatBreakdown, SurfaceEstimator, SurfaceTemperatureResult,
};
pub use factors::{AmbientConditions, SurfaceCalculationFactors};
pub use recommendation::recommendation;
pub use risk::{can_hold_hand_for_5_seconds, classify, PawSafetyThresholds, RiskLevel};
pub use surface::{SurfaceMultipliers, SurfaceType};
pub use time::{FixedHour, HourSource};
pub use traits::{FixedWeather, Validatable, Validator, WeatherProvider};
pub use units::{
    celsius_to_fahrenheit, fahrenheit_to_celsius, format_temperature, round_to_tenth,
    DisplayTemperature, TemperatureUnit,
};
pub use validators::{ConditionsValidator, FactorsValidator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
