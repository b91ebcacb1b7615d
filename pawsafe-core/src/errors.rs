//! Error Types for Boundary Validation
//!
//! The estimator itself never fails. These errors come from the places where
//! untrusted values enter the system: validators run on weather-provider data,
//! strict surface-name parsing, and fallible configuration constructors.
//!
//! Errors stay small and `Copy` with only `&'static str` payloads so they can
//! be returned from `no_std` builds without an allocator.
//!
//! ```rust
//! use pawsafe_core::{ValidationError, Validator, ConditionsValidator, AmbientConditions};
//!
//! let conditions = AmbientConditions {
//!     air_temp: 31.0,
//!     humidity: 140.0,
//!     wind_speed: 5.0,
//!     uv_index: 8.0,
//!     cloud_cover: 10.0,
//!     local_hour: Some(14),
//! };
//!
//! match ConditionsValidator::default().validate(&conditions) {
//!     Err(ValidationError::OutOfRange { field, .. }) => assert_eq!(field, "humidity"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Value outside its plausible range
    #[error("{field} value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending input
        field: &'static str,
        /// The value that failed validation
        value: f32,
        /// Minimum accepted value
        min: f32,
        /// Maximum accepted value
        max: f32,
    },

    /// NaN or infinity
    #[error("{field} is not a valid number")]
    InvalidValue {
        /// Name of the offending input
        field: &'static str,
    },

    /// Hour of day outside 0-23
    #[error("Hour {hour} is not a valid hour of day")]
    InvalidHour {
        /// The rejected hour
        hour: u8,
    },

    /// Surface name not in the closed set of materials
    #[error("Unknown surface type")]
    UnknownSurface,

    /// Multiplier that is not finite and positive
    #[error("Surface multiplier {value} must be finite and positive")]
    InvalidMultiplier {
        /// The rejected multiplier
        value: f32,
    },

    /// Risk thresholds out of order
    #[error("Thresholds must ascend: {safe} < {caution} < {dangerous}")]
    ThresholdsNotAscending {
        /// Upper bound of the safe tier
        safe: f32,
        /// Upper bound of the caution tier
        caution: f32,
        /// Upper bound of the dangerous tier
        dangerous: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ValidationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { field, value, min, max } =>
                defmt::write!(fmt, "{} {} outside [{}, {}]", field, value, min, max),
            Self::InvalidValue { field } =>
                defmt::write!(fmt, "{} invalid", field),
            Self::InvalidHour { hour } =>
                defmt::write!(fmt, "Invalid hour {}", hour),
            Self::UnknownSurface =>
                defmt::write!(fmt, "Unknown surface"),
            Self::InvalidMultiplier { value } =>
                defmt::write!(fmt, "Invalid multiplier {}", value),
            Self::ThresholdsNotAscending { safe, caution, dangerous } =>
                defmt::write!(fmt, "Thresholds {} {} {} not ascending", safe, caution, dangerous),
        }
    }
}
