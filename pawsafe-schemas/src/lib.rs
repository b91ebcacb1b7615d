//! Collaborator Boundary for PawSafe
//!
//! ## Overview
//!
//! The core estimator takes strongly-typed, plain numbers. Everything around
//! it speaks JSON: weather APIs, saved preferences, tuned estimator profiles.
//! This crate is where that JSON becomes typed values, and where bad values
//! are rejected before they reach the core.
//!
//! ## Why a Separate Crate?
//!
//! 1. **Core stays `no_std`**: JSON parsing needs an allocator and I/O
//! 2. **One place for unit conversion**: OpenWeather reports wind in m/s,
//!    WeatherAPI in km/h; the core only ever sees km/h
//! 3. **Validation at the edge**: provider payloads go through
//!    [`ConditionsValidator`](pawsafe_core::ConditionsValidator) here, never
//!    inside the estimator
//!
//! ## Modules
//!
//! - [`weather`]: provider payloads → [`AmbientConditions`](pawsafe_core::AmbientConditions)
//! - [`profile`]: JSON estimator configuration → [`SurfaceEstimator`](pawsafe_core::SurfaceEstimator)
//! - [`preferences`]: user display preferences
//! - [`location`]: ZIP code and coordinate checks for provider queries
//! - [`report`]: serializable walk report for presentation
//!
//! ## Usage Example
//!
//! ```rust
//! use pawsafe_core::SurfaceType;
//! use pawsafe_schemas::{weather::parse_weatherapi, EstimatorProfile, WalkReport};
//!
//! let payload = r#"{
//!     "location": {"name": "Austin", "region": "Texas", "country": "USA",
//!                  "lat": 30.27, "lon": -97.74, "tz_id": "America/Chicago",
//!                  "localtime": "2024-07-01 15:10"},
//!     "current": {"temp_c": 36.0, "temp_f": 96.8, "is_day": 1,
//!                 "condition": {"text": "Sunny", "icon": ""},
//!                 "wind_kph": 9.0, "humidity": 38, "cloud": 0,
//!                 "feelslike_c": 38.5, "feelslike_f": 101.3, "uv": 10.0}
//! }"#;
//!
//! let conditions = parse_weatherapi(payload)?;
//! let estimator = EstimatorProfile::standard().build()?;
//! let report = WalkReport::from_conditions(&estimator, conditions, Some(SurfaceType::Asphalt), 12);
//!
//! assert!(!report.is_safe_for_paws);
//! # Ok::<(), pawsafe_schemas::SchemaError>(())
//! ```

use pawsafe_core::ValidationError;

pub mod location;
pub mod preferences;
pub mod profile;
pub mod report;
pub mod weather;

pub use location::{format_location, is_valid_coordinates, validate_zip_code, LocationQuery};
pub use preferences::UserPreferences;
pub use profile::{EstimatorProfile, ThresholdConfig};
pub use report::WalkReport;
pub use weather::{
    CachedPayload, OpenWeatherResponse, PayloadFormat, WeatherApiResponse, WeatherObservation,
};

/// Boundary errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown surface type: {0}")]
    UnknownSurface(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid local time: {0}")]
    InvalidLocalTime(String),
}
