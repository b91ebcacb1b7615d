//! Constants for PawSafe Core
//!
//! Every numeric value the estimator uses lives here with a note on what it
//! means and where it comes from. The estimator copies them into frozen
//! configuration values ([`SurfaceMultipliers`](crate::surface::SurfaceMultipliers),
//! [`PawSafetyThresholds`](crate::risk::PawSafetyThresholds)) so nothing reads
//! process-wide mutable state.
//!
//! ## Organization
//!
//! - **Surface**: material multipliers applied to air temperature
//! - **Heat**: coefficients of the heuristic heat model
//! - **Safety**: paw-safety tier thresholds and the hand test
//! - **Weather**: plausible ranges for provider inputs
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units

/// Surface material multipliers.
pub mod surface;

/// Coefficients of the heuristic surface heat model.
pub mod heat;

/// Paw-safety thresholds.
pub mod safety;

/// Plausible ranges for weather inputs, used by the boundary validators.
pub mod weather;

pub use surface::{
    ASPHALT_MULTIPLIER, CONCRETE_MULTIPLIER, GRASS_MULTIPLIER, METAL_MULTIPLIER,
    SAND_MULTIPLIER, UNKNOWN_SURFACE_MULTIPLIER,
};

pub use safety::{
    CAUTION_THRESHOLD_C, DANGEROUS_THRESHOLD_C, HAND_TEST_LIMIT_C, SAFE_THRESHOLD_C,
};
