//! Paw-Safety Thresholds
//!
//! Tiers follow common veterinary guidance on pad burns. Boundaries are
//! exclusive-upper: a surface at exactly 43.0°C is already `caution`.

/// Upper bound of the `safe` tier (°C, exclusive). About 109°F.
pub const SAFE_THRESHOLD_C: f32 = 43.0;

/// Upper bound of the `caution` tier (°C, exclusive). About 120°F.
pub const CAUTION_THRESHOLD_C: f32 = 49.0;

/// Upper bound of the `dangerous` tier (°C, exclusive). About 140°F.
///
/// Anything at or above is `extreme`.
pub const DANGEROUS_THRESHOLD_C: f32 = 60.0;

/// Hand-test limit (°C, exclusive). About 122°F.
///
/// "Hold the back of your hand on the pavement for five seconds." Deliberately
/// separate from the tier thresholds: 50°C sits inside the `dangerous` tier.
pub const HAND_TEST_LIMIT_C: f32 = 50.0;
