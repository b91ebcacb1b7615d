//! Heat Model Coefficients
//!
//! The estimate is a linear composition of independent terms on top of the
//! material-scaled air temperature. None of these are physically derived;
//! they are tuned so typical summer afternoons land in the right tier.

// ===== UV =====

/// UV index that produces the full UV contribution.
pub const UV_REFERENCE_INDEX: f32 = 10.0;

/// Heating at the reference UV index (°C).
///
/// Linear in UV index, so UV 11+ adds slightly more than this.
pub const UV_MAX_EFFECT_C: f32 = 8.0;

// ===== CLOUD =====

/// Cooling at 100% cloud cover (°C, negative).
pub const CLOUD_MAX_EFFECT_C: f32 = -5.0;

// ===== WIND =====

/// Wind speed at which convective cooling saturates (km/h).
pub const WIND_SATURATION_KPH: f32 = 10.0;

/// Cooling once wind reaches saturation (°C, negative).
pub const WIND_MAX_EFFECT_C: f32 = -3.0;

// ===== HUMIDITY =====

/// Relative humidity below which humidity has no effect (%).
pub const HUMIDITY_THRESHOLD_PCT: f32 = 70.0;

/// Span from the threshold to saturated air (%).
pub const HUMIDITY_RAMP_PCT: f32 = 30.0;

/// Heating at 100% relative humidity (°C).
pub const HUMIDITY_MAX_EFFECT_C: f32 = 2.0;

// ===== TIME OF DAY =====

/// First hour of the afternoon peak window (inclusive).
pub const PEAK_WINDOW_START_HOUR: u8 = 12;

/// Last hour of the afternoon peak window (inclusive).
pub const PEAK_WINDOW_END_HOUR: u8 = 16;

/// Hour of maximum ground heating.
///
/// Surfaces lag solar noon by two to three hours.
pub const PEAK_HOUR: f32 = 15.0;

/// Heating at the peak hour (°C).
pub const PEAK_EFFECT_C: f32 = 5.0;

/// Loss of peak heating per hour away from the peak (°C/h).
///
/// At the window edges (12h, 16h) some heating remains: 5 - 3 * 1.25 = 1.25
/// at noon.
pub const PEAK_FALLOFF_C_PER_HOUR: f32 = 1.25;

/// Last early-morning hour that counts as night (inclusive).
pub const NIGHT_END_HOUR: u8 = 7;

/// First evening hour that counts as night (inclusive).
pub const NIGHT_START_HOUR: u8 = 20;

/// Cooling during night hours (°C, negative).
pub const NIGHT_EFFECT_C: f32 = -2.0;

// ===== BOUNDS =====

/// Largest amount the surface may sit below air temperature (°C).
pub const MAX_BELOW_AIR_C: f32 = 5.0;

/// Largest amount the surface may sit above air temperature (°C).
///
/// Stops compounding terms from running away on hot metal.
pub const MAX_ABOVE_AIR_C: f32 = 30.0;
