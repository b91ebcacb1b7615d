//! Plausible Weather Input Ranges
//!
//! Used only by the validators at the provider boundary. The estimator
//! accepts any finite input.

/// Minimum plausible air temperature (°C).
///
/// Coldest natural temperature recorded on Earth is -89.2°C at Vostok, but
/// nobody walks a dog there.
///
/// Source: World Meteorological Organization
pub const AIR_TEMP_MIN_C: f32 = -80.0;

/// Maximum plausible air temperature (°C).
///
/// Hottest reliable record is 54.4°C in Death Valley.
///
/// Source: World Meteorological Organization
pub const AIR_TEMP_MAX_C: f32 = 60.0;

/// Relative humidity range (%).
pub const HUMIDITY_MIN_PCT: f32 = 0.0;
/// Relative humidity range (%).
pub const HUMIDITY_MAX_PCT: f32 = 100.0;

/// Cloud cover range (%).
pub const CLOUD_COVER_MIN_PCT: f32 = 0.0;
/// Cloud cover range (%).
pub const CLOUD_COVER_MAX_PCT: f32 = 100.0;

/// Minimum wind speed (km/h).
pub const WIND_MIN_KPH: f32 = 0.0;

/// Maximum plausible sustained wind speed (km/h).
///
/// Above the strongest measured gust (408 km/h, Barrow Island 1996).
pub const WIND_MAX_KPH: f32 = 400.0;

/// Minimum UV index.
pub const UV_INDEX_MIN: f32 = 0.0;

/// Maximum plausible UV index.
///
/// Readings above 20 have only been reported on the Altiplano.
pub const UV_INDEX_MAX: f32 = 20.0;

/// Last valid hour of day.
pub const HOUR_MAX: u8 = 23;

/// Conversion factor from m/s to km/h.
pub const MPS_TO_KPH: f32 = 3.6;
