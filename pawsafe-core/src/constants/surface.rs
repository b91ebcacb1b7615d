//! Surface Material Multipliers
//!
//! Dark, dense materials absorb more solar radiation and sit well above air
//! temperature in the sun; vegetation stays cooler through evaporation. The
//! multipliers scale air temperature in °C before any other term is added.

/// Asphalt multiplier.
///
/// Dark binder with low albedo (~0.05-0.10). Routinely 20-30°C above air
/// temperature on a clear afternoon.
pub const ASPHALT_MULTIPLIER: f32 = 1.4;

/// Concrete multiplier.
///
/// Lighter than asphalt (albedo ~0.25-0.35) but with high thermal mass, so it
/// stays hot into the evening.
pub const CONCRETE_MULTIPLIER: f32 = 1.2;

/// Metal multiplier.
///
/// Manhole covers, grates, truck beds. High conductivity makes the surface
/// heat quickly; the hottest material in the table.
pub const METAL_MULTIPLIER: f32 = 1.5;

/// Sand multiplier.
///
/// Dry sand heats at the surface but loses heat to the layer beneath.
pub const SAND_MULTIPLIER: f32 = 1.1;

/// Grass multiplier.
///
/// Transpiration keeps living grass below air temperature in full sun.
/// The only multiplier below 1.0.
pub const GRASS_MULTIPLIER: f32 = 0.8;

/// Multiplier used when the surface is unknown or was not supplied.
///
/// Neutral: the estimate starts from the air temperature itself.
pub const UNKNOWN_SURFACE_MULTIPLIER: f32 = 1.0;

/// Name interpolated into recommendations when the surface is unknown.
pub const UNKNOWN_SURFACE_NAME: &str = "ground";
