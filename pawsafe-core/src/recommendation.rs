//! Advisory messages
//!
//! One template per risk tier, each naming the surface inline. The templates
//! are expanded at compile time for every surface (plus the unknown fallback),
//! so a recommendation is a `&'static str` lookup with no allocation.

use crate::{risk::RiskLevel, surface::SurfaceType};

macro_rules! templates {
    ($name:literal) => {
        [
            concat!(
                "Safe for walking! The ", $name,
                " temperature is comfortable for your dog's paws."
            ),
            concat!(
                "Use caution when walking on ", $name,
                ". Consider dog booties or limit time on hot surfaces."
            ),
            concat!(
                "Dangerous! Avoid walking on ", $name,
                ". The surface can burn your dog's paws. Seek shaded areas or wait for cooler temperatures."
            ),
            concat!(
                "EXTREME DANGER! Do not walk on ", $name,
                ". The surface will burn paw pads in seconds. Stay indoors or find grassy areas only."
            ),
        ]
    };
}

const ASPHALT: [&str; 4] = templates!("asphalt");
const CONCRETE: [&str; 4] = templates!("concrete");
const GRASS: [&str; 4] = templates!("grass");
const SAND: [&str; 4] = templates!("sand");
const METAL: [&str; 4] = templates!("metal");
// Must match `constants::surface::UNKNOWN_SURFACE_NAME`
const UNKNOWN: [&str; 4] = templates!("ground");

/// Advice for a tier on a given surface
pub fn recommendation(risk: RiskLevel, surface: Option<SurfaceType>) -> &'static str {
    let table = match surface {
        Some(SurfaceType::Asphalt) => &ASPHALT,
        Some(SurfaceType::Concrete) => &CONCRETE,
        Some(SurfaceType::Grass) => &GRASS,
        Some(SurfaceType::Sand) => &SAND,
        Some(SurfaceType::Metal) => &METAL,
        None => &UNKNOWN,
    };

    table[risk as usize]
}
