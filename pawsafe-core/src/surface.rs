//! Surface materials and their multipliers
//!
//! [`SurfaceType`] is a closed set. A surface that could not be identified is
//! modelled as `Option::<SurfaceType>::None` and falls back to
//! [`UNKNOWN_SURFACE_MULTIPLIER`](crate::constants::UNKNOWN_SURFACE_MULTIPLIER).

use core::fmt;
use core::str::FromStr;

use crate::{
    constants::surface::{
        ASPHALT_MULTIPLIER, CONCRETE_MULTIPLIER, GRASS_MULTIPLIER, METAL_MULTIPLIER,
        SAND_MULTIPLIER, UNKNOWN_SURFACE_MULTIPLIER, UNKNOWN_SURFACE_NAME,
    },
    errors::{ValidationError, ValidationResult},
    traits::Validatable,
};

/// Ground material a dog walks on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SurfaceType {
    /// Road and parking-lot blacktop
    Asphalt,
    /// Sidewalks and plazas
    Concrete,
    /// Lawns and parks
    Grass,
    /// Beaches and sandpits
    Sand,
    /// Grates, manhole covers, ramps
    Metal,
}

impl SurfaceType {
    /// All materials in display order
    pub const ALL: [SurfaceType; 5] = [
        SurfaceType::Asphalt,
        SurfaceType::Concrete,
        SurfaceType::Grass,
        SurfaceType::Sand,
        SurfaceType::Metal,
    ];

    /// Lowercase name used in messages and config files
    pub const fn name(self) -> &'static str {
        match self {
            SurfaceType::Asphalt => "asphalt",
            SurfaceType::Concrete => "concrete",
            SurfaceType::Grass => "grass",
            SurfaceType::Sand => "sand",
            SurfaceType::Metal => "metal",
        }
    }

    /// Parse a name, returning `None` for anything unrecognised
    pub fn parse_lenient(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SurfaceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SurfaceType::ALL
            .iter()
            .copied()
            .find(|surface| surface.name().eq_ignore_ascii_case(s))
            .ok_or(ValidationError::UnknownSurface)
    }
}

/// Name shown for an optional surface
pub fn surface_name(surface: Option<SurfaceType>) -> &'static str {
    surface.map_or(UNKNOWN_SURFACE_NAME, SurfaceType::name)
}

/// Frozen multiplier table
///
/// Built once and owned by the estimator; lookups never touch global state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceMultipliers {
    asphalt: f32,
    concrete: f32,
    grass: f32,
    sand: f32,
    metal: f32,
    unknown: f32,
}

impl Default for SurfaceMultipliers {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl SurfaceMultipliers {
    /// Published multipliers
    pub const STANDARD: Self = Self {
        asphalt: ASPHALT_MULTIPLIER,
        concrete: CONCRETE_MULTIPLIER,
        grass: GRASS_MULTIPLIER,
        sand: SAND_MULTIPLIER,
        metal: METAL_MULTIPLIER,
        unknown: UNKNOWN_SURFACE_MULTIPLIER,
    };

    /// Multiplier for a surface, or the fallback when unknown
    pub const fn get(&self, surface: Option<SurfaceType>) -> f32 {
        match surface {
            Some(SurfaceType::Asphalt) => self.asphalt,
            Some(SurfaceType::Concrete) => self.concrete,
            Some(SurfaceType::Grass) => self.grass,
            Some(SurfaceType::Sand) => self.sand,
            Some(SurfaceType::Metal) => self.metal,
            None => self.unknown,
        }
    }

    /// Copy of the table with one material changed
    pub fn with(mut self, surface: SurfaceType, multiplier: f32) -> ValidationResult<Self> {
        let multiplier = check_multiplier(multiplier)?;
        match surface {
            SurfaceType::Asphalt => self.asphalt = multiplier,
            SurfaceType::Concrete => self.concrete = multiplier,
            SurfaceType::Grass => self.grass = multiplier,
            SurfaceType::Sand => self.sand = multiplier,
            SurfaceType::Metal => self.metal = multiplier,
        }
        Ok(self)
    }

    /// Copy of the table with a different fallback multiplier
    pub fn with_unknown(mut self, multiplier: f32) -> ValidationResult<Self> {
        self.unknown = check_multiplier(multiplier)?;
        Ok(self)
    }
}

fn check_multiplier(value: f32) -> ValidationResult<f32> {
    if value.is_valid() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidMultiplier { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_surface_has_a_multiplier() {
        let table = SurfaceMultipliers::default();
        assert_eq!(table.get(Some(SurfaceType::Asphalt)), 1.4);
        assert_eq!(table.get(Some(SurfaceType::Concrete)), 1.2);
        assert_eq!(table.get(Some(SurfaceType::Metal)), 1.5);
        assert_eq!(table.get(Some(SurfaceType::Sand)), 1.1);
        assert_eq!(table.get(Some(SurfaceType::Grass)), 0.8);
    }

    #[test]
    fn unknown_surface_is_neutral() {
        assert_eq!(SurfaceMultipliers::default().get(None), 1.0);
        assert_eq!(surface_name(None), "ground");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Asphalt".parse::<SurfaceType>(), Ok(SurfaceType::Asphalt));
        assert_eq!(" METAL ".parse::<SurfaceType>(), Ok(SurfaceType::Metal));
        assert_eq!("lava".parse::<SurfaceType>(), Err(ValidationError::UnknownSurface));
        assert_eq!(SurfaceType::parse_lenient("lava"), None);
    }

    #[test]
    fn override_rejects_bad_multipliers() {
        let table = SurfaceMultipliers::default();
        assert!(table.with(SurfaceType::Sand, 0.0).is_err());
        assert!(table.with(SurfaceType::Sand, f32::NAN).is_err());
        assert!(table.with_unknown(-1.0).is_err());

        let tuned = table.with(SurfaceType::Sand, 1.3).unwrap();
        assert_eq!(tuned.get(Some(SurfaceType::Sand)), 1.3);
        assert_eq!(tuned.get(Some(SurfaceType::Asphalt)), 1.4);
    }
}
