//! Estimator Profiles
//!
//! A profile is a JSON document that tunes the estimator without
//! recompiling:
//!
//! ```json
//! {
//!   "name": "coastal",
//!   "multipliers": { "sand": 1.25, "concrete": 1.15 },
//!   "unknownMultiplier": 1.0,
//!   "thresholds": { "safe": 43.0, "caution": 49.0, "dangerous": 60.0 }
//! }
//! ```
//!
//! Every field except `name` is optional; anything left out keeps the
//! published default. Unknown keys are rejected so a typo cannot silently
//! fall back to a default.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use pawsafe_core::{PawSafetyThresholds, SurfaceEstimator, SurfaceMultipliers, SurfaceType};

use crate::SchemaError;

/// Tier thresholds in °C, exclusive upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    pub safe: f32,
    pub caution: f32,
    pub dangerous: f32,
}

impl From<PawSafetyThresholds> for ThresholdConfig {
    fn from(thresholds: PawSafetyThresholds) -> Self {
        Self {
            safe: thresholds.safe(),
            caution: thresholds.caution(),
            dangerous: thresholds.dangerous(),
        }
    }
}

/// Serializable estimator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EstimatorProfile {
    pub name: String,

    /// Surface name → multiplier
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub multipliers: BTreeMap<String, f32>,

    /// Multiplier for surfaces that could not be identified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown_multiplier: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<ThresholdConfig>,
}

impl EstimatorProfile {
    /// Profile spelling out the published defaults
    pub fn standard() -> Self {
        let table = SurfaceMultipliers::STANDARD;
        let multipliers = SurfaceType::ALL
            .iter()
            .map(|surface| (surface.name().to_string(), table.get(Some(*surface))))
            .collect();

        Self {
            name: "standard".to_string(),
            multipliers,
            unknown_multiplier: Some(table.get(None)),
            thresholds: Some(PawSafetyThresholds::STANDARD.into()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let profile = Self::from_json(&contents)?;
        log::info!("Loaded estimator profile '{}' from {}", profile.name, path.display());
        Ok(profile)
    }

    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the profile and freeze it into an estimator
    pub fn build(&self) -> Result<SurfaceEstimator, SchemaError> {
        let mut multipliers = SurfaceMultipliers::STANDARD;

        for (name, &value) in &self.multipliers {
            let surface = SurfaceType::parse_lenient(name)
                .ok_or_else(|| SchemaError::UnknownSurface(name.clone()))?;
            multipliers = multipliers.with(surface, value)?;
        }

        if let Some(value) = self.unknown_multiplier {
            multipliers = multipliers.with_unknown(value)?;
        }

        let thresholds = match self.thresholds {
            Some(t) => PawSafetyThresholds::new(t.safe, t.caution, t.dangerous)?,
            None => PawSafetyThresholds::STANDARD,
        };

        log::debug!("Built estimator from profile '{}'", self.name);
        Ok(SurfaceEstimator::new(multipliers, thresholds))
    }
}

impl Default for EstimatorProfile {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawsafe_core::ValidationError;
    use std::io::Write;

    #[test]
    fn standard_profile_builds_standard_estimator() {
        let estimator = EstimatorProfile::standard().build().unwrap();
        assert_eq!(estimator, SurfaceEstimator::STANDARD);
    }

    #[test]
    fn partial_profile_keeps_defaults() {
        let profile = EstimatorProfile::from_json(
            r#"{"name": "beach", "multipliers": {"Sand": 1.3}}"#,
        )
        .unwrap();
        let estimator = profile.build().unwrap();

        assert_eq!(estimator.multipliers().get(Some(SurfaceType::Sand)), 1.3);
        assert_eq!(estimator.multipliers().get(Some(SurfaceType::Asphalt)), 1.4);
        assert_eq!(estimator.multipliers().get(None), 1.0);
        assert_eq!(*estimator.thresholds(), PawSafetyThresholds::STANDARD);
    }

    #[test]
    fn unknown_surface_key_rejected() {
        let profile =
            EstimatorProfile::from_json(r#"{"name": "x", "multipliers": {"gravel": 1.2}}"#)
                .unwrap();
        match profile.build() {
            Err(SchemaError::UnknownSurface(name)) => assert_eq!(name, "gravel"),
            other => panic!("expected unknown surface, got {:?}", other),
        }
    }

    #[test]
    fn unknown_field_rejected() {
        let result = EstimatorProfile::from_json(r#"{"name": "x", "multiplier": {}}"#);
        assert!(matches!(result, Err(SchemaError::Parse(_))));
    }

    #[test]
    fn bad_values_rejected() {
        let negative =
            EstimatorProfile::from_json(r#"{"name": "x", "multipliers": {"metal": -1.0}}"#)
                .unwrap();
        assert!(matches!(
            negative.build(),
            Err(SchemaError::Validation(ValidationError::InvalidMultiplier { .. }))
        ));

        let unordered = EstimatorProfile::from_json(
            r#"{"name": "x", "thresholds": {"safe": 50, "caution": 45, "dangerous": 60}}"#,
        )
        .unwrap();
        assert!(matches!(
            unordered.build(),
            Err(SchemaError::Validation(ValidationError::ThresholdsNotAscending { .. }))
        ));
    }

    #[test]
    fn json_round_trip() {
        let profile = EstimatorProfile::standard();
        let json = profile.to_json().unwrap();
        assert!(json.contains("unknownMultiplier"));
        assert_eq!(EstimatorProfile::from_json(&json).unwrap(), profile);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"name": "cautious", "thresholds": {{"safe": 40, "caution": 46, "dangerous": 55}}}}"#
        )
        .unwrap();

        let profile = EstimatorProfile::from_path(file.path()).unwrap();
        assert_eq!(profile.name, "cautious");
        let estimator = profile.build().unwrap();
        assert_eq!(estimator.thresholds().safe(), 40.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = EstimatorProfile::from_path(dir.path().join("absent.json"));
        assert!(matches!(result, Err(SchemaError::Io(_))));
    }
}
