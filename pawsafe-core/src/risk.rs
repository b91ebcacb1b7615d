//! Paw-safety risk tiers
//!
//! Two independent heuristics live here and are never merged:
//!
//! - the tier classification, with exclusive-upper thresholds at 43, 49 and
//!   60°C, which drives `is_safe_for_paws`;
//! - the five-second hand test, true below 50°C.
//!
//! A 49.5°C pavement is `dangerous` by tier yet passes the hand test.

use core::fmt;

use crate::{
    constants::safety::{
        CAUTION_THRESHOLD_C, DANGEROUS_THRESHOLD_C, HAND_TEST_LIMIT_C, SAFE_THRESHOLD_C,
    },
    errors::{ValidationError, ValidationResult},
    traits::Validatable,
};

/// Risk tier, ordered from least to most dangerous
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RiskLevel {
    /// Comfortable for paws
    Safe,
    /// Limit exposure, consider booties
    Caution,
    /// Can burn pads
    Dangerous,
    /// Burns within seconds
    Extreme,
}

impl RiskLevel {
    /// Lowercase label
    pub const fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Caution => "caution",
            RiskLevel::Dangerous => "dangerous",
            RiskLevel::Extreme => "extreme",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RiskLevel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

/// Upper bounds of the first three tiers, in °C
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PawSafetyThresholds {
    safe: f32,
    caution: f32,
    dangerous: f32,
}

impl Default for PawSafetyThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl PawSafetyThresholds {
    /// 43 / 49 / 60°C
    pub const STANDARD: Self = Self {
        safe: SAFE_THRESHOLD_C,
        caution: CAUTION_THRESHOLD_C,
        dangerous: DANGEROUS_THRESHOLD_C,
    };

    /// Custom thresholds; they must be finite and strictly ascending
    pub fn new(safe: f32, caution: f32, dangerous: f32) -> ValidationResult<Self> {
        for (field, value) in [("safe", safe), ("caution", caution), ("dangerous", dangerous)] {
            if !value.is_valid() {
                return Err(ValidationError::InvalidValue { field });
            }
        }

        if safe < caution && caution < dangerous {
            Ok(Self { safe, caution, dangerous })
        } else {
            Err(ValidationError::ThresholdsNotAscending { safe, caution, dangerous })
        }
    }

    /// Upper bound of `safe` (exclusive)
    pub const fn safe(&self) -> f32 {
        self.safe
    }

    /// Upper bound of `caution` (exclusive)
    pub const fn caution(&self) -> f32 {
        self.caution
    }

    /// Upper bound of `dangerous` (exclusive)
    pub const fn dangerous(&self) -> f32 {
        self.dangerous
    }

    /// Tier for a surface temperature
    pub fn classify(&self, surface_celsius: f32) -> RiskLevel {
        if surface_celsius < self.safe {
            RiskLevel::Safe
        } else if surface_celsius < self.caution {
            RiskLevel::Caution
        } else if surface_celsius < self.dangerous {
            RiskLevel::Dangerous
        } else {
            RiskLevel::Extreme
        }
    }
}

/// Tier for a surface temperature using the standard thresholds
pub fn classify(surface_celsius: f32) -> RiskLevel {
    PawSafetyThresholds::STANDARD.classify(surface_celsius)
}

/// Five-second hand test: could you keep your hand on it?
pub fn can_hold_hand_for_5_seconds(surface_celsius: f32) -> bool {
    surface_celsius < HAND_TEST_LIMIT_C
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_partition() {
        assert_eq!(classify(42.9), RiskLevel::Safe);
        assert_eq!(classify(43.0), RiskLevel::Caution);
        assert_eq!(classify(48.9), RiskLevel::Caution);
        assert_eq!(classify(49.0), RiskLevel::Dangerous);
        assert_eq!(classify(59.9), RiskLevel::Dangerous);
        assert_eq!(classify(60.0), RiskLevel::Extreme);
    }

    #[test]
    fn extremes_still_classify() {
        assert_eq!(classify(-40.0), RiskLevel::Safe);
        assert_eq!(classify(f32::INFINITY), RiskLevel::Extreme);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(RiskLevel::Safe < RiskLevel::Caution);
        assert!(RiskLevel::Caution < RiskLevel::Dangerous);
        assert!(RiskLevel::Dangerous < RiskLevel::Extreme);
    }

    #[test]
    fn hand_test_is_independent_of_tiers() {
        // 49.5°C is dangerous by tier but passes the hand test
        assert_eq!(classify(49.5), RiskLevel::Dangerous);
        assert!(can_hold_hand_for_5_seconds(49.5));
        assert!(!can_hold_hand_for_5_seconds(50.0));
    }

    #[test]
    fn custom_thresholds_must_ascend() {
        assert!(PawSafetyThresholds::new(40.0, 45.0, 55.0).is_ok());
        assert!(matches!(
            PawSafetyThresholds::new(45.0, 45.0, 55.0),
            Err(ValidationError::ThresholdsNotAscending { .. })
        ));
        assert!(matches!(
            PawSafetyThresholds::new(40.0, f32::NAN, 55.0),
            Err(ValidationError::InvalidValue { field: "caution" })
        ));
    }
}
