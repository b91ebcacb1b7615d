//! Location input checks
//!
//! Weather providers are queried either by coordinates or by US ZIP code.
//! Input is checked here so a typo never turns into a provider round trip.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SchemaError;

const LATITUDE_LIMIT: f64 = 90.0;
const LONGITUDE_LIMIT: f64 = 180.0;

/// True for `12345` or `12345-6789`, ignoring surrounding whitespace
pub fn validate_zip_code(zip_code: &str) -> bool {
    let zip_code = zip_code.trim();
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    match zip_code.split_once('-') {
        None => zip_code.len() == 5 && all_digits(zip_code),
        Some((base, plus4)) => {
            base.len() == 5 && plus4.len() == 4 && all_digits(base) && all_digits(plus4)
        }
    }
}

/// True when both values lie on the globe; NaN never does
pub fn is_valid_coordinates(lat: f64, lon: f64) -> bool {
    (-LATITUDE_LIMIT..=LATITUDE_LIMIT).contains(&lat)
        && (-LONGITUDE_LIMIT..=LONGITUDE_LIMIT).contains(&lon)
}

/// `"lat, lon"` with four decimals each
pub fn format_location(lat: f64, lon: f64) -> String {
    format!("{lat:.4}, {lon:.4}")
}

/// Where to ask a provider for weather
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum LocationQuery {
    Coordinates { lat: f64, lon: f64 },
    ZipCode { zip: String },
}

impl LocationQuery {
    pub fn coordinates(lat: f64, lon: f64) -> Result<Self, SchemaError> {
        if !is_valid_coordinates(lat, lon) {
            return Err(SchemaError::InvalidLocation(format_location(lat, lon)));
        }
        Ok(Self::Coordinates { lat, lon })
    }

    /// Stored trimmed
    pub fn zip_code(zip_code: &str) -> Result<Self, SchemaError> {
        if !validate_zip_code(zip_code) {
            return Err(SchemaError::InvalidLocation(zip_code.to_string()));
        }
        Ok(Self::ZipCode {
            zip: zip_code.trim().to_string(),
        })
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coordinates { lat, lon } => f.write_str(&format_location(*lat, *lon)),
            Self::ZipCode { zip } => f.write_str(zip),
        }
    }
}
