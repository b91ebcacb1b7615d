//! Shared range checks
//!
//! Pure functions with no side effects. Every check names the field it
//! rejected so the boundary can tell the user what was wrong.

use crate::{
    constants::weather::HOUR_MAX,
    errors::{ValidationError, ValidationResult},
    traits::Validatable,
};

/// Check that a value is finite and within `[min, max]`
pub fn check_range(field: &'static str, value: f32, min: f32, max: f32) -> ValidationResult<()> {
    if !value.is_valid() {
        return Err(ValidationError::InvalidValue { field });
    }

    if value < min || value > max {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    } else {
        Ok(())
    }
}

/// Check an hour of day
pub fn check_hour(hour: u8) -> ValidationResult<()> {
    if hour > HOUR_MAX {
        Err(ValidationError::InvalidHour { hour })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_check() {
        assert!(check_range("x", 5.0, 0.0, 10.0).is_ok());
        assert!(check_range("x", 0.0, 0.0, 10.0).is_ok());
        assert!(check_range("x", 10.0, 0.0, 10.0).is_ok());
        assert!(check_range("x", -1.0, 0.0, 10.0).is_err());
        assert!(check_range("x", 11.0, 0.0, 10.0).is_err());
    }

    #[test]
    fn nan_is_invalid_not_out_of_range() {
        assert_eq!(
            check_range("humidity", f32::NAN, 0.0, 100.0),
            Err(ValidationError::InvalidValue { field: "humidity" })
        );
    }

    #[test]
    fn hour_check() {
        assert!(check_hour(0).is_ok());
        assert!(check_hour(23).is_ok());
        assert_eq!(check_hour(24), Err(ValidationError::InvalidHour { hour: 24 }));
    }
}
