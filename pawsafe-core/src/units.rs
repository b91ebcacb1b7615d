//! Temperature units and display helpers
//!
//! Conversions are exact affine maps and never round. Rounding is a separate
//! step, half-up to one decimal, so `-2.25` becomes `-2.2`.

use core::fmt;

/// Display unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TemperatureUnit {
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    #[default]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Unit suffix
    pub const fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// The other unit
    pub const fn toggled(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }
}

/// °C → °F
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// °F → °C
pub fn fahrenheit_to_celsius(fahrenheit: f32) -> f32 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Round half-up to one decimal place
pub fn round_to_tenth(value: f32) -> f32 {
    libm::floorf(value * 10.0 + 0.5) / 10.0
}

/// Temperature ready for display, e.g. `47.5°F`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTemperature {
    value: f32,
    unit: TemperatureUnit,
}

impl DisplayTemperature {
    /// Rounded value that will be printed
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Unit that will be printed
    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }
}

impl fmt::Display for DisplayTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.symbol())
    }
}

/// Format a value already expressed in `unit`
pub fn format_temperature(value: f32, unit: TemperatureUnit) -> DisplayTemperature {
    DisplayTemperature {
        value: round_to_tenth(value),
        unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_conversions() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_to_tenth(8.6000004), 8.6);
        assert_eq!(round_to_tenth(1.25), 1.3);
        assert_eq!(round_to_tenth(-2.25), -2.2);
        assert_eq!(round_to_tenth(55.0), 55.0);
    }

    #[test]
    fn unit_toggle() {
        assert_eq!(TemperatureUnit::Celsius.toggled(), TemperatureUnit::Fahrenheit);
        assert_eq!(TemperatureUnit::default(), TemperatureUnit::Fahrenheit);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_format() {
        assert_eq!(format_temperature(25.0, TemperatureUnit::Celsius).to_string(), "25°C");
        assert_eq!(format_temperature(47.48, TemperatureUnit::Fahrenheit).to_string(), "47.5°F");
    }
}
