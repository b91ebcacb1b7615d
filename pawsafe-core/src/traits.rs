//! Core traits
//!
//! The seams between the pure core and its collaborators: validators for
//! untrusted input, and the weather provider that supplies it.

use crate::errors::ValidationResult;
use crate::factors::AmbientConditions;

/// Validator for one kind of input
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Check a value, reporting the first problem found
    fn validate(&self, value: &Self::Value) -> ValidationResult<()>;
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a real number (not NaN or infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Source of current weather
///
/// Implementations do their own I/O, caching and retries. The core calls
/// `current_conditions` once per estimate and passes errors through untouched.
pub trait WeatherProvider {
    /// Provider-specific failure
    type Error;

    /// Latest conditions at the configured location
    fn current_conditions(&self) -> Result<AmbientConditions, Self::Error>;
}

impl<P: WeatherProvider + ?Sized> WeatherProvider for &P {
    type Error = P::Error;

    fn current_conditions(&self) -> Result<AmbientConditions, Self::Error> {
        (**self).current_conditions()
    }
}

/// Fixed weather for testing and demos
#[derive(Debug, Clone, Copy)]
pub struct FixedWeather {
    conditions: AmbientConditions,
}

impl FixedWeather {
    /// Provider that always reports `conditions`
    pub fn new(conditions: AmbientConditions) -> Self {
        Self { conditions }
    }

    /// Replace the reported conditions
    pub fn set(&mut self, conditions: AmbientConditions) {
        self.conditions = conditions;
    }
}

impl WeatherProvider for FixedWeather {
    type Error = core::convert::Infallible;

    fn current_conditions(&self) -> Result<AmbientConditions, Self::Error> {
        Ok(self.conditions)
    }
}
