//! Boundary Validators
//!
//! ## Overview
//!
//! The estimator is total: it computes a result for any finite input and
//! never rejects anything. That is the right contract for a pure function,
//! but it means a weather provider that returns humidity as a fraction
//! (0.45 instead of 45) silently produces a wrong estimate.
//!
//! Validators sit at the collaborator boundary, where provider payloads are
//! turned into typed inputs, and catch that class of mistake:
//!
//! | Field        | Accepted range   |
//! |--------------|------------------|
//! | air_temp     | -80 to 60 °C     |
//! | humidity     | 0 to 100 %       |
//! | wind_speed   | 0 to 400 km/h    |
//! | uv_index     | 0 to 20          |
//! | cloud_cover  | 0 to 100 %       |
//! | hour         | 0 to 23          |
//!
//! ## Usage Example
//!
//! ```rust
//! use pawsafe_core::{AmbientConditions, ConditionsValidator, Validator};
//!
//! let conditions = AmbientConditions {
//!     air_temp: 29.0,
//!     humidity: 0.45, // fraction, not percent - still in range, so it passes
//!     wind_speed: 12.0,
//!     uv_index: 7.0,
//!     cloud_cover: 30.0,
//!     local_hour: Some(13),
//! };
//!
//! ConditionsValidator::default().validate(&conditions)?;
//! # Ok::<(), pawsafe_core::ValidationError>(())
//! ```
//!
//! Range checks cannot catch every unit mistake, as the example shows. The
//! schemas crate converts units explicitly per provider for that reason.

mod conditions;
mod utils;

pub use conditions::{ConditionsValidator, FactorsValidator};
pub use utils::{check_hour, check_range};
