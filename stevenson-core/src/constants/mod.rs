//! Constants for Stevenson station readings
//!
//! Every numeric value used by the derivation formulas and validation rules
//! lives here. Names carry their units.

/// Formula coefficients and validation limits.
pub mod physics;

pub use physics::{
    FAHRENHEIT_OFFSET, MAX_DEW_POINT_DEPRESSION_C, SATURATED_HUMIDITY_PCT,
    WIND_SPEED_EXPONENT,
};
