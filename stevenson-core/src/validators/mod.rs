//! Physics-Based Input Validators
//!
//! ## Overview
//!
//! A Stevenson screen reports air temperature, dew point, wind speed and
//! rain. Range checks alone miss the most common fault, a humidity probe that
//! disagrees with the thermometer, so validation here is cross-sensor:
//!
//! ### 1. Numeric Sanity
//! NaN and infinities are rejected before any comparison is made.
//!
//! ### 2. Dew Point vs Air Temperature
//! ```text
//! Td <= T                 (air can't be more than saturated)
//! T - 20°C <= Td          (humidity approximation stays >= 0%)
//! ```
//!
//! ### 3. Signs
//! Wind speed is a magnitude and rain totals only accumulate.
//!
//! ## Usage Example
//!
//! ```rust
//! use stevenson_core::{CrossValidator, Measurements, StevensonValidator};
//!
//! let validator = StevensonValidator::default();
//! let raw = Measurements {
//!     temperature: 23.4,
//!     dew_point: 12.1,
//!     wind_speed: 3.3,
//!     total_rain: 12,
//! };
//!
//! validator.cross_validate(raw)?;
//! # Ok::<(), stevenson_core::InvalidMeasurement>(())
//! ```
//!
//! ## Customization
//!
//! ```rust
//! use stevenson_core::StevensonValidator;
//!
//! // Arid site where 25°C depressions are routine
//! let desert = StevensonValidator::new_with_limits(30.0);
//! ```

mod stevenson;
pub mod utils;

pub use stevenson::StevensonValidator;
