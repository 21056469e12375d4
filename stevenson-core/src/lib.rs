//! Core reading model for Stevenson weather stations
//!
//! Turns four raw measurements (air temperature, dew point, wind speed and
//! 24-hour rainfall) into a validated, immutable reading with derived
//! relative humidity, heat index and wind chill.
//!
//! Key constraints:
//! - No heap allocation, runs under `no_std`
//! - Derived values are computed once, at construction
//! - Invalid input never produces a reading
//!
//! ```
//! use stevenson_core::{StevensonReading, WeatherReading};
//!
//! let reading = StevensonReading::new(23.432, 12.123, 3.3, 12)?;
//! assert_eq!(reading.relative_humidity(), 43);
//! assert_eq!(reading.wind_chill(), 77);
//! assert_eq!(reading.to_string(), "Reading: T = 23, D = 12, v = 3, rain = 12");
//! # Ok::<(), stevenson_core::InvalidMeasurement>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod constants;
pub mod errors;
pub mod formulas;
pub mod reading;
pub mod traits;
pub mod validators;

// Public API
pub use errors::{InvalidMeasurement, MeasurementField, MeasurementResult};
pub use reading::{Measurements, ReadingSummary, StevensonReading};
pub use traits::{CrossValidator, Validatable, ValidatorConstraints, WeatherReading};
pub use validators::StevensonValidator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
