//! Error Types for Rejected Station Measurements
//!
//! ## Design
//!
//! A reading either comes into existence fully validated or not at all, so
//! there is exactly one error type, [`InvalidMeasurement`]. Its variants tell
//! the caller which precondition failed:
//!
//! ### Physical Violations
//! - `DewPointAboveAirTemperature`: air can't hold more moisture than saturation
//! - `DewPointDepressionExceeded`: dew point too far below air temperature
//!
//! ### Sign Violations
//! - `NegativeWindSpeed`: wind speed is a magnitude
//! - `NegativeRainfall`: accumulated rain can't be negative
//!
//! ### Numeric Issues
//! - `NonFiniteValue`: NaN or infinity in one of the real inputs
//!
//! Checks run in a fixed order and the first failure wins. An input of
//! `(15.0, 35.5, ..)` breaks both dew point rules but reports
//! `DewPointAboveAirTemperature`.
//!
//! ```rust
//! use stevenson_core::{InvalidMeasurement, StevensonReading};
//!
//! match StevensonReading::new(34.5, 35.5, 5.4, 1) {
//!     Ok(_reading) => unreachable!(),
//!     Err(InvalidMeasurement::DewPointAboveAirTemperature { .. }) => {
//!         // humidity probe and thermometer disagree
//!     }
//!     Err(_other) => {}
//! }
//! ```
//!
//! All variants are `Copy` and carry no heap data.

use thiserror_no_std::Error;

/// Result type for measurement validation
pub type MeasurementResult<T> = Result<T, InvalidMeasurement>;

/// Raw input a non-finite check refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasurementField {
    /// Air temperature
    Temperature,
    /// Dew point temperature
    DewPoint,
    /// Wind speed
    WindSpeed,
}

impl MeasurementField {
    /// Field name as used in messages
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::DewPoint => "dew point",
            Self::WindSpeed => "wind speed",
        }
    }
}

impl core::fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a set of station measurements is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidMeasurement {
    /// Input is NaN or infinite
    #[error("{field} is not a finite number")]
    NonFiniteValue {
        /// Which input was not finite
        field: MeasurementField,
    },

    /// Dew point is higher than the air temperature
    #[error("dew point {dew_point}°C cannot be greater than air temperature {temperature}°C")]
    DewPointAboveAirTemperature {
        /// Air temperature in Celsius
        temperature: f64,
        /// Dew point in Celsius
        dew_point: f64,
    },

    /// Dew point sits further below air temperature than allowed
    #[error("dew point depression {depression}°C exceeds limit of {max_depression}°C")]
    DewPointDepressionExceeded {
        /// Air temperature minus dew point, in Celsius
        depression: f64,
        /// Largest accepted depression, in Celsius
        max_depression: f64,
    },

    /// Wind speed below zero
    #[error("wind speed {wind_speed} mph cannot be negative")]
    NegativeWindSpeed {
        /// Reported wind speed in miles per hour
        wind_speed: f64,
    },

    /// Rain total below zero
    #[error("rain measure {total_rain} mm cannot be negative")]
    NegativeRainfall {
        /// Reported 24-hour rainfall in millimeters
        total_rain: i32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for InvalidMeasurement {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NonFiniteValue { field } =>
                defmt::write!(fmt, "{} not finite", field.as_str()),
            Self::DewPointAboveAirTemperature { temperature, dew_point } =>
                defmt::write!(fmt, "Dew point {} above air {}", dew_point, temperature),
            Self::DewPointDepressionExceeded { depression, max_depression } =>
                defmt::write!(fmt, "Depression {} exceeds {}", depression, max_depression),
            Self::NegativeWindSpeed { wind_speed } =>
                defmt::write!(fmt, "Negative wind speed {}", wind_speed),
            Self::NegativeRainfall { total_rain } =>
                defmt::write!(fmt, "Negative rainfall {}", total_rain),
        }
    }
}
