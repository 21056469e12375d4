//! Core traits for readings and validators
//!
//! Consumers depend on [`WeatherReading`], not on a concrete station type.
//! Keep these small - one capability per trait.

use crate::errors::MeasurementResult;
use crate::reading::ReadingSummary;

/// Capability set shared by every station reading type.
///
/// All real-valued getters return whole numbers, rounded half up. A different
/// sensor model can implement this without sharing any state with
/// [`StevensonReading`](crate::reading::StevensonReading).
pub trait WeatherReading {
    /// Air temperature in Celsius
    fn temperature(&self) -> i32;

    /// Dew point in Celsius
    fn dew_point(&self) -> i32;

    /// Wind speed in miles per hour
    fn wind_speed(&self) -> i32;

    /// Rain over the last 24 hours in millimeters
    fn total_rain(&self) -> i32;

    /// Relative humidity in percent
    fn relative_humidity(&self) -> i32;

    /// Heat index in Celsius
    fn heat_index(&self) -> i32;

    /// Wind chill in Fahrenheit
    fn wind_chill(&self) -> i32;

    /// All seven reported values in one copyable record
    fn summary(&self) -> ReadingSummary {
        ReadingSummary {
            temperature: self.temperature(),
            dew_point: self.dew_point(),
            wind_speed: self.wind_speed(),
            total_rain: self.total_rain(),
            relative_humidity: self.relative_humidity(),
            heat_index: self.heat_index(),
            wind_chill: self.wind_chill(),
        }
    }
}

/// Cross-validator for measurements that constrain each other
pub trait CrossValidator {
    /// Input type (usually a bundle of readings)
    type Input;

    /// Validate the inputs together, reporting the first broken rule
    fn cross_validate(&self, inputs: Self::Input) -> MeasurementResult<()>;

    /// Get the limits this validator enforces
    fn constraints(&self) -> ValidatorConstraints;
}

/// Limits enforced by a validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConstraints {
    /// Largest accepted air temperature minus dew point (°C)
    pub max_dew_point_depression: f64,

    /// Smallest accepted wind speed (mph)
    pub min_wind_speed: f64,

    /// Smallest accepted rain total (mm)
    pub min_total_rain: i32,
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
