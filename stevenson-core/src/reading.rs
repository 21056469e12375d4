//! Stevenson Station Reading
//!
//! ## Lifecycle
//!
//! A [`StevensonReading`] has one state: constructed and valid. The
//! constructor validates the raw [`Measurements`], computes the three derived
//! quantities and freezes everything. If validation fails no value exists.
//!
//! ```text
//! Measurements ──validate──> derive RH ──> derive HI ──> derive WC ──> StevensonReading
//!       │
//!       └── InvalidMeasurement
//! ```
//!
//! ## Reported Values
//!
//! | Getter | Source | Unit |
//! |---|---|---|
//! | `temperature` | raw | °C |
//! | `dew_point` | raw | °C |
//! | `wind_speed` | raw | mph |
//! | `total_rain` | raw, exact | mm / 24h |
//! | `relative_humidity` | derived | % |
//! | `heat_index` | derived | °C |
//! | `wind_chill` | derived | °F |
//!
//! Real values are kept at full precision and rounded half up on the way
//! out. Equality and hashing use the rounded values, so two readings whose
//! raw inputs differ below the reporting resolution compare equal.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::{
    errors::MeasurementResult,
    formulas,
    traits::{CrossValidator, WeatherReading},
    validators::StevensonValidator,
};

/// Raw inputs of one station observation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurements {
    /// Air temperature in Celsius
    pub temperature: f64,
    /// Dew point in Celsius
    pub dew_point: f64,
    /// Wind speed in miles per hour
    pub wind_speed: f64,
    /// Rain over the trailing 24 hours in millimeters
    pub total_rain: i32,
}

/// The seven reported values of a reading, all whole numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadingSummary {
    /// Air temperature in Celsius
    pub temperature: i32,
    /// Dew point in Celsius
    pub dew_point: i32,
    /// Wind speed in miles per hour
    pub wind_speed: i32,
    /// Rain over the trailing 24 hours in millimeters
    pub total_rain: i32,
    /// Relative humidity in percent
    pub relative_humidity: i32,
    /// Heat index in Celsius
    pub heat_index: i32,
    /// Wind chill in Fahrenheit
    pub wind_chill: i32,
}

/// Immutable reading from a Stevenson screen
#[derive(Debug, Clone, Copy)]
pub struct StevensonReading {
    temperature: f64,
    dew_point: f64,
    wind_speed: f64,
    total_rain: i32,

    // Derived once in the constructor
    relative_humidity: f64,
    heat_index: f64,
    wind_chill: f64,
}

impl StevensonReading {
    /// Build a reading from raw values using the default validator.
    ///
    /// * `temperature` - air temperature in Celsius
    /// * `dew_point` - dew point in Celsius, never above `temperature`
    /// * `wind_speed` - non-negative, miles per hour
    /// * `total_rain` - non-negative, millimeters over the last 24 hours
    pub fn new(
        temperature: f64,
        dew_point: f64,
        wind_speed: f64,
        total_rain: i32,
    ) -> MeasurementResult<Self> {
        Self::from_measurements(Measurements {
            temperature,
            dew_point,
            wind_speed,
            total_rain,
        })
    }

    /// Build a reading from a bundle of raw values
    pub fn from_measurements(measurements: Measurements) -> MeasurementResult<Self> {
        Self::with_validator(measurements, &StevensonValidator::default())
    }

    /// Build a reading, validating with a custom validator
    pub fn with_validator(
        measurements: Measurements,
        validator: &StevensonValidator,
    ) -> MeasurementResult<Self> {
        if let Err(err) = validator.cross_validate(measurements) {
            log_warn!("Rejected station measurements {:?}: {}", measurements, err);
            return Err(err);
        }

        let Measurements {
            temperature,
            dew_point,
            wind_speed,
            total_rain,
        } = measurements;

        let relative_humidity = formulas::relative_humidity(temperature, dew_point);
        let heat_index = formulas::heat_index(temperature, relative_humidity);
        let wind_chill = formulas::wind_chill(temperature, wind_speed);

        log_debug!(
            "Reading derived: RH={} HI={} WC={}",
            relative_humidity, heat_index, wind_chill
        );

        Ok(Self {
            temperature,
            dew_point,
            wind_speed,
            total_rain,
            relative_humidity,
            heat_index,
            wind_chill,
        })
    }

    /// Raw inputs at full precision
    pub fn measurements(&self) -> Measurements {
        Measurements {
            temperature: self.temperature,
            dew_point: self.dew_point,
            wind_speed: self.wind_speed,
            total_rain: self.total_rain,
        }
    }
}

impl WeatherReading for StevensonReading {
    fn temperature(&self) -> i32 {
        formulas::round_half_up(self.temperature)
    }

    fn dew_point(&self) -> i32 {
        formulas::round_half_up(self.dew_point)
    }

    fn wind_speed(&self) -> i32 {
        formulas::round_half_up(self.wind_speed)
    }

    fn total_rain(&self) -> i32 {
        self.total_rain
    }

    fn relative_humidity(&self) -> i32 {
        formulas::round_half_up(self.relative_humidity)
    }

    fn heat_index(&self) -> i32 {
        formulas::round_half_up(self.heat_index)
    }

    fn wind_chill(&self) -> i32 {
        formulas::round_half_up(self.wind_chill)
    }
}

impl fmt::Display for StevensonReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reading: T = {}, D = {}, v = {}, rain = {}",
            self.temperature(),
            self.dew_point(),
            self.wind_speed(),
            self.total_rain
        )
    }
}

impl PartialEq for StevensonReading {
    fn eq(&self, other: &Self) -> bool {
        self.summary() == other.summary()
    }
}

impl Eq for StevensonReading {}

impl Hash for StevensonReading {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.summary().hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StevensonReading {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.summary().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InvalidMeasurement;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(reading: &StevensonReading) -> u64 {
        let mut hasher = DefaultHasher::new();
        reading.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn getters_round_raw_values() {
        let reading = StevensonReading::new(23.432, 12.123, 3.3, 12).unwrap();

        assert_eq!(reading.temperature(), 23);
        assert_eq!(reading.dew_point(), 12);
        assert_eq!(reading.wind_speed(), 3);
        assert_eq!(reading.total_rain(), 12);
    }

    #[test]
    fn derived_values() {
        let reading = StevensonReading::new(23.432, 12.123, 3.3, 12).unwrap();

        assert_eq!(reading.relative_humidity(), 43);
        assert_eq!(reading.heat_index(), 25);
        assert_eq!(reading.wind_chill(), 77);

        let reading = StevensonReading::new(22.6, 12.1, 3.0, 12).unwrap();
        assert_eq!(reading.wind_chill(), 75);
    }

    #[test]
    fn display_format() {
        let reading = StevensonReading::new(23.432, 12.123, 3.3, 12).unwrap();
        assert_eq!(reading.to_string(), "Reading: T = 23, D = 12, v = 3, rain = 12");
    }

    #[test]
    fn negative_temperatures_round_up_on_ties() {
        let reading = StevensonReading::new(-2.5, -3.5, 0.0, 0).unwrap();
        assert_eq!(reading.temperature(), -2);
        assert_eq!(reading.dew_point(), -3);
    }

    #[test]
    fn dew_point_above_air_rejected() {
        let result = StevensonReading::new(34.5, 35.5, 5.4, 1);
        assert_eq!(
            result,
            Err(InvalidMeasurement::DewPointAboveAirTemperature {
                temperature: 34.5,
                dew_point: 35.5,
            })
        );
    }

    #[test]
    fn equality_uses_rounded_values() {
        let a = StevensonReading::new(23.42, 12.23, 3.3, 12).unwrap();
        let b = StevensonReading::new(23.42, 12.23, 3.3, 12).unwrap();
        let c = StevensonReading::new(25.48, 16.23, 5.3, 12).unwrap();

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(hash_of(&a), hash_of(&c));
    }

    #[test]
    fn raw_inputs_differing_below_resolution_compare_equal() {
        let a = StevensonReading::new(20.01, 10.01, 2.01, 5).unwrap();
        let b = StevensonReading::new(20.02, 10.02, 2.02, 5).unwrap();

        assert_ne!(a.measurements(), b.measurements());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn rain_is_part_of_identity() {
        let a = StevensonReading::new(20.0, 10.0, 2.0, 5).unwrap();
        let b = StevensonReading::new(20.0, 10.0, 2.0, 6).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn custom_validator_applies() {
        let raw = Measurements {
            temperature: 40.0,
            dew_point: 12.0,
            wind_speed: 4.0,
            total_rain: 0,
        };

        assert!(StevensonReading::from_measurements(raw).is_err());

        let desert = StevensonValidator::new_with_limits(30.0);
        let reading = StevensonReading::with_validator(raw, &desert).unwrap();
        assert_eq!(reading.measurements(), raw);
        assert_eq!(reading.relative_humidity(), -40);
    }
}
