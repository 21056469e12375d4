//! Stevenson station input validator
//!
//! Validates the four raw measurements of one observation:
//! - All real inputs are finite
//! - Dew point never above air temperature
//! - Dew point depression within the configured limit
//! - Wind speed and rain total never negative
//!
//! Rules run in that order and the first failure is reported.

use crate::{
    constants::physics::MAX_DEW_POINT_DEPRESSION_C,
    errors::{MeasurementField, MeasurementResult},
    reading::Measurements,
    traits::{CrossValidator, ValidatorConstraints},
};

use super::utils;

/// Validator for raw Stevenson screen measurements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StevensonValidator {
    /// Maximum air temperature minus dew point in Celsius
    max_dew_point_depression_c: f64,
}

impl Default for StevensonValidator {
    fn default() -> Self {
        Self {
            // Linear humidity approximation reaches 0% here
            max_dew_point_depression_c: MAX_DEW_POINT_DEPRESSION_C,
        }
    }
}

impl StevensonValidator {
    /// Create validator with a custom dew point depression limit
    pub fn new_with_limits(max_dew_point_depression: f64) -> Self {
        Self {
            max_dew_point_depression_c: max_dew_point_depression.abs(),
        }
    }

    /// Largest accepted dew point depression in Celsius
    pub fn max_dew_point_depression(&self) -> f64 {
        self.max_dew_point_depression_c
    }
}

impl CrossValidator for StevensonValidator {
    type Input = Measurements;

    fn cross_validate(&self, inputs: Self::Input) -> MeasurementResult<()> {
        let Measurements {
            temperature,
            dew_point,
            wind_speed,
            total_rain,
        } = inputs;

        utils::check_finite(temperature, MeasurementField::Temperature)?;
        utils::check_finite(dew_point, MeasurementField::DewPoint)?;
        utils::check_finite(wind_speed, MeasurementField::WindSpeed)?;

        utils::check_dew_point_below_air(temperature, dew_point)?;
        utils::check_dew_point_depression(
            temperature,
            dew_point,
            self.max_dew_point_depression_c,
        )?;
        utils::check_wind_speed(wind_speed)?;
        utils::check_total_rain(total_rain)?;

        Ok(())
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            max_dew_point_depression: self.max_dew_point_depression_c,
            min_wind_speed: 0.0,
            min_total_rain: 0,
        }
    }
}
