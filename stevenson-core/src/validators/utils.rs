//! Common validation checks
//!
//! Small pure functions, each enforcing one rule and returning the matching
//! [`InvalidMeasurement`] variant. The station validator chains them in a
//! fixed order.

use crate::{
    errors::{InvalidMeasurement, MeasurementField, MeasurementResult},
    traits::Validatable,
};

/// Reject NaN and infinities
pub fn check_finite(value: f64, field: MeasurementField) -> MeasurementResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(InvalidMeasurement::NonFiniteValue { field })
    }
}

/// Dew point must not exceed air temperature
pub fn check_dew_point_below_air(temperature: f64, dew_point: f64) -> MeasurementResult<()> {
    if dew_point > temperature {
        Err(InvalidMeasurement::DewPointAboveAirTemperature {
            temperature,
            dew_point,
        })
    } else {
        Ok(())
    }
}

/// Dew point must lie within `max_depression` of air temperature.
///
/// The boundary follows the float expression `temperature - max_depression > dew_point`,
/// not `temperature - dew_point > max_depression`.
pub fn check_dew_point_depression(
    temperature: f64,
    dew_point: f64,
    max_depression: f64,
) -> MeasurementResult<()> {
    if temperature - max_depression > dew_point {
        Err(InvalidMeasurement::DewPointDepressionExceeded {
            depression: temperature - dew_point,
            max_depression,
        })
    } else {
        Ok(())
    }
}

/// Wind speed is a magnitude
pub fn check_wind_speed(wind_speed: f64) -> MeasurementResult<()> {
    if wind_speed < 0.0 {
        Err(InvalidMeasurement::NegativeWindSpeed { wind_speed })
    } else {
        Ok(())
    }
}

/// Rain totals only accumulate
pub fn check_total_rain(total_rain: i32) -> MeasurementResult<()> {
    if total_rain < 0 {
        Err(InvalidMeasurement::NegativeRainfall { total_rain })
    } else {
        Ok(())
    }
}
