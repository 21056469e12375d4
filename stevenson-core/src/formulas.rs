//! Derivation Formulas for Secondary Weather Quantities
//!
//! ## Overview
//!
//! Pure functions that turn raw station measurements into the quantities a
//! reading reports. None of them validate input; [`StevensonReading`] runs the
//! validator first and only then calls these.
//!
//! | Quantity | Inputs | Unit |
//! |---|---|---|
//! | Relative humidity | T, Td | % |
//! | Heat index | T, RH | °C |
//! | Wind chill | T, v | °F |
//!
//! Term order inside each formula is fixed so that results are reproducible
//! bit-for-bit across targets that share the same `libm`.
//!
//! ## Rounding
//!
//! Reported values are whole numbers rounded half up, ties going toward
//! positive infinity: `2.5 → 3`, `-2.5 → -2`. This differs from
//! [`f64::round`], which sends ties away from zero.
//!
//! [`StevensonReading`]: crate::reading::StevensonReading

use crate::constants::physics::{
    FAHRENHEIT_OFFSET, FAHRENHEIT_PER_FIVE_CELSIUS, HEAT_INDEX_C1, HEAT_INDEX_C2, HEAT_INDEX_C3,
    HEAT_INDEX_C4, HEAT_INDEX_C5, HEAT_INDEX_C6, HEAT_INDEX_C7, HEAT_INDEX_C8, HEAT_INDEX_C9,
    HUMIDITY_PER_DEPRESSION_PCT, SATURATED_HUMIDITY_PCT, WIND_CHILL_BASE_F,
    WIND_CHILL_CROSS_FACTOR, WIND_CHILL_TEMP_FACTOR, WIND_CHILL_WIND_FACTOR, WIND_SPEED_EXPONENT,
};

/// Convert Celsius to Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    FAHRENHEIT_PER_FIVE_CELSIUS * (celsius / 5.0) + FAHRENHEIT_OFFSET
}

/// Relative humidity (%) from air temperature and dew point, both in Celsius
pub fn relative_humidity(temperature_c: f64, dew_point_c: f64) -> f64 {
    SATURATED_HUMIDITY_PCT + HUMIDITY_PER_DEPRESSION_PCT * (dew_point_c - temperature_c)
}

/// Heat index (°C) from air temperature (°C) and relative humidity (%)
pub fn heat_index(temperature_c: f64, humidity_pct: f64) -> f64 {
    let t = temperature_c;
    let h = humidity_pct;

    HEAT_INDEX_C1
        + HEAT_INDEX_C2 * t
        + HEAT_INDEX_C3 * h
        + HEAT_INDEX_C4 * t * h
        + HEAT_INDEX_C5 * t * t
        + HEAT_INDEX_C6 * h * h
        + HEAT_INDEX_C7 * t * t * h
        + HEAT_INDEX_C8 * t * h * h
        + HEAT_INDEX_C9 * t * t * h * h
}

/// Wind chill (°F) from air temperature (°C) and wind speed (mph)
pub fn wind_chill(temperature_c: f64, wind_speed_mph: f64) -> f64 {
    let fahrenheit = celsius_to_fahrenheit(temperature_c);
    let wind_term = libm::pow(wind_speed_mph, WIND_SPEED_EXPONENT);

    WIND_CHILL_BASE_F + WIND_CHILL_TEMP_FACTOR * fahrenheit
        - WIND_CHILL_WIND_FACTOR * wind_term
        + WIND_CHILL_CROSS_FACTOR * fahrenheit * wind_term
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// `value - floor(value)` is exact for every finite `f64`, so this avoids the
/// precision loss of `floor(value + 0.5)` near `0.49999999999999994`.
/// Out-of-range values saturate at the `i32` bounds; NaN maps to 0.
pub fn round_half_up(value: f64) -> i32 {
    let floor = libm::floor(value);
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i32
}
