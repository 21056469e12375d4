//! Physical Constants for Stevenson Readings
//!
//! Coefficients for the humidity, heat index and wind chill approximations,
//! and the limits enforced on raw station input.

// ===== VALIDATION LIMITS =====

/// Largest accepted gap between air temperature and dew point (°C).
///
/// The linear relative humidity approximation used here drops to 0% at a
/// 20°C depression. Beyond that it would go negative.
pub const MAX_DEW_POINT_DEPRESSION_C: f64 = 20.0;

// ===== RELATIVE HUMIDITY =====

/// Relative humidity at zero dew point depression (%).
pub const SATURATED_HUMIDITY_PCT: f64 = 100.0;

/// Drop in relative humidity per degree of dew point depression (%/°C).
///
/// Source: Lawrence (2005), "The Relationship between Relative Humidity and
/// the Dewpoint Temperature in Moist Air", valid above ~50% RH.
pub const HUMIDITY_PER_DEPRESSION_PCT: f64 = 5.0;

// ===== HEAT INDEX =====
//
// Rothfusz regression in Celsius form:
// HI = c1 + c2·T + c3·H + c4·T·H + c5·T² + c6·H² + c7·T²·H + c8·T·H² + c9·T²·H²

/// Heat index constant term.
pub const HEAT_INDEX_C1: f64 = -8.78469475556;
/// Heat index coefficient for T.
pub const HEAT_INDEX_C2: f64 = 1.61139411;
/// Heat index coefficient for H.
pub const HEAT_INDEX_C3: f64 = 2.33854883889;
/// Heat index coefficient for T·H.
pub const HEAT_INDEX_C4: f64 = -0.14611605;
/// Heat index coefficient for T².
pub const HEAT_INDEX_C5: f64 = -0.012308094;
/// Heat index coefficient for H².
pub const HEAT_INDEX_C6: f64 = -0.0164248277778;
/// Heat index coefficient for T²·H.
pub const HEAT_INDEX_C7: f64 = 0.002211732;
/// Heat index coefficient for T·H².
pub const HEAT_INDEX_C8: f64 = 0.00072546;
/// Heat index coefficient for T²·H².
pub const HEAT_INDEX_C9: f64 = -0.000003582;

// ===== WIND CHILL =====
//
// NWS 2001 formula, Fahrenheit and mph:
// WC = 35.74 + 0.6215·Tf − 35.75·v^0.16 + 0.4275·Tf·v^0.16

/// Wind chill constant term (°F).
pub const WIND_CHILL_BASE_F: f64 = 35.74;

/// Wind chill coefficient for air temperature.
pub const WIND_CHILL_TEMP_FACTOR: f64 = 0.6215;

/// Wind chill coefficient for the wind term.
pub const WIND_CHILL_WIND_FACTOR: f64 = 35.75;

/// Wind chill coefficient for the temperature × wind term.
pub const WIND_CHILL_CROSS_FACTOR: f64 = 0.4275;

/// Exponent applied to wind speed (mph).
pub const WIND_SPEED_EXPONENT: f64 = 0.16;

// ===== UNIT CONVERSION =====

/// Fahrenheit degrees per 5 Celsius degrees.
pub const FAHRENHEIT_PER_FIVE_CELSIUS: f64 = 9.0;

/// Freezing point of water in Fahrenheit (°F).
pub const FAHRENHEIT_OFFSET: f64 = 32.0;
