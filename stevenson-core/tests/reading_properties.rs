//! Property tests for reading construction and identity

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use stevenson_core::{formulas::round_half_up, InvalidMeasurement, StevensonReading, WeatherReading};

fn hash_of(reading: &StevensonReading) -> u64 {
    let mut hasher = DefaultHasher::new();
    reading.hash(&mut hasher);
    hasher.finish()
}

/// Air temperatures seen at surface stations
fn air_temperature() -> impl Strategy<Value = f64> {
    -60.0f64..55.0
}

/// Valid (temperature, dew point) pairs
fn valid_pair() -> impl Strategy<Value = (f64, f64)> {
    (air_temperature(), 0.0f64..20.0).prop_map(|(t, depression)| (t, t - depression))
}

proptest! {
    #[test]
    fn dew_point_above_air_always_rejected(
        t in air_temperature(),
        excess in 0.001f64..30.0,
        w in 0.0f64..100.0,
        r in 0i32..500,
    ) {
        let result = StevensonReading::new(t, t + excess, w, r);
        let is_dew_point_error = matches!(
            result,
            Err(InvalidMeasurement::DewPointAboveAirTemperature { .. })
        );
        prop_assert!(is_dew_point_error);
    }

    #[test]
    fn large_depression_always_rejected(
        t in air_temperature(),
        depression in 20.5f64..80.0,
        w in 0.0f64..100.0,
        r in 0i32..500,
    ) {
        let result = StevensonReading::new(t, t - depression, w, r);
        let is_depression_error = matches!(
            result,
            Err(InvalidMeasurement::DewPointDepressionExceeded { .. })
        );
        prop_assert!(is_depression_error);
    }

    #[test]
    fn negative_wind_always_rejected(
        (t, d) in valid_pair(),
        w in -100.0f64..-0.001,
        r in 0i32..500,
    ) {
        prop_assert!(StevensonReading::new(t, d, w, r).is_err());
    }

    #[test]
    fn negative_rain_always_rejected(
        (t, d) in valid_pair(),
        w in 0.0f64..100.0,
        r in i32::MIN..0,
    ) {
        prop_assert!(StevensonReading::new(t, d, w, r).is_err());
    }

    #[test]
    fn humidity_follows_linear_approximation(
        (t, d) in valid_pair(),
        w in 0.0f64..100.0,
        r in 0i32..500,
    ) {
        let reading = StevensonReading::new(t, d, w, r).unwrap();
        prop_assert_eq!(reading.relative_humidity(), round_half_up(100.0 + 5.0 * (d - t)));
        prop_assert!((0..=100).contains(&reading.relative_humidity()));
    }

    #[test]
    fn rain_reported_exactly(
        (t, d) in valid_pair(),
        r in 0i32..i32::MAX,
    ) {
        let reading = StevensonReading::new(t, d, 1.0, r).unwrap();
        prop_assert_eq!(reading.total_rain(), r);
    }

    #[test]
    fn accessors_are_stable(
        (t, d) in valid_pair(),
        w in 0.0f64..100.0,
        r in 0i32..500,
    ) {
        let reading = StevensonReading::new(t, d, w, r).unwrap();
        prop_assert_eq!(reading.summary(), reading.summary());
        prop_assert_eq!(reading.to_string(), reading.to_string());
    }

    #[test]
    fn equal_readings_hash_equal(
        (t, d) in valid_pair(),
        w in 0.0f64..100.0,
        r in 0i32..500,
    ) {
        let a = StevensonReading::new(t, d, w, r).unwrap();
        let b = StevensonReading::new(t, d, w, r).unwrap();
        prop_assert_eq!(a, a);
        prop_assert_eq!(a, b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn equality_matches_reported_values(
        (t1, d1) in valid_pair(),
        (t2, d2) in valid_pair(),
        w in 0.0f64..100.0,
        r in 0i32..500,
    ) {
        let a = StevensonReading::new(t1, d1, w, r).unwrap();
        let b = StevensonReading::new(t2, d2, w, r).unwrap();
        prop_assert_eq!(a == b, a.summary() == b.summary());
        prop_assert_eq!(a == b, b == a);
    }
}
