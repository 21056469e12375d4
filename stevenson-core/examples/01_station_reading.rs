//! Station Reading Example
//!
//! Builds readings from a morning of Stevenson screen observations and shows
//! which ones the validator rejects and why.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_station_reading
//! ```

use stevenson_core::{InvalidMeasurement, StevensonReading, WeatherReading};

fn main() {
    println!("Stevenson Station Reading Example");
    println!("=================================\n");

    // (temperature °C, dew point °C, wind mph, rain mm)
    let observations = [
        (23.432, 12.123, 3.3, 12, "Spring afternoon"),
        (22.6, 12.1, 3.0, 12, "Light breeze"),
        (-5.0, -10.0, 20.0, 0, "Windy winter morning"),
        (34.5, 35.5, 5.4, 1, "Dew point above air temperature"),
        (34.5, 12.0, 5.4, 1, "Air far drier than the model allows"),
        (34.5, 31.5, -5.4, 1, "Negative wind speed"),
        (34.5, 31.5, 5.4, -1, "Negative rainfall"),
    ];

    for (t, d, w, r, description) in observations {
        print!("{:.<45} ", description);

        match StevensonReading::new(t, d, w, r) {
            Ok(reading) => {
                println!("✓ {}", reading);
                println!(
                    "    RH = {}%, heat index = {}°C, wind chill = {}°F",
                    reading.relative_humidity(),
                    reading.heat_index(),
                    reading.wind_chill()
                );
            }
            Err(e) => {
                println!("✗ REJECTED");
                println!("    Reason: {}", format_error(&e));
            }
        }
    }
}

fn format_error(error: &InvalidMeasurement) -> String {
    match error {
        InvalidMeasurement::DewPointAboveAirTemperature { .. } => {
            format!("{} (check the humidity probe)", error)
        }
        InvalidMeasurement::DewPointDepressionExceeded { .. } => {
            format!("{} (outside humidity model range)", error)
        }
        _ => error.to_string(),
    }
}
