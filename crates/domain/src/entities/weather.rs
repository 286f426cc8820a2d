//! Current weather conditions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Temperature and wind speed at a location right now
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in °C
    pub temperature_c: f64,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
}

impl fmt::Display for CurrentConditions {
    // Debug keeps the decimal point on whole readings ("30.0", not "30")
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Temperature: {:?}°C, Wind: {:?} km/h",
            self.temperature_c, self.wind_speed_kmh
        )
    }
}
