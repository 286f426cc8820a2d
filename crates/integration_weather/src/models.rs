//! Open-Meteo response models

use serde::{Deserialize, Serialize};

/// A place returned by the geocoding API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Geocoding search response
///
/// `results` is absent entirely when nothing matched.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<Place>>,
}

impl GeocodingResponse {
    pub fn into_first(self) -> Option<Place> {
        self.results.and_then(|places| places.into_iter().next())
    }
}

/// Current conditions as reported by `current_weather=true`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Air temperature in °C
    pub temperature: f64,
    /// Wind speed in km/h
    pub windspeed: f64,
    /// Wind direction in degrees
    #[serde(default)]
    pub winddirection: Option<f64>,
    /// WMO weather interpretation code
    #[serde(default)]
    pub weathercode: Option<u8>,
}

/// Forecast response carrying the `current_weather` block
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    #[serde(default)]
    pub current_weather: Option<CurrentWeather>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_results_means_no_place() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.5}"#).unwrap();
        assert!(response.into_first().is_none());
    }

    #[test]
    fn empty_results_means_no_place() {
        let response: GeocodingResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(response.into_first().is_none());
    }

    #[test]
    fn first_result_is_used() {
        let response: GeocodingResponse = serde_json::from_value(serde_json::json!({
            "results": [
                {"name": "Pune", "latitude": 18.52, "longitude": 73.85, "country": "India"},
                {"name": "Pune", "latitude": 1.0, "longitude": 2.0}
            ]
        }))
        .unwrap();
        let place = response.into_first().unwrap();
        assert_eq!(place.country.as_deref(), Some("India"));
        assert!((place.latitude - 18.52).abs() < f64::EPSILON);
    }

    #[test]
    fn parses_current_weather_block() {
        let response: ForecastResponse = serde_json::from_value(serde_json::json!({
            "latitude": 18.5,
            "current_weather": {
                "time": "2026-10-18T09:00",
                "temperature": 29.3,
                "windspeed": 11.2,
                "winddirection": 270,
                "weathercode": 1
            }
        }))
        .unwrap();
        let current = response.current_weather.unwrap();
        assert!((current.temperature - 29.3).abs() < f64::EPSILON);
        assert_eq!(current.weathercode, Some(1));
    }
}
