//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo geocoding and forecast APIs.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentWeather, ForecastResponse, GeocodingResponse, Place};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Request timeout
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo geocoding API base URL
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Open-Meteo forecast API base URL
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Language for place names (ISO 639-1)
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            forecast_base_url: default_forecast_base_url(),
            timeout_secs: default_timeout(),
            language: default_language(),
        }
    }
}

impl WeatherConfig {
    /// Point both APIs at one mock server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            geocoding_base_url: base_url.to_string(),
            forecast_base_url: base_url.to_string(),
            timeout_secs: 5,
            ..Default::default()
        }
    }
}

/// Weather client trait for geocoding and current conditions
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Resolve a place name to its best match, or `None` if nothing matched
    async fn geocode(&self, name: &str) -> Result<Option<Place>, WeatherError>;

    /// Get current weather for a location
    async fn get_current(&self, latitude: f64, longitude: f64)
    -> Result<CurrentWeather, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn map_transport_error(&self, err: &reqwest::Error) -> WeatherError {
        if err.is_timeout() {
            WeatherError::Timeout(self.config.timeout_secs)
        } else if err.is_connect() {
            WeatherError::ConnectionFailed(err.to_string())
        } else {
            WeatherError::RequestFailed(err.to_string())
        }
    }

    fn check_status(response: &Response) -> Result<(), WeatherError> {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(())
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn geocode(&self, name: &str) -> Result<Option<Place>, WeatherError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        debug!("Geocoding place name");

        let response = self
            .client
            .get(format!("{}/search", self.config.geocoding_base_url))
            .query(&[
                ("name", name),
                ("count", "1"),
                ("language", self.config.language.as_str()),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        Self::check_status(&response)?;

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Ok(body.into_first())
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        debug!("Fetching current weather");

        let response = self
            .client
            .get(format!("{}/forecast", self.config.forecast_base_url))
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        Self::check_status(&response)?;

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        body.current_weather.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.geocoding_base_url, "https://geocoding-api.open-meteo.com/v1");
        assert_eq!(config.forecast_base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: WeatherConfig = serde_json::from_str(r#"{"timeout_secs": 3}"#).unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.language, "en");
    }

    #[test]
    fn validate_coordinates_bounds() {
        assert!(OpenMeteoClient::validate_coordinates(90.0, -180.0).is_ok());
        assert!(OpenMeteoClient::validate_coordinates(90.1, 0.0).is_err());
        assert!(OpenMeteoClient::validate_coordinates(0.0, 180.5).is_err());
    }

    #[tokio::test]
    async fn blank_name_resolves_to_nothing() {
        let client = OpenMeteoClient::new(WeatherConfig::for_testing("http://127.0.0.1:9")).unwrap();
        assert!(client.geocode("  ").await.unwrap().is_none());
    }
}
