//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::entities::CurrentConditions;
use domain::value_objects::GeoLocation;
use integration_weather::{
    CurrentWeather, OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather services using Open-Meteo API
#[derive(Debug)]
pub struct WeatherAdapter {
    client: OpenMeteoClient,
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => {
                ApplicationError::ExternalService(format!("Unreadable weather response: {e}"))
            },
            WeatherError::InvalidCoordinates => {
                ApplicationError::Internal("Invalid coordinates".into())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
            WeatherError::Timeout(secs) => {
                ApplicationError::ExternalService(format!("Request timed out after {secs}s"))
            },
        }
    }

    const fn map_current(current: &CurrentWeather) -> CurrentConditions {
        CurrentConditions {
            temperature_c: current.temperature,
            wind_speed_kmh: current.windspeed,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, place: &str) -> Result<Option<GeoLocation>, ApplicationError> {
        let Some(found) = self.client.geocode(place).await.map_err(Self::map_error)? else {
            debug!("No geocoding match");
            return Ok(None);
        };

        debug!(name = %found.name, country = ?found.country, "Geocoded place");
        Ok(Some(GeoLocation::new(found.latitude, found.longitude)?))
    }

    #[instrument(skip(self), fields(location = %location))]
    async fn current_conditions(
        &self,
        location: GeoLocation,
    ) -> Result<CurrentConditions, ApplicationError> {
        let current = self
            .client
            .get_current(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;
        Ok(Self::map_current(&current))
    }
}
