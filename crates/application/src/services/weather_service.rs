//! Weather service - Current conditions by city name

use std::{fmt, sync::Arc};

use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::WeatherPort};

/// Reply when geocoding finds no match
pub const CITY_NOT_FOUND: &str = "City not found.";

/// Describes the weather in a city as one line of text
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// `"Temperature: <t>°C, Wind: <w> km/h"`, `"City not found."`, or
    /// `"Weather lookup failed: <error>"`; never an error
    #[instrument(skip(self))]
    pub async fn describe_current_weather(&self, city: &str) -> String {
        match self.lookup(city).await {
            Ok(Some(line)) => line,
            Ok(None) => CITY_NOT_FOUND.to_string(),
            Err(e) => {
                warn!(error = %e, "Weather lookup failed");
                format!("Weather lookup failed: {e}")
            },
        }
    }

    async fn lookup(&self, city: &str) -> Result<Option<String>, ApplicationError> {
        let Some(location) = self.weather.geocode(city).await? else {
            debug!("No geocoding match");
            return Ok(None);
        };

        let conditions = self.weather.current_conditions(location).await?;
        debug!(%location, "Current conditions fetched");
        Ok(Some(conditions.to_string()))
    }
}
