//! Weather port - Geocoding and current conditions

use async_trait::async_trait;
use domain::{entities::CurrentConditions, value_objects::GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather lookups by place name
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Coordinates of the best match for `place`, or `None` if nothing matched
    async fn geocode(&self, place: &str) -> Result<Option<GeoLocation>, ApplicationError>;

    /// Conditions at `location` right now
    async fn current_conditions(
        &self,
        location: GeoLocation,
    ) -> Result<CurrentConditions, ApplicationError>;
}
