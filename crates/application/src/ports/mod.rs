//! Port definitions - Interfaces for external adapters
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! This follows the hexagonal architecture pattern.

mod encyclopedia_port;
mod inference_port;
mod preprint_port;
mod weather_port;
mod websearch_port;

pub use encyclopedia_port::EncyclopediaPort;
#[cfg(test)]
pub use encyclopedia_port::MockEncyclopediaPort;
pub use inference_port::{InferencePort, InferenceResult};
#[cfg(test)]
pub use inference_port::MockInferencePort;
pub use preprint_port::PreprintPort;
#[cfg(test)]
pub use preprint_port::MockPreprintPort;
pub use weather_port::WeatherPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use websearch_port::WebSearchPort;
#[cfg(test)]
pub use websearch_port::MockWebSearchPort;
