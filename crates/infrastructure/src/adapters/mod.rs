//! Adapters - Implementations of application ports
//!
//! Each adapter wraps one integration client and maps its errors onto
//! `ApplicationError`.

mod arxiv_adapter;
mod gemini_inference_adapter;
mod weather_adapter;
mod websearch_adapter;
mod wikipedia_adapter;

pub use arxiv_adapter::ArxivAdapter;
pub use gemini_inference_adapter::GeminiInferenceAdapter;
pub use weather_adapter::WeatherAdapter;
pub use websearch_adapter::WebSearchAdapter;
pub use wikipedia_adapter::WikipediaAdapter;
