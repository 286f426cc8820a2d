//! AI Core - Text generation engine abstraction
//!
//! Provides the [`InferenceEngine`] port and a hosted implementation backed by
//! the Gemini `generateContent` API.

pub mod config;
pub mod error;
pub mod gemini;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use gemini::GeminiInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage};
