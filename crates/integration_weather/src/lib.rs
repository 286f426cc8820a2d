//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo geocoding and forecast APIs (<https://open-meteo.com>).
//! Resolves a place name to coordinates and reads the current conditions there,
//! without requiring an API key.

pub mod client;
mod models;

pub use client::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CurrentWeather, Place};
