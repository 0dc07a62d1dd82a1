//! Core data models for Skycast
//!
//! This module contains the shared types used throughout the application
//! together with the API clients for geolocation and weather data.

pub mod forecast;
pub mod location;
pub mod recommendation;
pub mod weather;

pub use forecast::{aggregate_daily, DailyForecast};
pub use location::{LocationClient, LocationError};
pub use recommendation::recommend;
pub use weather::{CurrentConditions, ForecastResponse, WeatherClient, WeatherError};

/// A geographic position for one weather lookup
///
/// Produced once per lookup, either from the IP geolocation provider or from
/// explicit command-line coordinates. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
}
