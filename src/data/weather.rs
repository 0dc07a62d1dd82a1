//! OpenWeatherMap API client
//!
//! This module fetches current conditions and the 5-day/3-hour forecast from
//! the OpenWeatherMap API. Responses are cached to disk and reused for up to
//! an hour before a new network request is made; the two endpoints keep
//! separate cache entries and fail independently.

use chrono::Duration;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::cache::CacheManager;

/// Base URL for the OpenWeatherMap API
const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Cache key for current conditions
const WEATHER_CACHE_KEY: &str = "weather_data";

/// Cache key for forecast data
const FORECAST_CACHE_KEY: &str = "forecast_data";

/// How long a cached response stays usable, in hours (both endpoints)
const CACHE_TTL_HOURS: i64 = 1;

/// Errors that can occur when fetching weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    /// Failed to parse JSON response
    #[error("Failed to parse API response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Current conditions as returned by the `weather` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub main: TemperatureReading,
    /// Condition summaries; the first entry drives the rendered icon and text
    pub weather: Vec<ConditionSummary>,
    /// Location label supplied by the provider
    pub name: String,
}

/// Temperature block shared by both endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemperatureReading {
    /// Temperature in Fahrenheit (requests ask for imperial units)
    pub temp: f64,
}

/// One entry of the `weather` condition array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionSummary {
    /// Human-readable condition text, e.g. "broken clouds"
    pub description: String,
    /// Icon token, resolved to a hosted image URL at render time
    pub icon: String,
}

/// Forecast response from the `forecast` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// 3-hour samples in provider order
    pub list: Vec<ForecastSample>,
}

/// A single 3-hour forecast sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    pub main: TemperatureReading,
    /// Sample timestamp as text, e.g. "2026-08-07 12:00:00"
    pub dt_txt: String,
}

/// Builds the query URL for the current-weather endpoint
pub fn weather_url(base_url: &str, lat: f64, lon: f64, api_key: &str) -> String {
    format!(
        "{}/weather?lat={}&lon={}&appid={}&units=imperial",
        base_url, lat, lon, api_key
    )
}

/// Builds the query URL for the forecast endpoint
pub fn forecast_url(base_url: &str, lat: f64, lon: f64, api_key: &str) -> String {
    format!(
        "{}/forecast?lat={}&lon={}&appid={}&units=imperial",
        base_url, lat, lon, api_key
    )
}

/// Client for fetching weather data from the OpenWeatherMap API
#[derive(Debug, Clone)]
pub struct WeatherClient {
    /// HTTP client for making requests
    client: Client,
    /// API key sent as the `appid` query parameter
    api_key: String,
    /// Base URL for the API (allows override for testing)
    base_url: String,
    /// Cache manager for persisting responses
    cache: Option<CacheManager>,
}

impl WeatherClient {
    /// Creates a new WeatherClient with the default base URL and cache location
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: OPENWEATHER_BASE_URL.to_string(),
            cache: CacheManager::new(),
        }
    }

    /// Replaces the cache manager (e.g. one rooted at a custom directory)
    pub fn with_cache(mut self, cache: CacheManager) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Overrides the API base URL (for testing against a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches current conditions for the given coordinates
    ///
    /// Served from cache when a response less than an hour old is stored;
    /// otherwise hits the network and overwrites the cache entry.
    ///
    /// # Arguments
    /// * `lat` - Latitude coordinate
    /// * `lon` - Longitude coordinate
    ///
    /// # Returns
    /// * `Ok(CurrentConditions)` - Current weather for the location
    /// * `Err(WeatherError)` - If the request or parsing fails
    pub async fn fetch_current(&self, lat: f64, lon: f64) -> Result<CurrentConditions, WeatherError> {
        let url = weather_url(&self.base_url, lat, lon, &self.api_key);
        self.fetch_with_cache(WEATHER_CACHE_KEY, &url).await
    }

    /// Fetches the 5-day/3-hour forecast for the given coordinates
    ///
    /// Caching behaves as in [`fetch_current`](Self::fetch_current) but under
    /// a separate cache key, so one endpoint failing or expiring never
    /// affects the other.
    pub async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<ForecastResponse, WeatherError> {
        let url = forecast_url(&self.base_url, lat, lon, &self.api_key);
        self.fetch_with_cache(FORECAST_CACHE_KEY, &url).await
    }

    /// Cache-first fetch shared by both endpoints
    ///
    /// 1. Return the cached payload when the stored entry is fresh.
    /// 2. Otherwise GET `url`; a non-2xx status is an error and leaves any
    ///    stored entry untouched.
    /// 3. On success, parse the body and overwrite the cache entry.
    async fn fetch_with_cache<T>(&self, cache_key: &str, url: &str) -> Result<T, WeatherError>
    where
        T: Serialize + DeserializeOwned,
    {
        let ttl = Duration::hours(CACHE_TTL_HOURS);

        if let Some(ref cache) = self.cache {
            if let Some(entry) = cache.read::<T>(cache_key) {
                if entry.is_fresh(ttl) {
                    tracing::debug!(cache_key, "serving cached response");
                    return Ok(entry.data);
                }
            }
        }

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status()));
        }

        let text = response.text().await?;
        let payload: T = serde_json::from_str(&text)?;

        if let Some(ref cache) = self.cache {
            if let Err(e) = cache.write(cache_key, &payload) {
                tracing::warn!(cache_key, error = %e, "failed to write cache entry");
            }
        }

        Ok(payload)
    }
}
