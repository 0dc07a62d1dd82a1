//! Best-effort geolocation from the machine's public IP
//!
//! Uses ip-api.com, which needs no API key. The lookup runs once per
//! invocation and the result is never cached; when the provider cannot place
//! the caller, the whole lookup stops rather than guessing a position.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::Coordinates;

/// Endpoint of the IP geolocation provider
const IP_API_URL: &str = "http://ip-api.com/json";

/// Errors that can occur during geolocation
#[derive(Debug, Error)]
pub enum LocationError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider could not determine a position
    #[error("Geolocation unavailable: {0}")]
    Unavailable(String),

    /// Failed to parse the provider response
    #[error("Failed to parse geolocation response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Response from the ip-api.com JSON endpoint
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    /// "success" or "fail"
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    /// Failure reason, present when status is "fail"
    message: Option<String>,
}

/// Client for resolving the caller's position from their public IP
#[derive(Debug, Clone)]
pub struct LocationClient {
    client: Client,
    /// Provider URL (allows override for testing)
    base_url: String,
}

impl Default for LocationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationClient {
    /// Creates a new LocationClient against the public provider
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: IP_API_URL.to_string(),
        }
    }

    /// Overrides the provider URL (for testing against a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolves the caller's current position
    ///
    /// # Returns
    /// * `Ok(Coordinates)` - Best-effort latitude/longitude for the caller
    /// * `Err(LocationError)` - If the provider is unreachable or cannot
    ///   place the caller
    pub async fn current_position(&self) -> Result<Coordinates, LocationError> {
        let response = self.client.get(&self.base_url).send().await?;
        if !response.status().is_success() {
            return Err(LocationError::Unavailable(format!(
                "provider answered {}",
                response.status()
            )));
        }

        let text = response.text().await?;
        let body: IpApiResponse = serde_json::from_str(&text)?;
        parse_position(body)
    }
}

/// Extracts coordinates from a provider response
fn parse_position(body: IpApiResponse) -> Result<Coordinates, LocationError> {
    if body.status != "success" {
        return Err(LocationError::Unavailable(
            body.message.unwrap_or_else(|| "unknown reason".to_string()),
        ));
    }

    match (body.lat, body.lon) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates {
            latitude,
            longitude,
        }),
        _ => Err(LocationError::Unavailable(
            "response carried no coordinates".to_string(),
        )),
    }
}
