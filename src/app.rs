//! Application wiring for a single weather lookup
//!
//! Runs the current-weather and forecast fetches concurrently, then renders
//! whichever results arrived. The two flows share nothing but the client, so
//! a failure on one side leaves the other side's output intact.

use tracing::warn;

use crate::data::forecast::aggregate_daily;
use crate::data::recommendation::recommend;
use crate::data::weather::WeatherClient;
use crate::data::Coordinates;
use crate::render::{icon_url, WeatherView};

/// Drives one lookup against the injected view
pub struct App {
    weather_client: WeatherClient,
}

impl App {
    /// Creates an App around a configured weather client
    pub fn new(weather_client: WeatherClient) -> Self {
        Self { weather_client }
    }

    /// Looks up current conditions and the forecast for a position
    ///
    /// Both fetches are started back-to-back and awaited together; there is
    /// no ordering guarantee between them. Each result is rendered (or its
    /// failure logged) independently.
    pub async fn lookup(&self, position: Coordinates, view: &mut dyn WeatherView) {
        let (current, forecast) = futures::join!(
            self.weather_client
                .fetch_current(position.latitude, position.longitude),
            self.weather_client
                .fetch_forecast(position.latitude, position.longitude),
        );

        match current {
            Ok(conditions) => {
                view.set_location(&conditions.name);
                view.set_current_temperature(conditions.main.temp);
                if let Some(summary) = conditions.weather.first() {
                    view.set_weather_icon(&icon_url(&summary.icon), &summary.description);
                    view.set_description(&summary.description);
                }
                view.set_recommendation(recommend(conditions.main.temp));
            }
            Err(e) => warn!(error = %e, "failed to fetch current conditions"),
        }

        match forecast {
            Ok(forecast) => view.set_forecast_days(&aggregate_daily(&forecast)),
            Err(e) => warn!(error = %e, "failed to fetch forecast"),
        }
    }
}
