//! Terminal output for weather lookups
//!
//! Rendering goes through the `WeatherView` trait so the fetch and
//! aggregation logic never touches stdout directly; tests substitute a
//! recording implementation.

use crate::data::forecast::DailyForecast;

/// Base URL for provider-hosted weather icons
const ICON_BASE_URL: &str = "https://openweathermap.org/img/w";

/// Resolves a provider icon token (e.g. "04d") to a hosted image URL
pub fn icon_url(token: &str) -> String {
    format!("{}/{}.png", ICON_BASE_URL, token)
}

/// Output targets for one weather lookup
///
/// Each setter corresponds to one region of the rendered output. Regions
/// that are never written (for example after a failed fetch) keep whatever
/// they previously held.
pub trait WeatherView {
    /// Location title, e.g. the city name reported by the provider
    fn set_location(&mut self, name: &str);
    /// Current temperature in Fahrenheit
    fn set_current_temperature(&mut self, temp_f: f64);
    /// Weather icon as an image source plus alternative text
    fn set_weather_icon(&mut self, src: &str, alt: &str);
    /// Human-readable condition text
    fn set_description(&mut self, description: &str);
    /// Clothing recommendation line
    fn set_recommendation(&mut self, text: &str);
    /// Up to five day/average-temperature rows
    fn set_forecast_days(&mut self, days: &[DailyForecast]);
}

/// Renders lookup results as labeled lines on stdout
#[derive(Debug, Default)]
pub struct TerminalView;

impl WeatherView for TerminalView {
    fn set_location(&mut self, name: &str) {
        println!("Weather for {}", name);
    }

    fn set_current_temperature(&mut self, temp_f: f64) {
        println!("Currently {:.0}°F", temp_f);
    }

    fn set_weather_icon(&mut self, src: &str, _alt: &str) {
        println!("Icon: {}", src);
    }

    fn set_description(&mut self, description: &str) {
        println!("Conditions: {}", description);
    }

    fn set_recommendation(&mut self, text: &str) {
        println!("{}", text);
    }

    fn set_forecast_days(&mut self, days: &[DailyForecast]) {
        println!();
        println!("5-day forecast:");
        for day in days {
            println!("  {}  avg {}°F", day.day, day.avg_temp);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_url_resolves_token() {
        assert_eq!(icon_url("04d"), "https://openweathermap.org/img/w/04d.png");
        assert_eq!(icon_url("01n"), "https://openweathermap.org/img/w/01n.png");
    }
}
