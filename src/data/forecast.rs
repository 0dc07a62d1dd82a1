//! Daily forecast aggregation
//!
//! Collapses the provider's 3-hour forecast samples into one average
//! temperature per calendar day, keeping the days in the order they first
//! appear in the sample list.

use chrono::NaiveDateTime;

use super::weather::{ForecastResponse, ForecastSample};

/// Maximum number of days shown in the forecast
const FORECAST_DAYS: usize = 5;

/// Format of the provider's `dt_txt` timestamps
const SAMPLE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used for day labels, e.g. "Fri Aug 07 2026"
const DAY_LABEL_FORMAT: &str = "%a %b %d %Y";

/// Average temperature for one forecast day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyForecast {
    /// Calendar-day label derived from the sample timestamps
    pub day: String,
    /// Arithmetic mean of the day's temperatures, rounded to the nearest degree
    pub avg_temp: i32,
}

/// Derives the grouping label for a sample
///
/// A sample with an unparseable timestamp keeps its raw `dt_txt` as the
/// label, so such samples still group consistently with each other.
fn day_label(sample: &ForecastSample) -> String {
    match NaiveDateTime::parse_from_str(&sample.dt_txt, SAMPLE_TIME_FORMAT) {
        Ok(timestamp) => timestamp.format(DAY_LABEL_FORMAT).to_string(),
        Err(_) => sample.dt_txt.clone(),
    }
}

/// Groups forecast samples by calendar day and averages each day's temperatures
///
/// Days appear in first-seen order, truncated to the first five distinct
/// days. A day only exists if at least one sample landed on it, so every
/// bucket has a well-defined mean.
pub fn aggregate_daily(forecast: &ForecastResponse) -> Vec<DailyForecast> {
    let mut buckets: Vec<(String, Vec<f64>)> = Vec::new();

    for sample in &forecast.list {
        let label = day_label(sample);
        match buckets.iter_mut().find(|(day, _)| *day == label) {
            Some((_, temps)) => temps.push(sample.main.temp),
            None => buckets.push((label, vec![sample.main.temp])),
        }
    }

    buckets
        .into_iter()
        .take(FORECAST_DAYS)
        .map(|(day, temps)| {
            let avg = temps.iter().sum::<f64>() / temps.len() as f64;
            DailyForecast {
                day,
                avg_temp: avg.round() as i32,
            }
        })
        .collect()
}
