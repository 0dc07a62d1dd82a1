//! Command-line interface parsing for Skycast
//!
//! This module handles parsing of CLI arguments using clap, including the
//! coordinate override that skips IP geolocation and the API key sourced
//! from the environment.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::data::Coordinates;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// Only one half of a coordinate pair was supplied
    #[error("--lat and --lon must be provided together")]
    IncompleteCoordinates,
}

/// Skycast - current weather and a 5-day forecast for your location
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Current weather and 5-day forecast for your location")]
#[command(version)]
pub struct Cli {
    /// Latitude override; skips IP geolocation when given together with --lon
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude override; skips IP geolocation when given together with --lat
    #[arg(long, value_name = "DEG", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Directory for cached API responses (defaults to the user cache dir)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Explicit position, when both coordinates were supplied
    pub position: Option<Coordinates>,
    /// API key for the weather provider
    pub api_key: String,
    /// Cache directory override
    pub cache_dir: Option<PathBuf>,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if only one of --lat/--lon was specified
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let position = match (cli.lat, cli.lon) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            (None, None) => None,
            _ => return Err(CliError::IncompleteCoordinates),
        };

        Ok(StartupConfig {
            position,
            api_key: cli.api_key.clone(),
            cache_dir: cli.cache_dir.clone(),
        })
    }
}
