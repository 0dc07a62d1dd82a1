//! Skycast - current weather and a 5-day forecast for your location
//!
//! A command-line utility that resolves your position, fetches conditions
//! from OpenWeatherMap (reusing cached responses under an hour old), and
//! prints the results.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skycast::app::App;
use skycast::cache::CacheManager;
use skycast::cli::{Cli, StartupConfig};
use skycast::data::location::LocationClient;
use skycast::data::weather::WeatherClient;
use skycast::render::TerminalView;

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so the rendered output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("skycast: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli)?;

    // Explicit coordinates skip the geolocation provider entirely; without
    // them, a failed lookup ends the run before any weather request is made.
    let position = match config.position {
        Some(position) => position,
        None => LocationClient::new().current_position().await?,
    };

    let mut client = WeatherClient::new(config.api_key);
    if let Some(dir) = config.cache_dir {
        client = client.with_cache(CacheManager::with_dir(dir));
    }

    let app = App::new(client);
    let mut view = TerminalView;
    app.lookup(position, &mut view).await;

    Ok(())
}
