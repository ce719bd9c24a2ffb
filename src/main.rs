use anyhow::{Context, Result};
use cyclonewatch::{Coordinate, CycloneWatchConfig, TrendBuilder, WeatherClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    // Default to Chennai when no coordinate is given
    let lat: f64 = args
        .get(1)
        .map(|v| v.parse().context("latitude must be a number"))
        .transpose()?
        .unwrap_or(13.0827);
    let lng: f64 = args
        .get(2)
        .map(|v| v.parse().context("longitude must be a number"))
        .transpose()?
        .unwrap_or(80.2707);
    let days: u32 = args
        .get(3)
        .map(|v| v.parse().context("days must be a positive integer"))
        .transpose()?
        .unwrap_or(30);

    let config = CycloneWatchConfig::load()?;
    let location = Coordinate::new(lat, lng);

    let builder = TrendBuilder::from_config(&config)?;
    let trend = builder.build_trend(&location, days).await;

    println!("Cyclone risk trend for {} ({} days):", location.format(), trend.len());
    println!("{:<12} {:>5} {:>8} {:>9} {:>9}", "date", "risk", "temp °C", "cover %", "activity");
    for point in &trend {
        println!(
            "{:<12} {:>5} {:>8.1} {:>9.1} {:>9.1}",
            point.date, point.risk_score, point.temperature, point.coverage, point.cyclone_activity
        );
    }

    let client = WeatherClient::new(config.weather.clone())?;
    match client.fetch_current(&location).await {
        Some(current) => println!(
            "Current: {:.1}°C, {:.0}% humidity, {:.0}% cloud, {:.1} hPa, wind {:.1}",
            current.temperature,
            current.humidity,
            current.cloud_cover,
            current.pressure,
            current.wind_speed
        ),
        None => println!("Current conditions unavailable."),
    }

    Ok(())
}
