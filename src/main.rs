//! Binary entry point.
//!
//! A thin wrapper around the `user_analytics` library that handles:
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the derived report
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};

use user_analytics::initialization::init_logger_with;
use user_analytics::{Config, UserAnalytics};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file if one exists; explicit
    // environment variables still win
    let _ = dotenvy::dotenv();

    let config = Config::from_env().context("reading configuration from environment")?;

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    match run(config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("user_analytics error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(config: Config) -> Result<()> {
    let analytics = UserAnalytics::new(config)?;

    let location = analytics.user_location()?;
    println!("location: {}", serde_json::to_string_pretty(&location)?);

    let summary = analytics.user_summary()?;
    println!("summary: {}", serde_json::to_string_pretty(&summary)?);

    let displayed = analytics.displayed_counts()?;
    println!(
        "displayed attributes: {}",
        serde_json::to_string_pretty(&displayed)?
    );

    let dealbreakers = analytics.dealbreaker_counts()?;
    println!(
        "dealbreaker attributes: {}",
        serde_json::to_string_pretty(&dealbreakers)?
    );

    let media = analytics.media_file_paths()?;
    println!("media files: {}", media.len());

    let rows = analytics.device_locations().await?;
    println!(
        "device locations ({} resolved): {}",
        rows.len(),
        serde_json::to_string_pretty(&rows)?
    );

    Ok(())
}
