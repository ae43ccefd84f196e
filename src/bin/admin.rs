//! CLI administration tool for click-analytics.
//!
//! Reads the store directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Compute the same snapshot GET /api/stats returns
//! cargo run --bin admin -- stats
//!
//! # Show the raw counters
//! cargo run --bin admin -- counters
//!
//! # Check the store connection
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `REDIS_URL` (or `REDIS_HOST`, ...) and
//! `REDIS_KEY_PREFIX`. Without Redis the tool would only see an empty
//! in-memory store, so it refuses to run.

use click_analytics::application::services::StatsService;
use click_analytics::config;
use click_analytics::domain::event_store::EventStore;
use click_analytics::infrastructure::store::RedisStore;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for inspecting click-analytics data.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Compute and show aggregated statistics
    Stats,

    /// Show the running counters as stored
    Counters,

    /// Check the store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL (or REDIS_HOST) must be set")?;

    let store = RedisStore::connect(redis_url, &config.redis_key_prefix)
        .await
        .context("Failed to connect to Redis")?;
    let service = StatsService::new(EventStore::new(Arc::new(store)));

    match cli.command {
        Commands::Stats => show_stats(&service).await?,
        Commands::Counters => show_counters(&service).await?,
        Commands::Check => check_store(&service).await?,
    }

    Ok(())
}

/// Displays a freshly computed snapshot.
///
/// # Output Format
///
/// ```text
/// 📊 Statistics
///
///   Total clicks:    75
///   Total visitors:  100
///   Unique IPs:      40
///   Click rate:      75%
///
///   Countries
///   BR               30
///   US               10
/// ```
async fn show_stats(service: &StatsService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let snapshot = service
        .snapshot()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to compute statistics: {}", e))?;

    println!(
        "  Total clicks:    {}",
        snapshot.total_clicks.to_string().bright_white().bold()
    );
    println!(
        "  Total visitors:  {}",
        snapshot.total_visitors.to_string().bright_white().bold()
    );
    println!(
        "  Unique IPs:      {}",
        snapshot.unique_ips.to_string().bright_white().bold()
    );
    println!(
        "  Click rate:      {}",
        format!("{}%", snapshot.click_rate).bright_white().bold()
    );
    println!();

    if snapshot.countries.is_empty() {
        println!("{}", "  No clicks retained".yellow());
    } else {
        println!("  {}", "Countries".bright_white().bold());
        println!("  {}", "─".repeat(24).bright_black());

        let mut countries: Vec<_> = snapshot.countries.iter().collect();
        countries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        for (country, count) in countries {
            println!("  {:<16} {}", country.cyan(), count);
        }
    }

    println!();
    println!(
        "  Computed at {}",
        snapshot
            .computed_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
            .bright_black()
    );
    println!();

    Ok(())
}

/// Displays both counters without the visitor estimate.
async fn show_counters(service: &StatsService) -> Result<()> {
    println!("{}", "🔢 Counters".bright_blue().bold());
    println!();

    let (clicks, visitors) = service
        .counters()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read counters: {}", e))?;

    println!("  total_clicks:    {}", clicks.to_string().bright_white().bold());
    println!(
        "  total_visitors:  {}",
        visitors.to_string().bright_white().bold()
    );

    if visitors == 0 && clicks > 0 {
        println!();
        println!(
            "{}",
            "⚠️  Visitor counter is empty; /api/stats reports an estimate".yellow()
        );
    }
    println!();

    Ok(())
}

/// Pings the store.
async fn check_store(service: &StatsService) -> Result<()> {
    println!("{}", "🔍 Checking store connection...".bright_blue());

    if service.store_healthy().await {
        println!("{}", "✅ Store connection OK".green().bold());
        Ok(())
    } else {
        println!("{}", "❌ Store did not answer PING".red().bold());
        anyhow::bail!("Store health check failed")
    }
}
