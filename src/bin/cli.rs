//! capwatch CLI
//!
//! Local execution entry point for the alert engine.

use std::path::PathBuf;
use std::sync::Arc;

use capwatch::{
    config, error::Result, models::regions, pipeline::AlertService, services::classify,
};
use clap::{Parser, Subcommand};

/// capwatch - CAP Weather Alert Crawler
#[derive(Parser, Debug)]
#[command(name = "capwatch", version, about = "CAP weather-alert feed crawler")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "capwatch.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch active alerts for a province, optionally filtered to a location
    Fetch {
        /// Two-letter province or territory code (e.g. BC, ON)
        #[arg(short, long)]
        province: String,

        /// Location name used for geographic filtering
        #[arg(short, long, default_value = "")]
        location: String,

        /// Print the full alert records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify an alert type/name pair without fetching anything
    Classify {
        #[arg(long, default_value = "")]
        alert_type: String,

        #[arg(long)]
        alert_name: String,
    },

    /// Validate the configuration file
    Validate,

    /// List the supported provinces and their forecast offices
    Offices,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load_config(&cli.config)?;

    match cli.command {
        Command::Fetch {
            province,
            location,
            json,
        } => {
            let service = AlertService::new(Arc::new(config))?;
            let (alerts, stats) = service
                .fetch_alerts_with_stats(&province, 0.0, 0.0, &location)
                .await;

            if json {
                println!("{}", serde_json::to_string_pretty(&alerts)?);
            } else if alerts.is_empty() {
                log::info!(
                    "No active alerts for {province} ({} bulletins checked)",
                    stats.bulletins_fetched
                );
            } else {
                for alert in &alerts {
                    println!("{}", alert.format("[{coverage}] {title}"));
                    if let Some(area) = &alert.matched_area {
                        println!("    matched area: {area}");
                    }
                }
            }

            if stats.fetch_failures > 0 || stats.parse_failures > 0 {
                log::warn!(
                    "Crawl had {} fetch and {} parse failures; results may be incomplete",
                    stats.fetch_failures,
                    stats.parse_failures
                );
            }
        }

        Command::Classify {
            alert_type,
            alert_name,
        } => {
            let c = classify::classify(&alert_type, &alert_name);
            println!("color: {:?}", c.color);
            println!("severity: {:?}", c.severity);
            println!("kind: {:?}", c.kind);
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("Config OK");
        }

        Command::Offices => {
            for code in regions::PROVINCE_CODES {
                // Every listed code has a mapping; the table is static.
                if let Some(office) = regions::office_for_province(code) {
                    println!("{code} -> {office}");
                }
            }
        }
    }

    Ok(())
}
