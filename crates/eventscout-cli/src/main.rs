mod search;

use clap::{Parser, Subcommand};
use eventscout_core::geohash::{self, GeohashError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "eventscout")]
#[command(about = "Search the Ticketmaster Discovery API by location and keyword")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for events near a coordinate and print one JSON object per event
    Search {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Restrict results to events matching this keyword
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Print the geohash for a coordinate and the centre of its cell
    Geohash {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(long, default_value_t = geohash::SEARCH_PRECISION)]
        precision: usize,
    },
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// `<hash> <lat> <lon>`, the coordinates being the centre of the hash's cell.
fn describe_geohash(lat: f64, lon: f64, precision: usize) -> Result<String, GeohashError> {
    let hash = geohash::encode(lat, lon, precision)?;
    let (center_lat, center_lon) = geohash::decode_bounds(&hash)?.center();
    Ok(format!("{hash} {center_lat:.6} {center_lon:.6}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { lat, lon, keyword } => {
            let config = eventscout_core::load_app_config()?;
            init_tracing(&config.log_level)?;
            search::run_search(&config, lat, lon, keyword.as_deref()).await
        }
        Commands::Geohash {
            lat,
            lon,
            precision,
        } => {
            init_tracing(&eventscout_core::load_log_level())?;
            let line = describe_geohash(lat, lon, precision)?;
            tracing::debug!(lat, lon, precision, "encoded geohash");
            println!("{line}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
