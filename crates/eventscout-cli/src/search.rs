//! `search` command handler.

use std::io::Write;

use anyhow::Context;
use eventscout_core::{AppConfig, Item};
use eventscout_ticketmaster::{ClientConfig, DiscoveryClient, ReqwestFetcher};

/// Run one discovery search and print each item as a JSON line on stdout.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed, the search fails,
/// or stdout cannot be written.
pub(crate) async fn run_search(
    config: &AppConfig,
    lat: f64,
    lon: f64,
    keyword: Option<&str>,
) -> anyhow::Result<()> {
    let fetcher = ReqwestFetcher::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build HTTP client")?;
    let client = DiscoveryClient::new(fetcher, ClientConfig::from_app_config(config))?;

    let items = client
        .try_search(lat, lon, keyword)
        .await
        .with_context(|| format!("discovery search at ({lat}, {lon}) failed"))?;
    tracing::info!(count = items.len(), "search complete");

    let stdout = std::io::stdout();
    write_items(&mut stdout.lock(), &items)
}

/// Write items as newline-delimited JSON.
pub(crate) fn write_items<W: Write>(out: &mut W, items: &[Item]) -> anyhow::Result<()> {
    for item in items {
        serde_json::to_writer(&mut *out, item)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
