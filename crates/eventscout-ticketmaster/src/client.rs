//! Discovery API search client.
//!
//! Builds the `events.json` query (API key, geohash, keyword, radius), runs
//! it through the injected [`HttpFetch`], and maps `_embedded.events` to
//! [`Item`]s in response order.

pub use eventscout_core::config::DEFAULT_SEARCH_RADIUS;
use eventscout_core::geohash::{self, SEARCH_PRECISION};
use eventscout_core::{AppConfig, Item};
use reqwest::Url;
use serde_json::Value;

use crate::error::SearchError;
use crate::fetch::{redact_api_key, HttpFetch};
use crate::json::lookup;
use crate::mapper::map_event;

/// Keyword used when the caller gives none; matches every event.
const DEFAULT_KEYWORD: &str = "";

/// Connection settings for [`DiscoveryClient`].
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub radius: u32,
}

impl ClientConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.discovery_url.clone(),
            radius: config.search_radius,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url)
            .field("radius", &self.radius)
            .finish()
    }
}

/// Client for the discovery `events.json` endpoint.
///
/// Holds no per-call state; one instance can serve concurrent searches as
/// long as the fetcher can.
pub struct DiscoveryClient<F> {
    fetcher: F,
    api_key: String,
    base_url: Url,
    radius: u32,
}

impl<F> std::fmt::Debug for DiscoveryClient<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryClient")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url.as_str())
            .field("radius", &self.radius)
            .finish_non_exhaustive()
    }
}

impl<F: HttpFetch> DiscoveryClient<F> {
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidBaseUrl`] if `config.base_url` does not
    /// parse as an absolute URL.
    pub fn new(fetcher: F, config: ClientConfig) -> Result<Self, SearchError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| SearchError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            fetcher,
            api_key: config.api_key,
            base_url,
            radius: config.radius,
        })
    }

    /// Search for events near a location.
    ///
    /// Never fails: transport errors, bad payloads, and invalid coordinates
    /// are logged and yield an empty list.
    pub async fn search(&self, lat: f64, lon: f64, keyword: Option<&str>) -> Vec<Item> {
        match self.try_search(lat, lon, keyword).await {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(lat, lon, error = %err, "discovery search failed; returning no results");
                Vec::new()
            }
        }
    }

    /// Search for events near a location, surfacing failures.
    ///
    /// A response without `_embedded` is a valid empty result, not an error.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidLocation`] if the coordinates cannot be geohashed.
    /// - [`SearchError::Fetch`] if the fetcher reports a failure.
    /// - [`SearchError::Deserialize`] / [`SearchError::UnexpectedShape`] for
    ///   a malformed response.
    pub async fn try_search(
        &self,
        lat: f64,
        lon: f64,
        keyword: Option<&str>,
    ) -> Result<Vec<Item>, SearchError> {
        let keyword = keyword.unwrap_or(DEFAULT_KEYWORD);
        let geo_point = geohash::encode(lat, lon, SEARCH_PRECISION)?;
        let url = self.build_url(&geo_point, keyword);
        tracing::debug!(url = %redact_api_key(&url), "querying discovery API");

        let body = self.fetcher.fetch(&url).await?;
        let items = parse_envelope(&body)?;

        tracing::debug!(geo_point = %geo_point, count = items.len(), "discovery search complete");
        Ok(items)
    }

    /// Builds the request URL with form-encoded query parameters in the
    /// order `apikey`, `geoPoint`, `keyword`, `radius`.
    #[must_use]
    pub fn build_url(&self, geo_point: &str, keyword: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("geoPoint", geo_point)
            .append_pair("keyword", keyword)
            .append_pair("radius", &self.radius.to_string());
        url
    }
}

/// Parse a discovery response body into items.
///
/// # Errors
///
/// - [`SearchError::Deserialize`] if `body` is not JSON.
/// - [`SearchError::UnexpectedShape`] if `_embedded` is present but has no
///   `events` array.
pub fn parse_envelope(body: &str) -> Result<Vec<Item>, SearchError> {
    let envelope: Value = serde_json::from_str(body).map_err(|e| SearchError::Deserialize {
        context: "discovery response".to_string(),
        source: e,
    })?;

    let Some(embedded) = lookup(&envelope, "/_embedded") else {
        return Ok(Vec::new());
    };

    let events = embedded
        .get("events")
        .and_then(Value::as_array)
        .ok_or_else(|| SearchError::UnexpectedShape("`_embedded.events` is not an array".to_string()))?;

    Ok(events.iter().map(map_event).collect())
}
