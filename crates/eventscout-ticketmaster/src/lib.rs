//! Ticketmaster Discovery API search.
//!
//! Turns a location and keyword into a discovery query, hands the URL to an
//! injected [`HttpFetch`] implementation, and maps each event in the
//! response envelope to an [`eventscout_core::Item`]. Transport and payload
//! failures degrade to an empty result from [`DiscoveryClient::search`];
//! [`DiscoveryClient::try_search`] surfaces them as [`SearchError`].

pub mod client;
pub mod error;
pub mod fetch;
pub mod json;
pub mod mapper;

pub use client::{parse_envelope, ClientConfig, DiscoveryClient, DEFAULT_SEARCH_RADIUS};
pub use error::{FetchError, SearchError};
pub use fetch::{HttpFetch, ReqwestFetcher};
pub use mapper::map_event;
