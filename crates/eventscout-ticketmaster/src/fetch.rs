//! HTTP transport seam for the discovery client.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::FetchError;

/// Performs a GET and returns the response body.
///
/// Implementations own timeout, redirect, and TLS policy. A non-2xx status
/// must be reported as an error, not returned as a body.
pub trait HttpFetch {
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// [`HttpFetch`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl HttpFetch for ReqwestFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        // reqwest errors render the full request URL, API key included.
        let http_error = |e: reqwest::Error| FetchError::Http {
            url: redact_api_key(url),
            source: e.without_url(),
        };

        let response = self.client.get(url.clone()).send().await.map_err(http_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: redact_api_key(url),
            });
        }
        response.text().await.map_err(http_error)
    }
}

/// Render `url` with the `apikey` query value masked, for logs and errors.
pub(crate) fn redact_api_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" {
                "[redacted]".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    if pairs.is_empty() {
        return redacted.to_string();
    }
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_masks_only_the_api_key() {
        let url = Url::parse("https://example.com/events.json?apikey=secret&geoPoint=9vk0ze840&radius=50")
            .unwrap();
        let rendered = redact_api_key(&url);
        assert!(!rendered.contains("secret"), "{rendered}");
        assert!(rendered.contains("apikey=%5Bredacted%5D"), "{rendered}");
        assert!(rendered.contains("geoPoint=9vk0ze840"));
        assert!(rendered.contains("radius=50"));
    }

    #[test]
    fn redact_leaves_query_less_url_alone() {
        let url = Url::parse("https://example.com/events.json").unwrap();
        assert_eq!(redact_api_key(&url), "https://example.com/events.json");
    }

    #[test]
    fn reqwest_fetcher_builds() {
        assert!(ReqwestFetcher::new(5, "eventscout-test/0.1").is_ok());
    }

    #[tokio::test]
    async fn connection_failure_does_not_expose_api_key() {
        let fetcher = ReqwestFetcher::new(5, "eventscout-test/0.1").unwrap();
        let url = Url::parse("http://127.0.0.1:1/events.json?apikey=hunter2-secret&radius=50")
            .unwrap();

        let err = fetcher.fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Http { .. }), "{err:?}");

        let mut rendered = format!("{err} {err:?}");
        let mut source = std::error::Error::source(&err);
        while let Some(inner) = source {
            rendered.push_str(&format!(" {inner} {inner:?}"));
            source = inner.source();
        }
        assert!(!rendered.contains("hunter2-secret"), "api key leaked: {rendered}");
        assert!(rendered.contains("apikey=%5Bredacted%5D"), "{rendered}");
    }
}
