//! HTTP fetcher for the 511.org API.
//!
//! The rest of the crate only depends on the [`Fetch`] trait: a URL
//! plus query parameters in, raw body bytes out. `HttpFetcher` is the
//! real implementation; [`super::MockFetch`] serves canned payloads for
//! tests and offline use.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use tokio::sync::Semaphore;

use super::error::FetchError;

/// Default maximum concurrent requests against the upstream.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Something that can fetch an upstream payload.
///
/// Dropping the returned future cancels the request; that is the only
/// cancellation mechanism, and it never reaches the in-memory stores.
pub trait Fetch: Send + Sync {
    /// Fetch `url` with the given query parameters and return the raw
    /// response body.
    fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Configuration for the HTTP fetcher.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Maximum concurrent requests.
    pub max_concurrent: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FetcherConfig {
    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Reqwest-backed fetcher with bounded concurrency.
///
/// The semaphore keeps a burst of refreshes from hammering the
/// rate-limited upstream all at once.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
    semaphore: Arc<Semaphore>,
}

impl HttpFetcher {
    /// Create a fetcher with the given configuration.
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }
}

impl Fetch for HttpFetcher {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Vec<u8>, FetchError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| FetchError::Transport {
                message: "semaphore closed".to_string(),
            })?;

        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimited);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
