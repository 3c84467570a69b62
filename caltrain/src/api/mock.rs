//! Mock fetcher for testing without API access.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::client::Fetch;
use super::error::FetchError;

/// Canned responses a [`MockFetch`] can serve.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Successful fetch with this body
    Payload(Vec<u8>),
    /// Fail with [`FetchError::RateLimited`]
    RateLimited,
    /// Fail with [`FetchError::Api`]
    ApiError { status: u16, message: String },
    /// Fail with [`FetchError::Transport`]
    TransportError { message: String },
}

impl MockResponse {
    fn produce(&self) -> Result<Vec<u8>, FetchError> {
        match self {
            MockResponse::Payload(body) => Ok(body.clone()),
            MockResponse::RateLimited => Err(FetchError::RateLimited),
            MockResponse::ApiError { status, message } => Err(FetchError::Api {
                status: *status,
                message: message.clone(),
            }),
            MockResponse::TransportError { message } => Err(FetchError::Transport {
                message: message.clone(),
            }),
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    /// Queued responses per URL; the front is served and popped first.
    /// The last response sticks, so a single enqueue answers any number
    /// of calls.
    queues: HashMap<String, Vec<MockResponse>>,
    calls: HashMap<String, usize>,
}

/// A [`Fetch`] implementation serving queued canned responses per URL.
///
/// Each `get` pops the next queued response for the URL; the final one
/// is never popped, so it answers all later calls too. Call counts per
/// URL let tests assert which requests actually went out.
#[derive(Debug, Default)]
pub struct MockFetch {
    state: Mutex<MockState>,
}

impl MockFetch {
    /// Create a mock with no responses; every fetch fails until one is
    /// enqueued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `url`.
    pub fn enqueue(&self, url: &str, response: MockResponse) -> &Self {
        let mut state = self.lock();
        state.queues.entry(url.to_string()).or_default().push(response);
        self
    }

    /// Queue a successful payload for `url`.
    pub fn enqueue_payload(&self, url: &str, body: impl Into<Vec<u8>>) -> &Self {
        self.enqueue(url, MockResponse::Payload(body.into()))
    }

    /// How many fetches were made against `url`.
    pub fn calls(&self, url: &str) -> usize {
        let state = self.lock();
        state.calls.get(url).copied().unwrap_or(0)
    }

    /// Total fetches across all URLs.
    pub fn total_calls(&self) -> usize {
        let state = self.lock();
        state.calls.values().sum()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Fetch for MockFetch {
    async fn get(&self, url: &str, _query: &[(&str, String)]) -> Result<Vec<u8>, FetchError> {
        let mut state = self.lock();
        *state.calls.entry(url.to_string()).or_insert(0) += 1;

        match state.queues.get_mut(url) {
            Some(queue) if !queue.is_empty() => {
                let response = if queue.len() > 1 {
                    queue.remove(0)
                } else {
                    queue[0].clone()
                };
                response.produce()
            }
            _ => Err(FetchError::Api {
                status: 0,
                message: format!("no mock response for {url}"),
            }),
        }
    }
}
