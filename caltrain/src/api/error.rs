//! Upstream fetch error types.

/// Errors from fetching a 511.org endpoint.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request quota for the API key is exhausted
    #[error("API call limit to 511.org has been reached")]
    RateLimited,

    /// The API answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (connection failure,
    /// timeout, bad URL)
    #[error("transport error: {message}")]
    Transport { message: String },
}

impl FetchError {
    /// Whether a cached payload may stand in for this failure.
    ///
    /// Quota and server-side errors are transient upstream conditions
    /// where yesterday's data still describes today's schedule; a
    /// transport failure gets no such substitution.
    pub fn allows_stale(&self) -> bool {
        match self {
            FetchError::RateLimited | FetchError::Api { .. } => true,
            FetchError::Transport { .. } => false,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport {
            message: err.to_string(),
        }
    }
}
