//! Crate-level error type.

use crate::api::{FetchError, ParseError};
use crate::domain::LookupError;

/// Any failure a [`crate::CaltrainClient`] operation can report.
///
/// The three layers keep their own types (upstream fetch failures,
/// malformed payloads, unknown names) and convert into this one at
/// the public surface.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The upstream request failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The upstream payload did not parse
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A station, direction, line or train did not resolve
    #[error(transparent)]
    NotFound(#[from] LookupError),
}

impl Error {
    /// Whether this is a not-found lookup failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
