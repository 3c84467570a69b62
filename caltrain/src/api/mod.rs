//! 511.org API access: fetching, wire shapes, and parsing.
//!
//! Key characteristics of the upstream:
//! - free API keys are limited to 60 requests per hour, and a `429`
//!   means the quota is gone until it resets; the TTL cache sits in
//!   front of the live endpoints for exactly this reason
//! - payloads sometimes carry a UTF-8 BOM, and a few sections flip
//!   between object and array across data revisions; the parsers
//!   tolerate both
//! - static timetable times are Pacific time-of-day strings, while the
//!   live feed reports UTC instants

mod client;
mod error;
mod mock;
mod parse;
mod types;

pub use client::{Fetch, FetcherConfig, HttpFetcher};
pub use error::FetchError;
pub use mock::{MockFetch, MockResponse};
pub use parse::{
    ParseError, parse_delays, parse_holidays, parse_stations, parse_stop_monitoring,
    parse_timetable,
};
