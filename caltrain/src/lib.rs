//! Query Caltrain timetables and live train statuses through the API
//! provided by <https://511.org/>.
//!
//! # Getting started
//!
//! Request an API key from 511.org and build a client with it, then
//! call [`CaltrainClient::initialize`] to load the station catalog,
//! holiday calendar and timetables. The upstream reference numbers
//! change across data revisions, so these are fetched rather than
//! baked in, and the update methods should run periodically.
//!
//! ```no_run
//! use caltrain::{CaltrainClient, ClientConfig, Station};
//! use chrono::Weekday;
//!
//! # async fn run() -> Result<(), caltrain::Error> {
//! let client = CaltrainClient::new(ClientConfig::new("my-api-key"))?;
//! client.initialize().await?;
//!
//! let routes = client.get_trains_between_stations_for_weekday(
//!     Station::Hillsdale,
//!     Station::PaloAlto,
//!     Weekday::Mon,
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! # Time and time zones
//!
//! Static timetable times are Pacific time-of-day values
//! ([`ScheduleTime`]); [`CaltrainClient::service_date`] maps an instant
//! to the Pacific service date. The live feed reports UTC instants.
//!
//! # Caching
//!
//! Free 511.org keys allow 60 requests per hour. With
//! [`CaltrainClient::setup_cache`] enabled, live-status responses are
//! reused until their TTL runs out, and when the upstream throttles or
//! errors, the last-known payload is served together with the error
//! instead of failing outright.

pub mod api;
pub mod cache;
pub mod client;
pub mod directory;
pub mod domain;
pub mod error;
pub mod schedule;

pub use client::{CaltrainClient, ClientConfig, LiveResult};
pub use domain::{Direction, Line, Route, ScheduleTime, Station, StopCode, TrainStatus, TrainStop};
pub use error::Error;
