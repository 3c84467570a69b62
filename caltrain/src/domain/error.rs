//! Domain lookup errors.
//!
//! These cover unknown stations, directions, lines and trains: caller
//! or data errors, as opposed to upstream API failures. They are never
//! masked by cached data.

use super::{Station, StopCode};

/// A name or identifier that does not resolve to anything we know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Station name not in the catalog, or no code loaded for it yet
    #[error("{0} is not a recognized station")]
    UnknownStation(String),

    /// Direction string that is neither North nor South
    #[error("{0} is not a valid direction. Must be either North or South")]
    UnknownDirection(String),

    /// Line name not in the catalog
    #[error("{0} is not a valid line. Must be Bullet, Limited, Limited A, Limited B, Local, or Special")]
    UnknownLine(String),

    /// No journey with this train identifier in the loaded timetable
    #[error("no routes found for train {0}")]
    UnknownTrain(String),

    /// A journey call references a stop code the station catalog lacks
    #[error("stop code {0} does not belong to any recognized station")]
    UnknownStopCode(StopCode),

    /// Source and destination are the same station
    #[error("cannot resolve a direction from {0} to itself")]
    SameStation(Station),
}
