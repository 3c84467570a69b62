//! Domain types for the Caltrain client.
//!
//! The closed enumerations here (stations, lines, directions) are the
//! only statically shared data in the crate; everything that can change
//! between upstream data snapshots (stop codes, schedules, holidays)
//! lives in refreshable stores owned by the client.

mod direction;
mod error;
mod line;
mod station;
mod status;
mod time;

pub use direction::Direction;
pub use error::LookupError;
pub use line::Line;
pub use station::{InvalidStopCode, Station, StopCode};
pub use status::{Route, TrainStatus, TrainStop};
pub use time::{InvalidScheduleTime, ScheduleTime};
