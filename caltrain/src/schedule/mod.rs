//! Scheduled timetable storage and queries.
//!
//! A timetable refresh produces, per line, an ordered list of validity
//! frames whose journeys are stop-call sequences, plus the service
//! calendar's day-type mapping. The index stores both and answers the
//! code-level queries the client builds its route answers on.

mod day_types;
mod frame;
mod index;

pub use day_types::DayTypeResolver;
pub use frame::{Call, Frame, Journey};
pub use index::TimetableIndex;
