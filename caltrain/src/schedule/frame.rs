//! Parsed timetable structures.
//!
//! These are the typed output of timetable parsing: one `Frame` per
//! validity window and direction, holding the `Journey`s (train runs)
//! it schedules. Queries over them live in [`super::TimetableIndex`].

use chrono::NaiveDate;

use crate::domain::{Direction, Line, ScheduleTime, StopCode};

/// A validity-scoped set of journeys for one line and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Upstream frame identifier.
    pub id: String,
    /// Raw frame name, e.g. `"Bullet:N :Year Round Weekday (Weekday)"`.
    pub name: String,
    /// First date the frame is valid on.
    pub valid_from: NaiveDate,
    /// Last date the frame is valid on.
    pub valid_to: NaiveDate,
    /// Day-type reference resolved through the day-type mapping.
    pub day_type: String,
    /// Direction marker embedded in the frame name.
    pub direction: Direction,
    /// Scheduled journeys, in upstream order.
    pub journeys: Vec<Journey>,
}

/// One scheduled train run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    /// Train reference number, e.g. `"801"`.
    pub train_id: String,
    /// The line whose timetable this journey came from.
    pub line: Line,
    /// Direction from the journey pattern reference.
    pub direction: Direction,
    /// Stop calls in ascending sequence order.
    pub calls: Vec<Call>,
}

impl Journey {
    /// Whether the journey calls at `code` anywhere on its run.
    pub fn calls_at(&self, code: StopCode) -> bool {
        self.calls.iter().any(|call| call.stop == code)
    }
}

/// One stop event within a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// Sequence number, strictly increasing from 1.
    pub order: u32,
    /// Stop code of the platform the train calls at.
    pub stop: StopCode,
    /// Scheduled arrival.
    pub arrival: ScheduleTime,
    /// Scheduled departure.
    pub departure: ScheduleTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(order: u32, stop: u32) -> Call {
        let t = ScheduleTime::from_hms(9, 0, 0).unwrap();
        Call {
            order,
            stop: StopCode::new(stop),
            arrival: t,
            departure: t,
        }
    }

    #[test]
    fn calls_at_checks_membership() {
        let journey = Journey {
            train_id: "801".into(),
            line: Line::Bullet,
            direction: Direction::North,
            calls: vec![call(1, 70262), call(2, 70212), call(3, 70012)],
        };

        assert!(journey.calls_at(StopCode::new(70212)));
        assert!(!journey.calls_at(StopCode::new(70011)));
    }
}
