//! Derived route and live-status types.
//!
//! A `Route` is the fully resolved view of one scheduled train run,
//! computed on demand from the timetable index. A `TrainStatus` is one
//! entry from the live stop-monitoring feed.

use chrono::{DateTime, Duration, Utc};

use super::{Direction, Line, ScheduleTime, Station};

/// One stop on a resolved route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainStop {
    /// Stop number on the route, starting at 1.
    pub order: u32,
    /// The station this stop calls at.
    pub station: Station,
    /// Scheduled arrival, day offset applied for overnight trips.
    pub arrival: ScheduleTime,
    /// Scheduled departure, day offset applied for overnight trips.
    pub departure: ScheduleTime,
}

/// The resolved stop sequence for one scheduled train.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Train reference number, e.g. `"801"`.
    pub train_id: String,
    /// Direction the train travels.
    pub direction: Direction,
    /// Which schedule tier the train runs on.
    pub line: Line,
    /// Total number of stops on the route.
    pub num_stops: usize,
    /// Stops in ascending sequence order.
    pub stops: Vec<TrainStop>,
}

/// Live status of one monitored train.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainStatus {
    /// Train reference number.
    pub train_id: String,
    /// Direction the train travels.
    pub direction: Direction,
    /// Which schedule tier the train runs on.
    pub line: Line,
    /// How far behind schedule the train is. Never negative; an early
    /// or on-time train reports zero.
    pub delay: Duration,
    /// Expected arrival at the next stop, when the feed reports one.
    pub arrival: Option<DateTime<Utc>>,
    /// The station the train stops at next.
    pub next_stop: Station,
}

impl TrainStatus {
    /// Whether the reported delay exceeds `threshold`.
    pub fn is_delayed_more_than(&self, threshold: Duration) -> bool {
        self.delay > threshold
    }
}
