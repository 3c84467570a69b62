//! Timetable index.
//!
//! Holds the parsed frames for every line together with the day-type
//! mapping, behind one read-write lock. Refreshes swap a single line's
//! frame list wholesale under the write lock; queries scan under the
//! read lock. All operations here work on stop codes; resolving
//! stations to codes needs the station directory and happens in the
//! client.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Weekday;

use crate::domain::{Direction, Line, LookupError, StopCode};

use super::day_types::DayTypeResolver;
use super::frame::{Frame, Journey};

#[derive(Debug, Default)]
struct IndexState {
    frames: HashMap<Line, Vec<Frame>>,
    day_types: DayTypeResolver,
}

/// Indexed view of all loaded timetable frames.
#[derive(Debug, Default)]
pub struct TimetableIndex {
    inner: RwLock<IndexState>,
}

impl TimetableIndex {
    /// Create an empty index. Every query misses until a line is
    /// loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in the frame list for one line and merge the refresh's
    /// day-type entries. Readers see the old list or the new one,
    /// never a mix.
    pub fn replace_line(
        &self,
        line: Line,
        frames: Vec<Frame>,
        day_types: HashMap<String, Vec<Weekday>>,
    ) {
        let mut state = self.write();
        state.frames.insert(line, frames);
        state.day_types.merge(day_types);
    }

    /// Find the journey for a train number, scanning every line.
    /// Train ids are unique across lines, so the first match wins.
    pub fn route_for_train(&self, train_id: &str) -> Result<Journey, LookupError> {
        let state = self.read();
        state
            .frames
            .values()
            .flatten()
            .flat_map(|frame| &frame.journeys)
            .find(|journey| journey.train_id == train_id)
            .cloned()
            .ok_or_else(|| LookupError::UnknownTrain(train_id.to_string()))
    }

    /// Journeys that stop at `code`, from frames matching `direction`
    /// and active on `weekday`.
    pub fn timetable_for_station(
        &self,
        code: StopCode,
        direction: Direction,
        weekday: Weekday,
    ) -> Vec<Journey> {
        let state = self.read();
        state
            .frames
            .values()
            .flatten()
            .filter(|frame| state.day_types.is_for_day(weekday, &frame.day_type))
            .filter(|frame| frame.direction == direction)
            .flat_map(|frame| &frame.journeys)
            .filter(|journey| journey.calls_at(code))
            .cloned()
            .collect()
    }

    /// Journeys whose call list contains every one of `codes`, from
    /// frames active on `weekday`.
    ///
    /// Membership only: the relative order of the matched calls within
    /// the journey is not checked, so a hypothetical looping journey
    /// could match a query in the opposite travel direction.
    pub fn journeys_containing_all(&self, codes: &[StopCode], weekday: Weekday) -> Vec<Journey> {
        let state = self.read();
        state
            .frames
            .values()
            .flatten()
            .filter(|frame| state.day_types.is_for_day(weekday, &frame.day_type))
            .flat_map(|frame| &frame.journeys)
            .filter(|journey| codes.iter().all(|&code| journey.calls_at(code)))
            .cloned()
            .collect()
    }

    /// Number of loaded frames across all lines.
    pub fn frame_count(&self) -> usize {
        self.read().frames.values().map(Vec::len).sum()
    }

    /// Whether any timetable data has been loaded.
    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexState> {
        // State is only replaced wholesale under the write lock, so a
        // poisoned lock still guards consistent data.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
