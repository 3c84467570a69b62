//! Day-type resolution.
//!
//! Timetable frames reference a day-type id (e.g. `"8005"`) instead of
//! naming weekdays directly, and the service calendar maps each id to
//! the weekdays it covers. The ids change across upstream data
//! revisions, so the mapping is rebuilt from the live service-calendar
//! payload on every timetable refresh rather than hardcoded.

use std::collections::HashMap;

use chrono::Weekday;

/// Mapping from day-type id to the weekdays it is active on.
///
/// Unknown ids never match any day: an unrecognized reference means we
/// cannot know which days it covers, and guessing would surface trains
/// on days they do not run.
#[derive(Debug, Clone, Default)]
pub struct DayTypeResolver {
    services: HashMap<String, Vec<Weekday>>,
}

impl DayTypeResolver {
    /// Create an empty resolver; nothing matches until a merge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a refresh's service-calendar entries. An id seen before is
    /// overwritten with the newer weekday set.
    pub fn merge(&mut self, delta: HashMap<String, Vec<Weekday>>) {
        for (id, days) in delta {
            self.services.insert(id, days);
        }
    }

    /// Whether `day_type_ref` is known and active on `weekday`.
    pub fn is_for_day(&self, weekday: Weekday, day_type_ref: &str) -> bool {
        self.services
            .get(day_type_ref)
            .is_some_and(|days| days.contains(&weekday))
    }

    /// Number of known day-type ids.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether no day types are known yet.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
