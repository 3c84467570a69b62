//! Schedule time handling.
//!
//! The upstream timetable gives each stop a time of day as `"HH:MM:SS"`
//! plus a day-offset flag for trips that cross midnight. `ScheduleTime`
//! keeps both in one value: seconds since midnight of the service day,
//! where a next-day stop is exactly 24 hours later than the same time
//! of day without the flag.

use std::fmt;

use chrono::NaiveTime;

const SECS_PER_DAY: u32 = 24 * 60 * 60;

/// Error returned when parsing an invalid schedule time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid schedule time: {reason}")]
pub struct InvalidScheduleTime {
    reason: &'static str,
}

impl InvalidScheduleTime {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A scheduled time within a service day.
///
/// Ordered chronologically, so a post-midnight stop on an overnight
/// trip sorts after every same-day stop.
///
/// # Examples
///
/// ```
/// use caltrain::domain::ScheduleTime;
///
/// let dep = ScheduleTime::parse_hms("23:45:00", false).unwrap();
/// let arr = ScheduleTime::parse_hms("00:12:00", true).unwrap();
/// assert!(arr > dep);
/// assert_eq!(arr.day_offset(), 1);
/// assert_eq!(arr.to_string(), "00:12:00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScheduleTime {
    secs: u32,
}

impl ScheduleTime {
    /// Build from hour/minute/second components on the service day.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Result<Self, InvalidScheduleTime> {
        if hour > 23 {
            return Err(InvalidScheduleTime::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(InvalidScheduleTime::new("minute must be 0-59"));
        }
        if second > 59 {
            return Err(InvalidScheduleTime::new("second must be 0-59"));
        }
        Ok(Self {
            secs: hour * 3600 + minute * 60 + second,
        })
    }

    /// Parse an `"HH:MM:SS"` time, adding a full day when `next_day` is
    /// set.
    pub fn parse_hms(s: &str, next_day: bool) -> Result<Self, InvalidScheduleTime> {
        let bytes = s.as_bytes();
        if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
            return Err(InvalidScheduleTime::new("expected HH:MM:SS format"));
        }

        let hour = parse_two_digits(&bytes[0..2])
            .ok_or_else(|| InvalidScheduleTime::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| InvalidScheduleTime::new("invalid minute digits"))?;
        let second = parse_two_digits(&bytes[6..8])
            .ok_or_else(|| InvalidScheduleTime::new("invalid second digits"))?;

        let mut time = Self::from_hms(hour, minute, second)?;
        if next_day {
            time.secs += SECS_PER_DAY;
        }
        Ok(time)
    }

    /// Seconds since midnight of the service day. May exceed 24 hours
    /// for next-day stops.
    pub fn seconds(self) -> u32 {
        self.secs
    }

    /// How many days past the service day this time falls (0 or 1).
    pub fn day_offset(self) -> u32 {
        self.secs / SECS_PER_DAY
    }

    /// Whether this stop happens after midnight of the service day.
    pub fn is_next_day(self) -> bool {
        self.day_offset() > 0
    }

    /// The time of day, with any day offset stripped.
    pub fn time(self) -> NaiveTime {
        let within_day = self.secs % SECS_PER_DAY;
        NaiveTime::from_num_seconds_from_midnight_opt(within_day, 0)
            .expect("seconds within a day are always a valid time")
    }

    /// Signed difference in seconds, `self - other`.
    pub fn seconds_since(self, other: ScheduleTime) -> i64 {
        i64::from(self.secs) - i64::from(other.secs)
    }
}

impl fmt::Debug for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_next_day() {
            write!(f, "ScheduleTime({self}+1d)")
        } else {
            write!(f, "ScheduleTime({self})")
        }
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let within_day = self.secs % SECS_PER_DAY;
        write!(
            f,
            "{:02}:{:02}:{:02}",
            within_day / 3600,
            within_day % 3600 / 60,
            within_day % 60
        )
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
