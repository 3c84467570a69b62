//! Travel direction along the line.

use std::fmt;
use std::str::FromStr;

use super::Station;
use super::error::LookupError;

/// A route direction, northbound or southbound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
}

impl Direction {
    /// The direction a train travels to get from `src` to `dst`.
    ///
    /// Stations are ordered north to south, so the station with the
    /// larger index is reached going South from the one with the
    /// smaller index.
    ///
    /// # Examples
    ///
    /// ```
    /// use caltrain::domain::{Direction, Station};
    ///
    /// let dir = Direction::between(Station::SanJoseDiridon, Station::SanFrancisco).unwrap();
    /// assert_eq!(dir, Direction::North);
    /// assert!(Direction::between(Station::Hillsdale, Station::Hillsdale).is_err());
    /// ```
    pub fn between(src: Station, dst: Station) -> Result<Direction, LookupError> {
        if src == dst {
            return Err(LookupError::SameStation(src));
        }
        if src > dst {
            Ok(Direction::North)
        } else {
            Ok(Direction::South)
        }
    }

    /// Parse a direction from the leading character of a wire reference,
    /// e.g. `"N"` or `"S :Year Round Weekday"`.
    pub fn from_marker(marker: &str) -> Option<Direction> {
        if marker.starts_with('N') {
            Some(Direction::North)
        } else if marker.starts_with('S') {
            Some(Direction::South)
        } else {
            None
        }
    }

    /// The opposite direction.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => f.write_str("North"),
            Direction::South => f.write_str("South"),
        }
    }
}

impl FromStr for Direction {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            _ => Err(LookupError::UnknownDirection(s.to_string())),
        }
    }
}
