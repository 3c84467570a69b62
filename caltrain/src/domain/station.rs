//! Station and stop-code types.

use std::fmt;
use std::str::FromStr;

use super::Direction;
use super::error::LookupError;

/// A recognized Caltrain station.
///
/// The declaration order is the station order from north to south along
/// the line, and the derived `Ord` follows it. This is what lets
/// [`Direction::between`] resolve travel direction from two stations.
///
/// # Examples
///
/// ```
/// use caltrain::domain::Station;
///
/// let st: Station = "Palo Alto".parse().unwrap();
/// assert_eq!(st, Station::PaloAlto);
/// assert!(Station::SanFrancisco < Station::Gilroy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Station {
    SanFrancisco,
    TwentySecondStreet,
    Bayshore,
    SouthSanFrancisco,
    SanBruno,
    Millbrae,
    Broadway,
    Burlingame,
    SanMateo,
    HaywardPark,
    Hillsdale,
    Belmont,
    SanCarlos,
    RedwoodCity,
    Atherton,
    MenloPark,
    PaloAlto,
    Stanford,
    CaliforniaAve,
    SanAntonio,
    MountainView,
    Sunnyvale,
    Lawrence,
    SantaClara,
    CollegePark,
    SanJoseDiridon,
    Tamien,
    Capitol,
    BlossomHill,
    MorganHill,
    SanMartin,
    Gilroy,
}

impl Station {
    /// All stations, ordered north to south.
    pub const ALL: [Station; 32] = [
        Station::SanFrancisco,
        Station::TwentySecondStreet,
        Station::Bayshore,
        Station::SouthSanFrancisco,
        Station::SanBruno,
        Station::Millbrae,
        Station::Broadway,
        Station::Burlingame,
        Station::SanMateo,
        Station::HaywardPark,
        Station::Hillsdale,
        Station::Belmont,
        Station::SanCarlos,
        Station::RedwoodCity,
        Station::Atherton,
        Station::MenloPark,
        Station::PaloAlto,
        Station::Stanford,
        Station::CaliforniaAve,
        Station::SanAntonio,
        Station::MountainView,
        Station::Sunnyvale,
        Station::Lawrence,
        Station::SantaClara,
        Station::CollegePark,
        Station::SanJoseDiridon,
        Station::Tamien,
        Station::Capitol,
        Station::BlossomHill,
        Station::MorganHill,
        Station::SanMartin,
        Station::Gilroy,
    ];

    /// The display name, as the upstream feed spells it.
    pub fn name(self) -> &'static str {
        match self {
            Station::SanFrancisco => "San Francisco",
            Station::TwentySecondStreet => "22nd Street",
            Station::Bayshore => "Bayshore",
            Station::SouthSanFrancisco => "South San Francisco",
            Station::SanBruno => "San Bruno",
            Station::Millbrae => "Millbrae",
            Station::Broadway => "Broadway",
            Station::Burlingame => "Burlingame",
            Station::SanMateo => "San Mateo",
            Station::HaywardPark => "Hayward Park",
            Station::Hillsdale => "Hillsdale",
            Station::Belmont => "Belmont",
            Station::SanCarlos => "San Carlos",
            Station::RedwoodCity => "Redwood City",
            Station::Atherton => "Atherton",
            Station::MenloPark => "Menlo Park",
            Station::PaloAlto => "Palo Alto",
            Station::Stanford => "Stanford",
            Station::CaliforniaAve => "California Ave",
            Station::SanAntonio => "San Antonio",
            Station::MountainView => "Mountain View",
            Station::Sunnyvale => "Sunnyvale",
            Station::Lawrence => "Lawrence",
            Station::SantaClara => "Santa Clara",
            Station::CollegePark => "College Park",
            Station::SanJoseDiridon => "San Jose Diridon",
            Station::Tamien => "Tamien",
            Station::Capitol => "Capitol",
            Station::BlossomHill => "Blossom Hill",
            Station::MorganHill => "Morgan Hill",
            Station::SanMartin => "San Martin",
            Station::Gilroy => "Gilroy",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Station {
    type Err = LookupError;

    /// Case-insensitive lookup by display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Station::ALL
            .iter()
            .find(|st| st.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| LookupError::UnknownStation(s.to_string()))
    }
}

/// Error returned when parsing an invalid stop code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop code: {reason}")]
pub struct InvalidStopCode {
    reason: &'static str,
}

/// A scheduled stop point code from the upstream feed, e.g. `70011`.
///
/// Each station has one code per platform side. The side is encoded in
/// the last digit: codes ending in 0 or 1 are the northbound platform,
/// anything else the southbound platform.
///
/// # Examples
///
/// ```
/// use caltrain::domain::{Direction, StopCode};
///
/// let code: StopCode = "70011".parse().unwrap();
/// assert_eq!(code.platform_side(), Direction::North);
/// assert_eq!("70012".parse::<StopCode>().unwrap().platform_side(), Direction::South);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopCode(u32);

impl StopCode {
    /// Construct from a raw numeric code.
    pub fn new(code: u32) -> Self {
        StopCode(code)
    }

    /// The raw numeric code.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Which platform side this code refers to, per the last digit.
    pub fn platform_side(self) -> Direction {
        if self.0 % 10 <= 1 {
            Direction::North
        } else {
            Direction::South
        }
    }
}

impl FromStr for StopCode {
    type Err = InvalidStopCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidStopCode {
                reason: "must not be empty",
            });
        }
        s.parse::<u32>().map(StopCode).map_err(|_| InvalidStopCode {
            reason: "must be decimal digits",
        })
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.0)
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
