//! Station reference data.
//!
//! The station catalog (per-direction stop codes, coordinates) and the
//! holiday calendar both come from upstream refreshes and are replaced
//! wholesale each time. The closed [`Station`] enumeration itself is
//! static; everything code-shaped here is data.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Direction, LookupError, Station, StopCode};

/// One stop point from a parsed stations payload: a resolved display
/// name plus the platform code and its location.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRecord {
    /// Station display name with feed decoration stripped.
    pub name: String,
    /// Platform stop code.
    pub code: StopCode,
    /// Stop latitude.
    pub latitude: f64,
    /// Stop longitude.
    pub longitude: f64,
}

/// Per-station codes and location.
#[derive(Debug, Clone, Copy, Default)]
struct StationEntry {
    north: Option<StopCode>,
    south: Option<StopCode>,
    latitude: f64,
    longitude: f64,
}

/// Bidirectional station↔code lookup, built once per stations refresh.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    stations: HashMap<Station, StationEntry>,
    by_code: HashMap<StopCode, Station>,
}

impl StationDirectory {
    /// Build the directory from parsed stop records.
    ///
    /// Records sharing a station name merge into one entry; each code
    /// lands on the platform side its last digit encodes. Records whose
    /// name is not a recognized station are skipped, since the closed
    /// enumeration cannot address them anyway.
    pub fn from_records(records: Vec<StopRecord>) -> Self {
        let mut stations: HashMap<Station, StationEntry> = HashMap::new();
        let mut by_code = HashMap::new();

        for record in records {
            let Ok(station) = record.name.parse::<Station>() else {
                debug!(name = %record.name, code = %record.code, "skipping unrecognized stop");
                continue;
            };

            let entry = stations.entry(station).or_default();
            match record.code.platform_side() {
                Direction::North => entry.north = Some(record.code),
                Direction::South => entry.south = Some(record.code),
            }
            // The north and south platforms are close enough that one
            // location per station is fine.
            entry.latitude = record.latitude;
            entry.longitude = record.longitude;
            by_code.insert(record.code, station);
        }

        Self { stations, by_code }
    }

    /// The stop code for a station in the given direction.
    pub fn code(&self, station: Station, direction: Direction) -> Result<StopCode, LookupError> {
        let entry = self
            .stations
            .get(&station)
            .ok_or_else(|| LookupError::UnknownStation(station.to_string()))?;
        let code = match direction {
            Direction::North => entry.north,
            Direction::South => entry.south,
        };
        code.ok_or_else(|| LookupError::UnknownStation(station.to_string()))
    }

    /// The station a stop code belongs to, matching either platform
    /// side.
    pub fn station_for_code(&self, code: StopCode) -> Option<Station> {
        self.by_code.get(&code).copied()
    }

    /// The stop coordinates for a station, if loaded.
    pub fn location(&self, station: Station) -> Option<(f64, f64)> {
        self.stations
            .get(&station)
            .map(|entry| (entry.latitude, entry.longitude))
    }

    /// Number of stations with loaded codes.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether no station data has been loaded.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// The refreshable reference data: station directory plus holiday
/// calendar. Each half is replaced independently by its own refresh.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    /// Station↔code lookup from the last stations refresh.
    pub stations: StationDirectory,
    /// Dates running on the Sunday schedule.
    pub holidays: Vec<NaiveDate>,
}

impl ReferenceData {
    /// Whether `date` is a holiday. Holidays are date-only; callers
    /// with a timestamp truncate to the service date first.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }
}
