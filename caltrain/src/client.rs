//! Client facade for querying Caltrain timetables and live statuses.
//!
//! A [`CaltrainClient`] owns its station directory, holiday calendar,
//! timetable index and (optionally) a live-status cache. Refreshes
//! fetch and parse before taking a write lock, so slow upstream calls
//! never block readers; timetable queries are synchronous and touch
//! only in-memory state.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration as StdDuration;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use chrono_tz::America::Los_Angeles;
use tracing::{debug, warn};

use crate::api::{
    Fetch, FetchError, FetcherConfig, HttpFetcher, ParseError, parse_delays, parse_holidays,
    parse_stations, parse_stop_monitoring, parse_timetable,
};
use crate::cache::TtlCache;
use crate::directory::{ReferenceData, StationDirectory};
use crate::domain::{Direction, Line, LookupError, Route, Station, StopCode, TrainStatus, TrainStop};
use crate::error::Error;
use crate::schedule::{Journey, TimetableIndex};

/// Default base URL of the 511.org transit API.
pub const DEFAULT_BASE_URL: &str = "http://api.511.org/transit/";

/// Operator/agency identifier for Caltrain at 511.org.
const OPERATOR: &str = "CT";

const TIMETABLE_ENDPOINT: &str = "timetable";
const STOPS_ENDPOINT: &str = "stops";
const HOLIDAYS_ENDPOINT: &str = "holidays";
const STOP_MONITORING_ENDPOINT: &str = "StopMonitoring";

/// Configuration for a [`CaltrainClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 511.org API key.
    pub api_key: String,
    /// Base URL for the API (override for testing).
    pub base_url: String,
    /// Lines whose timetables a refresh loads.
    pub lines: Vec<Line>,
    /// HTTP fetcher settings.
    pub fetcher: FetcherConfig,
}

impl ClientConfig {
    /// Create a config with the given API key and defaults everywhere
    /// else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            lines: Line::ALL.to_vec(),
            fetcher: FetcherConfig::default(),
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Restrict which lines a timetable refresh loads.
    pub fn with_lines(mut self, lines: impl Into<Vec<Line>>) -> Self {
        self.lines = lines.into();
        self
    }

    /// Set the HTTP fetcher settings.
    pub fn with_fetcher(mut self, fetcher: FetcherConfig) -> Self {
        self.fetcher = fetcher;
        self
    }
}

/// A live-status answer that may have been served from cache.
///
/// `cached_at` is the insertion time of the payload when it came from
/// the cache (`None` for a payload fetched on this call). When the
/// upstream failed and an expired entry stood in, `stale_error` carries
/// the failure alongside the data instead of replacing it.
#[derive(Debug)]
pub struct LiveResult<T> {
    /// The parsed payload.
    pub data: T,
    /// When the served payload was originally stored, if it came from
    /// the cache.
    pub cached_at: Option<DateTime<Utc>>,
    /// The upstream failure this answer papered over, if any.
    pub stale_error: Option<FetchError>,
}

impl<T> LiveResult<T> {
    /// Whether this answer was served despite an upstream failure.
    pub fn is_stale(&self) -> bool {
        self.stale_error.is_some()
    }
}

/// Client for the Caltrain timetable and live-status API.
///
/// Generic over the [`Fetch`] implementation so tests and offline use
/// can substitute [`crate::api::MockFetch`].
#[derive(Debug)]
pub struct CaltrainClient<F = HttpFetcher> {
    config: ClientConfig,
    fetcher: F,
    reference: RwLock<ReferenceData>,
    index: TimetableIndex,
    cache: Option<TtlCache>,
}

impl CaltrainClient<HttpFetcher> {
    /// Create a client using the real HTTP fetcher.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let fetcher = HttpFetcher::new(&config.fetcher)?;
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: Fetch> CaltrainClient<F> {
    /// Create a client with a custom fetcher.
    pub fn with_fetcher(config: ClientConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            reference: RwLock::new(ReferenceData::default()),
            index: TimetableIndex::new(),
            cache: None,
        }
    }

    /// Enable live-status caching with the given expiry.
    ///
    /// Bounds calls to the rate-limited upstream: fresh entries answer
    /// without a request, and expired entries stand in when the
    /// upstream throttles or errors.
    pub fn setup_cache(&mut self, ttl: StdDuration) {
        self.cache = Some(TtlCache::new(ttl));
    }

    /// Drop every cached live-status payload.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    /// The fetcher this client queries through.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    // --- refresh operations ---

    /// Populate stations, holidays and timetables. Call once before
    /// querying; the individual update methods keep the data current
    /// afterwards.
    pub async fn initialize(&self) -> Result<(), Error> {
        self.update_stations().await?;
        self.update_holidays().await?;
        self.update_timetable().await
    }

    /// Refresh the station directory.
    pub async fn update_stations(&self) -> Result<(), Error> {
        let query = self.operator_query();
        let raw = self.fetcher.get(&self.url(STOPS_ENDPOINT), &query).await?;
        let records = parse_stations(&raw)?;
        let directory = StationDirectory::from_records(records);

        let mut reference = self.reference_write();
        reference.stations = directory;
        debug!(stations = reference.stations.len(), "updated station directory");
        Ok(())
    }

    /// Refresh the holiday calendar.
    pub async fn update_holidays(&self) -> Result<(), Error> {
        let query = self.operator_query();
        let raw = self
            .fetcher
            .get(&self.url(HOLIDAYS_ENDPOINT), &query)
            .await?;
        let holidays = parse_holidays(&raw)?;

        let mut reference = self.reference_write();
        reference.holidays = holidays;
        debug!(holidays = reference.holidays.len(), "updated holiday calendar");
        Ok(())
    }

    /// Refresh the timetable for every configured line.
    ///
    /// Each line's frames are fetched, parsed and then swapped in
    /// atomically; a failure partway leaves earlier lines updated and
    /// later ones untouched.
    pub async fn update_timetable(&self) -> Result<(), Error> {
        for &line in &self.config.lines {
            let mut query = self.operator_query();
            query.push(("line_id", line.name().to_string()));

            let raw = self
                .fetcher
                .get(&self.url(TIMETABLE_ENDPOINT), &query)
                .await?;
            let (frames, day_types) = parse_timetable(line, &raw)?;

            debug!(%line, frames = frames.len(), "updated timetable");
            self.index.replace_line(line, frames, day_types);
        }
        Ok(())
    }

    // --- live-status queries ---

    /// Trains currently delayed more than `threshold`.
    pub async fn get_delays(
        &self,
        threshold: Duration,
    ) -> Result<LiveResult<Vec<TrainStatus>>, Error> {
        let url = self.url(STOP_MONITORING_ENDPOINT);
        let query = self.agency_query();
        let now = Utc::now();
        self.live_query(&url, &url, &query, move |raw| {
            parse_delays(raw, threshold, now)
        })
        .await
    }

    /// Live statuses of upcoming trains at a station in a direction.
    ///
    /// A station with no monitored trains yields an empty list, not an
    /// error.
    pub async fn get_station_status(
        &self,
        station: Station,
        direction: Direction,
    ) -> Result<LiveResult<Vec<TrainStatus>>, Error> {
        let code = self.reference_read().stations.code(station, direction)?;

        let url = self.url(STOP_MONITORING_ENDPOINT);
        let mut query = self.agency_query();
        query.push(("stopCode", code.to_string()));

        // One cache key per monitored stop.
        let cache_key = format!("{url}{code}");
        let now = Utc::now();
        self.live_query(&cache_key, &url, &query, move |raw| {
            parse_stop_monitoring(raw, now)
        })
        .await
    }

    // --- timetable queries ---

    /// The resolved stop sequence for a train number.
    pub fn get_train_route(&self, train_id: &str) -> Result<Route, Error> {
        let journey = self.index.route_for_train(train_id)?;
        self.journey_to_route(journey)
    }

    /// Routes from `src` to `dst` on a weekday.
    ///
    /// The travel direction comes from the stations' north→south order,
    /// and both stop codes are resolved in that direction. A journey
    /// matches when its call list contains both codes anywhere.
    pub fn get_trains_between_stations_for_weekday(
        &self,
        src: Station,
        dst: Station,
        weekday: Weekday,
    ) -> Result<Vec<Route>, Error> {
        let (src_code, dst_code) = {
            let reference = self.reference_read();
            let direction = Direction::between(src, dst)?;
            (
                reference.stations.code(src, direction)?,
                reference.stations.code(dst, direction)?,
            )
        };

        self.routes_containing_all(&[src_code, dst_code], weekday)
    }

    /// Routes from `src` to `dst` on a date, holiday-aware: holidays
    /// run the Sunday schedule.
    pub fn get_trains_between_stations_for_date(
        &self,
        src: Station,
        dst: Station,
        date: NaiveDate,
    ) -> Result<Vec<Route>, Error> {
        self.get_trains_between_stations_for_weekday(src, dst, self.effective_weekday(date))
    }

    /// Routes calling at every one of `stops`, with each stop code
    /// resolved in `direction`.
    pub fn get_train_routes_for_all_stops(
        &self,
        stops: &[Station],
        direction: Direction,
        weekday: Weekday,
    ) -> Result<Vec<Route>, Error> {
        let codes = {
            let reference = self.reference_read();
            stops
                .iter()
                .map(|&station| reference.stations.code(station, direction))
                .collect::<Result<Vec<_>, _>>()?
        };

        self.routes_containing_all(&codes, weekday)
    }

    /// Routes stopping at a station in a direction on a weekday.
    pub fn get_station_timetable_for_weekday(
        &self,
        station: Station,
        direction: Direction,
        weekday: Weekday,
    ) -> Result<Vec<Route>, Error> {
        let code = self.reference_read().stations.code(station, direction)?;
        self.index
            .timetable_for_station(code, direction, weekday)
            .into_iter()
            .map(|journey| self.journey_to_route(journey))
            .collect()
    }

    /// Routes stopping at a station in a direction on a date,
    /// holiday-aware.
    pub fn get_station_timetable(
        &self,
        station: Station,
        direction: Direction,
        date: NaiveDate,
    ) -> Result<Vec<Route>, Error> {
        self.get_station_timetable_for_weekday(station, direction, self.effective_weekday(date))
    }

    /// Whether `date` runs on the holiday (Sunday) schedule.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.reference_read().is_holiday(date)
    }

    /// All recognized stations, ordered north to south.
    pub fn stations(&self) -> &'static [Station] {
        &Station::ALL
    }

    /// The coordinates of a station's stop, once stations are loaded.
    pub fn station_location(&self, station: Station) -> Option<(f64, f64)> {
        self.reference_read().stations.location(station)
    }

    /// The service date for an instant: timetable times are Pacific
    /// time-of-day, so the date rolls over at Pacific midnight, not
    /// UTC's.
    pub fn service_date(&self, at: DateTime<Utc>) -> NaiveDate {
        at.with_timezone(&Los_Angeles).date_naive()
    }

    // --- internals ---

    fn effective_weekday(&self, date: NaiveDate) -> Weekday {
        if self.is_holiday(date) {
            Weekday::Sun
        } else {
            date.weekday()
        }
    }

    fn routes_containing_all(
        &self,
        codes: &[StopCode],
        weekday: Weekday,
    ) -> Result<Vec<Route>, Error> {
        self.index
            .journeys_containing_all(codes, weekday)
            .into_iter()
            .map(|journey| self.journey_to_route(journey))
            .collect()
    }

    /// Resolve a journey's stop codes into stations and emit the
    /// route, stops in ascending sequence order.
    fn journey_to_route(&self, journey: Journey) -> Result<Route, Error> {
        let reference = self.reference_read();
        let mut stops = Vec::with_capacity(journey.calls.len());
        for call in &journey.calls {
            let station = reference
                .stations
                .station_for_code(call.stop)
                .ok_or(LookupError::UnknownStopCode(call.stop))?;
            stops.push(TrainStop {
                order: call.order,
                station,
                arrival: call.arrival,
                departure: call.departure,
            });
        }

        Ok(Route {
            train_id: journey.train_id,
            direction: journey.direction,
            line: journey.line,
            num_stops: stops.len(),
            stops,
        })
    }

    /// Fetch a live payload with cache-first reads and stale fallback.
    ///
    /// Fresh cache entries answer without a request. On a fetch failure
    /// that [`FetchError::allows_stale`], an existing entry (expired
    /// or not) is served together with the error. Payloads are cached
    /// only after they parse.
    async fn live_query<T>(
        &self,
        cache_key: &str,
        url: &str,
        query: &[(&str, String)],
        parse: impl Fn(&[u8]) -> Result<T, ParseError>,
    ) -> Result<LiveResult<T>, Error> {
        if let Some(cache) = &self.cache
            && let Some(hit) = cache.get(cache_key)
            && hit.fresh
        {
            let data = parse(&hit.payload)?;
            return Ok(LiveResult {
                data,
                cached_at: Some(hit.inserted_at),
                stale_error: None,
            });
        }

        match self.fetcher.get(url, query).await {
            Ok(raw) => {
                let data = parse(&raw)?;
                if let Some(cache) = &self.cache {
                    cache.set(cache_key, raw);
                }
                Ok(LiveResult {
                    data,
                    cached_at: None,
                    stale_error: None,
                })
            }
            Err(err) if err.allows_stale() => {
                if let Some(cache) = &self.cache
                    && let Some(hit) = cache.get(cache_key)
                {
                    warn!(error = %err, "upstream failed, serving cached payload");
                    let data = parse(&hit.payload)?;
                    return Ok(LiveResult {
                        data,
                        cached_at: Some(hit.inserted_at),
                        stale_error: Some(err),
                    });
                }
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    /// Query parameters for the static-data endpoints.
    fn operator_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("operator_id", OPERATOR.to_string()),
            ("api_key", self.config.api_key.clone()),
        ]
    }

    /// Query parameters for the live stop-monitoring endpoint.
    fn agency_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("agency", OPERATOR.to_string()),
            ("api_key", self.config.api_key.clone()),
        ]
    }

    fn reference_read(&self) -> RwLockReadGuard<'_, ReferenceData> {
        // Reference data is only replaced wholesale, so a poisoned lock
        // still guards consistent data.
        self.reference.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn reference_write(&self) -> RwLockWriteGuard<'_, ReferenceData> {
        self.reference.write().unwrap_or_else(PoisonError::into_inner)
    }
}
