//! Parsers from raw payload bytes to domain types.
//!
//! Pure functions: the only inputs are the bytes (and, for the live
//! feed, the current instant, passed in so delay math stays
//! deterministic in tests). The upstream occasionally prefixes
//! payloads with a UTF-8 BOM, which every parser strips.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc, Weekday};
use tracing::debug;

use crate::directory::StopRecord;
use crate::domain::{Direction, Line, ScheduleTime, StopCode, TrainStatus};
use crate::schedule::{Call, Frame, Journey};

use super::types::{
    MonitoredCall, StationsResponse, StopMonitoringResponse, TimetableResponse, WireCall,
    WireFrame, WireJourney,
};

/// A payload that does not parse into the expected shape.
///
/// Never masked by cached data: stale-but-valid beats fresh-but-wrong,
/// but a payload we cannot understand means the data model drifted and
/// must surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The payload is not the JSON document we expect
    #[error("failed to unmarshal: {0}")]
    Json(String),

    /// A call's sequence number is not an integer
    #[error("could not convert order {0} to int")]
    Order(String),

    /// A stop reference is not a numeric stop code
    #[error("bad station code: {0}")]
    StopCode(String),

    /// A scheduled time is not HH:MM:SS
    #[error("could not parse time from {0}")]
    Time(String),

    /// A validity date is not in a recognized format
    #[error("could not parse date from {0}")]
    Date(String),

    /// A frame name carries no direction marker
    #[error("no direction marker in frame name {0}")]
    FrameDirection(String),

    /// A stop's coordinates are not numeric
    #[error("failed to parse location for {0}")]
    Location(String),

    /// A live-status entry names a station we do not recognize
    #[error("unrecognized station {0} in live status")]
    Station(String),

    /// A live-status entry names a line we do not recognize
    #[error("unrecognized line {0} in live status")]
    Line(String),

    /// A live-status entry carries an unrecognized direction reference
    #[error("unrecognized direction {0} in live status")]
    Direction(String),
}

/// Strip a leading UTF-8 byte-order mark.
fn strip_bom(raw: &[u8]) -> &[u8] {
    raw.strip_prefix(b"\xef\xbb\xbf").unwrap_or(raw)
}

fn from_json<'a, T: serde::Deserialize<'a>>(raw: &'a [u8]) -> Result<T, ParseError> {
    serde_json::from_slice(strip_bom(raw)).map_err(|e| ParseError::Json(e.to_string()))
}

/// Parse one line's timetable payload into frames plus the service
/// calendar's day-type delta.
pub fn parse_timetable(
    line: Line,
    raw: &[u8],
) -> Result<(Vec<Frame>, HashMap<String, Vec<Weekday>>), ParseError> {
    let response: TimetableResponse = from_json(raw)?;

    let mut day_types = HashMap::new();
    for day_type in response
        .content
        .service_calendar_frame
        .day_types
        .day_type
        .into_vec()
    {
        let days = parse_weekdays(&day_type.properties.property_of_day.days_of_week);
        day_types.insert(day_type.id, days);
    }

    let frames = response
        .content
        .timetable_frames
        .into_iter()
        .map(|frame| parse_frame(line, frame))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((frames, day_types))
}

/// Lowercased, whitespace-separated weekday names → weekdays.
/// Tokens that are not weekday names are dropped; a day type that loses
/// tokens just matches fewer days.
fn parse_weekdays(days_of_week: &str) -> Vec<Weekday> {
    days_of_week
        .split_whitespace()
        .filter_map(|token| match token.to_ascii_lowercase().parse::<Weekday>() {
            Ok(day) => Some(day),
            Err(_) => {
                debug!(token, "ignoring unrecognized weekday token");
                None
            }
        })
        .collect()
}

fn parse_frame(line: Line, frame: WireFrame) -> Result<Frame, ParseError> {
    // The direction is embedded in the frame name, e.g.
    // `Bullet:N :Year Round Weekday (Weekday)`.
    let direction = frame
        .name
        .split(':')
        .nth(1)
        .and_then(Direction::from_marker)
        .ok_or_else(|| ParseError::FrameDirection(frame.name.clone()))?;

    let journeys = frame
        .vehicle_journeys
        .service_journeys
        .into_iter()
        .map(|journey| parse_journey(line, direction, journey))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Frame {
        id: frame.id,
        valid_from: parse_wire_date(&frame.validity.availability.from_date)?,
        valid_to: parse_wire_date(&frame.validity.availability.to_date)?,
        day_type: frame.validity.availability.day_types.day_type_ref.reference,
        direction,
        journeys,
        name: frame.name,
    })
}

fn parse_journey(
    line: Line,
    frame_direction: Direction,
    journey: WireJourney,
) -> Result<Journey, ParseError> {
    let direction = Direction::from_marker(&journey.journey_pattern_view.direction_ref.reference)
        .unwrap_or(frame_direction);

    let mut calls = journey
        .calls
        .calls
        .into_iter()
        .map(parse_call)
        .collect::<Result<Vec<_>, _>>()?;
    calls.sort_by_key(|call| call.order);

    Ok(Journey {
        train_id: journey.id,
        line,
        direction,
        calls,
    })
}

fn parse_call(call: WireCall) -> Result<Call, ParseError> {
    let order = call
        .order
        .parse::<u32>()
        .map_err(|_| ParseError::Order(call.order.clone()))?;
    let stop = call
        .stop_point_ref
        .reference
        .parse::<StopCode>()
        .map_err(|_| ParseError::StopCode(call.stop_point_ref.reference.clone()))?;
    let arrival = ScheduleTime::parse_hms(&call.arrival.time, call.arrival.days_offset == "1")
        .map_err(|_| ParseError::Time(call.arrival.time.clone()))?;
    let departure =
        ScheduleTime::parse_hms(&call.departure.time, call.departure.days_offset == "1")
            .map_err(|_| ParseError::Time(call.departure.time.clone()))?;

    Ok(Call {
        order,
        stop,
        arrival,
        departure,
    })
}

/// Accepts both `2024-01-01T00:00:00` and bare `2024-01-01`.
fn parse_wire_date(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| ParseError::Date(s.to_string()))
}

/// Parse a stations payload into flat stop records.
///
/// The feed lists each platform as its own stop point named
/// `"<Station> Caltrain"`, alongside station-area entries suffixed
/// `"Station"` which carry no platform code and are skipped.
pub fn parse_stations(raw: &[u8]) -> Result<Vec<StopRecord>, ParseError> {
    let response: StationsResponse = from_json(raw)?;

    let mut records = Vec::new();
    for stop in response.contents.data_objects.scheduled_stop_points {
        if stop.name.ends_with("Station") {
            continue;
        }
        let name = stop
            .name
            .split(" Caltrain")
            .next()
            .unwrap_or(stop.name.as_str())
            .to_string();
        let code = stop
            .id
            .parse::<StopCode>()
            .map_err(|_| ParseError::StopCode(stop.id.clone()))?;
        let latitude = stop
            .location
            .latitude
            .parse::<f64>()
            .map_err(|_| ParseError::Location(name.clone()))?;
        let longitude = stop
            .location
            .longitude
            .parse::<f64>()
            .map_err(|_| ParseError::Location(name.clone()))?;

        records.push(StopRecord {
            name,
            code,
            latitude,
            longitude,
        });
    }

    Ok(records)
}

/// Parse a holidays payload into the dates it covers.
///
/// Each availability condition spans from/to dates (usually a single
/// day); every date in the range runs on the holiday schedule.
pub fn parse_holidays(raw: &[u8]) -> Result<Vec<NaiveDate>, ParseError> {
    let response: super::types::HolidaysResponse = from_json(raw)?;

    let mut dates = Vec::new();
    for condition in response.content.availability_conditions.into_vec() {
        let from = parse_wire_date(&condition.from_date)?;
        let to = parse_wire_date(&condition.to_date)?;
        dates.extend(from.iter_days().take_while(|date| *date <= to));
    }

    Ok(dates)
}

/// Parse a stop-monitoring payload into live train statuses.
///
/// `now` is the instant against which suspect aimed-arrival times are
/// checked; it is a parameter so tests can pin it.
pub fn parse_stop_monitoring(
    raw: &[u8],
    now: DateTime<Utc>,
) -> Result<Vec<TrainStatus>, ParseError> {
    let response: StopMonitoringResponse = from_json(raw)?;

    let mut statuses = Vec::new();
    for visit in response
        .service_delivery
        .stop_monitoring_delivery
        .monitored_stop_visits
    {
        let journey = visit.monitored_vehicle_journey;

        let next_stop_name = journey
            .monitored_call
            .stop_point_name
            .split(" Caltrain")
            .next()
            .unwrap_or(journey.monitored_call.stop_point_name.as_str());
        let next_stop = next_stop_name
            .parse()
            .map_err(|_| ParseError::Station(next_stop_name.to_string()))?;

        let direction = Direction::from_marker(&journey.direction_ref)
            .ok_or_else(|| ParseError::Direction(journey.direction_ref.clone()))?;
        let line = journey
            .line_ref
            .parse::<Line>()
            .map_err(|_| ParseError::Line(journey.line_ref.clone()))?;

        let (delay, arrival) = delay_and_arrival(&journey.monitored_call, now);

        statuses.push(TrainStatus {
            train_id: journey.framed_vehicle_journey_ref.dated_vehicle_journey_ref,
            direction,
            line,
            delay: delay.max(Duration::zero()),
            arrival,
            next_stop,
        });
    }

    Ok(statuses)
}

/// Parse a stop-monitoring payload and keep only trains delayed more
/// than `threshold`.
pub fn parse_delays(
    raw: &[u8],
    threshold: Duration,
    now: DateTime<Utc>,
) -> Result<Vec<TrainStatus>, ParseError> {
    let statuses = parse_stop_monitoring(raw, now)?;
    Ok(statuses
        .into_iter()
        .filter(|status| status.is_delayed_more_than(threshold))
        .collect())
}

/// Delay is expected minus aimed arrival, with the feed's quirks
/// handled:
/// - no aimed arrival means the train has not left its origin and
///   there is no delay to report;
/// - no expected arrival means the train sits at its origin and only
///   the expected departure is populated;
/// - an aimed arrival already in the past is the feed misreporting, and
///   the aimed departure is the usable baseline.
fn delay_and_arrival(
    call: &MonitoredCall,
    now: DateTime<Utc>,
) -> (Duration, Option<DateTime<Utc>>) {
    let Some(aimed) = call.aimed_arrival_time else {
        return (Duration::zero(), call.expected_arrival_time);
    };

    let expected = call.expected_arrival_time.or(call.expected_departure_time);

    let baseline = if aimed < now {
        call.aimed_departure_time.unwrap_or(aimed)
    } else {
        aimed
    };

    match expected {
        Some(expected) => (expected - baseline, Some(expected)),
        None => (Duration::zero(), None),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const TIMETABLE_JSON: &str = r#"{
        "Content": {
            "ServiceCalendarFrame": {
                "id": "CT:sc",
                "dayTypes": {
                    "DayType": [
                        {
                            "id": "8005",
                            "Name": "Weekday",
                            "properties": {
                                "PropertyOfDay": {
                                    "DaysOfWeek": "Monday Tuesday Wednesday Thursday Friday"
                                }
                            }
                        },
                        {
                            "id": "8006",
                            "Name": "Weekend",
                            "properties": {
                                "PropertyOfDay": { "DaysOfWeek": " saturday sunday " }
                            }
                        }
                    ]
                }
            },
            "TimetableFrame": [
                {
                    "id": "CT:frame:801",
                    "Name": "Bullet:N :Year Round Weekday (Weekday)",
                    "frameValidityConditions": {
                        "AvailabilityCondition": {
                            "id": "CT:avail:1",
                            "FromDate": "2024-01-01T00:00:00",
                            "ToDate": "2024-12-31T00:00:00",
                            "dayTypes": { "DayTypeRef": { "ref": "8005" } }
                        }
                    },
                    "vehicleJourneys": {
                        "ServiceJourney": [
                            {
                                "id": "801",
                                "SiriVehicleJourneyRef": "801",
                                "JourneyPatternView": {
                                    "RouteRef": { "ref": "CT:route:N" },
                                    "DirectionRef": { "ref": "N" }
                                },
                                "calls": {
                                    "Call": [
                                        {
                                            "order": "2",
                                            "ScheduledStopPointRef": { "ref": "70012" },
                                            "Arrival": { "Time": "01:05:00", "DaysOffset": "1" },
                                            "Departure": { "Time": "01:05:00", "DaysOffset": "1" }
                                        },
                                        {
                                            "order": "1",
                                            "ScheduledStopPointRef": { "ref": "70262" },
                                            "Arrival": { "Time": "23:51:00", "DaysOffset": "" },
                                            "Departure": { "Time": "23:51:00", "DaysOffset": "" }
                                        }
                                    ]
                                }
                            }
                        ]
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn timetable_frames_and_day_types() {
        let (frames, day_types) = parse_timetable(Line::Bullet, TIMETABLE_JSON.as_bytes()).unwrap();

        assert_eq!(
            day_types.get("8005").unwrap(),
            &vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri
            ]
        );
        assert_eq!(day_types.get("8006").unwrap(), &vec![Weekday::Sat, Weekday::Sun]);

        assert_eq!(frames.len(), 1);
        let frame = &frames[0];
        assert_eq!(frame.direction, Direction::North);
        assert_eq!(frame.day_type, "8005");
        assert_eq!(frame.valid_from, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(frame.valid_to, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn journey_calls_are_sorted_and_timed() {
        let (frames, _) = parse_timetable(Line::Bullet, TIMETABLE_JSON.as_bytes()).unwrap();
        let journey = &frames[0].journeys[0];

        assert_eq!(journey.train_id, "801");
        assert_eq!(journey.line, Line::Bullet);
        assert_eq!(journey.direction, Direction::North);

        // Calls arrive out of order on the wire; parsing sorts them.
        let orders: Vec<u32> = journey.calls.iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![1, 2]);
        assert_eq!(journey.calls[0].stop, StopCode::new(70262));

        // The second call crosses midnight.
        assert!(journey.calls[1].arrival.is_next_day());
        assert!(journey.calls[1].arrival > journey.calls[0].departure);
    }

    #[test]
    fn day_type_as_single_object_parses_too() {
        // Some data revisions serve DayType as one object, not an array.
        let json = r#"{
            "Content": {
                "ServiceCalendarFrame": {
                    "dayTypes": {
                        "DayType": {
                            "id": "8007",
                            "properties": {
                                "PropertyOfDay": { "DaysOfWeek": "Saturday" }
                            }
                        }
                    }
                },
                "TimetableFrame": []
            }
        }"#;
        let (frames, day_types) = parse_timetable(Line::Local, json.as_bytes()).unwrap();
        assert!(frames.is_empty());
        assert_eq!(day_types.get("8007").unwrap(), &vec![Weekday::Sat]);
    }

    #[test]
    fn frame_without_direction_marker_fails() {
        let json = r#"{
            "Content": {
                "TimetableFrame": [
                    { "id": "x", "Name": "mystery frame" }
                ]
            }
        }"#;
        let err = parse_timetable(Line::Local, json.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::FrameDirection(_)));
    }

    #[test]
    fn bad_call_order_fails() {
        let json = r#"{
            "Content": {
                "TimetableFrame": [
                    {
                        "id": "x",
                        "Name": "Local:N :W",
                        "vehicleJourneys": {
                            "ServiceJourney": [
                                {
                                    "id": "421",
                                    "calls": {
                                        "Call": [
                                            {
                                                "order": "first",
                                                "ScheduledStopPointRef": { "ref": "70011" },
                                                "Arrival": { "Time": "09:00:00" },
                                                "Departure": { "Time": "09:00:00" }
                                            }
                                        ]
                                    }
                                }
                            ]
                        }
                    }
                ]
            }
        }"#;
        let err = parse_timetable(Line::Local, json.as_bytes()).unwrap_err();
        assert_eq!(err, ParseError::Order("first".into()));
    }

    #[test]
    fn stations_payload() {
        let json = r#"{
            "Contents": {
                "dataObjects": {
                    "ScheduledStopPoint": [
                        {
                            "id": "70011",
                            "Name": "San Francisco Caltrain",
                            "Location": { "Longitude": "-122.394992", "Latitude": "37.776348" }
                        },
                        {
                            "id": "70012",
                            "Name": "San Francisco Caltrain",
                            "Location": { "Longitude": "-122.394992", "Latitude": "37.776348" }
                        },
                        {
                            "id": "777402",
                            "Name": "Hillsdale Caltrain Station",
                            "Location": { "Longitude": "0", "Latitude": "0" }
                        }
                    ]
                }
            }
        }"#;

        let records = parse_stations(json.as_bytes()).unwrap();
        // The "… Station" area entry is skipped.
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "San Francisco");
        assert_eq!(records[0].code, StopCode::new(70011));
        assert!((records[0].latitude - 37.776348).abs() < 1e-9);
        assert_eq!(records[1].code, StopCode::new(70012));
    }

    #[test]
    fn stations_with_bad_location_fail() {
        let json = r#"{
            "Contents": {
                "dataObjects": {
                    "ScheduledStopPoint": [
                        {
                            "id": "70011",
                            "Name": "San Francisco Caltrain",
                            "Location": { "Longitude": "west", "Latitude": "37.7" }
                        }
                    ]
                }
            }
        }"#;
        let err = parse_stations(json.as_bytes()).unwrap_err();
        assert_eq!(err, ParseError::Location("San Francisco".into()));
    }

    #[test]
    fn holidays_expand_ranges_and_accept_both_shapes() {
        let json = r#"{
            "Content": {
                "AvailabilityConditions": [
                    { "FromDate": "2024-07-04T00:00:00", "ToDate": "2024-07-04T00:00:00" },
                    { "FromDate": "2024-11-28T00:00:00", "ToDate": "2024-11-29T00:00:00" }
                ]
            }
        }"#;
        let dates = parse_holidays(json.as_bytes()).unwrap();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
                NaiveDate::from_ymd_opt(2024, 11, 28).unwrap(),
                NaiveDate::from_ymd_opt(2024, 11, 29).unwrap(),
            ]
        );

        // Single-object variant.
        let json = r#"{
            "Content": {
                "AvailabilityConditions": { "FromDate": "2024-01-01", "ToDate": "2024-01-01" }
            }
        }"#;
        let dates = parse_holidays(json.as_bytes()).unwrap();
        assert_eq!(dates, vec![NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()]);
    }

    fn monitoring_json(entries: &str) -> String {
        format!(
            r#"{{
                "ServiceDelivery": {{
                    "ProducerRef": "CT",
                    "Status": true,
                    "StopMonitoringDelivery": {{
                        "version": "1.4",
                        "Status": true,
                        "MonitoredStopVisit": [{entries}]
                    }}
                }}
            }}"#
        )
    }

    fn visit(train: &str, line: &str, dir: &str, stop: &str, times: &str) -> String {
        format!(
            r#"{{
                "MonitoringRef": "70112",
                "MonitoredVehicleJourney": {{
                    "LineRef": "{line}",
                    "DirectionRef": "{dir}",
                    "FramedVehicleJourneyRef": {{
                        "DataFrameRef": "2024-03-15",
                        "DatedVehicleJourneyRef": "{train}"
                    }},
                    "MonitoredCall": {{
                        "StopPointRef": "70112",
                        "StopPointName": "{stop}",
                        {times}
                    }}
                }}
            }}"#
        )
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 17, 0, 0).unwrap()
    }

    #[test]
    fn live_status_with_delay() {
        let entries = visit(
            "258",
            "Limited",
            "S",
            "Hillsdale Caltrain",
            r#""AimedArrivalTime": "2024-03-15T17:20:00Z",
               "ExpectedArrivalTime": "2024-03-15T17:32:00Z""#,
        );
        let statuses = parse_stop_monitoring(monitoring_json(&entries).as_bytes(), now()).unwrap();

        assert_eq!(statuses.len(), 1);
        let status = &statuses[0];
        assert_eq!(status.train_id, "258");
        assert_eq!(status.line, Line::Limited);
        assert_eq!(status.direction, Direction::South);
        assert_eq!(status.next_stop, crate::domain::Station::Hillsdale);
        assert_eq!(status.delay, Duration::minutes(12));
        assert_eq!(
            status.arrival,
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 17, 32, 0).unwrap())
        );
    }

    #[test]
    fn missing_aimed_arrival_means_no_delay() {
        // The train has not left its origin yet.
        let entries = visit(
            "301",
            "Local",
            "N",
            "Tamien Caltrain",
            r#""AimedArrivalTime": null,
               "ExpectedArrivalTime": "2024-03-15T17:45:00Z""#,
        );
        let statuses = parse_stop_monitoring(monitoring_json(&entries).as_bytes(), now()).unwrap();
        assert_eq!(statuses[0].delay, Duration::zero());
        assert!(statuses[0].arrival.is_some());
    }

    #[test]
    fn expected_departure_substitutes_at_origin() {
        let entries = visit(
            "305",
            "Local",
            "N",
            "Gilroy Caltrain",
            r#""AimedArrivalTime": "2024-03-15T17:10:00Z",
               "ExpectedDepartureTime": "2024-03-15T17:18:00Z""#,
        );
        let statuses = parse_stop_monitoring(monitoring_json(&entries).as_bytes(), now()).unwrap();
        assert_eq!(statuses[0].delay, Duration::minutes(8));
    }

    #[test]
    fn stale_aimed_arrival_rebaselines_on_departure() {
        // Aimed arrival is before `now`, so the aimed departure is the
        // baseline instead.
        let entries = visit(
            "309",
            "Bullet",
            "N",
            "Palo Alto Caltrain",
            r#""AimedArrivalTime": "2024-03-15T16:50:00Z",
               "AimedDepartureTime": "2024-03-15T17:02:00Z",
               "ExpectedArrivalTime": "2024-03-15T17:07:00Z""#,
        );
        let statuses = parse_stop_monitoring(monitoring_json(&entries).as_bytes(), now()).unwrap();
        assert_eq!(statuses[0].delay, Duration::minutes(5));
    }

    #[test]
    fn early_trains_clamp_to_zero_delay() {
        let entries = visit(
            "313",
            "Local",
            "S",
            "Sunnyvale Caltrain",
            r#""AimedArrivalTime": "2024-03-15T17:30:00Z",
               "ExpectedArrivalTime": "2024-03-15T17:26:00Z""#,
        );
        let statuses = parse_stop_monitoring(monitoring_json(&entries).as_bytes(), now()).unwrap();
        assert_eq!(statuses[0].delay, Duration::zero());
    }

    #[test]
    fn empty_visit_list_is_an_empty_vec() {
        let statuses = parse_stop_monitoring(monitoring_json("").as_bytes(), now()).unwrap();
        assert!(statuses.is_empty());
    }

    #[test]
    fn delays_filter_by_threshold() {
        let entries = [
            visit(
                "258",
                "Limited",
                "S",
                "Hillsdale Caltrain",
                r#""AimedArrivalTime": "2024-03-15T17:20:00Z",
                   "ExpectedArrivalTime": "2024-03-15T17:32:00Z""#,
            ),
            visit(
                "260",
                "Local",
                "S",
                "Belmont Caltrain",
                r#""AimedArrivalTime": "2024-03-15T17:20:00Z",
                   "ExpectedArrivalTime": "2024-03-15T17:22:00Z""#,
            ),
        ]
        .join(",");

        let delayed = parse_delays(
            monitoring_json(&entries).as_bytes(),
            Duration::minutes(10),
            now(),
        )
        .unwrap();

        assert_eq!(delayed.len(), 1);
        assert_eq!(delayed[0].train_id, "258");
    }

    #[test]
    fn unknown_station_in_live_status_fails() {
        let entries = visit(
            "401",
            "Local",
            "N",
            "Emeryville Caltrain",
            r#""AimedArrivalTime": null"#,
        );
        let err = parse_stop_monitoring(monitoring_json(&entries).as_bytes(), now()).unwrap_err();
        assert_eq!(err, ParseError::Station("Emeryville".into()));
    }

    #[test]
    fn bom_prefix_is_stripped() {
        let mut raw = b"\xef\xbb\xbf".to_vec();
        raw.extend_from_slice(monitoring_json("").as_bytes());
        assert!(parse_stop_monitoring(&raw, now()).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_stations(b"not json").unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }
}
