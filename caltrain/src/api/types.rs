//! Wire mirrors of the 511.org JSON payloads.
//!
//! These structs follow the upstream shapes field for field and exist
//! only as a deserialization target; `parse` turns them into domain
//! types. Every container defaults to empty so a payload that omits a
//! section deserializes instead of failing; absence is handled
//! downstream, where it can be reported in domain terms.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A section the upstream serves either as a single object or as an
/// array, depending on data revision.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

/// A `{ "ref": … }` reference object.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Ref {
    #[serde(rename = "ref", default)]
    pub reference: String,
}

// --- timetable ---

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TimetableResponse {
    #[serde(rename = "Content", default)]
    pub content: TimetableContent,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TimetableContent {
    #[serde(rename = "ServiceCalendarFrame", default)]
    pub service_calendar_frame: ServiceCalendarFrame,
    #[serde(rename = "TimetableFrame", default)]
    pub timetable_frames: Vec<WireFrame>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServiceCalendarFrame {
    #[serde(rename = "dayTypes", default)]
    pub day_types: DayTypes,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DayTypes {
    #[serde(rename = "DayType", default)]
    pub day_type: OneOrMany<DayType>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DayType {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub properties: DayTypeProperties,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DayTypeProperties {
    #[serde(rename = "PropertyOfDay", default)]
    pub property_of_day: PropertyOfDay,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PropertyOfDay {
    #[serde(rename = "DaysOfWeek", default)]
    pub days_of_week: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireFrame {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "frameValidityConditions", default)]
    pub validity: FrameValidityConditions,
    #[serde(rename = "vehicleJourneys", default)]
    pub vehicle_journeys: VehicleJourneys,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FrameValidityConditions {
    #[serde(rename = "AvailabilityCondition", default)]
    pub availability: AvailabilityCondition,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AvailabilityCondition {
    #[serde(rename = "FromDate", default)]
    pub from_date: String,
    #[serde(rename = "ToDate", default)]
    pub to_date: String,
    #[serde(rename = "dayTypes", default)]
    pub day_types: DayTypeRefs,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DayTypeRefs {
    #[serde(rename = "DayTypeRef", default)]
    pub day_type_ref: Ref,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct VehicleJourneys {
    #[serde(rename = "ServiceJourney", default)]
    pub service_journeys: Vec<WireJourney>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireJourney {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "JourneyPatternView", default)]
    pub journey_pattern_view: JourneyPatternView,
    #[serde(default)]
    pub calls: WireCalls,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct JourneyPatternView {
    #[serde(rename = "DirectionRef", default)]
    pub direction_ref: Ref,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireCalls {
    #[serde(rename = "Call", default)]
    pub calls: Vec<WireCall>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireCall {
    #[serde(default)]
    pub order: String,
    #[serde(rename = "ScheduledStopPointRef", default)]
    pub stop_point_ref: Ref,
    #[serde(rename = "Arrival", default)]
    pub arrival: WireCallTime,
    #[serde(rename = "Departure", default)]
    pub departure: WireCallTime,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireCallTime {
    #[serde(rename = "Time", default)]
    pub time: String,
    #[serde(rename = "DaysOffset", default)]
    pub days_offset: String,
}

// --- stations ---

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StationsResponse {
    #[serde(rename = "Contents", default)]
    pub contents: StationsContents,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StationsContents {
    #[serde(rename = "dataObjects", default)]
    pub data_objects: DataObjects,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DataObjects {
    #[serde(rename = "ScheduledStopPoint", default)]
    pub scheduled_stop_points: Vec<ScheduledStopPoint>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ScheduledStopPoint {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Location", default)]
    pub location: StopLocation,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StopLocation {
    #[serde(rename = "Longitude", default)]
    pub longitude: String,
    #[serde(rename = "Latitude", default)]
    pub latitude: String,
}

// --- holidays ---

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HolidaysResponse {
    #[serde(rename = "Content", default)]
    pub content: HolidaysContent,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HolidaysContent {
    #[serde(rename = "AvailabilityConditions", default)]
    pub availability_conditions: OneOrMany<HolidayCondition>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HolidayCondition {
    #[serde(rename = "FromDate", default)]
    pub from_date: String,
    #[serde(rename = "ToDate", default)]
    pub to_date: String,
}

// --- stop monitoring ---

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StopMonitoringResponse {
    #[serde(rename = "ServiceDelivery", default)]
    pub service_delivery: ServiceDelivery,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServiceDelivery {
    #[serde(rename = "StopMonitoringDelivery", default)]
    pub stop_monitoring_delivery: StopMonitoringDelivery,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StopMonitoringDelivery {
    #[serde(rename = "MonitoredStopVisit", default)]
    pub monitored_stop_visits: Vec<MonitoredStopVisit>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MonitoredStopVisit {
    #[serde(rename = "MonitoredVehicleJourney", default)]
    pub monitored_vehicle_journey: MonitoredVehicleJourney,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MonitoredVehicleJourney {
    #[serde(rename = "LineRef", default)]
    pub line_ref: String,
    #[serde(rename = "DirectionRef", default)]
    pub direction_ref: String,
    #[serde(rename = "FramedVehicleJourneyRef", default)]
    pub framed_vehicle_journey_ref: FramedVehicleJourneyRef,
    #[serde(rename = "MonitoredCall", default)]
    pub monitored_call: MonitoredCall,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FramedVehicleJourneyRef {
    #[serde(rename = "DatedVehicleJourneyRef", default)]
    pub dated_vehicle_journey_ref: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MonitoredCall {
    #[serde(rename = "StopPointName", default)]
    pub stop_point_name: String,
    #[serde(rename = "AimedArrivalTime", default)]
    pub aimed_arrival_time: Option<DateTime<Utc>>,
    #[serde(rename = "ExpectedArrivalTime", default)]
    pub expected_arrival_time: Option<DateTime<Utc>>,
    #[serde(rename = "AimedDepartureTime", default)]
    pub aimed_departure_time: Option<DateTime<Utc>>,
    #[serde(rename = "ExpectedDepartureTime", default)]
    pub expected_departure_time: Option<DateTime<Utc>>,
}
