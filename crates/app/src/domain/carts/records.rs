//! Cart Records

use jiff::{Timestamp, civil::DateTime, tz::TimeZone};
use serde::{Deserialize, Serialize};
use setlist::{
    cart::CartLine,
    schedules::{EventStatus, EventType, ScheduleUuid, Venue},
};

use crate::domain::{schedules::records::ScheduleRecord, users::records::UserUuid};

/// Schedule fields captured when an item is first added to a cart.
///
/// Stored as JSONB alongside the item. The snapshot is never refreshed, so it
/// can drift from the live schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSnapshot {
    pub event_name: String,
    pub date: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    pub venue: Venue,
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub status: EventStatus,
}

impl From<&ScheduleRecord> for ScheduleSnapshot {
    fn from(schedule: &ScheduleRecord) -> Self {
        Self {
            event_name: schedule.event_name.clone(),
            date: schedule.date.to_string(),
            start_time: Some(schedule.start_time.clone()).filter(|time| !time.is_empty()),
            end_time: schedule.end_time.clone(),
            venue: schedule.venue.clone(),
            price: schedule.price,
            kind: schedule.kind,
            status: schedule.status,
        }
    }
}

impl From<&CartLine> for ScheduleSnapshot {
    fn from(line: &CartLine) -> Self {
        Self {
            event_name: line.event_name.clone(),
            date: line.date.clone(),
            start_time: Some(line.start_time.clone()).filter(|time| !time.is_empty()),
            end_time: line.end_time.clone(),
            venue: line.venue.clone(),
            price: line.price,
            kind: line.kind,
            status: line.status,
        }
    }
}

/// Cart Item Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemRecord {
    pub user_uuid: UserUuid,
    pub schedule_uuid: ScheduleUuid,
    pub schedule: ScheduleSnapshot,
    pub quantity: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<CartItemRecord> for CartLine {
    fn from(record: CartItemRecord) -> Self {
        let snapshot = record.schedule;

        Self {
            uuid: record.schedule_uuid,
            event_name: snapshot.event_name,
            date: normalize_date(&snapshot.date),
            start_time: snapshot.start_time.unwrap_or_default(),
            end_time: snapshot.end_time,
            venue: snapshot.venue,
            price: snapshot.price,
            kind: snapshot.kind,
            status: snapshot.status,
            quantity: record.quantity,
        }
    }
}

/// Reduce a stored date to `YYYY-MM-DD`.
///
/// Accepts plain dates, civil datetimes and RFC 3339 timestamps (read in UTC).
/// Anything else is returned unchanged.
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return timestamp.to_zoned(TimeZone::UTC).date().to_string();
    }

    if let Ok(datetime) = raw.parse::<DateTime>() {
        return datetime.date().to_string();
    }

    raw.to_string()
}
