//! Event Schedule Records

use jiff::{Timestamp, civil::Date};
use setlist::schedules::{EventSchedule, EventStatus, EventType, ScheduleUuid, Venue};

/// Event Schedule Record
#[derive(Debug, Clone)]
pub struct ScheduleRecord {
    pub uuid: ScheduleUuid,
    pub event_name: String,
    pub date: Date,
    pub start_time: String,
    pub end_time: Option<String>,
    pub venue: Venue,
    pub description: Option<String>,
    pub kind: EventType,
    pub status: EventStatus,
    pub price: Option<u64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl From<ScheduleRecord> for EventSchedule {
    fn from(record: ScheduleRecord) -> Self {
        Self {
            uuid: record.uuid,
            event_name: record.event_name,
            date: record.date.to_string(),
            start_time: record.start_time,
            end_time: record.end_time,
            venue: record.venue,
            description: record.description,
            kind: record.kind,
            status: record.status,
            price: record.price,
        }
    }
}
