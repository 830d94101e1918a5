//! Event Schedule Data

use jiff::civil::Date;
use setlist::schedules::{EventStatus, EventType, ScheduleUuid, Venue};

/// New Event Schedule Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewSchedule {
    pub uuid: ScheduleUuid,
    pub details: ScheduleDetails,
}

/// Editable Event Schedule Fields
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDetails {
    pub event_name: String,
    pub date: Date,
    pub start_time: String,
    pub end_time: Option<String>,
    pub venue: Venue,
    pub description: Option<String>,
    pub kind: EventType,
    pub status: EventStatus,

    /// Ticket price in minor units; `None` means tickets aren't sold.
    pub price: Option<u64>,
}
