//! Cart Lines

use serde::{Deserialize, Serialize};

use crate::schedules::{EventSchedule, EventStatus, EventType, ScheduleUuid, Venue};

/// One schedule in the cart, with the display fields captured when it was added.
///
/// The snapshot is not refreshed if the schedule later changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Schedule this line is for
    #[serde(rename = "_id")]
    pub uuid: ScheduleUuid,

    /// Event name at the time of adding
    pub event_name: String,

    /// Event date, `YYYY-MM-DD`
    pub date: String,

    /// Start time; empty when unknown
    #[serde(default)]
    pub start_time: String,

    /// End time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// Venue
    pub venue: Venue,

    /// Unit price in minor units
    #[serde(default)]
    pub price: Option<u64>,

    /// Event type
    #[serde(rename = "type")]
    pub kind: EventType,

    /// Event status
    pub status: EventStatus,

    /// Number of tickets
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot `schedule` into a new line.
    pub fn snapshot(schedule: &EventSchedule, quantity: u32) -> Self {
        Self {
            uuid: schedule.uuid,
            event_name: schedule.event_name.clone(),
            date: schedule.date.clone(),
            start_time: schedule.start_time.clone(),
            end_time: schedule.end_time.clone(),
            venue: schedule.venue.clone(),
            price: schedule.price,
            kind: schedule.kind,
            status: schedule.status,
            quantity,
        }
    }
}
