//! Event Schedules
//!
//! The read contract for event schedules as the cart sees them. Schedules are
//! owned elsewhere; the cart only ever snapshots their display fields.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Event Schedule UUID
pub type ScheduleUuid = TypedUuid<EventSchedule>;

/// Error returned when parsing an unknown event type or status.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleParseError {
    /// The value is not one of the known event types.
    #[error("unknown event type: {0}")]
    UnknownType(String),

    /// The value is not one of the known event statuses.
    #[error("unknown event status: {0}")]
    UnknownStatus(String),
}

/// The kind of event a schedule describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// A public performance.
    Concert,
    /// A band rehearsal.
    Rehearsal,
    /// A meeting.
    Meeting,
    /// A press or radio interview.
    Interview,
    /// Anything else.
    Other,
}

impl EventType {
    /// Return the wire name of the event type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Concert => "concert",
            Self::Rehearsal => "rehearsal",
            Self::Meeting => "meeting",
            Self::Interview => "interview",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = ScheduleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "concert" => Ok(Self::Concert),
            "rehearsal" => Ok(Self::Rehearsal),
            "meeting" => Ok(Self::Meeting),
            "interview" => Ok(Self::Interview),
            "other" => Ok(Self::Other),
            _ => Err(ScheduleParseError::UnknownType(value.to_string())),
        }
    }
}

/// Lifecycle status of a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Upcoming as planned.
    Scheduled,
    /// Already happened.
    Completed,
    /// Called off.
    Cancelled,
    /// Moved to a later date.
    Postponed,
}

impl EventStatus {
    /// Return the wire name of the status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Postponed => "postponed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = ScheduleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "scheduled" => Ok(Self::Scheduled),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "postponed" => Ok(Self::Postponed),
            _ => Err(ScheduleParseError::UnknownStatus(value.to_string())),
        }
    }
}

/// Where an event takes place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Venue name
    pub name: String,
    /// Street address
    pub address: String,
    /// City
    pub city: String,
}

/// An event schedule as exposed to the cart.
///
/// `price` is in minor units of the store currency; schedules without a price
/// are not sold and can't be added to a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSchedule {
    /// Schedule identifier
    #[serde(rename = "_id")]
    pub uuid: ScheduleUuid,

    /// Display name of the event
    pub event_name: String,

    /// Event date in `YYYY-MM-DD` form
    pub date: String,

    /// Start time, e.g. `19:30`
    #[serde(default)]
    pub start_time: String,

    /// Optional end time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// Venue details
    pub venue: Venue,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Event type
    #[serde(rename = "type")]
    pub kind: EventType,

    /// Event status
    pub status: EventStatus,

    /// Ticket price in minor units, if tickets are sold
    #[serde(default)]
    pub price: Option<u64>,
}

impl EventSchedule {
    /// Whether tickets for this schedule can be put in a cart.
    pub const fn is_purchasable(&self) -> bool {
        self.price.is_some()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_wire_contract() -> TestResult {
        let schedule: EventSchedule = serde_json::from_value(json!({
            "_id": "00000000-0000-0000-0000-000000000001",
            "eventName": "Summer Tour: Leeds",
            "date": "2026-07-04",
            "startTime": "19:30",
            "venue": { "name": "Brudenell", "address": "33 Queens Rd", "city": "Leeds" },
            "type": "concert",
            "status": "scheduled",
            "price": 2500
        }))?;

        assert_eq!(schedule.event_name, "Summer Tour: Leeds");
        assert_eq!(schedule.kind, EventType::Concert);
        assert_eq!(schedule.status, EventStatus::Scheduled);
        assert_eq!(schedule.price, Some(2500));
        assert_eq!(schedule.end_time, None);
        assert!(schedule.is_purchasable());

        Ok(())
    }

    #[test]
    fn null_price_is_not_purchasable() -> TestResult {
        let schedule: EventSchedule = serde_json::from_value(json!({
            "_id": "00000000-0000-0000-0000-000000000002",
            "eventName": "Rehearsal",
            "date": "2026-07-01",
            "startTime": "10:00",
            "venue": { "name": "Studio", "address": "1 Mill Ln", "city": "Leeds" },
            "type": "rehearsal",
            "status": "scheduled",
            "price": null
        }))?;

        assert!(!schedule.is_purchasable());

        Ok(())
    }

    #[test]
    fn type_and_status_round_trip_through_str() -> TestResult {
        for kind in [
            EventType::Concert,
            EventType::Rehearsal,
            EventType::Meeting,
            EventType::Interview,
            EventType::Other,
        ] {
            assert_eq!(kind.as_str().parse::<EventType>()?, kind);
        }

        assert_eq!("postponed".parse::<EventStatus>()?, EventStatus::Postponed);
        assert_eq!(
            "gig".parse::<EventType>(),
            Err(ScheduleParseError::UnknownType("gig".to_string()))
        );

        Ok(())
    }
}
