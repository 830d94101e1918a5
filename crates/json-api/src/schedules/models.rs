//! Schedule request and response bodies.

use jiff::civil::Date;
use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use setlist::schedules::{EventStatus, EventType, Venue};
use setlist_app::domain::schedules::{data::ScheduleDetails, records::ScheduleRecord};

/// Venue
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct VenueBody {
    pub name: String,
    pub address: String,
    pub city: String,
}

impl From<Venue> for VenueBody {
    fn from(venue: Venue) -> Self {
        Self {
            name: venue.name,
            address: venue.address,
            city: venue.city,
        }
    }
}

impl From<VenueBody> for Venue {
    fn from(venue: VenueBody) -> Self {
        Self {
            name: venue.name,
            address: venue.address,
            city: venue.city,
        }
    }
}

/// Event Schedule Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScheduleResponse {
    /// The unique identifier of the schedule
    pub uuid: Uuid,

    pub event_name: String,

    /// Event date, `YYYY-MM-DD`
    pub date: String,

    /// Start time; empty when not announced
    pub start_time: String,

    pub end_time: Option<String>,

    pub venue: VenueBody,

    pub description: Option<String>,

    /// One of `concert`, `rehearsal`, `meeting`, `interview`, `other`
    #[serde(rename = "type")]
    pub kind: String,

    /// One of `scheduled`, `completed`, `cancelled`, `postponed`
    pub status: String,

    /// Ticket price in minor units; absent when tickets aren't sold
    pub price: Option<u64>,
}

impl From<ScheduleRecord> for ScheduleResponse {
    fn from(record: ScheduleRecord) -> Self {
        Self {
            uuid: record.uuid.into_uuid(),
            event_name: record.event_name,
            date: record.date.to_string(),
            start_time: record.start_time,
            end_time: record.end_time,
            venue: record.venue.into(),
            description: record.description,
            kind: record.kind.to_string(),
            status: record.status.to_string(),
            price: record.price,
        }
    }
}

/// Event Schedule Request
///
/// Body for both creating and replacing a schedule.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScheduleRequest {
    pub event_name: String,

    /// Event date, `YYYY-MM-DD`
    pub date: String,

    #[serde(default)]
    pub start_time: String,

    #[serde(default)]
    pub end_time: Option<String>,

    pub venue: VenueBody,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub kind: String,

    pub status: String,

    #[serde(default)]
    pub price: Option<u64>,
}

impl TryFrom<ScheduleRequest> for ScheduleDetails {
    type Error = StatusError;

    fn try_from(request: ScheduleRequest) -> Result<Self, Self::Error> {
        if request.event_name.trim().is_empty() {
            return Err(StatusError::bad_request().brief("eventName cannot be empty"));
        }

        let date = request
            .date
            .parse::<Date>()
            .map_err(|_invalid| StatusError::bad_request().brief("date must be YYYY-MM-DD"))?;

        let kind = request
            .kind
            .parse::<EventType>()
            .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

        let status = request
            .status
            .parse::<EventStatus>()
            .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

        Ok(Self {
            event_name: request.event_name,
            date,
            start_time: request.start_time,
            end_time: request.end_time,
            venue: request.venue.into(),
            description: request.description,
            kind,
            status,
            price: request.price,
        })
    }
}
