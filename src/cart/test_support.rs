//! Shared cart fixtures for unit tests.

use crate::{
    cart::CartLine,
    schedules::{EventSchedule, EventStatus, EventType, ScheduleUuid, Venue},
};

pub(crate) fn schedule(price: u64) -> EventSchedule {
    EventSchedule {
        uuid: ScheduleUuid::new(),
        event_name: "Summer Tour".to_string(),
        date: "2026-07-04".to_string(),
        start_time: "19:30".to_string(),
        end_time: None,
        venue: Venue {
            name: "Brudenell".to_string(),
            address: "33 Queens Rd".to_string(),
            city: "Leeds".to_string(),
        },
        description: None,
        kind: EventType::Concert,
        status: EventStatus::Scheduled,
        price: Some(price),
    }
}

pub(crate) fn unpriced_schedule() -> EventSchedule {
    EventSchedule {
        price: None,
        ..schedule(0)
    }
}

pub(crate) fn line(price: u64, quantity: u32) -> CartLine {
    CartLine::snapshot(&schedule(price), quantity)
}

pub(crate) fn unpriced_line(quantity: u32) -> CartLine {
    CartLine::snapshot(&unpriced_schedule(), quantity)
}
