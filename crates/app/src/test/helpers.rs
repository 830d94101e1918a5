//! Fixture builders for service integration tests.

use jiff::civil::date;
use setlist::schedules::{EventStatus, EventType, ScheduleUuid, Venue};

use crate::{
    domain::{
        schedules::{
            SchedulesService, SchedulesServiceError,
            data::{NewSchedule, ScheduleDetails},
            records::ScheduleRecord,
        },
        users::{
            PgUsersService, UsersService, UsersServiceError,
            data::NewUser,
            records::{Role, UserUuid},
        },
    },
    test::TestContext,
};

pub(crate) fn schedule_details(price: Option<u64>) -> ScheduleDetails {
    ScheduleDetails {
        event_name: "Autumn Tour".to_string(),
        date: date(2026, 11, 14),
        start_time: "20:00".to_string(),
        end_time: Some("23:00".to_string()),
        venue: Venue {
            name: "Brudenell Social Club".to_string(),
            address: "33 Queens Rd".to_string(),
            city: "Leeds".to_string(),
        },
        description: Some("Support from friends".to_string()),
        kind: EventType::Concert,
        status: EventStatus::Scheduled,
        price,
    }
}

pub(crate) async fn create_schedule(
    ctx: &TestContext,
    price: Option<u64>,
) -> Result<ScheduleRecord, SchedulesServiceError> {
    ctx.schedules
        .create_schedule(NewSchedule {
            uuid: ScheduleUuid::new(),
            details: schedule_details(price),
        })
        .await
}

pub(crate) async fn create_user(
    ctx: &TestContext,
    name: &str,
) -> Result<UserUuid, UsersServiceError> {
    let user = PgUsersService::new(ctx.db.pool().clone())
        .create_user(NewUser {
            uuid: UserUuid::new(),
            name: name.to_string(),
            role: Role::Public,
        })
        .await?;

    Ok(user.uuid)
}
