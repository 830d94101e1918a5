//! Test helpers.

use std::sync::Arc;

use jiff::{Timestamp, civil::date};
use rusty_money::iso::GBP;
use salvo::{affix_state::inject, prelude::*};
use setlist::{
    promotions::PromotionTable,
    schedules::{EventStatus, EventType, ScheduleUuid, Venue},
};
use setlist_app::{
    auth::{Identity, MockAuthService},
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            records::{CartItemRecord, ScheduleSnapshot},
        },
        schedules::{MockSchedulesService, records::ScheduleRecord},
        users::records::{Role, UserUuid},
    },
};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_fan(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_identity(Identity {
        user: TEST_USER_UUID,
        role: Role::Public,
    });
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
pub(crate) async fn inject_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_identity(Identity {
        user: TEST_USER_UUID,
        role: Role::Admin,
    });
    ctrl.call_next(req, depot, res).await;
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_schedules_mock() -> MockSchedulesService {
    let mut schedules = MockSchedulesService::new();

    schedules.expect_list_schedules().never();
    schedules.expect_get_schedule().never();
    schedules.expect_create_schedule().never();
    schedules.expect_update_schedule().never();
    schedules.expect_delete_schedule().never();

    schedules
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_list_items().never();
    carts.expect_add_item().never();
    carts.expect_update_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_clear().never();

    carts
}

fn state(
    schedules: MockSchedulesService,
    carts: MockCartsService,
    auth: MockAuthService,
) -> Arc<State> {
    Arc::new(State::new(
        AppContext {
            schedules: Arc::new(schedules),
            carts: Arc::new(carts),
            auth: Arc::new(auth),
        },
        PromotionTable::tiered(),
        GBP,
    ))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state(strict_schedules_mock(), strict_carts_mock(), auth)
}

/// Schedule routes behind `identity`, one of [`inject_fan`] or [`inject_admin`].
pub(crate) fn schedules_service(
    schedules: MockSchedulesService,
    identity: impl Handler,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(schedules, strict_carts_mock(), strict_auth_mock())))
            .hoop(identity)
            .push(route),
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    carts_service_with_schedules(carts, strict_schedules_mock(), route)
}

pub(crate) fn carts_service_with_schedules(
    carts: MockCartsService,
    schedules: MockSchedulesService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(schedules, carts, strict_auth_mock())))
            .hoop(inject_fan)
            .push(route),
    )
}

pub(crate) fn promotions_service(route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(
                strict_schedules_mock(),
                strict_carts_mock(),
                strict_auth_mock(),
            )))
            .push(route),
    )
}

pub(crate) fn make_schedule(uuid: ScheduleUuid, price: Option<u64>) -> ScheduleRecord {
    ScheduleRecord {
        uuid,
        event_name: "Autumn Tour: Leeds".to_string(),
        date: date(2026, 11, 14),
        start_time: "20:00".to_string(),
        end_time: None,
        venue: Venue {
            name: "Brudenell Social Club".to_string(),
            address: "33 Queens Rd".to_string(),
            city: "Leeds".to_string(),
        },
        description: None,
        kind: EventType::Concert,
        status: EventStatus::Scheduled,
        price,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_item(schedule: ScheduleUuid, price: u64, quantity: u32) -> CartItemRecord {
    CartItemRecord {
        user_uuid: TEST_USER_UUID,
        schedule_uuid: schedule,
        schedule: ScheduleSnapshot::from(&make_schedule(schedule, Some(price))),
        quantity,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
