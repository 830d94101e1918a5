//! Create Schedule Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use setlist::schedules::ScheduleUuid;
use setlist_app::domain::schedules::data::NewSchedule;
use tracing::info;

use crate::{
    extensions::*,
    schedules::{
        errors::into_status_error,
        models::{ScheduleRequest, ScheduleResponse},
    },
    state::State,
};

/// Create Schedule Handler
#[endpoint(
    tags("schedules"),
    summary = "Create Schedule",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Schedule created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin role required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ScheduleRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ScheduleResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let schedule = state
        .app
        .schedules
        .create_schedule(NewSchedule {
            uuid: ScheduleUuid::new(),
            details: json.into_inner().try_into()?,
        })
        .await
        .map_err(into_status_error)?;

    info!(schedule_uuid = %schedule.uuid, "created schedule");

    res.add_header(LOCATION, format!("/schedules/{}", schedule.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(schedule.into()))
}
