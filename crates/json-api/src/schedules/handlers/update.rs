//! Update Schedule Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    extensions::*,
    schedules::{
        errors::into_status_error,
        models::{ScheduleRequest, ScheduleResponse},
    },
    state::State,
};

/// Update Schedule Handler
///
/// Replaces every editable field. Existing cart items keep their snapshot.
#[endpoint(
    tags("schedules"),
    summary = "Update Schedule",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Schedule updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Schedule not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin role required"),
    ),
)]
pub(crate) async fn handler(
    schedule: PathParam<Uuid>,
    json: JsonBody<ScheduleRequest>,
    depot: &mut Depot,
) -> Result<Json<ScheduleResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let schedule = schedule.into_inner();

    let updated = state
        .app
        .schedules
        .update_schedule(schedule.into(), json.into_inner().try_into()?)
        .await
        .map_err(into_status_error)?;

    info!(schedule_uuid = %schedule, "updated schedule");

    Ok(Json(updated.into()))
}
