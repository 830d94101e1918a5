//! Schedule Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    schedules::{errors::into_status_error, models::ScheduleResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SchedulesResponse {
    /// Active schedules, soonest first
    pub schedules: Vec<ScheduleResponse>,
}

/// Schedule Index Handler
///
/// Returns every schedule that hasn't been deleted.
#[endpoint(
    tags("schedules"),
    summary = "List Schedules",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<SchedulesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let schedules = state
        .app
        .schedules
        .list_schedules()
        .await
        .map_err(into_status_error)?;

    Ok(Json(SchedulesResponse {
        schedules: schedules.into_iter().map(Into::into).collect(),
    }))
}
