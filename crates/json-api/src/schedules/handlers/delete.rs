//! Delete Schedule Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, schedules::errors::into_status_error, state::State};

/// Delete Schedule Handler
///
/// Soft-deletes the schedule. Cart items that reference it are kept.
#[endpoint(
    tags("schedules"),
    summary = "Delete Schedule",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Schedule deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Schedule not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin role required"),
    ),
)]
#[tracing::instrument(
    name = "schedules.delete",
    skip(schedule, depot),
    fields(schedule_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    schedule: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let schedule = schedule.into_inner();

    tracing::Span::current().record("schedule_uuid", tracing::field::display(schedule));

    state
        .app
        .schedules
        .delete_schedule(schedule.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!("deleted schedule");

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use setlist::schedules::ScheduleUuid;
    use setlist_app::domain::schedules::{MockSchedulesService, SchedulesServiceError};

    use crate::test_helpers::{inject_admin, schedules_service};

    use super::*;

    fn make_service(repo: MockSchedulesService) -> Service {
        schedules_service(
            repo,
            inject_admin,
            Router::with_path("schedules/{schedule}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_schedule_success() {
        let uuid = ScheduleUuid::new();

        let mut repo = MockSchedulesService::new();

        repo.expect_delete_schedule()
            .once()
            .withf(move |requested| *requested == uuid)
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!("http://example.com/schedules/{uuid}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn test_delete_missing_schedule_returns_404() {
        let mut repo = MockSchedulesService::new();

        repo.expect_delete_schedule()
            .once()
            .return_once(|_| Err(SchedulesServiceError::NotFound));

        let res = TestClient::delete(format!(
            "http://example.com/schedules/{}",
            ScheduleUuid::new()
        ))
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
