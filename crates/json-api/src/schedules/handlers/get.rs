//! Get Schedule Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    schedules::{errors::into_status_error, models::ScheduleResponse},
    state::State,
};

/// Get Schedule Handler
#[endpoint(
    tags("schedules"),
    summary = "Get Schedule",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Schedule found"),
        (status_code = StatusCode::NOT_FOUND, description = "Schedule not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    schedule: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ScheduleResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let schedule = state
        .app
        .schedules
        .get_schedule(schedule.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(schedule.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use setlist::schedules::ScheduleUuid;
    use setlist_app::domain::schedules::{MockSchedulesService, SchedulesServiceError};
    use testresult::TestResult;

    use crate::test_helpers::{inject_fan, make_schedule, schedules_service};

    use super::*;

    fn make_service(repo: MockSchedulesService) -> Service {
        schedules_service(
            repo,
            inject_fan,
            Router::with_path("schedules/{schedule}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_schedule() -> TestResult {
        let uuid = ScheduleUuid::new();

        let mut repo = MockSchedulesService::new();

        repo.expect_get_schedule()
            .once()
            .withf(move |requested| *requested == uuid)
            .return_once(move |_| Ok(make_schedule(uuid, Some(22_50))));

        let response: ScheduleResponse =
            TestClient::get(format!("http://example.com/schedules/{uuid}"))
                .send(&make_service(repo))
                .await
                .take_json()
                .await?;

        assert_eq!(response.uuid, uuid.into_uuid());
        assert_eq!(response.date, "2026-11-14");
        assert_eq!(response.kind, "concert");
        assert_eq!(response.price, Some(22_50));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_schedule_returns_404() {
        let mut repo = MockSchedulesService::new();

        repo.expect_get_schedule()
            .once()
            .return_once(|_| Err(SchedulesServiceError::NotFound));

        let res = TestClient::get(format!(
            "http://example.com/schedules/{}",
            ScheduleUuid::new()
        ))
        .send(&make_service(repo))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_get_invalid_uuid_returns_400() {
        let mut repo = MockSchedulesService::new();

        repo.expect_get_schedule().never();

        let res = TestClient::get("http://example.com/schedules/not-a-uuid")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
