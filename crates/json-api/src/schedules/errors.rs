//! Schedule Errors

use salvo::http::StatusError;
use tracing::error;

use setlist_app::domain::schedules::SchedulesServiceError;

pub(crate) fn into_status_error(error: SchedulesServiceError) -> StatusError {
    match error {
        SchedulesServiceError::AlreadyExists => {
            StatusError::conflict().brief("Schedule already exists")
        }
        SchedulesServiceError::MissingRequiredData | SchedulesServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid schedule payload")
        }
        SchedulesServiceError::NotFound => StatusError::not_found().brief("Schedule not found"),
        SchedulesServiceError::Sql(source) => {
            error!("schedule storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
