//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::schedules::SchedulesServiceError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart item not found")]
    NotFound,

    #[error("schedule not found")]
    ScheduleNotFound,

    #[error("schedule has no ticket price")]
    Unpriced,

    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("related resource not found")]
    InvalidReference,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::UniqueViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<SchedulesServiceError> for CartsServiceError {
    fn from(error: SchedulesServiceError) -> Self {
        match error {
            SchedulesServiceError::NotFound => Self::ScheduleNotFound,
            SchedulesServiceError::Sql(error) => Self::Sql(error),
            SchedulesServiceError::AlreadyExists
            | SchedulesServiceError::MissingRequiredData
            | SchedulesServiceError::InvalidData => Self::InvalidData,
        }
    }
}
