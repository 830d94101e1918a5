//! Event schedules service.

use async_trait::async_trait;
use mockall::automock;
use setlist::schedules::ScheduleUuid;

use crate::{
    database::Db,
    domain::schedules::{
        data::{NewSchedule, ScheduleDetails},
        errors::SchedulesServiceError,
        records::ScheduleRecord,
        repository::PgSchedulesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgSchedulesService {
    db: Db,
    repository: PgSchedulesRepository,
}

impl PgSchedulesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgSchedulesRepository::new(),
        }
    }
}

#[async_trait]
impl SchedulesService for PgSchedulesService {
    async fn list_schedules(&self) -> Result<Vec<ScheduleRecord>, SchedulesServiceError> {
        let mut tx = self.db.begin().await?;

        let schedules = self.repository.list_schedules(&mut tx).await?;

        tx.commit().await?;

        Ok(schedules)
    }

    async fn get_schedule(
        &self,
        schedule: ScheduleUuid,
    ) -> Result<ScheduleRecord, SchedulesServiceError> {
        let mut tx = self.db.begin().await?;

        let schedule = self.repository.get_schedule(&mut tx, schedule).await?;

        tx.commit().await?;

        Ok(schedule)
    }

    async fn create_schedule(
        &self,
        schedule: NewSchedule,
    ) -> Result<ScheduleRecord, SchedulesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_schedule(&mut tx, schedule.uuid, schedule.details)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_schedule(
        &self,
        schedule: ScheduleUuid,
        details: ScheduleDetails,
    ) -> Result<ScheduleRecord, SchedulesServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_schedule(&mut tx, schedule, details)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_schedule(&self, schedule: ScheduleUuid) -> Result<(), SchedulesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_schedule(&mut tx, schedule).await?;

        if rows_affected == 0 {
            return Err(SchedulesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait SchedulesService: Send + Sync {
    /// Retrieves all active schedules, soonest first.
    async fn list_schedules(&self) -> Result<Vec<ScheduleRecord>, SchedulesServiceError>;

    /// Retrieve a single schedule.
    async fn get_schedule(
        &self,
        schedule: ScheduleUuid,
    ) -> Result<ScheduleRecord, SchedulesServiceError>;

    /// Creates a new schedule.
    async fn create_schedule(
        &self,
        schedule: NewSchedule,
    ) -> Result<ScheduleRecord, SchedulesServiceError>;

    /// Replaces a schedule's editable fields.
    async fn update_schedule(
        &self,
        schedule: ScheduleUuid,
        details: ScheduleDetails,
    ) -> Result<ScheduleRecord, SchedulesServiceError>;

    /// Soft-deletes a schedule.
    async fn delete_schedule(&self, schedule: ScheduleUuid) -> Result<(), SchedulesServiceError>;
}
