//! Event Schedules Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use setlist::schedules::{EventStatus, EventType, ScheduleUuid, Venue};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::schedules::{data::ScheduleDetails, records::ScheduleRecord};

const LIST_SCHEDULES_SQL: &str = include_str!("sql/list_schedules.sql");
const GET_SCHEDULE_SQL: &str = include_str!("sql/get_schedule.sql");
const CREATE_SCHEDULE_SQL: &str = include_str!("sql/create_schedule.sql");
const UPDATE_SCHEDULE_SQL: &str = include_str!("sql/update_schedule.sql");
const DELETE_SCHEDULE_SQL: &str = include_str!("sql/delete_schedule.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSchedulesRepository;

impl PgSchedulesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_schedules(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ScheduleRecord>, sqlx::Error> {
        query_as::<Postgres, ScheduleRecord>(LIST_SCHEDULES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_schedule(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        schedule: ScheduleUuid,
    ) -> Result<ScheduleRecord, sqlx::Error> {
        query_as::<Postgres, ScheduleRecord>(GET_SCHEDULE_SQL)
            .bind(schedule.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_schedule(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        schedule: ScheduleUuid,
        details: ScheduleDetails,
    ) -> Result<ScheduleRecord, sqlx::Error> {
        let price = price_to_i64(details.price)?;

        query_as::<Postgres, ScheduleRecord>(CREATE_SCHEDULE_SQL)
            .bind(schedule.into_uuid())
            .bind(details.event_name)
            .bind(SqlxDate::from(details.date))
            .bind(details.start_time)
            .bind(details.end_time)
            .bind(details.venue.name)
            .bind(details.venue.address)
            .bind(details.venue.city)
            .bind(details.description)
            .bind(details.kind.as_str())
            .bind(details.status.as_str())
            .bind(price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_schedule(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        schedule: ScheduleUuid,
        details: ScheduleDetails,
    ) -> Result<ScheduleRecord, sqlx::Error> {
        let price = price_to_i64(details.price)?;

        query_as::<Postgres, ScheduleRecord>(UPDATE_SCHEDULE_SQL)
            .bind(schedule.into_uuid())
            .bind(details.event_name)
            .bind(SqlxDate::from(details.date))
            .bind(details.start_time)
            .bind(details.end_time)
            .bind(details.venue.name)
            .bind(details.venue.address)
            .bind(details.venue.city)
            .bind(details.description)
            .bind(details.kind.as_str())
            .bind(details.status.as_str())
            .bind(price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_schedule(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        schedule: ScheduleUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_SCHEDULE_SQL)
            .bind(schedule.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn price_to_i64(price: Option<u64>) -> Result<Option<i64>, sqlx::Error> {
    price
        .map(i64::try_from)
        .transpose()
        .map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

fn decode_error(column: &str, source: impl std::error::Error + Send + Sync + 'static) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(source),
    }
}

impl<'r> FromRow<'r, PgRow> for ScheduleRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price = row
            .try_get::<Option<i64>, _>("price")?
            .map(u64::try_from)
            .transpose()
            .map_err(|e| decode_error("price", e))?;

        let kind = row
            .try_get::<String, _>("type")?
            .parse::<EventType>()
            .map_err(|e| decode_error("type", e))?;

        let status = row
            .try_get::<String, _>("status")?
            .parse::<EventStatus>()
            .map_err(|e| decode_error("status", e))?;

        Ok(Self {
            uuid: ScheduleUuid::from_uuid(row.try_get("uuid")?),
            event_name: row.try_get("event_name")?,
            date: row.try_get::<SqlxDate, _>("date")?.to_jiff(),
            start_time: row.try_get("start_time")?,
            end_time: row.try_get("end_time")?,
            venue: Venue {
                name: row.try_get("venue_name")?,
                address: row.try_get("venue_address")?,
                city: row.try_get("venue_city")?,
            },
            description: row.try_get("description")?,
            kind,
            status,
            price,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
