//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use setlist::schedules::ScheduleUuid;

use crate::{
    database::Db,
    domain::{
        carts::{
            data::{NewCartItem, QuantityUpdate},
            errors::CartsServiceError,
            records::{CartItemRecord, ScheduleSnapshot},
            repository::PgCartItemsRepository,
        },
        schedules::{SchedulesServiceError, repository::PgSchedulesRepository},
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    items_repository: PgCartItemsRepository,
    schedules_repository: PgSchedulesRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            items_repository: PgCartItemsRepository::new(),
            schedules_repository: PgSchedulesRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn list_items(&self, user: UserUuid) -> Result<Vec<CartItemRecord>, CartsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let items = self.items_repository.list_cart_items(&mut tx, user).await?;

        tx.commit().await?;

        Ok(items)
    }

    async fn add_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError> {
        if item.quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin_user_transaction(user).await?;

        let schedule = self
            .schedules_repository
            .get_schedule(&mut tx, item.schedule)
            .await
            .map_err(SchedulesServiceError::from)?;

        if schedule.price.is_none() {
            return Err(CartsServiceError::Unpriced);
        }

        let record = self
            .items_repository
            .upsert_cart_item(
                &mut tx,
                user,
                item.schedule,
                &ScheduleSnapshot::from(&schedule),
                item.quantity,
            )
            .await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn update_quantity(
        &self,
        user: UserUuid,
        schedule: ScheduleUuid,
        quantity: i64,
    ) -> Result<QuantityUpdate, CartsServiceError> {
        if quantity <= 0 {
            return self
                .remove_item(user, schedule)
                .await
                .map(QuantityUpdate::Removed);
        }

        let quantity = u32::try_from(quantity).map_err(|_| CartsServiceError::InvalidQuantity)?;

        let mut tx = self.db.begin_user_transaction(user).await?;

        let record = self
            .items_repository
            .update_cart_item_quantity(&mut tx, user, schedule, quantity)
            .await?;

        tx.commit().await?;

        Ok(QuantityUpdate::Updated(record))
    }

    async fn remove_item(
        &self,
        user: UserUuid,
        schedule: ScheduleUuid,
    ) -> Result<ScheduleUuid, CartsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let rows_affected = self
            .items_repository
            .delete_cart_item(&mut tx, user, schedule)
            .await?;

        if rows_affected == 0 {
            return Err(CartsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(schedule)
    }

    async fn clear(&self, user: UserUuid) -> Result<u64, CartsServiceError> {
        let mut tx = self.db.begin_user_transaction(user).await?;

        let rows_affected = self.items_repository.clear_cart_items(&mut tx, user).await?;

        tx.commit().await?;

        Ok(rows_affected)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve every item in the user's cart, oldest first.
    async fn list_items(&self, user: UserUuid) -> Result<Vec<CartItemRecord>, CartsServiceError>;

    /// Add tickets for a priced schedule, incrementing an existing item.
    async fn add_item(
        &self,
        user: UserUuid,
        item: NewCartItem,
    ) -> Result<CartItemRecord, CartsServiceError>;

    /// Set an item's quantity. Zero or less deletes the item.
    async fn update_quantity(
        &self,
        user: UserUuid,
        schedule: ScheduleUuid,
        quantity: i64,
    ) -> Result<QuantityUpdate, CartsServiceError>;

    /// Delete an item, returning the schedule it was for.
    async fn remove_item(
        &self,
        user: UserUuid,
        schedule: ScheduleUuid,
    ) -> Result<ScheduleUuid, CartsServiceError>;

    /// Delete every item in the user's cart, returning how many were removed.
    async fn clear(&self, user: UserUuid) -> Result<u64, CartsServiceError>;
}
