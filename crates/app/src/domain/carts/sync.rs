//! Cart Sync
//!
//! Keeps a local [`CartStore`] and the user's server-side cart in step. Every
//! change lands in the local store first and is then pushed to the server. A
//! failed push is returned to the caller; the local change is not rolled back.

use std::sync::Arc;

use setlist::{
    cart::{AddOutcome, CartLine, CartStore, CartStoreError, QuantityChange},
    schedules::{EventSchedule, ScheduleUuid},
    storage::CartStorage,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{
    carts::{CartsService, CartsServiceError, data::NewCartItem},
    users::records::UserUuid,
};

/// Errors from a synchronised cart change.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The local store rejected or failed to persist the change.
    #[error("local cart update failed")]
    Local(#[from] CartStoreError),

    /// The local change was applied but the server rejected it or was unreachable.
    #[error("server cart update failed")]
    Remote(#[from] CartsServiceError),
}

/// A local cart bound to one user's server-side cart.
pub struct CartSync<S: CartStorage> {
    user: UserUuid,
    service: Arc<dyn CartsService>,
    store: CartStore<S>,
}

impl<S: CartStorage> std::fmt::Debug for CartSync<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartSync")
            .field("user", &self.user)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl<S: CartStorage> CartSync<S> {
    pub fn new(user: UserUuid, service: Arc<dyn CartsService>, store: CartStore<S>) -> Self {
        Self {
            user,
            service,
            store,
        }
    }

    /// The local store.
    pub fn store(&self) -> &CartStore<S> {
        &self.store
    }

    /// Mutable access to the local store, for selection changes that are
    /// never pushed to the server.
    pub fn store_mut(&mut self) -> &mut CartStore<S> {
        &mut self.store
    }

    /// Stop syncing and hand back the local store.
    pub fn into_store(self) -> CartStore<S> {
        self.store
    }

    /// Replace the local cart with the server's.
    ///
    /// # Errors
    ///
    /// Returns an error if the server can't be read or local storage can't be written.
    pub async fn pull(&mut self) -> Result<(), SyncError> {
        let items = self.service.list_items(self.user).await?;

        debug!(user = %self.user, items = items.len(), "pulled server cart");

        self.store
            .replace_lines(items.into_iter().map(CartLine::from))?;

        Ok(())
    }

    /// Add tickets locally, then on the server.
    ///
    /// Unpriced schedules are ignored on both sides.
    ///
    /// # Errors
    ///
    /// - [`SyncError::Local`]: the local store rejected the change.
    /// - [`SyncError::Remote`]: the change is local only.
    pub async fn add_to_cart(
        &mut self,
        schedule: &EventSchedule,
        quantity: u32,
    ) -> Result<AddOutcome, SyncError> {
        let outcome = self.store.add_to_cart(schedule, quantity)?;

        if outcome == AddOutcome::Unpriced {
            return Ok(outcome);
        }

        self.push(
            self.service.add_item(
                self.user,
                NewCartItem {
                    schedule: schedule.uuid,
                    quantity,
                },
            ),
        )
        .await?;

        Ok(outcome)
    }

    /// Set a quantity locally, then on the server. Zero or less removes the line.
    ///
    /// A positive quantity for a schedule missing from the local cart is not
    /// pushed. A removal always is, so records added elsewhere are still
    /// deleted on the server.
    ///
    /// # Errors
    ///
    /// - [`SyncError::Local`]: the local store rejected the change.
    /// - [`SyncError::Remote`]: the change is local only.
    pub async fn update_quantity(
        &mut self,
        schedule: ScheduleUuid,
        quantity: i64,
    ) -> Result<QuantityChange, SyncError> {
        let change = self.store.update_quantity(&schedule, quantity)?;

        if change == QuantityChange::Missing && quantity > 0 {
            return Ok(change);
        }

        self.push(self.service.update_quantity(self.user, schedule, quantity))
            .await?;

        Ok(change)
    }

    /// Remove a line locally, then on the server. Returns whether a local line
    /// was removed.
    ///
    /// The removal is pushed even when the local cart had no line for
    /// `schedule`.
    ///
    /// # Errors
    ///
    /// - [`SyncError::Local`]: the local store couldn't persist the change.
    /// - [`SyncError::Remote`]: the server failed, or holds no record for
    ///   `schedule` ([`CartsServiceError::NotFound`]).
    pub async fn remove_from_cart(&mut self, schedule: ScheduleUuid) -> Result<bool, SyncError> {
        let removed = self.store.remove_from_cart(&schedule)?;

        self.push(self.service.remove_item(self.user, schedule))
            .await?;

        Ok(removed)
    }

    /// Empty the cart locally, then on the server.
    ///
    /// # Errors
    ///
    /// - [`SyncError::Local`]: local storage couldn't be cleared.
    /// - [`SyncError::Remote`]: the change is local only.
    pub async fn clear_cart(&mut self) -> Result<(), SyncError> {
        self.store.clear_cart()?;

        self.push(self.service.clear(self.user)).await?;

        Ok(())
    }

    async fn push<T>(
        &self,
        request: impl Future<Output = Result<T, CartsServiceError>>,
    ) -> Result<T, SyncError> {
        request.await.map_err(|error| {
            warn!(user = %self.user, %error, "cart change kept locally but not saved on the server");

            SyncError::Remote(error)
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use mockall::predicate::eq;
    use rusty_money::iso::GBP;
    use setlist::{
        cart::CartStore,
        promotions::PromotionTable,
        schedules::{EventStatus, EventType, Venue},
        storage::MemoryStorage,
    };
    use testresult::TestResult;

    use crate::domain::carts::{
        MockCartsService,
        data::QuantityUpdate,
        records::{CartItemRecord, ScheduleSnapshot},
    };

    use super::*;

    fn schedule(price: Option<u64>) -> EventSchedule {
        EventSchedule {
            uuid: ScheduleUuid::new(),
            event_name: "Winter Warmer".to_string(),
            date: "2026-12-12".to_string(),
            start_time: "19:00".to_string(),
            end_time: None,
            venue: Venue {
                name: "Belgrave".to_string(),
                address: "1 Cross Belgrave St".to_string(),
                city: "Leeds".to_string(),
            },
            description: None,
            kind: EventType::Concert,
            status: EventStatus::Scheduled,
            price,
        }
    }

    fn record(user: UserUuid, schedule: &EventSchedule, quantity: u32) -> CartItemRecord {
        let line = CartLine::snapshot(schedule, quantity);

        CartItemRecord {
            user_uuid: user,
            schedule_uuid: schedule.uuid,
            schedule: ScheduleSnapshot::from(&line),
            quantity,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn sync(user: UserUuid, service: MockCartsService) -> CartSync<MemoryStorage> {
        CartSync::new(
            user,
            Arc::new(service),
            CartStore::init(MemoryStorage::new(), PromotionTable::tiered(), GBP),
        )
    }

    #[tokio::test]
    async fn add_applies_locally_and_pushes() -> TestResult {
        let user = UserUuid::new();
        let show = schedule(Some(15_00));
        let pushed = record(user, &show, 2);

        let mut service = MockCartsService::new();
        let expected = NewCartItem {
            schedule: show.uuid,
            quantity: 2,
        };

        service
            .expect_add_item()
            .with(eq(user), eq(expected))
            .times(1)
            .return_once(move |_, _| Ok(pushed));

        let mut sync = sync(user, service);

        assert_eq!(sync.add_to_cart(&show, 2).await?, AddOutcome::Created);
        assert_eq!(sync.store().cart_count(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn unpriced_add_is_not_pushed() -> TestResult {
        let mut service = MockCartsService::new();
        service.expect_add_item().never();

        let mut sync = sync(UserUuid::new(), service);

        assert_eq!(
            sync.add_to_cart(&schedule(None), 1).await?,
            AddOutcome::Unpriced
        );
        assert!(sync.store().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn failed_push_keeps_local_change() {
        let mut service = MockCartsService::new();
        service
            .expect_add_item()
            .return_once(|_, _| Err(CartsServiceError::ScheduleNotFound));

        let mut sync = sync(UserUuid::new(), service);
        let show = schedule(Some(10_00));

        let result = sync.add_to_cart(&show, 1).await;

        assert!(
            matches!(result, Err(SyncError::Remote(CartsServiceError::ScheduleNotFound))),
            "expected Remote(ScheduleNotFound), got {result:?}"
        );
        assert_eq!(sync.store().distinct_item_count(), 1);
    }

    #[tokio::test]
    async fn update_quantity_zero_removes_on_both_sides() -> TestResult {
        let user = UserUuid::new();
        let show = schedule(Some(10_00));
        let pushed = record(user, &show, 1);

        let mut service = MockCartsService::new();
        service
            .expect_add_item()
            .return_once(move |_, _| Ok(pushed));
        service
            .expect_update_quantity()
            .with(eq(user), eq(show.uuid), eq(0))
            .times(1)
            .return_once(|_, schedule, _| Ok(QuantityUpdate::Removed(schedule)));

        let mut sync = sync(user, service);

        sync.add_to_cart(&show, 1).await?;

        assert_eq!(
            sync.update_quantity(show.uuid, 0).await?,
            QuantityChange::Removed
        );
        assert!(sync.store().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn removal_of_line_missing_locally_is_still_pushed() -> TestResult {
        let user = UserUuid::new();
        let elsewhere = ScheduleUuid::new();

        let mut service = MockCartsService::new();
        service
            .expect_update_quantity()
            .with(eq(user), eq(elsewhere), eq(0))
            .times(1)
            .return_once(|_, schedule, _| Ok(QuantityUpdate::Removed(schedule)));

        let mut sync = sync(user, service);

        assert_eq!(
            sync.update_quantity(elsewhere, 0).await?,
            QuantityChange::Missing
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_quantity_for_missing_line_is_not_pushed() -> TestResult {
        let mut service = MockCartsService::new();
        service.expect_update_quantity().never();

        let mut sync = sync(UserUuid::new(), service);

        assert_eq!(
            sync.update_quantity(ScheduleUuid::new(), 4).await?,
            QuantityChange::Missing
        );

        Ok(())
    }

    #[tokio::test]
    async fn remove_is_pushed_whether_or_not_line_existed() -> TestResult {
        let user = UserUuid::new();
        let show = schedule(Some(10_00));
        let pushed = record(user, &show, 1);

        let mut service = MockCartsService::new();
        service
            .expect_add_item()
            .return_once(move |_, _| Ok(pushed));
        service
            .expect_remove_item()
            .with(eq(user), eq(show.uuid))
            .times(2)
            .returning(|_, schedule| Ok(schedule));

        let mut sync = sync(user, service);

        sync.add_to_cart(&show, 1).await?;

        assert!(sync.remove_from_cart(show.uuid).await?);
        assert!(!sync.remove_from_cart(show.uuid).await?);

        Ok(())
    }

    #[tokio::test]
    async fn remove_unknown_on_both_sides_reports_not_found() {
        let mut service = MockCartsService::new();
        service
            .expect_remove_item()
            .times(1)
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let mut sync = sync(UserUuid::new(), service);

        let result = sync.remove_from_cart(ScheduleUuid::new()).await;

        assert!(
            matches!(result, Err(SyncError::Remote(CartsServiceError::NotFound))),
            "expected Remote(NotFound), got {result:?}"
        );
    }

    #[tokio::test]
    async fn pull_replaces_local_lines_with_server_items() -> TestResult {
        let user = UserUuid::new();
        let first = schedule(Some(10_00));
        let second = schedule(Some(30_00));
        let items = vec![record(user, &first, 1), record(user, &second, 2)];

        let mut service = MockCartsService::new();
        service
            .expect_list_items()
            .with(eq(user))
            .return_once(move |_| Ok(items));

        let mut sync = sync(user, service);

        sync.pull().await?;

        let store = sync.into_store();

        assert_eq!(store.distinct_item_count(), 2);
        assert_eq!(store.cart_count(), 3);
        assert_eq!(store.summary()?.discount.to_minor_units(), 3_50);

        Ok(())
    }

    #[tokio::test]
    async fn clear_empties_both_sides() -> TestResult {
        let user = UserUuid::new();

        let mut service = MockCartsService::new();
        service
            .expect_clear()
            .with(eq(user))
            .times(1)
            .return_once(|_| Ok(0));

        let mut sync = sync(user, service);

        sync.clear_cart().await?;

        assert!(sync.store().is_empty());

        Ok(())
    }
}
