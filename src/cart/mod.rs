//! Cart
//!
//! A session-local cart of event schedules. The store owns its lines, the
//! checkout selection and the durable storage they are written to. Totals and
//! discounts are never cached; every read recomputes them from the lines.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    pricing::{CartSummary, PricingError, summarize},
    promotions::{PromotionRule, PromotionTable},
    schedules::{EventSchedule, ScheduleUuid},
    storage::{CartStorage, StorageError},
};

pub mod line;
pub mod selection;

#[cfg(test)]
pub(crate) mod test_support;

pub use line::CartLine;
pub use selection::CheckoutSelection;

/// Errors from cart store mutations.
///
/// When a mutation returns [`CartStoreError::Storage`] or
/// [`CartStoreError::Encode`] the in-memory change has already been applied.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// Quantity must be at least one and fit a line quantity.
    #[error("quantity must be at least 1 and fit a line quantity")]
    InvalidQuantity,

    /// Writing to durable storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Cart lines could not be serialized.
    #[error(transparent)]
    Encode(#[from] serde_json::Error),
}

/// What [`CartStore::add_to_cart`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was created.
    Created,

    /// An existing line's quantity was increased.
    Incremented,

    /// The schedule has no price, so nothing changed.
    Unpriced,
}

/// What [`CartStore::update_quantity`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now has the requested quantity.
    Updated,

    /// The line was removed because the quantity was zero or less.
    Removed,

    /// No line exists for the schedule.
    Missing,
}

/// Cart Store
#[derive(Debug)]
pub struct CartStore<S: CartStorage> {
    storage: S,
    rules: PromotionTable,
    currency: &'static Currency,
    lines: Vec<CartLine>,
    selection: CheckoutSelection,
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store, loading any lines already in `storage`.
    ///
    /// Unreadable or malformed storage is logged and treated as an empty cart.
    pub fn init(storage: S, rules: PromotionTable, currency: &'static Currency) -> Self {
        let lines = match storage.load() {
            Ok(Some(contents)) => match serde_json::from_str::<Vec<CartLine>>(&contents) {
                Ok(lines) => normalize_lines(lines).unwrap_or_else(|error| {
                    warn!(%error, "cart storage is inconsistent, starting with an empty cart");

                    Vec::new()
                }),
                Err(error) => {
                    warn!(%error, "cart storage is malformed, starting with an empty cart");

                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(error) => {
                warn!(%error, "cart storage could not be read, starting with an empty cart");

                Vec::new()
            }
        };

        debug!(lines = lines.len(), "cart store initialised");

        Self {
            storage,
            rules,
            currency,
            lines,
            selection: CheckoutSelection::new(),
        }
    }

    /// Tear the store down, handing back its storage.
    pub fn dispose(self) -> S {
        self.storage
    }

    /// Add `quantity` tickets for `schedule`.
    ///
    /// Schedules without a price are ignored with a warning.
    ///
    /// # Errors
    ///
    /// - [`CartStoreError::InvalidQuantity`]: `quantity` is zero, or the line
    ///   total would overflow. The cart is left unchanged.
    /// - [`CartStoreError::Storage`]: the change could not be persisted.
    pub fn add_to_cart(
        &mut self,
        schedule: &EventSchedule,
        quantity: u32,
    ) -> Result<AddOutcome, CartStoreError> {
        if quantity == 0 {
            return Err(CartStoreError::InvalidQuantity);
        }

        if !schedule.is_purchasable() {
            warn!(schedule = %schedule.uuid, "ignoring schedule without a price");

            return Ok(AddOutcome::Unpriced);
        }

        let outcome = match self.line_mut(&schedule.uuid) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartStoreError::InvalidQuantity)?;

                AddOutcome::Incremented
            }
            None => {
                self.lines.push(CartLine::snapshot(schedule, quantity));

                AddOutcome::Created
            }
        };

        self.persist()?;

        Ok(outcome)
    }

    /// Remove the line for `uuid` and deselect it. Returns whether a line was removed.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Storage`] if the change could not be persisted.
    pub fn remove_from_cart(&mut self, uuid: &ScheduleUuid) -> Result<bool, CartStoreError> {
        let before = self.lines.len();

        self.lines.retain(|line| line.uuid != *uuid);
        self.selection.deselect(uuid);

        if self.lines.len() == before {
            return Ok(false);
        }

        self.persist()?;

        Ok(true)
    }

    /// Set the quantity for `uuid`. Zero or less removes the line.
    ///
    /// # Errors
    ///
    /// - [`CartStoreError::InvalidQuantity`]: `quantity` doesn't fit a line quantity.
    /// - [`CartStoreError::Storage`]: the change could not be persisted.
    pub fn update_quantity(
        &mut self,
        uuid: &ScheduleUuid,
        quantity: i64,
    ) -> Result<QuantityChange, CartStoreError> {
        if quantity <= 0 {
            return Ok(if self.remove_from_cart(uuid)? {
                QuantityChange::Removed
            } else {
                QuantityChange::Missing
            });
        }

        let quantity = u32::try_from(quantity).map_err(|_overflow| CartStoreError::InvalidQuantity)?;

        let Some(line) = self.line_mut(uuid) else {
            return Ok(QuantityChange::Missing);
        };

        line.quantity = quantity;

        self.persist()?;

        Ok(QuantityChange::Updated)
    }

    /// Empty the cart and the selection, and clear durable storage.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Storage`] if storage could not be cleared.
    pub fn clear_cart(&mut self) -> Result<(), CartStoreError> {
        self.lines.clear();
        self.selection.deselect_all();
        self.storage.clear()?;

        Ok(())
    }

    /// Adopt `lines` as the whole cart.
    ///
    /// Lines for the same schedule are merged, zero quantities dropped and the
    /// selection pruned to the surviving schedules.
    ///
    /// # Errors
    ///
    /// - [`CartStoreError::InvalidQuantity`]: merged quantities overflow. The
    ///   cart is left unchanged.
    /// - [`CartStoreError::Storage`]: the change could not be persisted.
    pub fn replace_lines(
        &mut self,
        lines: impl IntoIterator<Item = CartLine>,
    ) -> Result<(), CartStoreError> {
        self.lines = normalize_lines(lines)?;
        self.prune_selection();
        self.persist()
    }

    /// Lines in the order they were added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Line for `uuid`, if present.
    pub fn line(&self, uuid: &ScheduleUuid) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.uuid == *uuid)
    }

    /// The promotion table in use.
    pub fn rules(&self) -> &PromotionTable {
        &self.rules
    }

    /// The store currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of tickets.
    pub fn cart_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Number of distinct schedules.
    pub fn distinct_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Price before discount.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the total can't be represented.
    pub fn total_price(&self) -> Result<Money<'static, Currency>, PricingError> {
        Ok(self.summary()?.total)
    }

    /// Discount from the applicable promotion.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the discount can't be represented.
    pub fn discount(&self) -> Result<Money<'static, Currency>, PricingError> {
        Ok(self.summary()?.discount)
    }

    /// Price after discount.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the price can't be represented.
    pub fn final_price(&self) -> Result<Money<'static, Currency>, PricingError> {
        Ok(self.summary()?.final_price)
    }

    /// The promotion that applies to the whole cart.
    pub fn applicable_promotion(&self) -> Option<&PromotionRule> {
        self.rules.best_for(self.distinct_item_count())
    }

    /// All derived figures for the whole cart.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if any figure can't be represented.
    pub fn summary(&self) -> Result<CartSummary, PricingError> {
        summarize(&self.lines, &self.rules, self.currency)
    }

    /// The checkout selection.
    pub fn selection(&self) -> &CheckoutSelection {
        &self.selection
    }

    /// Flip `uuid` in or out of the selection. Returns whether it is now selected.
    ///
    /// Schedules not in the cart can't be selected.
    pub fn toggle_selection(&mut self, uuid: ScheduleUuid) -> bool {
        if self.line(&uuid).is_none() {
            self.selection.deselect(&uuid);

            return false;
        }

        self.selection.toggle(uuid)
    }

    /// Select every line in the cart.
    pub fn select_all(&mut self) {
        self.selection
            .select_all(self.lines.iter().map(|line| line.uuid));
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    /// Selected lines, in cart order.
    pub fn selected_lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines
            .iter()
            .filter(|line| self.selection.contains(&line.uuid))
    }

    /// Derived figures over the selected lines only.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if any figure can't be represented.
    pub fn selected_summary(&self) -> Result<CartSummary, PricingError> {
        summarize(self.selected_lines(), &self.rules, self.currency)
    }

    /// The promotion that applies to the selected lines.
    pub fn promotion_for_selected_items(&self) -> Option<&PromotionRule> {
        self.rules.best_for(self.selected_lines().count())
    }

    fn line_mut(&mut self, uuid: &ScheduleUuid) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.uuid == *uuid)
    }

    fn prune_selection(&mut self) {
        let lines = &self.lines;

        self.selection
            .retain(|uuid| lines.iter().any(|line| line.uuid == *uuid));
    }

    fn persist(&mut self) -> Result<(), CartStoreError> {
        let contents = serde_json::to_string(&self.lines)?;

        self.storage.save(&contents)?;

        Ok(())
    }
}

/// Merge lines for the same schedule and drop empty ones, keeping first-seen order.
fn normalize_lines(
    lines: impl IntoIterator<Item = CartLine>,
) -> Result<Vec<CartLine>, CartStoreError> {
    let mut merged: Vec<CartLine> = Vec::new();

    for line in lines {
        if line.quantity == 0 {
            continue;
        }

        match merged.iter_mut().find(|existing| existing.uuid == line.uuid) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(line.quantity)
                    .ok_or(CartStoreError::InvalidQuantity)?;
            }
            None => merged.push(line),
        }
    }

    Ok(merged)
}
