//! Cart Data

use setlist::schedules::ScheduleUuid;

/// New Cart Item Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub schedule: ScheduleUuid,
    pub quantity: u32,
}

/// Result of a quantity update.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityUpdate {
    /// The record now holds the new quantity.
    Updated(super::records::CartItemRecord),

    /// The quantity was zero or less, so the record was deleted.
    Removed(ScheduleUuid),
}
