//! Setlist prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{AddOutcome, CartLine, CartStore, CartStoreError, CheckoutSelection, QuantityChange},
    pricing::{CartSummary, PricingError, summarize},
    promotions::{PromotionError, PromotionRule, PromotionTable, evaluate},
    schedules::{EventSchedule, EventStatus, EventType, ScheduleUuid, Venue},
    storage::{CartStorage, FileStorage, MemoryStorage, StorageError},
    uuids::TypedUuid,
};
