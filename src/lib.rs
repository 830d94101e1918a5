//! Setlist
//!
//! Setlist is the ticket cart behind a band's event listings: cart lines,
//! checkout selection and tiered promotions keyed on how many distinct events
//! are in the cart.

pub mod cart;
pub mod prelude;
pub mod pricing;
pub mod promotions;
pub mod schedules;
pub mod storage;
pub mod uuids;
