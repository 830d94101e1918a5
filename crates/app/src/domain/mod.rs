//! Setlist Domain Concerns

pub mod carts;
pub mod schedules;
pub mod users;
