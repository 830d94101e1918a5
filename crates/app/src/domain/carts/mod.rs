//! Carts
//!
//! Server-side cart persistence: one record per (user, schedule) holding a
//! nested snapshot of the schedule, plus the bridge that keeps a local
//! [`setlist::cart::CartStore`] in step with it.

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;
pub mod sync;

pub use errors::CartsServiceError;
pub use service::*;
pub use sync::{CartSync, SyncError};
