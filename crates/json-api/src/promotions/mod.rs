//! Promotions

pub(crate) mod index;
