//! Cart
//!
//! The caller's server-side cart. Totals and discounts are recomputed from the
//! stored snapshots on every read.

mod errors;
pub(crate) mod handlers;
pub(crate) mod items;
mod models;

use salvo::prelude::StatusError;
use setlist::{
    cart::{CartLine, CartStore},
    storage::MemoryStorage,
};
use setlist_app::domain::users::records::UserUuid;

use crate::{extensions::*, state::State};

pub(crate) use handlers::*;

/// The user's stored items as cart lines, oldest first.
async fn load_lines(state: &State, user: UserUuid) -> Result<Vec<CartLine>, StatusError> {
    let items = state
        .app
        .carts
        .list_items(user)
        .await
        .map_err(errors::into_status_error)?;

    Ok(items.into_iter().map(CartLine::from).collect())
}

/// A throwaway store over the user's stored items, for pricing and selection.
async fn load_store(
    state: &State,
    user: UserUuid,
) -> Result<CartStore<MemoryStorage>, StatusError> {
    let lines = load_lines(state, user).await?;

    let mut store = CartStore::init(
        MemoryStorage::new(),
        state.promotions.clone(),
        state.currency,
    );

    store
        .replace_lines(lines)
        .or_500("failed to load cart lines")?;

    Ok(store)
}
