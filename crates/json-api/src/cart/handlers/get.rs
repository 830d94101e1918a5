//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    cart::{
        load_store,
        models::{CartItemResponse, CartResponse, SummaryResponse},
    },
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// Returns the caller's items with totals, the best promotion and its discount.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart with summary"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let store = load_store(state, identity.user).await?;

    let summary = store.summary().or_500("failed to price cart")?;

    Ok(Json(CartResponse {
        summary: SummaryResponse::new(&summary, store.currency()),
        items: store
            .lines()
            .iter()
            .cloned()
            .map(CartItemResponse::from)
            .collect(),
    }))
}
