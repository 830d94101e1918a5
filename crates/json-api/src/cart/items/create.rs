//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use setlist::cart::CartLine;
use setlist_app::domain::carts::data::NewCartItem;
use tracing::info;
use uuid::Uuid;

use crate::{
    cart::{errors::into_status_error, models::CartItemResponse},
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    pub schedule_uuid: Uuid,

    /// Tickets to add; defaults to one
    #[serde(default = "one")]
    pub quantity: u32,
}

const fn one() -> u32 {
    1
}

impl From<AddCartItemRequest> for NewCartItem {
    fn from(request: AddCartItemRequest) -> Self {
        NewCartItem {
            schedule: request.schedule_uuid.into(),
            quantity: request.quantity,
        }
    }
}

/// Add Cart Item Handler
///
/// Adds tickets for a schedule. Adding a schedule already in the cart raises
/// its quantity and keeps the original snapshot.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Schedule not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Schedule has no ticket price"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let item = state
        .app
        .carts
        .add_item(identity.user, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    info!(
        user_uuid = %identity.user,
        schedule_uuid = %item.schedule_uuid,
        quantity = item.quantity,
        "added tickets to cart"
    );

    res.add_header(LOCATION, format!("/cart/items/{}", item.schedule_uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(CartLine::from(item).into()))
}
