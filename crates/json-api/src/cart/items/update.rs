//! Update Cart Item Quantity Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use setlist::cart::CartLine;
use setlist_app::domain::carts::data::QuantityUpdate;
use tracing::info;
use uuid::Uuid;

use crate::{
    cart::{
        errors::into_status_error,
        models::{CartItemResponse, RemovedItemResponse},
    },
    extensions::*,
    state::State,
};

/// Update Quantity Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateQuantityRequest {
    /// New ticket count; zero or less removes the item
    pub quantity: i64,
}

/// Update Quantity Response
///
/// The updated item, or a removal acknowledgement when the quantity dropped to
/// zero or less.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum QuantityResponse {
    Updated(CartItemResponse),
    Removed(RemovedItemResponse),
}

impl From<QuantityUpdate> for QuantityResponse {
    fn from(update: QuantityUpdate) -> Self {
        match update {
            QuantityUpdate::Updated(record) => Self::Updated(CartLine::from(record).into()),
            QuantityUpdate::Removed(schedule) => {
                Self::Removed(RemovedItemResponse::new(schedule.into_uuid()))
            }
        }
    }
}

/// Update Cart Item Quantity Handler
#[endpoint(
    tags("cart"),
    summary = "Set Cart Item Quantity",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated or item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    schedule: PathParam<Uuid>,
    json: JsonBody<UpdateQuantityRequest>,
    depot: &mut Depot,
) -> Result<Json<QuantityResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let schedule = schedule.into_inner();
    let quantity = json.into_inner().quantity;

    let update = state
        .app
        .carts
        .update_quantity(identity.user, schedule.into(), quantity)
        .await
        .map_err(into_status_error)?;

    info!(
        user_uuid = %identity.user,
        schedule_uuid = %schedule,
        quantity,
        "set cart item quantity"
    );

    Ok(Json(update.into()))
}
