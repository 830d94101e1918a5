//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    cart::{errors::into_status_error, models::RemovedItemResponse},
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart item removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    )
)]
#[tracing::instrument(
    name = "cart.items.delete",
    skip(schedule, depot),
    fields(
        user_uuid = tracing::field::Empty,
        schedule_uuid = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    schedule: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<RemovedItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let schedule = schedule.into_inner();

    let span = tracing::Span::current();

    span.record("user_uuid", tracing::field::display(identity.user));
    span.record("schedule_uuid", tracing::field::display(schedule));

    let removed = state
        .app
        .carts
        .remove_item(identity.user, schedule.into())
        .await
        .map_err(into_status_error)?;

    tracing::info!("removed cart item");

    Ok(Json(RemovedItemResponse::new(removed.into_uuid())))
}
