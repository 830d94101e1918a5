//! Checkout Selection Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use setlist::schedules::ScheduleUuid;
use tracing::debug;
use uuid::Uuid;

use crate::{
    cart::{
        load_store,
        models::{CartItemResponse, SummaryResponse},
    },
    extensions::*,
    state::State,
};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutRequest {
    /// Schedules to buy now; the rest stay in the cart
    pub schedule_uuids: Vec<Uuid>,
}

/// Checkout Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutResponse {
    /// Selected lines in cart order
    pub items: Vec<CartItemResponse>,

    /// Totals and promotion over the selected lines only
    pub summary: SummaryResponse,
}

/// Checkout Selection Handler
///
/// Prices a subset of the cart. The promotion is chosen from the number of
/// selected schedules, not the whole cart. Nothing is changed.
#[endpoint(
    tags("cart"),
    summary = "Price Checkout Selection",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Selection priced"),
        (status_code = StatusCode::NOT_FOUND, description = "A selected schedule is not in the cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let mut store = load_store(state, identity.user).await?;

    for uuid in json.into_inner().schedule_uuids {
        let uuid = ScheduleUuid::from(uuid);

        if store.line(&uuid).is_none() {
            debug!(schedule_uuid = %uuid, "checkout selection names a schedule not in the cart");

            return Err(
                StatusError::not_found().brief(format!("Schedule {uuid} is not in the cart"))
            );
        }

        if !store.selection().contains(&uuid) {
            store.toggle_selection(uuid);
        }
    }

    let summary = store.selected_summary().or_500("failed to price selection")?;

    Ok(Json(CheckoutResponse {
        summary: SummaryResponse::new(&summary, store.currency()),
        items: store
            .selected_lines()
            .cloned()
            .map(CartItemResponse::from)
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use setlist_app::domain::carts::MockCartsService;
    use testresult::TestResult;

    use crate::test_helpers::{carts_service, make_item};

    use super::*;

    fn make_service(repo: MockCartsService) -> Service {
        carts_service(repo, Router::with_path("cart/checkout").post(handler))
    }

    fn cart_of_three(uuids: [ScheduleUuid; 3]) -> MockCartsService {
        let mut repo = MockCartsService::new();

        repo.expect_list_items().once().return_once(move |_| {
            Ok(vec![
                make_item(uuids[0], 40_00, 1),
                make_item(uuids[1], 30_00, 2),
                make_item(uuids[2], 20_00, 1),
            ])
        });

        repo
    }

    #[tokio::test]
    async fn test_selection_uses_its_own_promotion_tier() -> TestResult {
        let uuids = [ScheduleUuid::new(), ScheduleUuid::new(), ScheduleUuid::new()];

        let response: CheckoutResponse = TestClient::post("http://example.com/cart/checkout")
            .json(&json!({ "scheduleUuids": [uuids[2], uuids[0], uuids[2]] }))
            .send(&make_service(cart_of_three(uuids)))
            .await
            .take_json()
            .await?;

        let selected: Vec<Uuid> = response
            .items
            .iter()
            .map(|item| item.schedule_uuid)
            .collect();

        assert_eq!(selected, vec![uuids[0].into_uuid(), uuids[2].into_uuid()]);
        assert_eq!(response.summary.distinct_items, 2);
        assert_eq!(response.summary.total, 60_00);
        assert_eq!(response.summary.discount, 3_00);
        assert_eq!(response.summary.final_price, 57_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_selection_is_free() -> TestResult {
        let uuids = [ScheduleUuid::new(), ScheduleUuid::new(), ScheduleUuid::new()];

        let response: CheckoutResponse = TestClient::post("http://example.com/cart/checkout")
            .json(&json!({ "scheduleUuids": [] }))
            .send(&make_service(cart_of_three(uuids)))
            .await
            .take_json()
            .await?;

        assert!(response.items.is_empty());
        assert_eq!(response.summary.cart_count, 0);
        assert!(response.summary.promotion.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_schedule_returns_404() {
        let uuids = [ScheduleUuid::new(), ScheduleUuid::new(), ScheduleUuid::new()];

        let res = TestClient::post("http://example.com/cart/checkout")
            .json(&json!({ "scheduleUuids": [ScheduleUuid::new()] }))
            .send(&make_service(cart_of_three(uuids)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
