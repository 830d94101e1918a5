//! Clear Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{cart::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClearCartResponse {
    /// Number of items removed
    pub removed: u64,
}

/// Clear Cart Handler
#[endpoint(
    tags("cart"),
    summary = "Clear Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart emptied"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ClearCartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let removed = state
        .app
        .carts
        .clear(identity.user)
        .await
        .map_err(into_status_error)?;

    info!(user_uuid = %identity.user, removed, "cleared cart");

    Ok(Json(ClearCartResponse { removed }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use setlist_app::domain::carts::MockCartsService;
    use testresult::TestResult;

    use crate::test_helpers::{TEST_USER_UUID, carts_service};

    use super::*;

    #[tokio::test]
    async fn test_clear_reports_removed_items() -> TestResult {
        let mut repo = MockCartsService::new();

        repo.expect_clear()
            .once()
            .withf(|user| *user == TEST_USER_UUID)
            .return_once(|_| Ok(3));

        let response: ClearCartResponse = TestClient::delete("http://example.com/cart")
            .send(&carts_service(repo, Router::with_path("cart").delete(handler)))
            .await
            .take_json()
            .await?;

        assert_eq!(response.removed, 3);

        Ok(())
    }
}
