//! App Router

use salvo::Router;

use crate::{auth, cart, healthcheck, promotions, schedules};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("schedules")
                        .get(schedules::index::handler)
                        .push(
                            Router::new()
                                .hoop(auth::middleware::require_admin)
                                .post(schedules::create::handler),
                        )
                        .push(
                            Router::with_path("{schedule}")
                                .get(schedules::get::handler)
                                .push(
                                    Router::new()
                                        .hoop(auth::middleware::require_admin)
                                        .put(schedules::update::handler)
                                        .delete(schedules::delete::handler),
                                ),
                        ),
                )
                .push(Router::with_path("promotions").get(promotions::index::handler))
                .push(
                    Router::with_path("cart")
                        .get(cart::get::handler)
                        .delete(cart::clear::handler)
                        .push(Router::with_path("checkout").post(cart::checkout::handler))
                        .push(
                            Router::with_path("items")
                                .post(cart::items::create::handler)
                                .push(
                                    Router::with_path("{schedule}")
                                        .put(cart::items::update::handler)
                                        .delete(cart::items::delete::handler),
                                ),
                        ),
                ),
        )
}
