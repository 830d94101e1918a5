//! State

use std::sync::Arc;

use rusty_money::iso::Currency;
use setlist::promotions::PromotionTable;
use setlist_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Discount tiers applied to every cart.
    pub(crate) promotions: PromotionTable,

    /// Currency ticket prices are stored in.
    pub(crate) currency: &'static Currency,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        app: AppContext,
        promotions: PromotionTable,
        currency: &'static Currency,
    ) -> Self {
        Self {
            app,
            promotions,
            currency,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, currency: &'static Currency) -> Arc<Self> {
        Arc::new(Self::new(app, PromotionTable::tiered(), currency))
    }
}
