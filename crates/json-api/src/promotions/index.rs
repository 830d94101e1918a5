//! Promotion Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use setlist::promotions::PromotionRule;

use crate::{extensions::*, state::State};

/// Promotion Rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromotionResponse {
    /// Distinct schedules needed for this tier
    pub min_items: usize,

    /// Whole percentage points off the cart total
    pub percent: u8,

    pub description: String,
}

impl From<&PromotionRule> for PromotionResponse {
    fn from(rule: &PromotionRule) -> Self {
        Self {
            min_items: rule.min_items(),
            percent: rule.percent(),
            description: rule.description().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PromotionsResponse {
    /// Tiers in evaluation order, highest threshold first
    pub promotions: Vec<PromotionResponse>,
}

/// Promotion Index Handler
///
/// Returns the discount tiers applied to every cart.
#[endpoint(
    tags("promotions"),
    summary = "List Promotions",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<PromotionsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(PromotionsResponse {
        promotions: state
            .promotions
            .rules()
            .iter()
            .map(PromotionResponse::from)
            .collect(),
    }))
}
