//! Cart response bodies.

use rusty_money::iso::Currency;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use setlist::{cart::CartLine, pricing::CartSummary};

use crate::{promotions::index::PromotionResponse, schedules::models::VenueBody};

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    pub schedule_uuid: Uuid,

    pub event_name: String,

    /// Event date, `YYYY-MM-DD`
    pub date: String,

    pub start_time: String,

    pub end_time: Option<String>,

    pub venue: VenueBody,

    #[serde(rename = "type")]
    pub kind: String,

    pub status: String,

    /// Unit price in minor units, as it was when first added
    pub price: Option<u64>,

    pub quantity: u32,
}

impl From<CartLine> for CartItemResponse {
    fn from(line: CartLine) -> Self {
        Self {
            schedule_uuid: line.uuid.into_uuid(),
            event_name: line.event_name,
            date: line.date,
            start_time: line.start_time,
            end_time: line.end_time,
            venue: line.venue.into(),
            kind: line.kind.to_string(),
            status: line.status.to_string(),
            price: line.price,
            quantity: line.quantity,
        }
    }
}

/// Cart Summary Response
///
/// Money amounts are in minor units of `currency`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryResponse {
    /// Tickets across every line
    pub cart_count: u64,

    /// Lines, one per schedule
    pub distinct_items: usize,

    /// ISO 4217 code
    pub currency: String,

    pub total: i64,

    pub discount: i64,

    pub final_price: i64,

    /// Best tier for `distinctItems`, if any
    pub promotion: Option<PromotionResponse>,
}

impl SummaryResponse {
    pub(crate) fn new(summary: &CartSummary, currency: &Currency) -> Self {
        Self {
            cart_count: summary.cart_count,
            distinct_items: summary.distinct_items,
            currency: currency.iso_alpha_code.to_string(),
            total: summary.total.to_minor_units(),
            discount: summary.discount.to_minor_units(),
            final_price: summary.final_price.to_minor_units(),
            promotion: summary.promotion.as_ref().map(PromotionResponse::from),
        }
    }
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Lines in the order they were added
    pub items: Vec<CartItemResponse>,

    pub summary: SummaryResponse,
}

/// Removed Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemovedItemResponse {
    pub schedule_uuid: Uuid,

    pub removed: bool,
}

impl RemovedItemResponse {
    pub(crate) fn new(schedule_uuid: Uuid) -> Self {
        Self {
            schedule_uuid,
            removed: true,
        }
    }
}
