//! Pricing
//!
//! Cart totals and promotion discounts. Everything is computed in integer
//! minor units; a percentage discount is rounded half away from zero.

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    cart::CartLine,
    promotions::{PromotionRule, PromotionTable},
};

/// Errors that can occur while pricing a cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A line total or the cart total doesn't fit in minor units.
    #[error("cart total overflowed")]
    Overflow,

    /// Percentage calculation could not be safely converted.
    #[error("percentage conversion overflowed")]
    PercentConversion,
}

/// Aggregate figures for a set of cart lines.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    /// Sum of quantities across all lines.
    pub cart_count: u64,

    /// Number of lines; each schedule counts once regardless of quantity.
    pub distinct_items: usize,

    /// Sum of price × quantity. Unpriced lines count as zero.
    pub total: Money<'static, Currency>,

    /// Amount taken off by the applied promotion.
    pub discount: Money<'static, Currency>,

    /// `total - discount`
    pub final_price: Money<'static, Currency>,

    /// The promotion rule that produced `discount`, if any.
    pub promotion: Option<PromotionRule>,
}

/// Price a set of lines against a promotion table.
///
/// # Errors
///
/// - [`PricingError::Overflow`]: the total can't be represented in minor units.
/// - [`PricingError::PercentConversion`]: the discount can't be represented.
pub fn summarize<'l>(
    lines: impl IntoIterator<Item = &'l CartLine>,
    rules: &PromotionTable,
    currency: &'static Currency,
) -> Result<CartSummary, PricingError> {
    let mut cart_count = 0_u64;
    let mut distinct_items = 0_usize;
    let mut total = 0_i64;

    for line in lines {
        cart_count += u64::from(line.quantity);
        distinct_items += 1;
        total = total
            .checked_add(line_total_minor(line)?)
            .ok_or(PricingError::Overflow)?;
    }

    let promotion = rules.best_for(distinct_items).cloned();

    let discount = match &promotion {
        Some(rule) => percent_of_minor(&rule.percentage(), total)?,
        None => 0,
    };

    Ok(CartSummary {
        cart_count,
        distinct_items,
        total: Money::from_minor(total, currency),
        discount: Money::from_minor(discount, currency),
        final_price: Money::from_minor(total - discount, currency),
        promotion,
    })
}

/// Price × quantity for one line, in minor units.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the result doesn't fit in an `i64`.
pub fn line_total_minor(line: &CartLine) -> Result<i64, PricingError> {
    let price = i64::try_from(line.price.unwrap_or(0)).map_err(|_overflow| PricingError::Overflow)?;

    price
        .checked_mul(i64::from(line.quantity))
        .ok_or(PricingError::Overflow)
}

/// Calculate `percent` of a minor unit amount, rounded to the nearest minor unit.
///
/// # Errors
///
/// Returns [`PricingError::PercentConversion`] if the result can't be represented.
pub fn percent_of_minor(percent: &Percentage, minor: i64) -> Result<i64, PricingError> {
    let minor = Decimal::from_i64(minor).ok_or(PricingError::PercentConversion)?;

    ((*percent) * Decimal::ONE)
        .checked_mul(minor)
        .ok_or(PricingError::PercentConversion)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PricingError::PercentConversion)
}
