//! Promotions
//!
//! Tiered promotions keyed on the number of distinct event schedules in a
//! cart. Rules are held in descending threshold order so the first rule a
//! count satisfies is the most generous one; only that rule applies.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Errors raised while building a promotion table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromotionError {
    /// A rule asks for zero distinct items, which would apply to every cart.
    #[error("promotion rule thresholds must be at least 1")]
    ZeroThreshold,

    /// Two rules share the same threshold (threshold).
    #[error("more than one promotion rule has a threshold of {0} items")]
    DuplicateThreshold(usize),

    /// A rule discounts more than the whole price (percent).
    #[error("promotion rule percentage {0} exceeds 100")]
    PercentOutOfRange(u8),
}

/// A single discount tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRule {
    min_items: usize,
    percent: u8,
    description: String,
}

impl PromotionRule {
    /// Create a new rule: `percent` off when at least `min_items` distinct
    /// schedules are in the cart.
    pub fn new(min_items: usize, percent: u8, description: impl Into<String>) -> Self {
        Self {
            min_items,
            percent,
            description: description.into(),
        }
    }

    /// Minimum number of distinct items required.
    pub const fn min_items(&self) -> usize {
        self.min_items
    }

    /// Discount in whole percentage points.
    pub const fn percent(&self) -> u8 {
        self.percent
    }

    /// Human readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The discount as a fractional percentage (15% is `0.15`).
    pub fn percentage(&self) -> Percentage {
        Percentage::from(Decimal::new(i64::from(self.percent), 2))
    }

    /// Whether this rule applies to a cart holding `distinct_items` schedules.
    pub const fn is_met_by(&self, distinct_items: usize) -> bool {
        distinct_items >= self.min_items
    }
}

/// Ordered promotion rules, highest threshold first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromotionTable {
    rules: SmallVec<[PromotionRule; 4]>,
}

impl PromotionTable {
    /// Build a table from rules in any order.
    ///
    /// # Errors
    ///
    /// - [`PromotionError::ZeroThreshold`]: a rule has a threshold of zero.
    /// - [`PromotionError::DuplicateThreshold`]: two rules share a threshold.
    /// - [`PromotionError::PercentOutOfRange`]: a rule discounts more than 100%.
    pub fn new(rules: impl IntoIterator<Item = PromotionRule>) -> Result<Self, PromotionError> {
        let mut rules: SmallVec<[PromotionRule; 4]> = rules.into_iter().collect();
        let mut seen = FxHashSet::default();

        for rule in &rules {
            if rule.min_items == 0 {
                return Err(PromotionError::ZeroThreshold);
            }

            if rule.percent > 100 {
                return Err(PromotionError::PercentOutOfRange(rule.percent));
            }

            if !seen.insert(rule.min_items) {
                return Err(PromotionError::DuplicateThreshold(rule.min_items));
            }
        }

        rules.sort_by(|a, b| b.min_items.cmp(&a.min_items));

        Ok(Self { rules })
    }

    /// The production tiers: 4+ distinct events for 15%, 3 for 10%, 2 for 5%.
    pub fn tiered() -> Self {
        Self {
            rules: SmallVec::from_vec(vec![
                PromotionRule::new(4, 15, "Buy tickets for 4 or more events, get 15% off"),
                PromotionRule::new(3, 10, "Buy tickets for 3 events, get 10% off"),
                PromotionRule::new(2, 5, "Buy tickets for 2 events, get 5% off"),
            ]),
        }
    }

    /// A table with no rules; nothing is ever discounted.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[PromotionRule] {
        &self.rules
    }

    /// The rule that applies to `distinct_items`, if any.
    pub fn best_for(&self, distinct_items: usize) -> Option<&PromotionRule> {
        evaluate(&self.rules, distinct_items)
    }
}

/// Return the first rule in `rules` met by `distinct_items`.
///
/// `rules` must be sorted by descending threshold, as [`PromotionTable`]
/// guarantees.
pub fn evaluate(rules: &[PromotionRule], distinct_items: usize) -> Option<&PromotionRule> {
    rules.iter().find(|rule| rule.is_met_by(distinct_items))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn tiered_table_picks_single_highest_tier() {
        let table = PromotionTable::tiered();

        assert_eq!(table.best_for(0), None);
        assert_eq!(table.best_for(1), None);
        assert_eq!(table.best_for(2).map(PromotionRule::percent), Some(5));
        assert_eq!(table.best_for(3).map(PromotionRule::percent), Some(10));
        assert_eq!(table.best_for(4).map(PromotionRule::percent), Some(15));
        assert_eq!(table.best_for(12).map(PromotionRule::percent), Some(15));
    }

    #[test]
    fn new_sorts_rules_descending() -> TestResult {
        let table = PromotionTable::new([
            PromotionRule::new(2, 5, "two"),
            PromotionRule::new(4, 15, "four"),
            PromotionRule::new(3, 10, "three"),
        ])?;

        let thresholds: Vec<usize> = table.rules().iter().map(PromotionRule::min_items).collect();

        assert_eq!(thresholds, vec![4, 3, 2]);
        assert_eq!(table.best_for(3).map(PromotionRule::description), Some("three"));

        Ok(())
    }

    #[test]
    fn new_rejects_duplicate_thresholds() {
        let result = PromotionTable::new([
            PromotionRule::new(2, 5, "a"),
            PromotionRule::new(2, 10, "b"),
        ]);

        assert_eq!(result, Err(PromotionError::DuplicateThreshold(2)));
    }

    #[test]
    fn new_rejects_zero_threshold_and_excess_percent() {
        assert_eq!(
            PromotionTable::new([PromotionRule::new(0, 5, "always")]),
            Err(PromotionError::ZeroThreshold)
        );

        assert_eq!(
            PromotionTable::new([PromotionRule::new(2, 101, "too much")]),
            Err(PromotionError::PercentOutOfRange(101))
        );
    }

    #[test]
    fn empty_table_never_discounts() {
        assert_eq!(PromotionTable::empty().best_for(100), None);
    }

    #[test]
    fn evaluate_works_on_a_plain_slice() {
        let rules = [PromotionRule::new(3, 20, "three"), PromotionRule::new(1, 1, "one")];

        assert_eq!(evaluate(&rules, 2).map(PromotionRule::percent), Some(1));
        assert_eq!(evaluate(&rules, 0), None);
    }

    #[test]
    fn percentage_is_fractional() {
        let rule = PromotionRule::new(2, 5, "two");

        assert_eq!(rule.percentage() * Decimal::ONE_HUNDRED, Decimal::new(5, 0));
    }
}
