//! Effective threshold resolution.
//!
//! Runs before either classification axis: picks the budget threshold for
//! the MMP axis and the iOS budget the SKAN axis is scored on.

use serde::{Deserialize, Serialize};

use crate::config::{BudgetThresholds, IOS_HEAVY_SHARE};

/// Thresholds and derived budgets for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedThresholds {
    pub effective_budget_threshold: f64,
    pub effective_ios_budget: f64,
    pub ios_threshold_applied: bool,
}

/// Pure resolution step; inputs are already validated.
///
/// The budget threshold is a step function of `ios_share`: the base
/// threshold up to and including [`IOS_HEAVY_SHARE`] percent, the iOS
/// threshold above it.
pub fn resolve(
    ios_share: u8,
    monthly_budget: f64,
    dedicated_ios_budget: Option<f64>,
    thresholds: &BudgetThresholds,
) -> ResolvedThresholds {
    let ios_threshold_applied = is_ios_heavy(ios_share);
    let effective_budget_threshold = if ios_threshold_applied {
        thresholds.ios_budget_threshold
    } else {
        thresholds.budget_threshold
    };

    ResolvedThresholds {
        effective_budget_threshold,
        effective_ios_budget: effective_ios_budget(ios_share, monthly_budget, dedicated_ios_budget),
        ios_threshold_applied,
    }
}

pub fn is_ios_heavy(ios_share: u8) -> bool {
    ios_share > IOS_HEAVY_SHARE
}

/// Dedicated iOS budget when one is set, otherwise the iOS share of the
/// monthly budget.
pub fn effective_ios_budget(
    ios_share: u8,
    monthly_budget: f64,
    dedicated_ios_budget: Option<f64>,
) -> f64 {
    dedicated_ios_budget.unwrap_or_else(|| share_of(monthly_budget, ios_share))
}

/// `percent`% of `amount`, never above `amount`.
fn share_of(amount: f64, percent: u8) -> f64 {
    // Multiply first so whole-unit budgets stay exact; near f64::MAX that
    // overflows, so divide first there.
    let scaled = amount * f64::from(percent);
    let share = if scaled.is_finite() {
        scaled / 100.0
    } else {
        amount / 100.0 * f64::from(percent)
    };
    share.min(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn eur() -> BudgetThresholds {
        BudgetThresholds::new(2_000.0, 800.0)
    }

    #[test]
    fn test_base_threshold_at_and_below_half() {
        let resolved = resolve(50, 1_000.0, None, &eur());
        assert_eq!(resolved.effective_budget_threshold, 2_000.0);
        assert!(!resolved.ios_threshold_applied);
        assert_eq!(resolved.effective_ios_budget, 500.0);
    }

    #[test]
    fn test_ios_threshold_above_half() {
        let resolved = resolve(60, 1_000.0, None, &eur());
        assert_eq!(resolved.effective_budget_threshold, 800.0);
        assert!(resolved.ios_threshold_applied);
        assert_eq!(resolved.effective_ios_budget, 600.0);
    }

    #[test]
    fn test_dedicated_budget_overrides_share() {
        let resolved = resolve(10, 5_000.0, Some(1_200.0), &eur());
        assert_eq!(resolved.effective_ios_budget, 1_200.0);
        assert_eq!(resolved.effective_budget_threshold, 2_000.0);
    }

    #[test]
    fn test_huge_budget_does_not_overflow() {
        let budget = 1e307;
        let ios = effective_ios_budget(100, budget, None);
        assert!(ios.is_finite());
        assert!(ios <= budget && (budget - ios) / budget < 1e-15);

        let ios = effective_ios_budget(60, f64::MAX, None);
        assert!(ios.is_finite());
        assert!(ios <= f64::MAX && ios > f64::MAX / 2.0);
    }

    #[test]
    fn test_zero_share_zero_ios_budget() {
        assert_eq!(effective_ios_budget(0, 20_000.0, None), 0.0);
    }

    proptest! {
        #[test]
        fn prop_threshold_is_one_of_two_constants(
            share in 0u8..=100,
            budget in 0u32..1_000_000,
        ) {
            let t = eur();
            let resolved = resolve(share, f64::from(budget), None, &t);
            if share > 50 {
                prop_assert_eq!(resolved.effective_budget_threshold, t.ios_budget_threshold);
            } else {
                prop_assert_eq!(resolved.effective_budget_threshold, t.budget_threshold);
            }
        }

        #[test]
        fn prop_large_budgets_keep_ios_budget_bounded(
            share in 0u8..=100,
            exponent in 300i32..=307,
            mantissa in 1.0f64..10.0,
        ) {
            let budget = mantissa * 10f64.powi(exponent);
            let ios = effective_ios_budget(share, budget, None);
            prop_assert!(ios.is_finite());
            prop_assert!(ios <= budget);
        }

        #[test]
        fn prop_derived_ios_budget_within_monthly_budget(
            share in 0u8..=100,
            budget in 0u32..10_000_000,
        ) {
            let budget = f64::from(budget);
            let ios = effective_ios_budget(share, budget, None);
            prop_assert!(ios >= 0.0);
            prop_assert!(ios <= budget);
        }
    }
}
