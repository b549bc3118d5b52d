//! SKAdNetwork relevance scoring.
//!
//! The baseline tier comes from the effective iOS budget alone. Three boost
//! rules can lift a `Low` baseline to `Medium`; each is checked against the
//! original baseline, and none can reach `High` or touch a baseline that is
//! already `Medium` or better.

use serde::{Deserialize, Serialize};

use crate::config::SkanThresholds;
use crate::core::{AppCategory, MonetizationModel, PrimaryGoal, SkanBoost, SkanRelevance};

/// Tier plus the facts the narrative layer needs to explain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkanClassification {
    pub baseline: SkanRelevance,
    pub relevance: SkanRelevance,
    pub boosts: Vec<SkanBoost>,
    pub no_monetization: bool,
}

impl SkanClassification {
    pub fn monetization_boost_applied(&self) -> bool {
        self.boosts.contains(&SkanBoost::Subscription)
    }
}

pub fn classify_skan(
    effective_ios_budget: f64,
    monetization_model: MonetizationModel,
    primary_goal: PrimaryGoal,
    app_category: AppCategory,
    thresholds: &SkanThresholds,
) -> SkanClassification {
    let baseline = baseline_relevance(effective_ios_budget, thresholds);

    let boosts: Vec<SkanBoost> = if baseline == SkanRelevance::Low {
        [
            subscription_boost(monetization_model, effective_ios_budget, thresholds),
            goal_boost(primary_goal, effective_ios_budget, thresholds),
            category_boost(app_category, effective_ios_budget, thresholds),
        ]
        .into_iter()
        .flatten()
        .collect()
    } else {
        Vec::new()
    };

    let relevance = if boosts.is_empty() {
        baseline
    } else {
        SkanRelevance::Medium
    };

    SkanClassification {
        baseline,
        relevance,
        boosts,
        no_monetization: monetization_model == MonetizationModel::NoMonetization,
    }
}

/// Budget-only tier: below `medium_ios_budget` is Low, below
/// `high_ios_budget` is Medium, anything else High.
pub fn baseline_relevance(effective_ios_budget: f64, thresholds: &SkanThresholds) -> SkanRelevance {
    if effective_ios_budget >= thresholds.high_ios_budget {
        SkanRelevance::High
    } else if effective_ios_budget >= thresholds.medium_ios_budget {
        SkanRelevance::Medium
    } else {
        SkanRelevance::Low
    }
}

fn subscription_boost(
    model: MonetizationModel,
    ios_budget: f64,
    thresholds: &SkanThresholds,
) -> Option<SkanBoost> {
    (model.is_subscription() && ios_budget >= thresholds.subscription_boost_min)
        .then_some(SkanBoost::Subscription)
}

fn goal_boost(goal: PrimaryGoal, ios_budget: f64, thresholds: &SkanThresholds) -> Option<SkanBoost> {
    (matches!(goal, PrimaryGoal::Purchase | PrimaryGoal::TrialStart)
        && ios_budget >= thresholds.goal_boost_min)
        .then_some(SkanBoost::ConversionGoal)
}

fn category_boost(
    category: AppCategory,
    ios_budget: f64,
    thresholds: &SkanThresholds,
) -> Option<SkanBoost> {
    (matches!(
        category,
        AppCategory::Finance | AppCategory::ECommerce | AppCategory::Gaming
    ) && ios_budget >= thresholds.category_boost_min)
        .then_some(SkanBoost::HighValueCategory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::select;

    fn classify(
        ios_budget: f64,
        model: MonetizationModel,
        goal: PrimaryGoal,
        category: AppCategory,
    ) -> SkanClassification {
        classify_skan(ios_budget, model, goal, category, &SkanThresholds::default())
    }

    #[test]
    fn test_baseline_tiers() {
        let t = SkanThresholds::default();
        assert_eq!(baseline_relevance(0.0, &t), SkanRelevance::Low);
        assert_eq!(baseline_relevance(499.99, &t), SkanRelevance::Low);
        assert_eq!(baseline_relevance(500.0, &t), SkanRelevance::Medium);
        assert_eq!(baseline_relevance(999.0, &t), SkanRelevance::Medium);
        assert_eq!(baseline_relevance(1_000.0, &t), SkanRelevance::High);
    }

    #[test]
    fn test_subscription_boost_lifts_low_to_medium() {
        let result = classify(
            450.0,
            MonetizationModel::Subscription,
            PrimaryGoal::Install,
            AppCategory::Other,
        );
        assert_eq!(result.baseline, SkanRelevance::Low);
        assert_eq!(result.relevance, SkanRelevance::Medium);
        assert_eq!(result.boosts, vec![SkanBoost::Subscription]);
        assert!(result.monetization_boost_applied());
    }

    #[test]
    fn test_boost_gates_respect_budget() {
        // 350 passes the subscription gate but not the 400 gates.
        let result = classify(
            350.0,
            MonetizationModel::SubscriptionWithTrial,
            PrimaryGoal::Purchase,
            AppCategory::Finance,
        );
        assert_eq!(result.boosts, vec![SkanBoost::Subscription]);

        let result = classify(
            350.0,
            MonetizationModel::InAppPurchases,
            PrimaryGoal::Purchase,
            AppCategory::Finance,
        );
        assert_eq!(result.relevance, SkanRelevance::Low);
        assert!(result.boosts.is_empty());
    }

    #[test]
    fn test_all_boosts_still_cap_at_medium() {
        let result = classify(
            499.0,
            MonetizationModel::Subscription,
            PrimaryGoal::TrialStart,
            AppCategory::Gaming,
        );
        assert_eq!(result.relevance, SkanRelevance::Medium);
        assert_eq!(result.boosts.len(), 3);
    }

    #[test]
    fn test_boosts_ignored_above_low_baseline() {
        let result = classify(
            600.0,
            MonetizationModel::Subscription,
            PrimaryGoal::Purchase,
            AppCategory::ECommerce,
        );
        assert_eq!(result.relevance, SkanRelevance::Medium);
        assert!(result.boosts.is_empty());
        assert!(!result.monetization_boost_applied());
    }

    #[test]
    fn test_no_monetization_flag_does_not_change_tier() {
        let result = classify(
            1_500.0,
            MonetizationModel::NoMonetization,
            PrimaryGoal::Install,
            AppCategory::Utilities,
        );
        assert!(result.no_monetization);
        assert_eq!(result.relevance, SkanRelevance::High);
    }

    proptest! {
        #[test]
        fn prop_relevance_never_below_baseline_nor_boosted_past_medium(
            ios_budget in 0u32..5_000,
            model in select(MonetizationModel::ALL.to_vec()),
            goal in select(PrimaryGoal::ALL.to_vec()),
            category in select(AppCategory::ALL.to_vec()),
        ) {
            let result = classify(f64::from(ios_budget), model, goal, category);
            prop_assert!(result.relevance >= result.baseline);
            if result.baseline == SkanRelevance::Low {
                prop_assert!(result.relevance <= SkanRelevance::Medium);
            } else {
                prop_assert_eq!(result.relevance, result.baseline);
            }
        }

        #[test]
        fn prop_more_ios_budget_never_less_relevant(
            low in 0u32..5_000,
            extra in 0u32..5_000,
            model in select(MonetizationModel::ALL.to_vec()),
            goal in select(PrimaryGoal::ALL.to_vec()),
            category in select(AppCategory::ALL.to_vec()),
        ) {
            let before = classify(f64::from(low), model, goal, category);
            let after = classify(f64::from(low + extra), model, goal, category);
            prop_assert!(after.relevance >= before.relevance);
        }
    }
}
