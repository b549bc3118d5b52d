//! MMP necessity classification using composed predicates.
//!
//! Two signals gate the verdict: whether spend reaches the effective budget
//! threshold, and whether measurement is complex (several channels, or
//! affiliate partners that need postbacks). Two-axis mode maps the four
//! combinations to four categories; single-axis mode folds the
//! "high budget, single channel" quadrant into `NotNeeded`.

use serde::{Deserialize, Serialize};

use crate::config::ClassificationMode;
use crate::core::MmpCategory;

/// Category plus the two signals that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MmpClassification {
    pub category: MmpCategory,
    pub is_high_budget: bool,
    pub is_high_complexity: bool,
}

/// Pure MMP classification. Total over its input domain, no side effects.
pub fn classify_mmp(
    monthly_budget: f64,
    channel_count: u32,
    uses_affiliate: bool,
    effective_budget_threshold: f64,
    mode: ClassificationMode,
) -> MmpClassification {
    let is_high_budget = is_high_budget(monthly_budget, effective_budget_threshold);
    let is_high_complexity = is_high_complexity(channel_count, uses_affiliate);

    let category = if mode.is_two_axis() {
        two_axis_category(is_high_budget, is_high_complexity)
    } else {
        single_axis_category(is_high_budget, is_high_complexity)
    };

    MmpClassification {
        category,
        is_high_budget,
        is_high_complexity,
    }
}

/// More than one channel needs deduplication; affiliates need postbacks.
pub fn is_high_complexity(channel_count: u32, uses_affiliate: bool) -> bool {
    channel_count > 1 || uses_affiliate
}

pub fn is_high_budget(monthly_budget: f64, effective_budget_threshold: f64) -> bool {
    monthly_budget >= effective_budget_threshold
}

fn two_axis_category(high_budget: bool, high_complexity: bool) -> MmpCategory {
    match (high_budget, high_complexity) {
        (true, true) => MmpCategory::Necessary,
        (true, false) => MmpCategory::GrayZoneRisk,
        (false, true) => MmpCategory::TechnicalNeed,
        (false, false) => MmpCategory::NotNeeded,
    }
}

/// High budget alone never escalates here.
fn single_axis_category(high_budget: bool, high_complexity: bool) -> MmpCategory {
    match (high_complexity, high_budget) {
        (true, true) => MmpCategory::Necessary,
        (true, false) => MmpCategory::TechnicalNeed,
        (false, _) => MmpCategory::NotNeeded,
    }
}
