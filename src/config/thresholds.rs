use serde::{Deserialize, Serialize};

/// iOS share (percent) above which the lower budget threshold applies.
pub const IOS_HEAVY_SHARE: u8 = 50;

/// Budget boundaries for the MMP axis.
///
/// `ios_budget_threshold` replaces `budget_threshold` when more than
/// [`IOS_HEAVY_SHARE`] percent of users are on iOS. Amounts are in the
/// configured currency; the engine never converts them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetThresholds {
    pub budget_threshold: f64,
    pub ios_budget_threshold: f64,
}

impl Default for BudgetThresholds {
    fn default() -> Self {
        Self::new(2_000.0, 800.0)
    }
}

impl BudgetThresholds {
    pub fn new(budget_threshold: f64, ios_budget_threshold: f64) -> Self {
        Self {
            budget_threshold,
            ios_budget_threshold,
        }
    }
}

/// Boundaries for the SKAN relevance axis, expressed as monthly iOS spend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkanThresholds {
    /// iOS budget at which the baseline becomes `Medium`
    pub medium_ios_budget: f64,
    /// iOS budget at which the baseline becomes `High`
    pub high_ios_budget: f64,
    /// Minimum iOS budget for the subscription boost
    pub subscription_boost_min: f64,
    /// Minimum iOS budget for the purchase / trial-start goal boost
    pub goal_boost_min: f64,
    /// Minimum iOS budget for the finance / e-commerce / gaming boost
    pub category_boost_min: f64,
}

impl Default for SkanThresholds {
    fn default() -> Self {
        Self {
            medium_ios_budget: 500.0,
            high_ios_budget: 1_000.0,
            subscription_boost_min: 300.0,
            goal_boost_min: 400.0,
            category_boost_min: 400.0,
        }
    }
}

/// `[thresholds]` section of `.mmp-advisor.toml`.
///
/// Every field is optional; missing ones come from the currency preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BudgetThresholdsConfig {
    #[serde(default)]
    pub budget_threshold: Option<f64>,

    #[serde(default)]
    pub ios_budget_threshold: Option<f64>,
}

impl BudgetThresholdsConfig {
    /// Overlay the configured fields on `preset`.
    pub fn resolve(&self, preset: BudgetThresholds) -> BudgetThresholds {
        BudgetThresholds {
            budget_threshold: self.budget_threshold.unwrap_or(preset.budget_threshold),
            ios_budget_threshold: self
                .ios_budget_threshold
                .unwrap_or(preset.ios_budget_threshold),
        }
    }
}

impl From<BudgetThresholds> for BudgetThresholdsConfig {
    fn from(t: BudgetThresholds) -> Self {
        Self {
            budget_threshold: Some(t.budget_threshold),
            ios_budget_threshold: Some(t.ios_budget_threshold),
        }
    }
}

/// `[skan]` section of `.mmp-advisor.toml`; missing fields come from the
/// currency preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SkanThresholdsConfig {
    #[serde(default)]
    pub medium_ios_budget: Option<f64>,

    #[serde(default)]
    pub high_ios_budget: Option<f64>,

    #[serde(default)]
    pub subscription_boost_min: Option<f64>,

    #[serde(default)]
    pub goal_boost_min: Option<f64>,

    #[serde(default)]
    pub category_boost_min: Option<f64>,
}

impl SkanThresholdsConfig {
    pub fn resolve(&self, preset: SkanThresholds) -> SkanThresholds {
        SkanThresholds {
            medium_ios_budget: self.medium_ios_budget.unwrap_or(preset.medium_ios_budget),
            high_ios_budget: self.high_ios_budget.unwrap_or(preset.high_ios_budget),
            subscription_boost_min: self
                .subscription_boost_min
                .unwrap_or(preset.subscription_boost_min),
            goal_boost_min: self.goal_boost_min.unwrap_or(preset.goal_boost_min),
            category_boost_min: self.category_boost_min.unwrap_or(preset.category_boost_min),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_sections_keep_preset_values() {
        let parsed: BudgetThresholdsConfig = toml::from_str("budget_threshold = 3000.0").unwrap();
        let resolved = parsed.resolve(BudgetThresholds::new(50_000.0, 20_000.0));
        assert_eq!(resolved, BudgetThresholds::new(3_000.0, 20_000.0));

        let skan: SkanThresholdsConfig = toml::from_str("goal_boost_min = 450.0").unwrap();
        assert_eq!(
            skan.resolve(SkanThresholds::default()),
            SkanThresholds {
                goal_boost_min: 450.0,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_full_section_round_trips() {
        let section = BudgetThresholdsConfig::from(BudgetThresholds::new(4_000.0, 1_500.0));
        let text = toml::to_string(&section).unwrap();
        let parsed: BudgetThresholdsConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.resolve(BudgetThresholds::default()), BudgetThresholds::new(4_000.0, 1_500.0));
    }
}
