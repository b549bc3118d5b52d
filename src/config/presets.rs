//! Currency presets for the budget thresholds.
//!
//! The calculator was first calibrated in Czech crowns and later in euros:
//! - **Eur**: 2,000 € per month, lowered to 800 € for iOS-heavy apps
//! - **Czk**: 50,000 Kč per month, lowered to 20,000 Kč for iOS-heavy apps
//!
//! # Example
//!
//! ```rust
//! use mmp_advisor::config::presets::Currency;
//!
//! let config = Currency::Czk.to_config();
//! assert_eq!(config.budget_thresholds().budget_threshold, 50_000.0);
//! ```

use serde::{Deserialize, Serialize};

use super::core::AdvisorConfig;
use super::thresholds::{BudgetThresholds, SkanThresholds};

/// Currency the budgets are expressed in, with its threshold preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Eur,
    Czk,
}

impl Currency {
    /// Full configuration with this currency's thresholds.
    pub fn to_config(self) -> AdvisorConfig {
        AdvisorConfig {
            currency: self,
            ..Default::default()
        }
    }

    pub fn budget_thresholds(self) -> BudgetThresholds {
        match self {
            Currency::Eur => BudgetThresholds::new(2_000.0, 800.0),
            Currency::Czk => BudgetThresholds::new(50_000.0, 20_000.0),
        }
    }

    /// SKAN tiers scaled by the same factor as the budget thresholds.
    pub fn skan_thresholds(self) -> SkanThresholds {
        match self {
            Currency::Eur => SkanThresholds::default(),
            Currency::Czk => SkanThresholds {
                medium_ios_budget: 12_500.0,
                high_ios_budget: 25_000.0,
                subscription_boost_min: 7_500.0,
                goal_boost_min: 10_000.0,
                category_boost_min: 10_000.0,
            },
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Czk => "CZK",
        }
    }

    /// Render an amount the way marketers in that currency write it:
    /// `€2,500` or `50 000 Kč`.
    pub fn format_amount(self, amount: f64) -> String {
        match self {
            Currency::Eur => format!("€{}", group_thousands(amount, ',')),
            Currency::Czk => format!("{} Kč", group_thousands(amount, ' ')),
        }
    }
}

/// Whole-unit amount with a thousands separator. Fractions are rounded
/// away since every threshold and slider step is a whole amount.
fn group_thousands(amount: f64, separator: char) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}
