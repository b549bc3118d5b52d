//! Domain types shared by the engine, the narrative layer and the CLI.
//!
//! Inputs arrive as an [`AdvisorInput`] passed by value into
//! [`crate::engine::evaluate`]; the result is an immutable [`Assessment`].
//! Nothing here holds state between evaluations.

pub mod errors;

pub use errors::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// App vertical, used by the SKAN category boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppCategory {
    Gaming,
    Finance,
    #[serde(alias = "ecommerce")]
    ECommerce,
    Education,
    HealthFitness,
    Lifestyle,
    Utilities,
    Media,
    #[default]
    Other,
}

impl AppCategory {
    pub const ALL: [AppCategory; 9] = [
        AppCategory::Gaming,
        AppCategory::Finance,
        AppCategory::ECommerce,
        AppCategory::Education,
        AppCategory::HealthFitness,
        AppCategory::Lifestyle,
        AppCategory::Utilities,
        AppCategory::Media,
        AppCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AppCategory::Gaming => "Gaming",
            AppCategory::Finance => "Finance",
            AppCategory::ECommerce => "E-commerce",
            AppCategory::Education => "Education",
            AppCategory::HealthFitness => "Health & Fitness",
            AppCategory::Lifestyle => "Lifestyle",
            AppCategory::Utilities => "Utilities",
            AppCategory::Media => "Media",
            AppCategory::Other => "Other",
        }
    }
}

impl FromStr for AppCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_identifier(s).as_str() {
            "gaming" | "games" => Ok(Self::Gaming),
            "finance" | "fintech" => Ok(Self::Finance),
            "ecommerce" => Ok(Self::ECommerce),
            "education" => Ok(Self::Education),
            "healthfitness" | "health" | "fitness" => Ok(Self::HealthFitness),
            "lifestyle" => Ok(Self::Lifestyle),
            "utilities" | "utility" => Ok(Self::Utilities),
            "media" => Ok(Self::Media),
            "other" => Ok(Self::Other),
            _ => Err(Error::invalid_input(
                "app_category",
                format!("unrecognized app category '{s}'"),
            )),
        }
    }
}

impl fmt::Display for AppCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the app makes money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MonetizationModel {
    Subscription,
    SubscriptionWithTrial,
    #[default]
    InAppPurchases,
    Hybrid,
    AdBased,
    NoMonetization,
}

impl MonetizationModel {
    pub const ALL: [MonetizationModel; 6] = [
        MonetizationModel::Subscription,
        MonetizationModel::SubscriptionWithTrial,
        MonetizationModel::InAppPurchases,
        MonetizationModel::Hybrid,
        MonetizationModel::AdBased,
        MonetizationModel::NoMonetization,
    ];

    pub fn is_subscription(&self) -> bool {
        matches!(
            self,
            MonetizationModel::Subscription | MonetizationModel::SubscriptionWithTrial
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            MonetizationModel::Subscription => "Subscription",
            MonetizationModel::SubscriptionWithTrial => "Subscription with trial",
            MonetizationModel::InAppPurchases => "In-app purchases",
            MonetizationModel::Hybrid => "Hybrid",
            MonetizationModel::AdBased => "Ad-based",
            MonetizationModel::NoMonetization => "No monetization",
        }
    }
}

impl FromStr for MonetizationModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_identifier(s).as_str() {
            "subscription" => Ok(Self::Subscription),
            "subscriptionwithtrial" | "trial" => Ok(Self::SubscriptionWithTrial),
            "inapppurchases" | "iap" => Ok(Self::InAppPurchases),
            "hybrid" => Ok(Self::Hybrid),
            "adbased" | "ads" => Ok(Self::AdBased),
            "nomonetization" | "none" => Ok(Self::NoMonetization),
            _ => Err(Error::invalid_input(
                "monetization_model",
                format!("unrecognized monetization model '{s}'"),
            )),
        }
    }
}

impl fmt::Display for MonetizationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The conversion event the campaigns are optimized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryGoal {
    #[default]
    Install,
    Registration,
    TrialStart,
    Purchase,
    RetentionEngagement,
}

impl PrimaryGoal {
    pub const ALL: [PrimaryGoal; 5] = [
        PrimaryGoal::Install,
        PrimaryGoal::Registration,
        PrimaryGoal::TrialStart,
        PrimaryGoal::Purchase,
        PrimaryGoal::RetentionEngagement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PrimaryGoal::Install => "Install",
            PrimaryGoal::Registration => "Registration",
            PrimaryGoal::TrialStart => "Trial start",
            PrimaryGoal::Purchase => "Purchase",
            PrimaryGoal::RetentionEngagement => "Retention / engagement",
        }
    }
}

impl FromStr for PrimaryGoal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_identifier(s).as_str() {
            "install" | "installs" => Ok(Self::Install),
            "registration" | "signup" => Ok(Self::Registration),
            "trialstart" => Ok(Self::TrialStart),
            "purchase" | "purchases" => Ok(Self::Purchase),
            "retentionengagement" | "retention" | "engagement" => Ok(Self::RetentionEngagement),
            _ => Err(Error::invalid_input(
                "primary_goal",
                format!("unrecognized primary goal '{s}'"),
            )),
        }
    }
}

impl fmt::Display for PrimaryGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercases and strips separators so `e-commerce`, `E_Commerce` and
/// `ecommerce` all compare equal.
fn normalize_identifier(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' ' | '&'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A single evaluation request.
///
/// `dedicated_ios_budget` doubles as the dedicated-budget toggle: `Some`
/// means the marketer runs a separate iOS budget of that amount, `None`
/// means the iOS budget is derived from `monthly_budget * ios_share / 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvisorInput {
    pub monthly_budget: f64,
    pub channel_count: u32,
    #[serde(default)]
    pub uses_affiliate: bool,
    /// Share of iOS users, in percent.
    #[serde(default)]
    pub ios_share: u8,
    #[serde(default)]
    pub dedicated_ios_budget: Option<f64>,
    #[serde(default)]
    pub app_category: AppCategory,
    #[serde(default)]
    pub monetization_model: MonetizationModel,
    #[serde(default)]
    pub primary_goal: PrimaryGoal,
}

impl Default for AdvisorInput {
    fn default() -> Self {
        Self {
            monthly_budget: 0.0,
            channel_count: 1,
            uses_affiliate: false,
            ios_share: 0,
            dedicated_ios_budget: None,
            app_category: AppCategory::default(),
            monetization_model: MonetizationModel::default(),
            primary_goal: PrimaryGoal::default(),
        }
    }
}

impl AdvisorInput {
    pub fn has_dedicated_ios_budget(&self) -> bool {
        self.dedicated_ios_budget.is_some()
    }
}

/// Verdict on the MMP axis.
///
/// `GrayZoneRisk` is only produced in two-axis mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MmpCategory {
    NotNeeded,
    TechnicalNeed,
    GrayZoneRisk,
    Necessary,
}

impl MmpCategory {
    /// Urgency rank: the gray zone and technical need share the middle rung.
    pub fn urgency(&self) -> u8 {
        match self {
            MmpCategory::NotNeeded => 0,
            MmpCategory::TechnicalNeed | MmpCategory::GrayZoneRisk => 1,
            MmpCategory::Necessary => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MmpCategory::NotNeeded => "YOU DON'T NEED AN MMP",
            MmpCategory::TechnicalNeed => "TECHNICAL NEED",
            MmpCategory::GrayZoneRisk => "GRAY ZONE (RISK)",
            MmpCategory::Necessary => "MMP IS NECESSARY",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            MmpCategory::NotNeeded => "not-needed",
            MmpCategory::TechnicalNeed => "technical-need",
            MmpCategory::GrayZoneRisk => "gray-zone",
            MmpCategory::Necessary => "necessary",
        }
    }
}

impl fmt::Display for MmpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How much SKAdNetwork matters for this app. Ordered `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkanRelevance {
    Low,
    Medium,
    High,
}

impl SkanRelevance {
    pub fn label(&self) -> &'static str {
        match self {
            SkanRelevance::Low => "LOW",
            SkanRelevance::Medium => "MEDIUM",
            SkanRelevance::High => "HIGH",
        }
    }
}

impl fmt::Display for SkanRelevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A SKAN boost rule that lifted a `Low` baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkanBoost {
    /// Subscription monetization with enough iOS spend.
    Subscription,
    /// Optimizing for purchases or trial starts.
    ConversionGoal,
    /// Finance, e-commerce or gaming vertical.
    HighValueCategory,
}

impl SkanBoost {
    pub fn description(&self) -> &'static str {
        match self {
            SkanBoost::Subscription => "subscription revenue depends on early conversion signals",
            SkanBoost::ConversionGoal => "purchase / trial-start goals need conversion values",
            SkanBoost::HighValueCategory => "the vertical is competitive on iOS",
        }
    }
}

/// Everything the engine decided for one input, plus the facts it used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub effective_budget_threshold: f64,
    pub effective_ios_budget: f64,
    pub ios_threshold_applied: bool,
    pub is_high_budget: bool,
    pub is_high_complexity: bool,
    pub mmp_category: MmpCategory,
    pub skan_baseline: SkanRelevance,
    pub skan_relevance: SkanRelevance,
    pub skan_boosts: Vec<SkanBoost>,
    pub monetization_skan_boost_applied: bool,
    pub no_monetization_flag: bool,
}
