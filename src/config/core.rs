use serde::{Deserialize, Serialize};
use std::fmt;

use super::presets::Currency;
use super::thresholds::{
    BudgetThresholds, BudgetThresholdsConfig, SkanThresholds, SkanThresholdsConfig,
};

/// How many MMP categories the classifier distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ClassificationMode {
    /// Budget x complexity matrix with four quadrants, including the gray zone
    #[default]
    TwoAxis,
    /// Three categories; high budget without complexity stays "not needed"
    SingleAxis,
}

impl ClassificationMode {
    pub fn is_two_axis(self) -> bool {
        matches!(self, ClassificationMode::TwoAxis)
    }
}

impl fmt::Display for ClassificationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClassificationMode::TwoAxis => "two-axis",
            ClassificationMode::SingleAxis => "single-axis",
        })
    }
}

/// Classification section of `.mmp-advisor.toml`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct ClassificationConfig {
    #[serde(default)]
    pub mode: ClassificationMode,
}

/// Output section of `.mmp-advisor.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// `terminal`, `markdown` or `json`
    pub default_format: Option<String>,
}

/// Root of `.mmp-advisor.toml`.
///
/// Sections and their fields are optional; the accessors fill anything
/// missing from the preset of `currency`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub currency: Currency,

    #[serde(default)]
    pub thresholds: Option<BudgetThresholdsConfig>,

    #[serde(default)]
    pub skan: Option<SkanThresholdsConfig>,

    #[serde(default)]
    pub classification: Option<ClassificationConfig>,

    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// The parts of the configuration the decision engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineSettings {
    pub budget: BudgetThresholds,
    pub skan: SkanThresholds,
    pub mode: ClassificationMode,
}

impl EngineSettings {
    pub fn with_mode(self, mode: ClassificationMode) -> Self {
        Self { mode, ..self }
    }
}
