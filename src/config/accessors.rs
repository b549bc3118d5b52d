use super::core::{AdvisorConfig, ClassificationMode, EngineSettings};
use super::thresholds::{BudgetThresholds, SkanThresholds};

impl AdvisorConfig {
    /// `[thresholds]` laid over the currency preset.
    pub fn budget_thresholds(&self) -> BudgetThresholds {
        let preset = self.currency.budget_thresholds();
        self.thresholds.map_or(preset, |t| t.resolve(preset))
    }

    /// `[skan]` laid over the currency preset.
    pub fn skan_thresholds(&self) -> SkanThresholds {
        let preset = self.currency.skan_thresholds();
        self.skan.map_or(preset, |s| s.resolve(preset))
    }

    pub fn classification_mode(&self) -> ClassificationMode {
        self.classification.map(|c| c.mode).unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            budget: self.budget_thresholds(),
            skan: self.skan_thresholds(),
            mode: self.classification_mode(),
        }
    }
}
