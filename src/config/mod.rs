// Sub-modules
pub mod presets;
mod thresholds;

// Core configuration types
mod accessors;
mod core;
mod loader;
pub mod validation;

pub use thresholds::{
    BudgetThresholds, BudgetThresholdsConfig, SkanThresholds, SkanThresholdsConfig,
    IOS_HEAVY_SHARE,
};

pub use presets::Currency;

pub use core::{
    AdvisorConfig, ClassificationConfig, ClassificationMode, EngineSettings, OutputConfig,
};

pub use loader::{
    directory_ancestors, find_config_from, load_config, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
