// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod formatting;
pub mod io;
pub mod narrative;
pub mod output;

// Re-export commonly used types
pub use crate::core::{
    AdvisorInput, AppCategory, Assessment, Error, MmpCategory, MonetizationModel, PrimaryGoal,
    Result, SkanBoost, SkanRelevance,
};

pub use crate::config::{
    AdvisorConfig, BudgetThresholds, ClassificationMode, Currency, EngineSettings, SkanThresholds,
};

pub use crate::engine::evaluate;

pub use crate::narrative::{build_recommendation, NarrativeContext, Recommendation};

pub use crate::output::{render, DecisionMatrix, OutputFormat, Report};
