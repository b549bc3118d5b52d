//! CLI command implementations.
//!
//! Available commands:
//! - **evaluate**: classify a marketing setup and render the recommendation
//! - **thresholds**: print the thresholds in force
//! - **init**: write a starter `.mmp-advisor.toml`

pub mod evaluate;
pub mod init;
pub mod thresholds;

pub use evaluate::{handle_evaluate, EvaluateConfig};
pub use init::init_config;
pub use thresholds::{describe_thresholds, show_thresholds};

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{self, AdvisorConfig, Currency};

/// Load the configuration a command runs with.
///
/// An explicit `--config` path must load; otherwise `.mmp-advisor.toml` is
/// searched upward from the working directory. A `--preset` for another
/// currency than the file's drops the file's amounts along with its
/// currency, so every threshold comes from that preset; mode and output
/// settings are kept.
pub fn resolve_config(path: Option<PathBuf>, preset: Option<Currency>) -> Result<AdvisorConfig> {
    let loaded = match path {
        Some(path) => config::load_config_from_path(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => config::load_config(),
    };
    Ok(apply_preset(loaded, preset))
}

fn apply_preset(config: AdvisorConfig, preset: Option<Currency>) -> AdvisorConfig {
    match preset {
        Some(currency) if currency != config.currency => AdvisorConfig {
            currency,
            thresholds: None,
            skan: None,
            ..config
        },
        _ => config,
    }
}
