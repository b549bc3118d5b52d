use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{AdvisorConfig, ClassificationConfig, ClassificationMode, Currency};
use crate::core::AdvisorInput;
use crate::formatting::FormattingConfig;
use crate::io::{destination_for, OutputDestination};
use crate::output::{self, OutputFormat, Report};

/// Everything `mmp-advisor evaluate` was asked to do.
#[derive(Debug, Clone)]
pub struct EvaluateConfig {
    pub input: AdvisorInput,
    pub mode: Option<ClassificationMode>,
    pub preset: Option<Currency>,
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

pub fn handle_evaluate(config: EvaluateConfig) -> Result<()> {
    let advisor_config = super::resolve_config(config.config.clone(), config.preset)?;
    let destination = destination_for(config.output.clone());
    run_evaluate(&config, advisor_config, destination.as_ref())
}

/// Evaluate, render and write; split out so tests can supply the config
/// and capture the output.
pub fn run_evaluate(
    config: &EvaluateConfig,
    advisor_config: AdvisorConfig,
    destination: &dyn OutputDestination,
) -> Result<()> {
    let advisor_config = apply_mode_override(advisor_config, config.mode);
    let format = resolve_format(config.format, &advisor_config)?;

    let report = Report::build(config.input, &advisor_config)?;
    log::info!(
        "MMP verdict {} / SKAN {} ({} mode)",
        report.assessment.mmp_category.short_label(),
        report.assessment.skan_relevance,
        report.mode
    );

    let rendered = output::render(&report, format, config.formatting)?;
    destination
        .write_str(&rendered)
        .with_context(|| format!("Failed to write report to {}", destination.description()))?;
    Ok(())
}

fn apply_mode_override(config: AdvisorConfig, mode: Option<ClassificationMode>) -> AdvisorConfig {
    match mode {
        Some(mode) => AdvisorConfig {
            classification: Some(ClassificationConfig { mode }),
            ..config
        },
        None => config,
    }
}

fn resolve_format(requested: Option<OutputFormat>, config: &AdvisorConfig) -> Result<OutputFormat> {
    match (requested, config.default_format()) {
        (Some(format), _) => Ok(format),
        (None, Some(name)) => Ok(name.parse()?),
        (None, None) => Ok(OutputFormat::default()),
    }
}
