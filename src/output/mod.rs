//! Report assembly and rendering.
//!
//! A [`Report`] bundles the request, the thresholds in force, the engine's
//! assessment, the decision-matrix facts and the narrative. Each renderer
//! turns it into a `String`; [`crate::io::destinations`] writes it out.

pub mod json;
pub mod markdown;
pub mod matrix;
pub mod terminal;

pub use matrix::DecisionMatrix;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{AdvisorConfig, BudgetThresholds, ClassificationMode, Currency};
use crate::core::{AdvisorInput, Assessment, Error, Result};
use crate::engine;
use crate::formatting::{ColoredFormatter, FormattingConfig, PlainFormatter};
use crate::narrative::{build_recommendation, NarrativeContext, Recommendation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(Self::Terminal),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(Error::configuration(format!("unknown output format '{s}'"))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Terminal => "terminal",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub version: &'static str,
    pub input: AdvisorInput,
    pub currency: Currency,
    pub mode: ClassificationMode,
    pub thresholds: BudgetThresholds,
    pub assessment: Assessment,
    pub matrix: DecisionMatrix,
    pub recommendation: Recommendation,
}

impl Report {
    /// Evaluate `input` under `config` and assemble everything a renderer needs.
    pub fn build(input: AdvisorInput, config: &AdvisorConfig) -> Result<Self> {
        let settings = config.engine_settings();
        let assessment = engine::evaluate(input, &settings)?;
        let recommendation = build_recommendation(&NarrativeContext {
            input: &input,
            assessment: &assessment,
            thresholds: settings.budget,
            currency: config.currency,
        });
        let matrix = DecisionMatrix::new(&input, &assessment, settings.mode);

        Ok(Self {
            version: env!("CARGO_PKG_VERSION"),
            input,
            currency: config.currency,
            mode: settings.mode,
            thresholds: settings.budget,
            assessment,
            matrix,
            recommendation,
        })
    }

    pub fn money(&self, amount: f64) -> String {
        self.currency.format_amount(amount)
    }
}

pub fn render(report: &Report, format: OutputFormat, formatting: FormattingConfig) -> Result<String> {
    match format {
        OutputFormat::Json => json::render_json(report),
        OutputFormat::Markdown => markdown::render_markdown(report),
        OutputFormat::Terminal => {
            if formatting == FormattingConfig::plain() {
                terminal::render_terminal(report, &PlainFormatter)
            } else {
                terminal::render_terminal(report, &ColoredFormatter::new(formatting))
            }
        }
    }
}
