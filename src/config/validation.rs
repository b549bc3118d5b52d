//! Configuration validation with error accumulation.
//!
//! Uses stillwater's `Validation` so that every problem in
//! `.mmp-advisor.toml` is collected and reported in one run, each tagged
//! with the dotted path of the offending field.
//!
//! # Example
//!
//! ```rust
//! use mmp_advisor::config::validation::validate_config;
//! use mmp_advisor::config::AdvisorConfig;
//!
//! let validation = validate_config(&AdvisorConfig::default());
//! assert!(validation.is_success());
//! ```

use serde::Serialize;
use stillwater::{NonEmptyVec, Validation};

use super::core::AdvisorConfig;
use super::thresholds::{BudgetThresholds, SkanThresholds};
use crate::core::{Error, Result};

/// Validation result carrying every field error.
pub type ConfigValidation<T> = Validation<T, NonEmptyVec<ValidationError>>;

/// Path from the config root to a field, e.g. `skan.high_ios_budget`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn new(field: impl Into<String>) -> Self {
        Self(vec![field.into()])
    }

    /// Add a field to the path, returning a new path.
    pub fn push(&self, field: impl Into<String>) -> Self {
        let mut path = self.0.clone();
        path.push(field.into());
        Self(path)
    }

    pub fn as_string(&self) -> String {
        self.0.join(".")
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// A single invalid config value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: FieldPath,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl ValidationError {
    pub fn at_field(field: &FieldPath, message: impl Into<String>) -> Self {
        Self {
            field: field.clone(),
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Add expected and actual context to the error.
    pub fn with_context(mut self, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self.actual = Some(actual.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.field.is_root() {
            write!(f, "{}", self.message)?;
        } else {
            write!(f, "{}: {}", self.field, self.message)?;
        }

        match (&self.expected, &self.actual) {
            (Some(expected), Some(actual)) => write!(f, " (expected: {expected}, got: {actual})"),
            (Some(expected), None) => write!(f, " (expected: {expected})"),
            (None, Some(actual)) => write!(f, " (got: {actual})"),
            (None, None) => Ok(()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate the whole config, accumulating ALL errors.
pub fn validate_config(config: &AdvisorConfig) -> ConfigValidation<()> {
    let validations = vec![
        validate_budget_thresholds(&config.budget_thresholds()),
        validate_skan_thresholds(&config.skan_thresholds()),
        validate_default_format(config.default_format()),
    ];

    combine_validations(validations)
}

/// `validate_config` as a `Result`, for the loader.
pub fn validate_config_result(config: &AdvisorConfig) -> Result<()> {
    match validate_config(config) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(Error::InvalidConfig(errors.into_vec())),
    }
}

fn combine_validations(validations: Vec<ConfigValidation<()>>) -> ConfigValidation<()> {
    let mut failures = Vec::new();
    for validation in validations {
        if let Validation::Failure(errors) = validation {
            failures.extend(errors);
        }
    }
    from_errors(failures)
}

fn from_errors(errors: Vec<ValidationError>) -> ConfigValidation<()> {
    match NonEmptyVec::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

fn validate_budget_thresholds(t: &BudgetThresholds) -> ConfigValidation<()> {
    let section = FieldPath::new("thresholds");
    let mut errors: Vec<ValidationError> = [
        positive_amount(&section.push("budget_threshold"), t.budget_threshold),
        positive_amount(&section.push("ios_budget_threshold"), t.ios_budget_threshold),
    ]
    .into_iter()
    .flatten()
    .collect();

    if t.ios_budget_threshold >= t.budget_threshold {
        errors.push(
            ValidationError::at_field(
                &section.push("ios_budget_threshold"),
                "must be below budget_threshold",
            )
            .with_context(
                format!("< {}", t.budget_threshold),
                t.ios_budget_threshold.to_string(),
            ),
        );
    }

    from_errors(errors)
}

fn validate_skan_thresholds(t: &SkanThresholds) -> ConfigValidation<()> {
    let section = FieldPath::new("skan");
    let mut errors: Vec<ValidationError> = [
        positive_amount(&section.push("medium_ios_budget"), t.medium_ios_budget),
        positive_amount(&section.push("high_ios_budget"), t.high_ios_budget),
        non_negative_amount(&section.push("subscription_boost_min"), t.subscription_boost_min),
        non_negative_amount(&section.push("goal_boost_min"), t.goal_boost_min),
        non_negative_amount(&section.push("category_boost_min"), t.category_boost_min),
    ]
    .into_iter()
    .flatten()
    .collect();

    if t.medium_ios_budget >= t.high_ios_budget {
        errors.push(
            ValidationError::at_field(
                &section.push("medium_ios_budget"),
                "must be below high_ios_budget",
            )
            .with_context(
                format!("< {}", t.high_ios_budget),
                t.medium_ios_budget.to_string(),
            ),
        );
    }

    from_errors(errors)
}

fn validate_default_format(format: Option<&str>) -> ConfigValidation<()> {
    match format {
        Some(name) if !matches!(name, "terminal" | "markdown" | "json") => {
            from_errors(vec![ValidationError::at_field(
                &FieldPath::new("output").push("default_format"),
                "unknown output format",
            )
            .with_context("terminal, markdown or json", name)])
        }
        _ => Validation::Success(()),
    }
}

fn positive_amount(field: &FieldPath, value: f64) -> Option<ValidationError> {
    (!value.is_finite() || value <= 0.0).then(|| {
        ValidationError::at_field(field, "must be a positive amount")
            .with_context("> 0", value.to_string())
    })
}

fn non_negative_amount(field: &FieldPath, value: f64) -> Option<ValidationError> {
    (!value.is_finite() || value < 0.0).then(|| {
        ValidationError::at_field(field, "must be a non-negative amount")
            .with_context(">= 0", value.to_string())
    })
}
