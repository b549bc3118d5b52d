//! The decision engine.
//!
//! Pure core of the advisor, evaluated leaves-first:
//!
//! 1. [`validation::validate_input`] rejects out-of-range requests
//! 2. [`thresholds::resolve`] picks the effective budget threshold and iOS budget
//! 3. [`mmp::classify_mmp`] and [`skan::classify_skan`] score both axes
//!
//! Every call recomputes everything from its arguments. There is no
//! process-wide state, so concurrent callers need no coordination.
//!
//! # Example
//!
//! ```rust
//! use mmp_advisor::config::EngineSettings;
//! use mmp_advisor::core::{AdvisorInput, MmpCategory};
//! use mmp_advisor::engine::evaluate;
//!
//! let input = AdvisorInput {
//!     monthly_budget: 2_500.0,
//!     channel_count: 1,
//!     ios_share: 20,
//!     ..Default::default()
//! };
//! let assessment = evaluate(input, &EngineSettings::default()).unwrap();
//! assert_eq!(assessment.mmp_category, MmpCategory::GrayZoneRisk);
//! ```

pub mod mmp;
pub mod skan;
pub mod thresholds;
pub mod validation;

pub use mmp::{classify_mmp, MmpClassification};
pub use skan::{classify_skan, SkanClassification};
pub use thresholds::{resolve, ResolvedThresholds};
pub use validation::validate_input;

use crate::config::EngineSettings;
use crate::core::{AdvisorInput, Assessment, Result};

/// Validate `input` and run both classification axes.
pub fn evaluate(input: AdvisorInput, settings: &EngineSettings) -> Result<Assessment> {
    validate_input(&input)?;

    let resolved = resolve(
        input.ios_share,
        input.monthly_budget,
        input.dedicated_ios_budget,
        &settings.budget,
    );

    let mmp = classify_mmp(
        input.monthly_budget,
        input.channel_count,
        input.uses_affiliate,
        resolved.effective_budget_threshold,
        settings.mode,
    );

    let skan = classify_skan(
        resolved.effective_ios_budget,
        input.monetization_model,
        input.primary_goal,
        input.app_category,
        &settings.skan,
    );

    log::debug!(
        "evaluated budget={} channels={} ios_share={}: mmp={:?} skan={:?} (baseline {:?})",
        input.monthly_budget,
        input.channel_count,
        input.ios_share,
        mmp.category,
        skan.relevance,
        skan.baseline
    );

    Ok(assemble(resolved, mmp, skan))
}

fn assemble(
    resolved: ResolvedThresholds,
    mmp: MmpClassification,
    skan: SkanClassification,
) -> Assessment {
    let monetization_skan_boost_applied = skan.monetization_boost_applied();
    Assessment {
        effective_budget_threshold: resolved.effective_budget_threshold,
        effective_ios_budget: resolved.effective_ios_budget,
        ios_threshold_applied: resolved.ios_threshold_applied,
        is_high_budget: mmp.is_high_budget,
        is_high_complexity: mmp.is_high_complexity,
        mmp_category: mmp.category,
        skan_baseline: skan.baseline,
        skan_relevance: skan.relevance,
        skan_boosts: skan.boosts,
        monetization_skan_boost_applied,
        no_monetization_flag: skan.no_monetization,
    }
}
