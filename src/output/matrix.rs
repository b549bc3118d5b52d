//! Decision-matrix facts for chart renderers.
//!
//! The advisor does not draw anything. It hands chart code the quadrant
//! boundaries and where to plot the user's app; the x boundary is the
//! effective budget threshold, the y boundary sits between one and two
//! channels.

use serde::Serialize;

use crate::config::ClassificationMode;
use crate::core::{AdvisorInput, Assessment, MmpCategory};

/// Channel count separating single- from multi-channel setups.
pub const CHANNEL_BOUNDARY: f64 = 1.5;

/// Plotted height of a single-channel affiliate user, inside the
/// high-complexity band.
pub const AFFILIATE_PLOT_CHANNELS: f64 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityBand {
    Low,
    High,
}

/// A filled region of the chart. `budget_to: None` is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quadrant {
    pub category: MmpCategory,
    pub complexity: ComplexityBand,
    pub budget_from: f64,
    pub budget_to: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatrixPoint {
    pub budget: f64,
    pub channels: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    pub budget_boundary: f64,
    pub channel_boundary: f64,
    pub quadrants: Vec<Quadrant>,
    pub position: MatrixPoint,
}

impl DecisionMatrix {
    pub fn new(input: &AdvisorInput, assessment: &Assessment, mode: ClassificationMode) -> Self {
        let x = assessment.effective_budget_threshold;
        Self {
            budget_boundary: x,
            channel_boundary: CHANNEL_BOUNDARY,
            quadrants: quadrants(x, mode),
            position: MatrixPoint {
                budget: input.monthly_budget,
                channels: plotted_channels(input),
            },
        }
    }

    /// Quadrant the plotted position falls in.
    pub fn quadrant_at(&self, point: MatrixPoint) -> Option<&Quadrant> {
        let band = if point.channels > self.channel_boundary {
            ComplexityBand::High
        } else {
            ComplexityBand::Low
        };
        self.quadrants.iter().find(|q| {
            q.complexity == band
                && point.budget >= q.budget_from
                && q.budget_to.is_none_or(|to| point.budget < to)
        })
    }
}

fn plotted_channels(input: &AdvisorInput) -> f64 {
    if input.uses_affiliate && input.channel_count == 1 {
        AFFILIATE_PLOT_CHANNELS
    } else {
        f64::from(input.channel_count)
    }
}

fn quadrants(x: f64, mode: ClassificationMode) -> Vec<Quadrant> {
    let high = [
        Quadrant {
            category: MmpCategory::TechnicalNeed,
            complexity: ComplexityBand::High,
            budget_from: 0.0,
            budget_to: Some(x),
        },
        Quadrant {
            category: MmpCategory::Necessary,
            complexity: ComplexityBand::High,
            budget_from: x,
            budget_to: None,
        },
    ];

    let low: Vec<Quadrant> = if mode.is_two_axis() {
        vec![
            Quadrant {
                category: MmpCategory::NotNeeded,
                complexity: ComplexityBand::Low,
                budget_from: 0.0,
                budget_to: Some(x),
            },
            Quadrant {
                category: MmpCategory::GrayZoneRisk,
                complexity: ComplexityBand::Low,
                budget_from: x,
                budget_to: None,
            },
        ]
    } else {
        vec![Quadrant {
            category: MmpCategory::NotNeeded,
            complexity: ComplexityBand::Low,
            budget_from: 0.0,
            budget_to: None,
        }]
    };

    low.into_iter().chain(high).collect()
}
