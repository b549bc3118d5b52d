//! Recommendation prose built from an [`Assessment`].
//!
//! This layer never classifies anything: it only reads categories, tiers
//! and boolean facts the engine already produced, and turns them into
//! ordered [`Section`]s. Renderers in [`crate::output`] decide how a
//! section looks in a terminal or in markdown.

use serde::Serialize;

use crate::config::{BudgetThresholds, Currency};
use crate::core::{AdvisorInput, Assessment, MmpCategory, SkanRelevance};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    MmpVerdict,
    AffiliatePostbacks,
    IosWarning,
    ThresholdLowered,
    Skan,
    NoMonetization,
}

/// One block of advice; `bullets` render after the paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: Option<String>,
    pub paragraphs: Vec<String>,
    pub bullets: Vec<String>,
}

impl Section {
    fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            heading: None,
            paragraphs: Vec::new(),
            bullets: Vec::new(),
        }
    }

    fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    fn bullets<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets.extend(items.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub mmp_category: MmpCategory,
    pub skan_relevance: SkanRelevance,
    pub sections: Vec<Section>,
}

impl Recommendation {
    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }
}

/// Everything the prose needs besides the assessment itself.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeContext<'a> {
    pub input: &'a AdvisorInput,
    pub assessment: &'a Assessment,
    pub thresholds: BudgetThresholds,
    pub currency: Currency,
}

impl NarrativeContext<'_> {
    fn money(&self, amount: f64) -> String {
        self.currency.format_amount(amount)
    }
}

pub fn build_recommendation(ctx: &NarrativeContext<'_>) -> Recommendation {
    let mut sections = vec![mmp_verdict(ctx)];

    if ctx.assessment.mmp_category == MmpCategory::TechnicalNeed && ctx.input.uses_affiliate {
        sections.push(affiliate_postbacks());
    }
    if ctx.assessment.ios_threshold_applied {
        sections.push(ios_warning(ctx));
        if is_in_lowered_band(ctx) {
            sections.push(threshold_lowered(ctx));
        }
    }
    sections.push(skan_section(ctx));
    if ctx.assessment.no_monetization_flag {
        sections.push(no_monetization());
    }

    Recommendation {
        mmp_category: ctx.assessment.mmp_category,
        skan_relevance: ctx.assessment.skan_relevance,
        sections,
    }
}

/// Budgets that only count as high because of the iOS-heavy threshold.
fn is_in_lowered_band(ctx: &NarrativeContext<'_>) -> bool {
    let budget = ctx.input.monthly_budget;
    budget >= ctx.thresholds.ios_budget_threshold && budget < ctx.thresholds.budget_threshold
}

fn channels_phrase(count: u32) -> String {
    if count == 1 {
        "1 marketing channel".to_string()
    } else {
        format!("{count} marketing channels")
    }
}

fn mmp_verdict(ctx: &NarrativeContext<'_>) -> Section {
    let input = ctx.input;
    let budget = ctx.money(input.monthly_budget);
    let section = Section::new(SectionKind::MmpVerdict).heading(ctx.assessment.mmp_category.label());

    match ctx.assessment.mmp_category {
        MmpCategory::Necessary => section
            .paragraph(format!(
                "With a monthly budget of {budget} and {}{}, you definitely need an MMP solution.",
                channels_phrase(input.channel_count),
                if input.uses_affiliate { " plus affiliate partners" } else { "" }
            ))
            .paragraph("Why an MMP makes sense:")
            .bullets([
                "Cross-channel deduplication: essential when users see ads on several channels before installing",
                "Centralized reporting: a single source of truth for attribution across all campaigns",
                "Programmatic network support: critical for AppLovin, Unity Ads and similar networks",
                "Reduced engineering burden: no custom attribution code to build and maintain",
            ]),
        MmpCategory::GrayZoneRisk => section
            .paragraph(format!(
                "Your budget of {budget} is high enough to justify an MMP, \
                 but you are working with a single channel only."
            ))
            .paragraph("Risks of running without an MMP:")
            .bullets([
                "Vendor lock-in: you depend on the reporting of a single ad channel",
                "Ad fraud: higher exposure to fraudulent installs without independent verification",
                "Scalability: once you add channels you will wish you had started earlier",
            ])
            .paragraph("Recommendation: consider an MMP to protect the investment and prepare for growth."),
        MmpCategory::TechnicalNeed => section
            .paragraph(format!(
                "You're working with {}{}, but your budget is currently at {budget}.",
                channels_phrase(input.channel_count),
                if input.uses_affiliate { " and using affiliate partners" } else { "" }
            ))
            .paragraph(
                "Technical necessity: multi-channel measurement requires a centralized solution. \
                 Consider the free tier of an MMP (e.g. AppsFlyer, Adjust) or a cheaper alternative \
                 for small projects.",
            ),
        MmpCategory::NotNeeded => section
            .paragraph(format!(
                "With a budget of {budget} and a single marketing channel, \
                 you don't need a dedicated MMP solution yet."
            ))
            .paragraph("Recommendation:")
            .bullets([
                "Use Firebase Analytics / Google Analytics for Firebase (free)",
                "Rely on the reporting of your ad channel directly",
                "Monitor the situation: once you add a second channel or raise the budget, an MMP starts to make sense",
            ]),
    }
}

fn affiliate_postbacks() -> Section {
    Section::new(SectionKind::AffiliatePostbacks)
        .heading("Affiliate / influencer marketing requires an MMP")
        .paragraph(
            "Performance-based (CPA) campaigns need postbacks sent to partners. \
             Without an MMP there is no way to automate conversion reporting.",
        )
}

fn ios_warning(ctx: &NarrativeContext<'_>) -> Section {
    Section::new(SectionKind::IosWarning)
        .heading("iOS warning")
        .paragraph(format!(
            "{}% of your users are on iOS. Because of SKAdNetwork and App Tracking \
             Transparency (iOS 14.5+), iOS measurement is extremely complex. Even at a \
             lower budget an MMP helps process and normalize SKAdNetwork data.",
            ctx.input.ios_share
        ))
}

fn threshold_lowered(ctx: &NarrativeContext<'_>) -> Section {
    Section::new(SectionKind::ThresholdLowered)
        .heading("Threshold adjusted")
        .paragraph(format!(
            "Because of the high iOS share, the recommended MMP threshold is lowered \
             from {} to {} per month.",
            ctx.money(ctx.thresholds.budget_threshold),
            ctx.money(ctx.thresholds.ios_budget_threshold)
        ))
}

fn skan_section(ctx: &NarrativeContext<'_>) -> Section {
    let a = ctx.assessment;
    let ios_budget = ctx.money(a.effective_ios_budget);
    let source = if ctx.input.has_dedicated_ios_budget() {
        "dedicated iOS budget"
    } else {
        "estimated iOS spend"
    };

    let section = Section::new(SectionKind::Skan).heading(format!(
        "SKAdNetwork relevance: {}",
        a.skan_relevance.label()
    ));

    let section = match a.skan_relevance {
        SkanRelevance::High => section.paragraph(format!(
            "With {ios_budget} of monthly {source}, SKAN postbacks are a primary \
             signal for your iOS campaigns. Design a conversion value schema early \
             and let your MMP decode it."
        )),
        SkanRelevance::Medium => section.paragraph(format!(
            "With {ios_budget} of monthly {source}, SKAN data is worth collecting. \
             Start with a simple conversion value schema and review it once iOS \
             spend grows."
        )),
        SkanRelevance::Low => section.paragraph(format!(
            "With {ios_budget} of monthly {source}, SKAN postbacks will be too sparse \
             to optimize on. Rely on channel reporting for now."
        )),
    };

    if a.skan_boosts.is_empty() {
        section
    } else {
        section
            .paragraph(format!(
                "Raised from {} because:",
                a.skan_baseline.label()
            ))
            .bullets(a.skan_boosts.iter().map(|b| b.description()))
    }
}

fn no_monetization() -> Section {
    Section::new(SectionKind::NoMonetization)
        .heading("No monetization")
        .paragraph(
            "Without in-app revenue there are no revenue events to encode. Map SKAN \
             conversion values to engagement milestones such as registration or \
             retention instead.",
        )
}
