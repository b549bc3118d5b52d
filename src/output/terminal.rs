use std::fmt::{self, Write};

use super::markdown::{MMP_FREE_TIER_NOTE, MMP_PRIMER, MMP_TOOLS};
use super::Report;
use crate::core::Result;
use crate::formatting::{category_icon, relevance_icon, OutputFormatter};
use crate::narrative::{Section, SectionKind};

const RULE: &str = "────────────────────────────────────────────────────────────";

pub fn render_terminal(report: &Report, formatter: &dyn OutputFormatter) -> Result<String> {
    let mut out = String::new();
    write_terminal(&mut out, report, formatter)?;
    Ok(out)
}

fn write_terminal(out: &mut String, report: &Report, formatter: &dyn OutputFormatter) -> fmt::Result {
    let a = &report.assessment;

    writeln!(out, "{}", formatter.header("MMP ADVISOR"))?;
    writeln!(out, "{}", formatter.dim(RULE))?;

    for section in &report.recommendation.sections {
        write_section(out, report, section, formatter)?;
    }

    writeln!(out, "{}", formatter.dim(RULE))?;
    writeln!(out, "{}", formatter.bold("Key facts"))?;
    let facts = [
        ("Budget threshold", report.money(a.effective_budget_threshold)),
        ("Monthly budget", report.money(report.input.monthly_budget)),
        ("iOS budget", report.money(a.effective_ios_budget)),
        ("Channels", report.input.channel_count.to_string()),
        ("Mode", report.mode.to_string()),
    ];
    for (name, value) in facts {
        writeln!(out, "  {:<18} {value}", format!("{name}:"))?;
    }

    writeln!(out)?;
    writeln!(out, "{}", formatter.bold("What is an MMP?"))?;
    for line in MMP_PRIMER {
        writeln!(out, "  - {line}")?;
    }
    writeln!(out, "{}", formatter.bold("Best-known MMP tools"))?;
    writeln!(out, "  {}", MMP_TOOLS.join(", "))?;
    writeln!(out, "  {}", formatter.dim(MMP_FREE_TIER_NOTE))
}

fn write_section(
    out: &mut String,
    report: &Report,
    section: &Section,
    formatter: &dyn OutputFormatter,
) -> fmt::Result {
    let a = &report.assessment;
    if let Some(heading) = &section.heading {
        let line = match section.kind {
            SectionKind::MmpVerdict => {
                let (emoji, fallback) = category_icon(a.mmp_category);
                format!(
                    "{} {}",
                    formatter.emoji(emoji, fallback),
                    formatter.category(a.mmp_category, &formatter.bold(heading))
                )
            }
            SectionKind::Skan => {
                let (emoji, fallback) = relevance_icon(a.skan_relevance);
                format!("{} {}", formatter.emoji(emoji, fallback), formatter.bold(heading))
            }
            SectionKind::IosWarning | SectionKind::ThresholdLowered => {
                format!(
                    "{} {}",
                    formatter.emoji("⚠️", "[!]"),
                    formatter.warning(heading)
                )
            }
            SectionKind::AffiliatePostbacks | SectionKind::NoMonetization => {
                formatter.info(heading)
            }
        };
        writeln!(out, "\n{line}")?;
    }
    for paragraph in &section.paragraphs {
        writeln!(out, "  {paragraph}")?;
    }
    for bullet in &section.bullets {
        writeln!(out, "    • {bullet}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdvisorConfig;
    use crate::core::{AdvisorInput, MonetizationModel};
    use crate::formatting::PlainFormatter;

    #[test]
    fn test_plain_terminal_uses_ascii_icons() {
        let report = Report::build(
            AdvisorInput {
                monthly_budget: 5_000.0,
                channel_count: 3,
                ios_share: 30,
                ..Default::default()
            },
            &AdvisorConfig::default(),
        )
        .unwrap();
        let text = render_terminal(&report, &PlainFormatter).unwrap();

        assert!(text.starts_with("MMP ADVISOR\n"));
        assert!(text.contains("[RED] MMP IS NECESSARY"));
        assert!(text.contains("[HIGH] SKAdNetwork relevance: HIGH"));
        assert!(text.contains("  Budget threshold:  €2,000"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_terminal_orders_sections_like_recommendation() {
        let report = Report::build(
            AdvisorInput {
                monthly_budget: 1_000.0,
                channel_count: 1,
                ios_share: 60,
                monetization_model: MonetizationModel::NoMonetization,
                ..Default::default()
            },
            &AdvisorConfig::default(),
        )
        .unwrap();
        let text = render_terminal(&report, &PlainFormatter).unwrap();

        let verdict = text.find("GRAY ZONE").unwrap();
        let warning = text.find("[!] iOS warning").unwrap();
        let skan = text.find("SKAdNetwork relevance").unwrap();
        let no_money = text.find("No monetization").unwrap();
        assert!(verdict < warning && warning < skan && skan < no_money);
    }

    #[test]
    fn test_terminal_primer_names_mmp_tools() {
        let report = Report::build(AdvisorInput::default(), &AdvisorConfig::default()).unwrap();
        let text = render_terminal(&report, &PlainFormatter).unwrap();

        let primer = &text[text.find("What is an MMP?").unwrap()..];
        assert!(primer.contains("Best-known MMP tools\n  AppsFlyer, Adjust, Branch, Singular, Kochava\n"));
        assert!(primer.ends_with("  Most offer a free tier for small projects.\n"));
    }
}
