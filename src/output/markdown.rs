use std::fmt::{self, Write};

use super::Report;
use crate::core::Result;
use crate::formatting::{category_icon, relevance_icon};
use crate::narrative::{Section, SectionKind};

pub const MMP_PRIMER: [&str; 5] = [
    "Attribution: assigning installs to the right campaigns",
    "Cross-channel analytics: one view across all channels",
    "Fraud prevention: detecting fraudulent installs",
    "Deep linking: advanced user navigation",
    "Postbacks: automated conversion reporting to partners",
];

/// Best-known MMP vendors, listed next to the primer.
pub const MMP_TOOLS: [&str; 5] = ["AppsFlyer", "Adjust", "Branch", "Singular", "Kochava"];

pub const MMP_FREE_TIER_NOTE: &str = "Most offer a free tier for small projects.";

pub fn render_markdown(report: &Report) -> Result<String> {
    let mut out = String::new();
    write_markdown(&mut out, report)?;
    Ok(out)
}

fn write_markdown(out: &mut String, report: &Report) -> fmt::Result {
    writeln!(out, "# Do I Need an MMP?\n")?;

    for section in &report.recommendation.sections {
        write_section(out, report, section)?;
    }

    write_inputs_table(out, report)?;
    write_primer(out)?;
    writeln!(out, "\n---\n*For guidance purposes only.*")
}

fn write_section(out: &mut String, report: &Report, section: &Section) -> fmt::Result {
    if let Some(heading) = &section.heading {
        match section.kind {
            SectionKind::MmpVerdict => {
                let (icon, _) = category_icon(report.assessment.mmp_category);
                writeln!(out, "## {icon} {heading}\n")?;
            }
            SectionKind::Skan => {
                let (icon, _) = relevance_icon(report.assessment.skan_relevance);
                writeln!(out, "## {icon} {heading}\n")?;
            }
            _ => writeln!(out, "### {heading}\n")?,
        }
    }
    for paragraph in &section.paragraphs {
        writeln!(out, "{paragraph}\n")?;
    }
    if !section.bullets.is_empty() {
        for bullet in &section.bullets {
            writeln!(out, "- {bullet}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_inputs_table(out: &mut String, report: &Report) -> fmt::Result {
    let input = &report.input;
    let a = &report.assessment;
    let yes_no = |b: bool| if b { "Yes" } else { "No" };

    let rows = [
        ("Monthly budget", report.money(input.monthly_budget)),
        ("Marketing channels", input.channel_count.to_string()),
        ("Affiliate / CPA partners", yes_no(input.uses_affiliate).to_string()),
        ("iOS share", format!("{}%", input.ios_share)),
        ("iOS budget", report.money(a.effective_ios_budget)),
        ("App category", input.app_category.to_string()),
        ("Monetization", input.monetization_model.to_string()),
        ("Primary goal", input.primary_goal.to_string()),
        ("Budget threshold", report.money(a.effective_budget_threshold)),
    ];

    writeln!(out, "## Inputs\n")?;
    writeln!(out, "| Parameter | Value |")?;
    writeln!(out, "|-----------|-------|")?;
    for (name, value) in rows {
        writeln!(out, "| {name} | {value} |")?;
    }
    writeln!(out)
}

fn write_primer(out: &mut String) -> fmt::Result {
    writeln!(out, "## What is an MMP?\n")?;
    writeln!(
        out,
        "A **Mobile Measurement Partner (MMP)** is an independent platform for:\n"
    )?;
    for line in MMP_PRIMER {
        writeln!(out, "- {line}")?;
    }
    writeln!(out, "\n**Best-known MMP tools:**\n")?;
    for tool in MMP_TOOLS {
        writeln!(out, "- {tool}")?;
    }
    writeln!(out, "\n{MMP_FREE_TIER_NOTE}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdvisorConfig;
    use crate::core::AdvisorInput;
    use indoc::indoc;

    fn report(input: AdvisorInput) -> Report {
        Report::build(input, &AdvisorConfig::default()).unwrap()
    }

    #[test]
    fn test_markdown_starts_with_verdict() {
        let md = render_markdown(&report(AdvisorInput {
            monthly_budget: 2_500.0,
            channel_count: 1,
            ios_share: 20,
            ..Default::default()
        }))
        .unwrap();

        let expected_start = indoc! {"
            # Do I Need an MMP?

            ## 🟠 GRAY ZONE (RISK)

            Your budget of €2,500 is high enough to justify an MMP, but you are working with a single channel only.
        "};
        assert!(md.starts_with(expected_start), "{md}");
        assert!(md.contains("| Budget threshold | €2,000 |"));
        assert!(md.contains("## What is an MMP?"));
    }

    #[test]
    fn test_markdown_includes_ios_sections() {
        let md = render_markdown(&report(AdvisorInput {
            monthly_budget: 1_000.0,
            channel_count: 1,
            ios_share: 60,
            ..Default::default()
        }))
        .unwrap();
        assert!(md.contains("### iOS warning"));
        assert!(md.contains("### Threshold adjusted"));
        assert!(md.contains("from €2,000 to €800 per month"));
        assert!(md.contains("## 📊 SKAdNetwork relevance: MEDIUM"));
    }

    #[test]
    fn test_markdown_primer_lists_mmp_tools() {
        let md = render_markdown(&report(AdvisorInput::default())).unwrap();
        let primer = &md[md.find("## What is an MMP?").unwrap()..];

        assert!(primer.contains("**Best-known MMP tools:**"));
        let positions: Vec<usize> = MMP_TOOLS
            .iter()
            .map(|tool| primer.find(&format!("- {tool}\n")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(primer.contains("Most offer a free tier for small projects."));
        assert!(md.ends_with("*For guidance purposes only.*\n"));
    }
}
