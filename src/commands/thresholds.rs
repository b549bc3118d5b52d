use anyhow::Result;
use std::fmt::{self, Write};
use std::path::PathBuf;

use crate::config::{AdvisorConfig, Currency, IOS_HEAVY_SHARE};

pub fn show_thresholds(config: Option<PathBuf>, preset: Option<Currency>) -> Result<()> {
    let advisor_config = super::resolve_config(config, preset)?;
    print!("{}", describe_thresholds(&advisor_config)?);
    Ok(())
}

pub fn describe_thresholds(config: &AdvisorConfig) -> Result<String> {
    let mut out = String::new();
    write_thresholds(&mut out, config)?;
    Ok(out)
}

fn write_thresholds(out: &mut String, config: &AdvisorConfig) -> fmt::Result {
    let budget = config.budget_thresholds();
    let skan = config.skan_thresholds();
    let money = |amount: f64| config.currency.format_amount(amount);

    writeln!(out, "Currency:              {}", config.currency.code())?;
    writeln!(out, "Classification mode:   {}", config.classification_mode())?;
    writeln!(out)?;
    writeln!(out, "MMP budget threshold")?;
    writeln!(out, "  default:             {}", money(budget.budget_threshold))?;
    writeln!(
        out,
        "  iOS share > {IOS_HEAVY_SHARE}%:      {}",
        money(budget.ios_budget_threshold)
    )?;
    writeln!(out)?;
    writeln!(out, "SKAN relevance (monthly iOS budget)")?;
    writeln!(out, "  MEDIUM from:         {}", money(skan.medium_ios_budget))?;
    writeln!(out, "  HIGH from:           {}", money(skan.high_ios_budget))?;
    writeln!(out, "  LOW -> MEDIUM boosts")?;
    writeln!(out, "    subscription:      {}", money(skan.subscription_boost_min))?;
    writeln!(out, "    purchase/trial:    {}", money(skan.goal_boost_min))?;
    writeln!(out, "    category:          {}", money(skan.category_boost_min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_eur_defaults() {
        let text = describe_thresholds(&AdvisorConfig::default()).unwrap();
        assert!(text.contains("Currency:              EUR"));
        assert!(text.contains("  default:             €2,000"));
        assert!(text.contains("  iOS share > 50%:      €800"));
        assert!(text.contains("  HIGH from:           €1,000"));
        assert!(text.contains("two-axis"));
    }

    #[test]
    fn test_describe_czk_preset() {
        let text = describe_thresholds(&Currency::Czk.to_config()).unwrap();
        assert!(text.contains("50 000 Kč"));
        assert!(text.contains("20 000 Kč"));
        assert!(text.contains("  HIGH from:           25 000 Kč"));
        assert!(text.ends_with("    category:          10 000 Kč\n"));
    }
}
