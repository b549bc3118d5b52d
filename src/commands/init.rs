use crate::config::{Currency, CONFIG_FILE_NAME};
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn init_config(force: bool, preset: Currency) -> Result<()> {
    let config_path = write_starter_config(Path::new("."), force, preset)?;
    println!("Created {} configuration file", config_path.display());
    Ok(())
}

/// Write `.mmp-advisor.toml` into `dir`, refusing to clobber an existing
/// file unless `force` is set.
pub fn write_starter_config(dir: &Path, force: bool, preset: Currency) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, &starter_config(preset))?;
    log::debug!("Wrote starter config to {}", config_path.display());
    Ok(config_path)
}

fn starter_config(preset: Currency) -> String {
    let budget = preset.budget_thresholds();
    let skan = preset.skan_thresholds();
    format!(
        r#"# MMP Advisor Configuration

# eur or czk; any amount left out below comes from this currency's preset
currency = "{currency}"

[thresholds]
# Monthly budget from which an MMP pays off
budget_threshold = {budget_threshold}
# Lower threshold used when more than 50% of users are on iOS
ios_budget_threshold = {ios_budget_threshold}

[skan]
medium_ios_budget = {medium}
high_ios_budget = {high}
subscription_boost_min = {subscription}
goal_boost_min = {goal}
category_boost_min = {category}

[classification]
# two-axis: budget x complexity with a gray zone
# single-axis: only channel complexity makes an MMP necessary
mode = "two-axis"

[output]
default_format = "terminal"
"#,
        currency = preset.code().to_lowercase(),
        budget_threshold = budget.budget_threshold,
        ios_budget_threshold = budget.ios_budget_threshold,
        medium = skan.medium_ios_budget,
        high = skan.high_ios_budget,
        subscription = skan.subscription_boost_min,
        goal = skan.goal_boost_min,
        category = skan.category_boost_min,
    )
}
