use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::{AppCategory, MonetizationModel, PrimaryGoal};

#[derive(Parser, Debug)]
#[command(name = "mmp-advisor")]
#[command(about = "Decide whether a mobile app needs an MMP and how much SKAdNetwork matters", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a marketing setup and print the recommendation
    Evaluate {
        /// Monthly marketing budget
        #[arg(short, long, allow_negative_numbers = true)]
        budget: f64,

        /// Number of marketing channels
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        channels: u32,

        /// Share of iOS users in percent
        #[arg(long = "ios-share", default_value = "0")]
        ios_share: u8,

        /// Affiliate or CPA partners are used
        #[arg(long)]
        affiliate: bool,

        /// Separate monthly iOS budget (replaces the estimate from iOS share)
        #[arg(long = "dedicated-ios-budget", allow_negative_numbers = true)]
        dedicated_ios_budget: Option<f64>,

        /// App category (gaming, finance, e-commerce, education, ...)
        #[arg(long, default_value = "other")]
        category: AppCategory,

        /// Monetization model (subscription, in-app-purchases, ad-based, ...)
        #[arg(long, default_value = "in-app-purchases")]
        monetization: MonetizationModel,

        /// Primary campaign goal (install, registration, trial-start, purchase, ...)
        #[arg(long, default_value = "install")]
        goal: PrimaryGoal,

        /// Classification mode (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Currency preset for the budget thresholds
        #[arg(long, value_enum)]
        preset: Option<PresetArg>,

        /// Configuration file (defaults to searching for .mmp-advisor.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors and emoji
        #[arg(long)]
        plain: bool,
    },

    /// Print the thresholds in force
    Thresholds {
        /// Currency preset for the budget thresholds
        #[arg(long, value_enum)]
        preset: Option<PresetArg>,

        /// Configuration file (defaults to searching for .mmp-advisor.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Initialize a .mmp-advisor.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Currency preset written into the file
        #[arg(long, value_enum, default_value = "eur")]
        preset: PresetArg,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Terminal,
    Markdown,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Budget x complexity matrix with a gray zone
    TwoAxis,
    /// Complexity decides; high budget alone is not enough
    SingleAxis,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    Eur,
    Czk,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Terminal => crate::output::OutputFormat::Terminal,
            FormatArg::Markdown => crate::output::OutputFormat::Markdown,
            FormatArg::Json => crate::output::OutputFormat::Json,
        }
    }
}

impl From<ModeArg> for crate::config::ClassificationMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::TwoAxis => crate::config::ClassificationMode::TwoAxis,
            ModeArg::SingleAxis => crate::config::ClassificationMode::SingleAxis,
        }
    }
}

impl From<PresetArg> for crate::config::Currency {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::Eur => crate::config::Currency::Eur,
            PresetArg::Czk => crate::config::Currency::Czk,
        }
    }
}
