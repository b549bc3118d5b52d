use anyhow::Result;
use clap::Parser;
use mmp_advisor::cli::{Cli, Commands};
use mmp_advisor::commands::{self, EvaluateConfig};
use mmp_advisor::core::AdvisorInput;
use mmp_advisor::formatting::{ColorMode, EmojiMode, FormattingConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        command @ Commands::Evaluate { .. } => {
            commands::handle_evaluate(build_evaluate_config(command)?)
        }
        Commands::Thresholds { preset, config } => {
            commands::show_thresholds(config, preset.map(Into::into))
        }
        Commands::Init { force, preset } => commands::init_config(force, preset.into()),
    }
}

/// `RUST_LOG` wins over `-v`; without either only warnings are shown.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .init();
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never, EmojiMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}

fn build_evaluate_config(command: Commands) -> Result<EvaluateConfig> {
    let Commands::Evaluate {
        budget,
        channels,
        ios_share,
        affiliate,
        dedicated_ios_budget,
        category,
        monetization,
        goal,
        mode,
        preset,
        config,
        format,
        output,
        plain,
    } = command
    else {
        anyhow::bail!("Invalid command");
    };

    Ok(EvaluateConfig {
        input: AdvisorInput {
            monthly_budget: budget,
            channel_count: channels,
            uses_affiliate: affiliate,
            ios_share,
            dedicated_ios_budget,
            app_category: category,
            monetization_model: monetization,
            primary_goal: goal,
        },
        mode: mode.map(Into::into),
        preset: preset.map(Into::into),
        config,
        format: format.map(Into::into),
        output,
        formatting: create_formatting_config(plain),
    })
}
