use colored::*;
use std::env;
use std::io::IsTerminal;

use crate::core::{MmpCategory, SkanRelevance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,
    Always,
    Never,
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    /// Honors NO_COLOR (no-color.org), CLICOLOR=0 and CLICOLOR_FORCE=1.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("NO_COLOR").ok().as_deref(),
            env::var("CLICOLOR").ok().as_deref(),
            env::var("CLICOLOR_FORCE").ok().as_deref(),
        )
    }

    fn from_vars(no_color: Option<&str>, clicolor: Option<&str>, force: Option<&str>) -> Self {
        let mut config = Self::default();
        if no_color.is_some() || clicolor == Some("0") {
            config.color = ColorMode::Never;
        }
        if force == Some("1") {
            config.color = ColorMode::Always;
        }
        config
    }

    /// ASCII-only, no colors, no emoji
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn info(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;

    /// Color a verdict the way the decision matrix paints its quadrant.
    fn category(&self, category: MmpCategory, text: &str) -> String {
        match category {
            MmpCategory::Necessary => self.error(text),
            MmpCategory::GrayZoneRisk => self.warning(text),
            MmpCategory::TechnicalNeed => self.info(text),
            MmpCategory::NotNeeded => self.success(text),
        }
    }
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.config.color.should_use_color() {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    fn info(&self, text: &str) -> String {
        self.paint(text, |t| t.blue())
    }

    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.bold().underline())
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.config.emoji.should_use_emoji() {
            emoji.to_string()
        } else {
            fallback.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn info(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn emoji(&self, _emoji: &str, fallback: &str) -> String {
        fallback.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

fn detect_color_support() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }
    std::io::stdout().is_terminal()
}

/// Traffic-light icon for a verdict, with its ASCII fallback.
pub fn category_icon(category: MmpCategory) -> (&'static str, &'static str) {
    match category {
        MmpCategory::Necessary => ("🔴", "[RED]"),
        MmpCategory::GrayZoneRisk => ("🟠", "[ORANGE]"),
        MmpCategory::TechnicalNeed => ("🔵", "[BLUE]"),
        MmpCategory::NotNeeded => ("🟢", "[GREEN]"),
    }
}

pub fn relevance_icon(relevance: SkanRelevance) -> (&'static str, &'static str) {
    match relevance {
        SkanRelevance::High => ("📈", "[HIGH]"),
        SkanRelevance::Medium => ("📊", "[MEDIUM]"),
        SkanRelevance::Low => ("📉", "[LOW]"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_vars_control_color() {
        assert_eq!(FormattingConfig::from_vars(None, None, None).color, ColorMode::Auto);
        assert_eq!(FormattingConfig::from_vars(Some(""), None, None).color, ColorMode::Never);
        assert_eq!(FormattingConfig::from_vars(None, Some("0"), None).color, ColorMode::Never);
        assert_eq!(
            FormattingConfig::from_vars(Some("1"), None, Some("1")).color,
            ColorMode::Always
        );
    }

    #[test]
    fn test_plain_formatter_uses_fallbacks() {
        let (emoji, fallback) = category_icon(MmpCategory::GrayZoneRisk);
        assert_eq!(PlainFormatter.emoji(emoji, fallback), "[ORANGE]");
        assert_eq!(PlainFormatter.category(MmpCategory::Necessary, "x"), "x");
    }

    #[test]
    fn test_colored_formatter_without_color_is_plain() {
        let formatter = ColoredFormatter::new(FormattingConfig::plain());
        assert_eq!(formatter.bold("verdict"), "verdict");
        assert_eq!(formatter.emoji("🔴", "[RED]"), "[RED]");
    }
}
