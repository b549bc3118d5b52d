use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::AdvisorConfig;
use super::validation::validate_config_result;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".mmp-advisor.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<AdvisorConfig> {
    let config = toml::from_str::<AdvisorConfig>(contents)?;
    validate_config_result(&config)?;
    Ok(config)
}

/// Load an explicitly requested config file. Unlike the directory search,
/// every failure here is reported to the caller.
pub fn load_config_from_path(path: &Path) -> Result<AdvisorConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::file_system(
            format!("Failed to read config file {}", path.display()),
            path,
        )
        .with_io_source(e)
    })?;
    let config = parse_and_validate_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a specific path, logging anything but "not found"
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AdvisorConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.mmp-advisor.toml`
pub fn find_config_from(start: PathBuf) -> AdvisorConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AdvisorConfig::default()
        })
}

pub fn load_config() -> AdvisorConfig {
    match std::env::current_dir() {
        Ok(dir) => find_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            AdvisorConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClassificationMode, Currency};
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            currency = "czk"

            [thresholds]
            budget_threshold = 60000.0
            ios_budget_threshold = 25000.0

            [skan]
            medium_ios_budget = 15000.0

            [classification]
            mode = "single-axis"

            [output]
            default_format = "markdown"
        "#})
        .unwrap();

        assert_eq!(config.currency, Currency::Czk);
        assert_eq!(config.budget_thresholds().ios_budget_threshold, 25_000.0);
        assert_eq!(config.budget_thresholds().budget_threshold, 60_000.0);
        assert_eq!(config.skan_thresholds().medium_ios_budget, 15_000.0);
        assert_eq!(
            config.skan_thresholds().high_ios_budget,
            Currency::Czk.skan_thresholds().high_ios_budget
        );
        assert_eq!(config.classification_mode(), ClassificationMode::SingleAxis);
        assert_eq!(config.default_format(), Some("markdown"));
    }

    #[test]
    fn test_parse_rejects_inverted_thresholds() {
        let err = parse_and_validate_config(indoc! {r#"
            [thresholds]
            budget_threshold = 500.0
            ios_budget_threshold = 900.0
        "#})
        .unwrap_err();
        match err {
            Error::InvalidConfig(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field.as_string(), "thresholds.ios_budget_threshold");
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_partial_czk_skan_section_uses_czk_tiers() {
        let config = parse_and_validate_config(indoc! {r#"
            currency = "czk"

            [skan]
            medium_ios_budget = 12500.0
        "#})
        .unwrap();
        assert_eq!(config.skan_thresholds(), Currency::Czk.skan_thresholds());
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let err = parse_and_validate_config("currency = ").unwrap_err();
        assert!(matches!(err, Error::Toml(_)), "{err:?}");
    }

    #[test]
    fn test_find_config_walks_up_directories() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[classification]\nmode = \"single-axis\"\n",
        )
        .unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = find_config_from(nested);
        assert_eq!(config.classification_mode(), ClassificationMode::SingleAxis);
    }

    #[test]
    fn test_find_config_ignores_invalid_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();

        let config = find_config_from(temp.path().to_path_buf());
        assert_eq!(config.classification_mode(), ClassificationMode::TwoAxis);
    }

    #[test]
    fn test_load_config_from_missing_path_is_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config_from_path(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }), "{err:?}");
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }
}
