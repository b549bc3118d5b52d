//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

use crate::config::validation::ValidationError;

/// Main error type for mmp-advisor operations
#[derive(Debug, Error)]
pub enum Error {
    /// A request field is out of range or unrecognized
    #[error("Invalid input for `{field}`: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Config values rejected by validation, one entry per field
    #[error("Invalid configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Report rendering errors
    #[error("Failed to render report: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl Error {
    /// Create an invalid-input error naming the offending field
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a file system error with path context
    pub fn file_system(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Attach an underlying IO error to a file system error
    pub fn with_io_source(self, source: std::io::Error) -> Self {
        match self {
            Self::FileSystem { message, path, .. } => Self::FileSystem {
                message,
                path,
                source: Some(source),
            },
            other => other,
        }
    }

    /// Name of the offending field, for `InvalidInput` errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display_names_field() {
        let err = Error::invalid_input("channel_count", "must be at least 1, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid input for `channel_count`: must be at least 1, got 0"
        );
        assert_eq!(err.field(), Some("channel_count"));
    }

    #[test]
    fn test_file_system_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::file_system("Failed to write report", "/tmp/report.md").with_io_source(io);
        match &err {
            Error::FileSystem { path, source, .. } => {
                assert_eq!(path.as_deref(), Some(std::path::Path::new("/tmp/report.md")));
                assert!(source.is_some());
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_invalid_config_lists_every_field() {
        use crate::config::validation::FieldPath;

        let err = Error::InvalidConfig(vec![
            ValidationError::at_field(&FieldPath::new("skan").push("high_ios_budget"), "too low"),
            ValidationError::at_field(&FieldPath::new("output").push("default_format"), "unknown"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid configuration: skan.high_ios_budget: too low; output.default_format: unknown"
        );
    }

    #[test]
    fn test_formatter_error_propagates_with_question_mark() {
        fn render() -> Result<String> {
            Err(std::fmt::Error)?
        }
        let err = render().unwrap_err();
        assert!(matches!(err, Error::Fmt(_)));
        assert!(err.to_string().starts_with("Failed to render report"));
    }
}
