//! Error handling module for the glintt CLI.
//!
//! This module provides custom error types using `thiserror` for
//! structured error handling throughout the application.

use thiserror::Error;

/// Main error type for the glintt CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of glintt commands.
#[derive(Error, Debug)]
pub enum GlinttError {
    /// Error when a required configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when a language definition fails validation.
    #[error("Language error: {0}")]
    Language(#[from] glint_lang::ConfigError),

    /// Error when a requested language is not registered.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a TOML language definition cannot be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using GlinttError.
///
/// This type alias simplifies function signatures by providing
/// a consistent result type throughout the application.
pub type Result<T> = std::result::Result<T, GlinttError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = GlinttError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = GlinttError::FileOperation("permission denied".to_string());
        assert_eq!(err.to_string(), "File operation failed: permission denied");
    }

    #[test]
    fn test_unknown_language_display() {
        let err = GlinttError::UnknownLanguage("Brainfun".to_string());
        assert_eq!(err.to_string(), "Unknown language: Brainfun");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let glintt_err: GlinttError = io_err.into();
        assert!(matches!(glintt_err, GlinttError::Io(_)));
    }

    #[test]
    fn test_language_error_conversion() {
        let config_err = glint_lang::ConfigError::EmptyName;
        let glintt_err: GlinttError = config_err.into();
        assert!(matches!(glintt_err, GlinttError::Language(_)));
        assert!(glintt_err.to_string().contains("language name is empty"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not [ valid").unwrap_err();
        let glintt_err: GlinttError = toml_err.into();
        assert!(matches!(glintt_err, GlinttError::Toml(_)));
    }
}
