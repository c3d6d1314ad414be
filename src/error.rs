//! Error types for site-pager
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for site-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Argument Errors
    // ============================================================================
    #[error("Argument `{argument}` must be provided.")]
    MissingArgument { argument: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // Template Errors
    // ============================================================================
    #[error("Template error: {message}")]
    Template { message: String },

    #[error("Undefined variable in template: {variable}")]
    UndefinedVariable { variable: String },

    // ============================================================================
    // Build Errors
    // ============================================================================
    #[error("Page sink rejected '{path}': {message}")]
    Sink { path: String, message: String },

    #[error("Failed to load records from '{path}': {message}")]
    Records { path: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a missing argument error
    pub fn missing_argument(argument: impl Into<String>) -> Self {
        Self::MissingArgument {
            argument: argument.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    /// Create an undefined variable error
    pub fn undefined_var(variable: impl Into<String>) -> Self {
        Self::UndefinedVariable {
            variable: variable.into(),
        }
    }

    /// Create a sink error for the page at `path`
    pub fn sink(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Sink {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a records loading error
    pub fn records(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Records {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this error was caused by caller input rather than the environment
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::MissingArgument { .. }
                | Error::Config { .. }
                | Error::InvalidConfigValue { .. }
                | Error::Template { .. }
                | Error::UndefinedVariable { .. }
        )
    }
}

/// Result type alias for site-pager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::missing_argument("sink");
        assert_eq!(err.to_string(), "Argument `sink` must be provided.");

        let err = Error::invalid_value("limit", "must be a positive integer");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'limit': must be a positive integer"
        );

        let err = Error::sink("/2", "registry full");
        assert_eq!(err.to_string(), "Page sink rejected '/2': registry full");
    }

    #[test]
    fn test_is_usage_error() {
        assert!(Error::missing_argument("records").is_usage_error());
        assert!(Error::invalid_value("limit", "zero").is_usage_error());
        assert!(Error::undefined_var("record.slug").is_usage_error());

        assert!(!Error::sink("/", "boom").is_usage_error());
        assert!(!Error::records("posts.json", "not an array").is_usage_error());
        assert!(!Error::FileNotFound {
            path: "posts.json".to_string()
        }
        .is_usage_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }

    #[test]
    fn test_anyhow_passthrough() {
        let sink = |_path: &str| -> Result<()> {
            let registry: anyhow::Result<()> = Err(anyhow::anyhow!("registry offline"));
            registry?;
            Ok(())
        };
        let err = sink("/").unwrap_err();
        assert!(matches!(err, Error::Anyhow(_)));
        assert_eq!(err.to_string(), "registry offline");
    }
}
