use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocgenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read catalog '{}': {source}", path.display())]
    CatalogReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog '{}': {message}", path.display())]
    CatalogParseError { path: PathBuf, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Event '{event}': content_types[{index}] is missing ({available} entries available)")]
    MissingContentType {
        event: String,
        index: usize,
        available: usize,
    },

    #[error("Events '{first}' and '{second}' both render to '{path}'")]
    DuplicateOutputPath {
        path: String,
        first: String,
        second: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Configuration,
    Rendering,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DocgenError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DocgenError::CatalogReadError { .. }
            | DocgenError::CatalogParseError { .. }
            | DocgenError::ValidationError { .. }
            | DocgenError::DuplicateOutputPath { .. } => ErrorCategory::Catalog,
            DocgenError::ConfigError { .. } | DocgenError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            DocgenError::MissingContentType { .. } | DocgenError::SerializationError(_) => {
                ErrorCategory::Rendering
            }
            DocgenError::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Catalog | ErrorCategory::Rendering => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error; always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DocgenError::CatalogReadError { .. } => {
                "Check that the catalog file exists or pass its location with --catalog"
            }
            DocgenError::CatalogParseError { .. } => {
                "Fix the YAML at the reported location; every event needs name, version, routing_key, contract, domain, description, frequency, idempotent, schema and example"
            }
            DocgenError::ValidationError { .. } => "Correct the reported catalog entry",
            DocgenError::DuplicateOutputPath { .. } => {
                "Give one of the events a different name, version or domain"
            }
            DocgenError::MissingContentType { .. } => {
                "List both a preferred and a fallback serialization format under content_types"
            }
            DocgenError::ConfigError { .. } | DocgenError::InvalidConfigValueError { .. } => {
                "Check the command-line flags and the TOML settings file"
            }
            DocgenError::SerializationError(_) => "Check the example payload values",
            DocgenError::IoError(_) => {
                "Check write permissions and free space in the output directory"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Catalog => format!("Event catalog problem: {}", self),
            ErrorCategory::Configuration => format!("Invalid settings: {}", self),
            ErrorCategory::Rendering => format!("Could not render documentation: {}", self),
            ErrorCategory::Output => format!("Could not write documentation: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, DocgenError>;
