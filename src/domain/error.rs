use std::io;

use thiserror::Error;

/// Library-wide error type for pwagen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure (directory creation, file write).
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Caching strategy is not one of the supported values.
    #[error(
        "Invalid caching strategy '{0}': must be one of cache-first, network-first, stale-while-revalidate"
    )]
    InvalidCachingStrategy(String),

    /// Explicitly requested configuration file does not exist.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// Configuration file already exists and would be overwritten.
    #[error("Config file already exists: {0}")]
    ConfigExists(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Serialization of a generated artifact failed.
    #[error("Failed to serialize {what}: {details}")]
    Serialization { what: String, details: String },

    /// Embedded template is not present in the binary.
    #[error("Template '{0}' not found")]
    TemplateMissing(String),

    /// Template failed to load or render.
    #[error("Failed to render template {template}: {details}")]
    TemplateRender { template: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidCachingStrategy(_)
            | AppError::ParseError { .. } => io::ErrorKind::InvalidInput,
            AppError::ConfigMissing(_) | AppError::TemplateMissing(_) => io::ErrorKind::NotFound,
            AppError::ConfigExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Serialization { .. } | AppError::TemplateRender { .. } => {
                io::ErrorKind::InvalidData
            }
        }
    }
}
