//! Error types and error handling for kewl.
//!
//! This module defines the error types used throughout the
//! library. Degenerate inputs (no phrases, empty text, empty
//! collections) are not errors; they produce empty/zero results.

use thiserror::Error;

/// Result type alias for kewl operations
pub type Result<T> = std::result::Result<T, KewlError>;

/// Main error type for kewl
#[derive(Error, Debug)]
pub enum KewlError {
    #[error("Template syntax error: {0}")]
    TemplateSyntax(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Site domain is not configured (set [site].domain or KEWL_SITE_DOMAIN)")]
    SiteNotConfigured,

    #[error("Page source error: {0}")]
    Source(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl KewlError {
    /// Build the syntax error raised for a malformed tag invocation
    pub fn usage(tag: &str, usage: &str) -> Self {
        KewlError::TemplateSyntax(format!("'{tag}' expected usage: {usage}"))
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error comes from template parsing
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, KewlError::TemplateSyntax(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            KewlError::TemplateSyntax(_)
                | KewlError::InvalidArgument(_)
                | KewlError::ConfigError(_)
                | KewlError::SiteNotConfigured
        )
    }
}
