//! Error handling for stitch.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The rewrite pipeline itself is fail-open and never errors (unparseable
//! spans are left unchanged), so the only fallible surface is engine
//! construction from configuration.

/// Errors that can occur while building an engine from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid site pattern: {0}")]
    InvalidPattern(String),
}
