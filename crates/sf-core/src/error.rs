//! Error types for sf-core

use thiserror::Error;

/// Core error type for the Snowflake SDK
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Identifier text could not be parsed
    #[error("[C001] Invalid identifier '{input}': {reason}")]
    InvalidIdentifier { input: String, reason: String },

    /// C002: Configuration file not found
    #[error("[C002] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C003: Failed to parse configuration file
    #[error("[C003] Failed to parse config {path}: {message}")]
    ConfigParseError { path: String, message: String },

    /// C004: Invalid configuration value
    #[error("[C004] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C005: IO error with file path context
    #[error("[C005] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
