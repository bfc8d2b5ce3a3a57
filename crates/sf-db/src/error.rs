//! Error types for sf-db

use std::borrow::Cow;
use thiserror::Error;

/// Snowflake error code for "object does not exist or not authorized"
pub const OBJECT_NOT_FOUND_CODE: &str = "002003";

const OBJECT_NOT_FOUND_MESSAGE: &str = "does not exist or not authorized";

/// Driver-level errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Driver connection failed: {0}")]
    ConnectionError(String),

    /// Statement execution error (D002)
    #[error("[D002] SQL execution failed{}: {message}", code_suffix(.code))]
    ExecutionError {
        code: Option<String>,
        message: String,
    },

    /// Referenced object missing (D003)
    #[error("[D003] Object does not exist or not authorized: {0}")]
    ObjectNotFound(String),

    /// Statement aborted by the driver (D004)
    #[error("[D004] Statement cancelled")]
    Cancelled,

    /// Not implemented (D005)
    #[error("[D005] Feature not implemented for {backend}: {feature}")]
    NotImplemented { backend: String, feature: String },

    /// Internal error (D006)
    #[error("[D006] Internal driver error: {0}")]
    Internal(String),
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref()
        .map(|c| format!(" ({c})"))
        .unwrap_or_default()
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    /// Classify a failure reported by Snowflake.
    ///
    /// Snowflake signals a missing object with code `002003`; older endpoints
    /// only carry the message, so both are checked.
    pub fn execution(code: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        if code == Some(OBJECT_NOT_FOUND_CODE) || message.contains(OBJECT_NOT_FOUND_MESSAGE) {
            DbError::ObjectNotFound(message)
        } else {
            DbError::ExecutionError {
                code: code.map(str::to_string),
                message,
            }
        }
    }

    /// The driver's own message, without the code prefix.
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            DbError::ConnectionError(message)
            | DbError::ObjectNotFound(message)
            | DbError::Internal(message)
            | DbError::ExecutionError { message, .. } => Cow::Borrowed(message),
            other => Cow::Owned(other.to_string()),
        }
    }

    pub fn is_object_not_found(&self) -> bool {
        match self {
            DbError::ObjectNotFound(_) => true,
            DbError::ExecutionError { code, message } => {
                code.as_deref() == Some(OBJECT_NOT_FOUND_CODE)
                    || message.contains(OBJECT_NOT_FOUND_MESSAGE)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
