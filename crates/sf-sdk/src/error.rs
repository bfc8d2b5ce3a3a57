//! Error types for sf-sdk

use crate::decode::DecodeError;
use crate::validation::ValidationErrors;
use sf_core::{CoreError, MetadataError};
use sf_db::DbError;
use thiserror::Error;

/// SDK operation errors.
///
/// Every variant names the operation and, where one applies, the
/// fully-qualified identifier it acted on. Only `Driver` carries SQL text,
/// masked when the calling resource has sensitive attributes.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Operation called without options (S001)
    #[error("[S001] {operation}{}: options are nil", on(.identifier))]
    NilOptions {
        operation: &'static str,
        identifier: Option<String>,
    },

    /// Option tree violates its declared rules (S002)
    #[error("[S002] {operation}{}: {source}", on(.identifier))]
    Validation {
        operation: &'static str,
        identifier: Option<String>,
        source: ValidationErrors,
    },

    /// Referenced object does not exist (S003)
    #[error("[S003] {operation}{}: object does not exist or not authorized: {message}", on(.identifier))]
    ObjectNotFound {
        operation: &'static str,
        identifier: Option<String>,
        message: String,
    },

    /// Driver rejected the statement (S004)
    #[error("[S004] {operation}{}: {source} [sql: {sql}]", on(.identifier))]
    Driver {
        operation: &'static str,
        identifier: Option<String>,
        sql: String,
        source: DbError,
    },

    /// Result row could not be decoded (S005)
    #[error("[S005] {operation}{}: {source}", on(.identifier))]
    Decode {
        operation: &'static str,
        identifier: Option<String>,
        source: DecodeError,
    },

    /// Query metadata could not be attached (S006)
    #[error("[S006] {operation}{}: {source}", on(.identifier))]
    Metadata {
        operation: &'static str,
        identifier: Option<String>,
        source: MetadataError,
    },

    /// Context cancelled before or during execution (S007)
    #[error("[S007] {operation}{}: cancelled", on(.identifier))]
    Cancelled {
        operation: &'static str,
        identifier: Option<String>,
    },

    /// Context deadline passed before or during execution (S008)
    #[error("[S008] {operation}{}: deadline exceeded", on(.identifier))]
    DeadlineExceeded {
        operation: &'static str,
        identifier: Option<String>,
    },

    /// Driver could not be opened (S009)
    #[error("[S009] connect: {0}")]
    Connection(#[source] DbError),

    /// Configuration could not be resolved (S010)
    #[error("[S010] {0}")]
    Config(#[from] CoreError),
}

/// Result type alias for SdkError
pub type SdkResult<T> = Result<T, SdkError>;

fn on(identifier: &Option<String>) -> String {
    identifier
        .as_deref()
        .map(|id| format!(" on {id}"))
        .unwrap_or_default()
}

impl SdkError {
    /// A lookup by identifier that matched no row.
    pub fn not_found(operation: &'static str, identifier: String) -> Self {
        SdkError::ObjectNotFound {
            operation,
            identifier: Some(identifier),
            message: "no matching row".to_string(),
        }
    }

    pub fn is_object_not_found(&self) -> bool {
        matches!(self, SdkError::ObjectNotFound { .. })
    }

    /// Validation failures, if this is a validation error.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SdkError::Validation { source, .. } => Some(source),
            _ => None,
        }
    }
}
