//! Per-call request context.
//!
//! A [`Context`] travels with every SDK call. It carries the provenance that
//! ends up in the query metadata comment, a cancellation token shared with
//! the caller, and an optional deadline.

use crate::tracking::{Operation, QueryMetadata};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Provenance supplied by the caller for one operation.
///
/// `version` is optional; when absent the client falls back to the provider
/// version it was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMetadata {
    pub version: Option<String>,
    pub resource: Option<String>,
    pub datasource: Option<String>,
    pub operation: Operation,
}

impl ContextMetadata {
    pub fn resource(resource: impl Into<String>, operation: Operation) -> Self {
        Self {
            version: None,
            resource: Some(resource.into()),
            datasource: None,
            operation,
        }
    }

    pub fn datasource(datasource: impl Into<String>) -> Self {
        Self {
            version: None,
            resource: None,
            datasource: Some(datasource.into()),
            operation: Operation::Read,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Name used to look up sensitive attributes (resource or data source).
    pub fn subject(&self) -> Option<&str> {
        self.resource.as_deref().or(self.datasource.as_deref())
    }

    /// Resolve into the wire payload, using `fallback_version` when the
    /// caller did not pin one.
    pub fn to_query_metadata(&self, fallback_version: &str) -> QueryMetadata {
        QueryMetadata {
            version: self
                .version
                .clone()
                .unwrap_or_else(|| fallback_version.to_string()),
            resource: self.resource.clone().unwrap_or_default(),
            datasource: self.datasource.clone().unwrap_or_default(),
            operation: self.operation,
        }
    }
}

/// Request-scoped carrier for metadata, cancellation and deadline.
#[derive(Debug, Clone, Default)]
pub struct Context {
    metadata: Option<ContextMetadata>,
    cancellation: CancellationToken,
    deadline: Option<Instant>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metadata(mut self, metadata: ContextMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Share a cancellation token with the caller. Cancelling it aborts the
    /// in-flight statement and prevents any statement not yet dispatched.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Set a deadline `timeout` from now. Must be called inside a tokio runtime.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn metadata(&self) -> Option<&ContextMetadata> {
        self.metadata.as_ref()
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// True when a deadline is set and has already passed.
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Resolves once the context is cancelled.
    pub async fn cancelled(&self) {
        self.cancellation.cancelled().await
    }

    /// Resolves once the deadline passes; never resolves without one.
    pub async fn deadline_reached(&self) {
        match self.deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod tests;
