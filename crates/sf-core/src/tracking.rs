//! Query metadata for SQL provenance.
//!
//! Every statement the SDK sends can carry a trailing SQL line comment with a
//! compact JSON payload naming the provider version, the resource (or data
//! source) and the lifecycle operation that produced it:
//!
//! ```text
//! SELECT 1 --terraform_provider_snowflake_tracking {"version":"v1.0.0","resource":"snowflake_database","operation":"create"}
//! ```
//!
//! Snowflake keeps the comment in `QUERY_HISTORY`, which lets server-side
//! logs be traced back to the provider call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Marker that starts the metadata comment. Stable across releases.
pub const METADATA_PREFIX: &str = "terraform_provider_snowflake_tracking";

/// Errors raised while attaching or reading query metadata
#[derive(Error, Debug)]
pub enum MetadataError {
    /// M001: The statement has no metadata comment
    #[error("[M001] Query metadata marker not found")]
    MarkerNotFound,

    /// M002: The marker appears more than once
    #[error("[M002] Query metadata marker appears {count} times, expected exactly once")]
    MarkerRepeated { count: usize },

    /// M003: The payload is not valid JSON of the expected shape
    #[error("[M003] Malformed query metadata: {0}")]
    Malformed(#[source] serde_json::Error),

    /// M004: A required key is empty
    #[error("[M004] Query metadata key '{key}' must not be empty")]
    EmptyKey { key: &'static str },

    /// M005: The payload could not be serialized
    #[error("[M005] Failed to serialize query metadata: {0}")]
    Marshal(#[source] serde_json::Error),
}

/// Lifecycle operation that issued a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
    Import,
    CustomDiff,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Import => "import",
            Operation::CustomDiff => "custom_diff",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Operation::Create),
            "read" => Ok(Operation::Read),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            "import" => Ok(Operation::Import),
            "custom_diff" => Ok(Operation::CustomDiff),
            other => Err(format!("unknown operation '{other}'")),
        }
    }
}

/// Provenance payload carried by a statement.
///
/// Exactly one of `resource` and `datasource` is expected to be set; empty
/// strings are omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryMetadata {
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub datasource: String,
    pub operation: Operation,
}

impl QueryMetadata {
    /// Metadata for a resource lifecycle call.
    pub fn for_resource(
        version: impl Into<String>,
        resource: impl Into<String>,
        operation: Operation,
    ) -> Self {
        Self {
            version: version.into(),
            resource: resource.into(),
            datasource: String::new(),
            operation,
        }
    }

    /// Metadata for a data source read.
    pub fn for_datasource(version: impl Into<String>, datasource: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            resource: String::new(),
            datasource: datasource.into(),
            operation: Operation::Read,
        }
    }

    /// Check that every required key is non-empty.
    pub fn validate(&self) -> Result<(), MetadataError> {
        if self.version.is_empty() {
            return Err(MetadataError::EmptyKey { key: "version" });
        }
        if self.resource.is_empty() && self.datasource.is_empty() {
            return Err(MetadataError::EmptyKey { key: "resource" });
        }
        Ok(())
    }
}

fn marker() -> String {
    format!("--{METADATA_PREFIX}")
}

/// Append the metadata comment to a statement.
pub fn append_metadata(sql: &str, metadata: &QueryMetadata) -> Result<String, MetadataError> {
    let json = serde_json::to_string(metadata).map_err(MetadataError::Marshal)?;
    Ok(format!("{} {} {}", sql, marker(), json))
}

/// Strip the metadata comment, returning the statement as rendered.
///
/// Statements without a comment are returned unchanged.
pub fn trim_metadata(sql: &str) -> &str {
    match sql.find(&format!(" {}", marker())) {
        Some(idx) => &sql[..idx],
        None => sql,
    }
}

/// Read the metadata back out of a statement.
pub fn parse_metadata(sql: &str) -> Result<QueryMetadata, MetadataError> {
    let marker = marker();
    let parts: Vec<&str> = sql.split(marker.as_str()).collect();
    match parts.len() {
        1 => return Err(MetadataError::MarkerNotFound),
        2 => {}
        n => return Err(MetadataError::MarkerRepeated { count: n - 1 }),
    }
    let metadata: QueryMetadata =
        serde_json::from_str(parts[1].trim()).map_err(MetadataError::Malformed)?;
    metadata.validate()?;
    Ok(metadata)
}

#[cfg(test)]
#[path = "tracking_test.rs"]
mod tests;
