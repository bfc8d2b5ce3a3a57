//! sf-core - Core types for the Snowflake SDK
//!
//! This crate provides the identifier model, SQL quoting helpers, the query
//! metadata channel that tags emitted statements with provider provenance,
//! the per-call request [`Context`], driver configuration resolution, and the
//! sensitive-attribute registry shared by every layer above it.

pub mod config;
pub mod context;
pub mod error;
pub mod identifier;
pub mod sensitive;
pub mod sql_utils;
pub mod tracking;

pub use config::{Authenticator, DriverConfig, OauthRefresh, ProfileFile, Secret};
pub use context::{Context, ContextMetadata};
pub use error::{CoreError, CoreResult};
pub use identifier::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, IdentifierKind, ObjectId, ObjectIdentifier,
    SchemaObjectIdentifier, SchemaObjectIdentifierWithArguments,
};
pub use sensitive::{NoSensitiveAttributes, SensitiveAttribute, SensitiveAttributes, SensitiveRegistry};
pub use tracking::{MetadataError, Operation, QueryMetadata};

/// Provider version stamped into query metadata when the caller's context
/// does not carry one.
pub const PROVIDER_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
