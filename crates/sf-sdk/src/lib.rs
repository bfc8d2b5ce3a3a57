//! sf-sdk - Typed Snowflake object management
//!
//! This crate provides the runtime the generated object families build on:
//! option trees rendered to DDL by [`ddl`], checked by [`validation`] before
//! anything is sent, and executed through the [`Client`] facade, which also
//! attaches query metadata and decodes SHOW/DESCRIBE rows via [`decode`].
//!
//! The families themselves (`database_roles`, `databases`,
//! `network_policies`, `roles`, `warehouses`) are emitted by `sf-gen`; each
//! exposes a trait, its request builders and an `...Impl` reachable from the
//! client.

pub mod client;
pub mod common;
pub mod ddl;
pub mod decode;
pub mod error;
pub mod parameters;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod validation;

pub mod database_roles;
pub mod databases;
pub mod network_policies;
pub mod roles;
pub mod warehouses;

pub use client::{Call, Client, MASKED_SQL};
pub use common::{Like, LimitFrom, TagAssociation};
pub use ddl::{render, SqlBuilder, SqlRender, SqlValue};
pub use decode::{DecodeError, FromColumn, FromRow};
pub use error::{SdkError, SdkResult};
pub use parameters::{Parameter, ParameterLevel, Parameters, ParametersIn, ShowParametersRequest};
pub use validation::{Validate, ValidationError, ValidationErrors};
