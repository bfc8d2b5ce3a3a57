//! Driver trait definitions

use crate::error::DbResult;
use crate::row::Row;
use async_trait::async_trait;
use sf_core::{Context, DriverConfig};
use std::sync::Arc;

/// Statement execution seam between the SDK and a Snowflake driver.
///
/// Implementations must be Send + Sync; the SDK shares one handle across
/// concurrent calls. The SDK issues one statement per call and may drop the
/// returned future when the context is cancelled or its deadline passes.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Execute DDL/DML, returning the affected row count
    async fn exec(&self, ctx: &Context, sql: &str) -> DbResult<u64>;

    /// Execute a statement that returns rows (SHOW, DESCRIBE, SELECT)
    async fn query(&self, ctx: &Context, sql: &str) -> DbResult<Vec<Row>>;

    /// Driver type identifier for logging
    fn db_type(&self) -> &'static str;
}

/// Opens driver handles from a resolved configuration.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, config: &DriverConfig) -> DbResult<Arc<dyn Driver>>;
}
