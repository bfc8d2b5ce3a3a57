//! sf-db - Driver abstraction layer for the Snowflake SDK
//!
//! This crate provides the `Driver` and `Connector` traits the SDK issues
//! statements through, the `Row` type query results are returned as, and
//! the driver error taxonomy. The network driver itself is an external
//! collaborator; a recording in-memory driver is available behind the
//! `test-support` feature.

pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod recording;
pub mod row;
pub mod traits;

pub use error::{DbError, DbResult};
#[cfg(any(test, feature = "test-support"))]
pub use recording::RecordingDriver;
pub use row::Row;
pub use traits::{Connector, Driver};
