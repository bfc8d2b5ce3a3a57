// @generated by sf-gen from the Databases definition. Do not edit.
#![allow(unused_imports)]

use super::dto_gen::*;
use crate::ddl::{text_value, SqlValue};
use crate::decode::{DecodeError, FromColumn, FromRow, RowExt};
use crate::error::SdkResult;
use async_trait::async_trait;
use sf_core::Context;
use sf_db::Row;
use std::fmt;
use std::str::FromStr;

#[async_trait]
pub trait Databases: Send + Sync {
    /// <https://docs.snowflake.com/en/sql-reference/sql/create-database>
    async fn create(&self, ctx: &Context, request: &CreateDatabaseRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/alter-database>
    async fn alter(&self, ctx: &Context, request: &AlterDatabaseRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/drop-database>
    async fn drop(&self, ctx: &Context, request: &DropDatabaseRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/undrop-database>
    async fn undrop(&self, ctx: &Context, request: &UndropDatabaseRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/show-databases>
    async fn show(&self, ctx: &Context, request: &ShowDatabaseRequest) -> SdkResult<Vec<Database>>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/desc-database>
    async fn describe(&self, ctx: &Context, request: &DescribeDatabaseRequest) -> SdkResult<Vec<DatabaseDetails>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Off,
}

impl LogLevel {
    pub const ALL: &'static [LogLevel] = &[
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Off,
    ];

    pub fn as_sql(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Off => "OFF",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            "OFF" => Ok(LogLevel::Off),
            _ => Err(format!("unknown LogLevel '{s}'")),
        }
    }
}

impl SqlValue for LogLevel {
    fn to_sql(&self, quoted: bool) -> String {
        text_value(self.as_sql(), quoted)
    }
}

impl FromColumn for LogLevel {
    fn from_column(raw: &str) -> Result<Self, String> {
        raw.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceLevel {
    Always,
    OnEvent,
    Off,
}

impl TraceLevel {
    pub const ALL: &'static [TraceLevel] = &[
        TraceLevel::Always,
        TraceLevel::OnEvent,
        TraceLevel::Off,
    ];

    pub fn as_sql(&self) -> &'static str {
        match self {
            TraceLevel::Always => "ALWAYS",
            TraceLevel::OnEvent => "ON_EVENT",
            TraceLevel::Off => "OFF",
        }
    }
}

impl fmt::Display for TraceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for TraceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALWAYS" => Ok(TraceLevel::Always),
            "ON_EVENT" => Ok(TraceLevel::OnEvent),
            "OFF" => Ok(TraceLevel::Off),
            _ => Err(format!("unknown TraceLevel '{s}'")),
        }
    }
}

impl SqlValue for TraceLevel {
    fn to_sql(&self, quoted: bool) -> String {
        text_value(self.as_sql(), quoted)
    }
}

impl FromColumn for TraceLevel {
    fn from_column(raw: &str) -> Result<Self, String> {
        raw.parse()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    pub created_on: String,
    pub name: String,
    pub is_default: bool,
    pub is_current: bool,
    pub origin: Option<String>,
    pub owner: String,
    pub comment: Option<String>,
    pub options: Option<String>,
    pub retention_time: Option<i64>,
    pub resource_group: Option<String>,
    pub dropped_on: Option<String>,
    pub kind: Option<String>,
    pub owner_role_type: Option<String>,
}

impl FromRow for Database {
    fn from_row(row: &Row) -> Result<Self, DecodeError> {
        Ok(Self {
            created_on: row.decode("created_on")?,
            name: row.decode("name")?,
            is_default: row.decode("is_default")?,
            is_current: row.decode("is_current")?,
            origin: row.decode_opt("origin")?,
            owner: row.decode("owner")?,
            comment: row.decode_opt("comment")?,
            options: row.decode_opt("options")?,
            retention_time: row.decode_opt("retention_time")?,
            resource_group: row.decode_opt("resource_group")?,
            dropped_on: row.decode_opt("dropped_on")?,
            kind: row.decode_opt("kind")?,
            owner_role_type: row.decode_opt("owner_role_type")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseDetails {
    pub created_on: String,
    pub name: String,
    pub kind: String,
}

impl FromRow for DatabaseDetails {
    fn from_row(row: &Row) -> Result<Self, DecodeError> {
        Ok(Self {
            created_on: row.decode("created_on")?,
            name: row.decode("name")?,
            kind: row.decode("kind")?,
        })
    }
}
