// @generated by sf-gen from the DatabaseRoles definition. Do not edit.
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
pub trait DatabaseRoles: Send + Sync {
    /// <https://docs.snowflake.com/en/sql-reference/sql/create-database-role>
    async fn create(&self, ctx: &Context, request: &CreateDatabaseRoleRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/alter-database-role>
    async fn alter(&self, ctx: &Context, request: &AlterDatabaseRoleRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/drop-database-role>
    async fn drop(&self, ctx: &Context, request: &DropDatabaseRoleRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/show-database-roles>
    async fn show(&self, ctx: &Context, request: &ShowDatabaseRoleRequest) -> SdkResult<Vec<DatabaseRole>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseRole {
    pub created_on: String,
    pub name: String,
    pub is_default: bool,
    pub is_current: bool,
    pub is_inherited: bool,
    pub granted_to_roles: i64,
    pub granted_to_database_roles: i64,
    pub granted_database_roles: i64,
    pub owner: String,
    pub comment: Option<String>,
    pub owner_role_type: Option<String>,
}

impl FromRow for DatabaseRole {
    fn from_row(row: &Row) -> Result<Self, DecodeError> {
        Ok(Self {
            created_on: row.decode("created_on")?,
            name: row.decode("name")?,
            is_default: row.decode("is_default")?,
            is_current: row.decode("is_current")?,
            is_inherited: row.decode("is_inherited")?,
            granted_to_roles: row.decode("granted_to_roles")?,
            granted_to_database_roles: row.decode("granted_to_database_roles")?,
            granted_database_roles: row.decode("granted_database_roles")?,
            owner: row.decode("owner")?,
            comment: row.decode_opt("comment")?,
            owner_role_type: row.decode_opt("owner_role_type")?,
        })
    }
}
