// @generated by sf-gen from the Roles definition. Do not edit.
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
pub trait Roles: Send + Sync {
    /// <https://docs.snowflake.com/en/sql-reference/sql/create-role>
    async fn create(&self, ctx: &Context, request: &CreateRoleRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/alter-role>
    async fn alter(&self, ctx: &Context, request: &AlterRoleRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/drop-role>
    async fn drop(&self, ctx: &Context, request: &DropRoleRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/show-roles>
    async fn show(&self, ctx: &Context, request: &ShowRoleRequest) -> SdkResult<Vec<Role>>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/grant-role>
    async fn grant(&self, ctx: &Context, request: &GrantRoleRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/revoke-role>
    async fn revoke(&self, ctx: &Context, request: &RevokeRoleRequest) -> SdkResult<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub created_on: String,
    pub name: String,
    pub is_default: bool,
    pub is_current: bool,
    pub is_inherited: bool,
    pub assigned_to_users: i64,
    pub granted_to_roles: i64,
    pub granted_roles: i64,
    pub owner: String,
    pub comment: Option<String>,
}

impl FromRow for Role {
    fn from_row(row: &Row) -> Result<Self, DecodeError> {
        Ok(Self {
            created_on: row.decode("created_on")?,
            name: row.decode("name")?,
            is_default: row.decode("is_default")?,
            is_current: row.decode("is_current")?,
            is_inherited: row.decode("is_inherited")?,
            assigned_to_users: row.decode("assigned_to_users")?,
            granted_to_roles: row.decode("granted_to_roles")?,
            granted_roles: row.decode("granted_roles")?,
            owner: row.decode("owner")?,
            comment: row.decode_opt("comment")?,
        })
    }
}
