// @generated by sf-gen from the NetworkPolicies definition. Do not edit.
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
pub trait NetworkPolicies: Send + Sync {
    /// <https://docs.snowflake.com/en/sql-reference/sql/create-network-policy>
    async fn create(&self, ctx: &Context, request: &CreateNetworkPolicyRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/alter-network-policy>
    async fn alter(&self, ctx: &Context, request: &AlterNetworkPolicyRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/drop-network-policy>
    async fn drop(&self, ctx: &Context, request: &DropNetworkPolicyRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/show-network-policies>
    async fn show(&self, ctx: &Context, request: &ShowNetworkPolicyRequest) -> SdkResult<Vec<NetworkPolicy>>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/desc-network-policy>
    async fn describe(&self, ctx: &Context, request: &DescribeNetworkPolicyRequest) -> SdkResult<Vec<NetworkPolicyProperty>>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkPolicy {
    pub created_on: String,
    pub name: String,
    pub comment: Option<String>,
    pub entries_in_allowed_ip_list: i64,
    pub entries_in_blocked_ip_list: i64,
}

impl FromRow for NetworkPolicy {
    fn from_row(row: &Row) -> Result<Self, DecodeError> {
        Ok(Self {
            created_on: row.decode("created_on")?,
            name: row.decode("name")?,
            comment: row.decode_opt("comment")?,
            entries_in_allowed_ip_list: row.decode("entries_in_allowed_ip_list")?,
            entries_in_blocked_ip_list: row.decode("entries_in_blocked_ip_list")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NetworkPolicyProperty {
    pub name: String,
    pub value: String,
}

impl FromRow for NetworkPolicyProperty {
    fn from_row(row: &Row) -> Result<Self, DecodeError> {
        Ok(Self {
            name: row.decode("name")?,
            value: row.decode("value")?,
        })
    }
}
