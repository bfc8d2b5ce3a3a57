// @generated by sf-gen from the Warehouses definition. Do not edit.
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
pub trait Warehouses: Send + Sync {
    /// <https://docs.snowflake.com/en/sql-reference/sql/create-warehouse>
    async fn create(&self, ctx: &Context, request: &CreateWarehouseRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/alter-warehouse>
    async fn alter(&self, ctx: &Context, request: &AlterWarehouseRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/drop-warehouse>
    async fn drop(&self, ctx: &Context, request: &DropWarehouseRequest) -> SdkResult<()>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/show-warehouses>
    async fn show(&self, ctx: &Context, request: &ShowWarehouseRequest) -> SdkResult<Vec<Warehouse>>;
    /// <https://docs.snowflake.com/en/sql-reference/sql/desc-warehouse>
    async fn describe(&self, ctx: &Context, request: &DescribeWarehouseRequest) -> SdkResult<Vec<WarehouseDetails>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarehouseType {
    Standard,
    SnowparkOptimized,
}

impl WarehouseType {
    pub const ALL: &'static [WarehouseType] = &[
        WarehouseType::Standard,
        WarehouseType::SnowparkOptimized,
    ];

    pub fn as_sql(&self) -> &'static str {
        match self {
            WarehouseType::Standard => "STANDARD",
            WarehouseType::SnowparkOptimized => "SNOWPARK-OPTIMIZED",
        }
    }
}

impl fmt::Display for WarehouseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for WarehouseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STANDARD" => Ok(WarehouseType::Standard),
            "SNOWPARK-OPTIMIZED" | "SNOWPARK_OPTIMIZED" => Ok(WarehouseType::SnowparkOptimized),
            _ => Err(format!("unknown WarehouseType '{s}'")),
        }
    }
}

impl SqlValue for WarehouseType {
    fn to_sql(&self, quoted: bool) -> String {
        text_value(self.as_sql(), quoted)
    }
}

impl FromColumn for WarehouseType {
    fn from_column(raw: &str) -> Result<Self, String> {
        raw.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarehouseSize {
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XXLarge,
    XXXLarge,
    X4Large,
    X5Large,
    X6Large,
}

impl WarehouseSize {
    pub const ALL: &'static [WarehouseSize] = &[
        WarehouseSize::XSmall,
        WarehouseSize::Small,
        WarehouseSize::Medium,
        WarehouseSize::Large,
        WarehouseSize::XLarge,
        WarehouseSize::XXLarge,
        WarehouseSize::XXXLarge,
        WarehouseSize::X4Large,
        WarehouseSize::X5Large,
        WarehouseSize::X6Large,
    ];

    pub fn as_sql(&self) -> &'static str {
        match self {
            WarehouseSize::XSmall => "XSMALL",
            WarehouseSize::Small => "SMALL",
            WarehouseSize::Medium => "MEDIUM",
            WarehouseSize::Large => "LARGE",
            WarehouseSize::XLarge => "XLARGE",
            WarehouseSize::XXLarge => "XXLARGE",
            WarehouseSize::XXXLarge => "XXXLARGE",
            WarehouseSize::X4Large => "X4LARGE",
            WarehouseSize::X5Large => "X5LARGE",
            WarehouseSize::X6Large => "X6LARGE",
        }
    }
}

impl fmt::Display for WarehouseSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for WarehouseSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XSMALL" | "X-SMALL" => Ok(WarehouseSize::XSmall),
            "SMALL" => Ok(WarehouseSize::Small),
            "MEDIUM" => Ok(WarehouseSize::Medium),
            "LARGE" => Ok(WarehouseSize::Large),
            "XLARGE" | "X-LARGE" => Ok(WarehouseSize::XLarge),
            "XXLARGE" | "X2LARGE" | "2X-LARGE" => Ok(WarehouseSize::XXLarge),
            "XXXLARGE" | "X3LARGE" | "3X-LARGE" => Ok(WarehouseSize::XXXLarge),
            "X4LARGE" | "4X-LARGE" => Ok(WarehouseSize::X4Large),
            "X5LARGE" | "5X-LARGE" => Ok(WarehouseSize::X5Large),
            "X6LARGE" | "6X-LARGE" => Ok(WarehouseSize::X6Large),
            _ => Err(format!("unknown WarehouseSize '{s}'")),
        }
    }
}

impl SqlValue for WarehouseSize {
    fn to_sql(&self, quoted: bool) -> String {
        text_value(self.as_sql(), quoted)
    }
}

impl FromColumn for WarehouseSize {
    fn from_column(raw: &str) -> Result<Self, String> {
        raw.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalingPolicy {
    Standard,
    Economy,
}

impl ScalingPolicy {
    pub const ALL: &'static [ScalingPolicy] = &[
        ScalingPolicy::Standard,
        ScalingPolicy::Economy,
    ];

    pub fn as_sql(&self) -> &'static str {
        match self {
            ScalingPolicy::Standard => "STANDARD",
            ScalingPolicy::Economy => "ECONOMY",
        }
    }
}

impl fmt::Display for ScalingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for ScalingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STANDARD" => Ok(ScalingPolicy::Standard),
            "ECONOMY" => Ok(ScalingPolicy::Economy),
            _ => Err(format!("unknown ScalingPolicy '{s}'")),
        }
    }
}

impl SqlValue for ScalingPolicy {
    fn to_sql(&self, quoted: bool) -> String {
        text_value(self.as_sql(), quoted)
    }
}

impl FromColumn for ScalingPolicy {
    fn from_column(raw: &str) -> Result<Self, String> {
        raw.parse()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Warehouse {
    pub name: String,
    pub state: String,
    pub warehouse_type: WarehouseType,
    pub size: WarehouseSize,
    pub min_cluster_count: i64,
    pub max_cluster_count: i64,
    pub started_clusters: i64,
    pub running: i64,
    pub queued: i64,
    pub is_default: bool,
    pub is_current: bool,
    pub auto_suspend: Option<i64>,
    pub auto_resume: bool,
    pub available: Option<f64>,
    pub provisioning: Option<f64>,
    pub quiescing: Option<f64>,
    pub other: Option<f64>,
    pub created_on: String,
    pub owner: String,
    pub comment: Option<String>,
    pub enable_query_acceleration: bool,
    pub query_acceleration_max_scale_factor: i64,
    pub resource_monitor: Option<String>,
    pub scaling_policy: Option<ScalingPolicy>,
    pub owner_role_type: Option<String>,
}

impl FromRow for Warehouse {
    fn from_row(row: &Row) -> Result<Self, DecodeError> {
        Ok(Self {
            name: row.decode("name")?,
            state: row.decode("state")?,
            warehouse_type: row.decode("type")?,
            size: row.decode("size")?,
            min_cluster_count: row.decode("min_cluster_count")?,
            max_cluster_count: row.decode("max_cluster_count")?,
            started_clusters: row.decode("started_clusters")?,
            running: row.decode("running")?,
            queued: row.decode("queued")?,
            is_default: row.decode("is_default")?,
            is_current: row.decode("is_current")?,
            auto_suspend: row.decode_opt("auto_suspend")?,
            auto_resume: row.decode("auto_resume")?,
            available: row.decode_opt("available")?,
            provisioning: row.decode_opt("provisioning")?,
            quiescing: row.decode_opt("quiescing")?,
            other: row.decode_opt("other")?,
            created_on: row.decode("created_on")?,
            owner: row.decode("owner")?,
            comment: row.decode_opt("comment")?,
            enable_query_acceleration: row.decode("enable_query_acceleration")?,
            query_acceleration_max_scale_factor: row.decode("query_acceleration_max_scale_factor")?,
            resource_monitor: row.decode_opt("resource_monitor")?,
            scaling_policy: row.decode_opt("scaling_policy")?,
            owner_role_type: row.decode_opt("owner_role_type")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WarehouseDetails {
    pub created_on: String,
    pub name: String,
    pub kind: String,
}

impl FromRow for WarehouseDetails {
    fn from_row(row: &Row) -> Result<Self, DecodeError> {
        Ok(Self {
            created_on: row.decode("created_on")?,
            name: row.decode("name")?,
            kind: row.decode("kind")?,
        })
    }
}
