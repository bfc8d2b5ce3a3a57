// @generated by sf-gen from the Warehouses definition. Do not edit.
#![allow(unused_imports)]

use super::interface_gen::*;
use crate::common::{Like, LimitFrom, TagAssociation};
use crate::ddl::{ListOptions, ParameterOptions, SqlBuilder, SqlRender};
use sf_core::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};

/// <https://docs.snowflake.com/en/sql-reference/sql/create-warehouse>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateWarehouseOptions {
    pub or_replace: bool,
    pub if_not_exists: bool,
    pub name: AccountObjectIdentifier,
    pub warehouse_type: Option<WarehouseType>,
    pub warehouse_size: Option<WarehouseSize>,
    pub max_cluster_count: Option<i32>,
    pub min_cluster_count: Option<i32>,
    pub scaling_policy: Option<ScalingPolicy>,
    pub auto_suspend: Option<i32>,
    pub auto_resume: Option<bool>,
    pub initially_suspended: Option<bool>,
    pub resource_monitor: Option<AccountObjectIdentifier>,
    pub comment: Option<String>,
    pub enable_query_acceleration: Option<bool>,
    pub query_acceleration_max_scale_factor: Option<i32>,
    pub max_concurrency_level: Option<i32>,
    pub statement_queued_timeout_in_seconds: Option<i32>,
    pub statement_timeout_in_seconds: Option<i32>,
    pub tag: Vec<TagAssociation>,
}

impl SqlRender for CreateWarehouseOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("CREATE");
        b.keyword("OR REPLACE", self.or_replace);
        b.static_sql("WAREHOUSE");
        b.keyword("IF NOT EXISTS", self.if_not_exists);
        b.identifier("", &self.name);
        b.parameter("WAREHOUSE_TYPE", self.warehouse_type.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("WAREHOUSE_SIZE", self.warehouse_size.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("MAX_CLUSTER_COUNT", self.max_cluster_count.as_ref(), ParameterOptions::new());
        b.parameter("MIN_CLUSTER_COUNT", self.min_cluster_count.as_ref(), ParameterOptions::new());
        b.parameter("SCALING_POLICY", self.scaling_policy.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("AUTO_SUSPEND", self.auto_suspend.as_ref(), ParameterOptions::new());
        b.parameter("AUTO_RESUME", self.auto_resume.as_ref(), ParameterOptions::new());
        b.parameter("INITIALLY_SUSPENDED", self.initially_suspended.as_ref(), ParameterOptions::new());
        b.parameter("RESOURCE_MONITOR", self.resource_monitor.as_ref(), ParameterOptions::new());
        b.parameter("COMMENT", self.comment.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("ENABLE_QUERY_ACCELERATION", self.enable_query_acceleration.as_ref(), ParameterOptions::new());
        b.parameter("QUERY_ACCELERATION_MAX_SCALE_FACTOR", self.query_acceleration_max_scale_factor.as_ref(), ParameterOptions::new());
        b.parameter("MAX_CONCURRENCY_LEVEL", self.max_concurrency_level.as_ref(), ParameterOptions::new());
        b.parameter("STATEMENT_QUEUED_TIMEOUT_IN_SECONDS", self.statement_queued_timeout_in_seconds.as_ref(), ParameterOptions::new());
        b.parameter("STATEMENT_TIMEOUT_IN_SECONDS", self.statement_timeout_in_seconds.as_ref(), ParameterOptions::new());
        b.struct_list("TAG", &self.tag, ListOptions::new());
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/alter-warehouse>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlterWarehouseOptions {
    pub if_exists: bool,
    pub name: AccountObjectIdentifier,
    pub suspend: bool,
    pub resume: bool,
    pub if_suspended: bool,
    pub abort_all_queries: bool,
    pub new_name: Option<AccountObjectIdentifier>,
    pub set: Option<WarehouseSet>,
    pub unset: Option<WarehouseUnset>,
    pub set_tag: Vec<TagAssociation>,
    pub unset_tag: Vec<SchemaObjectIdentifier>,
}

impl SqlRender for AlterWarehouseOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("ALTER");
        b.static_sql("WAREHOUSE");
        b.keyword("IF EXISTS", self.if_exists);
        b.identifier("", &self.name);
        b.keyword("SUSPEND", self.suspend);
        b.keyword("RESUME", self.resume);
        b.keyword("IF SUSPENDED", self.if_suspended);
        b.keyword("ABORT ALL QUERIES", self.abort_all_queries);
        b.optional_identifier("RENAME TO", self.new_name.as_ref());
        b.nested_list("SET", self.set.as_ref());
        b.nested_list("UNSET", self.unset.as_ref());
        b.struct_list("SET TAG", &self.set_tag, ListOptions::new().no_parentheses());
        b.list("UNSET TAG", Some(self.unset_tag.as_slice()), ListOptions::new().no_parentheses());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarehouseSet {
    pub warehouse_type: Option<WarehouseType>,
    pub warehouse_size: Option<WarehouseSize>,
    pub wait_for_completion: Option<bool>,
    pub max_cluster_count: Option<i32>,
    pub min_cluster_count: Option<i32>,
    pub scaling_policy: Option<ScalingPolicy>,
    pub auto_suspend: Option<i32>,
    pub auto_resume: Option<bool>,
    pub resource_monitor: Option<AccountObjectIdentifier>,
    pub comment: Option<String>,
    pub enable_query_acceleration: Option<bool>,
    pub query_acceleration_max_scale_factor: Option<i32>,
    pub max_concurrency_level: Option<i32>,
    pub statement_queued_timeout_in_seconds: Option<i32>,
    pub statement_timeout_in_seconds: Option<i32>,
}

impl SqlRender for WarehouseSet {
    fn render(&self, b: &mut SqlBuilder) {
        b.parameter("WAREHOUSE_TYPE", self.warehouse_type.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("WAREHOUSE_SIZE", self.warehouse_size.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("WAIT_FOR_COMPLETION", self.wait_for_completion.as_ref(), ParameterOptions::new());
        b.parameter("MAX_CLUSTER_COUNT", self.max_cluster_count.as_ref(), ParameterOptions::new());
        b.parameter("MIN_CLUSTER_COUNT", self.min_cluster_count.as_ref(), ParameterOptions::new());
        b.parameter("SCALING_POLICY", self.scaling_policy.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("AUTO_SUSPEND", self.auto_suspend.as_ref(), ParameterOptions::new());
        b.parameter("AUTO_RESUME", self.auto_resume.as_ref(), ParameterOptions::new());
        b.parameter("RESOURCE_MONITOR", self.resource_monitor.as_ref(), ParameterOptions::new());
        b.parameter("COMMENT", self.comment.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("ENABLE_QUERY_ACCELERATION", self.enable_query_acceleration.as_ref(), ParameterOptions::new());
        b.parameter("QUERY_ACCELERATION_MAX_SCALE_FACTOR", self.query_acceleration_max_scale_factor.as_ref(), ParameterOptions::new());
        b.parameter("MAX_CONCURRENCY_LEVEL", self.max_concurrency_level.as_ref(), ParameterOptions::new());
        b.parameter("STATEMENT_QUEUED_TIMEOUT_IN_SECONDS", self.statement_queued_timeout_in_seconds.as_ref(), ParameterOptions::new());
        b.parameter("STATEMENT_TIMEOUT_IN_SECONDS", self.statement_timeout_in_seconds.as_ref(), ParameterOptions::new());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarehouseUnset {
    pub warehouse_type: bool,
    pub max_cluster_count: bool,
    pub min_cluster_count: bool,
    pub scaling_policy: bool,
    pub auto_suspend: bool,
    pub auto_resume: bool,
    pub resource_monitor: bool,
    pub comment: bool,
    pub enable_query_acceleration: bool,
    pub query_acceleration_max_scale_factor: bool,
    pub max_concurrency_level: bool,
    pub statement_queued_timeout_in_seconds: bool,
    pub statement_timeout_in_seconds: bool,
}

impl SqlRender for WarehouseUnset {
    fn render(&self, b: &mut SqlBuilder) {
        b.keyword("WAREHOUSE_TYPE", self.warehouse_type);
        b.keyword("MAX_CLUSTER_COUNT", self.max_cluster_count);
        b.keyword("MIN_CLUSTER_COUNT", self.min_cluster_count);
        b.keyword("SCALING_POLICY", self.scaling_policy);
        b.keyword("AUTO_SUSPEND", self.auto_suspend);
        b.keyword("AUTO_RESUME", self.auto_resume);
        b.keyword("RESOURCE_MONITOR", self.resource_monitor);
        b.keyword("COMMENT", self.comment);
        b.keyword("ENABLE_QUERY_ACCELERATION", self.enable_query_acceleration);
        b.keyword("QUERY_ACCELERATION_MAX_SCALE_FACTOR", self.query_acceleration_max_scale_factor);
        b.keyword("MAX_CONCURRENCY_LEVEL", self.max_concurrency_level);
        b.keyword("STATEMENT_QUEUED_TIMEOUT_IN_SECONDS", self.statement_queued_timeout_in_seconds);
        b.keyword("STATEMENT_TIMEOUT_IN_SECONDS", self.statement_timeout_in_seconds);
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/drop-warehouse>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropWarehouseOptions {
    pub if_exists: bool,
    pub name: AccountObjectIdentifier,
}

impl SqlRender for DropWarehouseOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("DROP");
        b.static_sql("WAREHOUSE");
        b.keyword("IF EXISTS", self.if_exists);
        b.identifier("", &self.name);
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/show-warehouses>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowWarehouseOptions {
    pub like: Option<Like>,
}

impl SqlRender for ShowWarehouseOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("SHOW");
        b.static_sql("WAREHOUSES");
        b.nested("", self.like.as_ref());
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/desc-warehouse>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeWarehouseOptions {
    pub name: AccountObjectIdentifier,
}

impl SqlRender for DescribeWarehouseOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("DESCRIBE");
        b.static_sql("WAREHOUSE");
        b.identifier("", &self.name);
    }
}
