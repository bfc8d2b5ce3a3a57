// @generated by sf-gen from the Warehouses definition. Do not edit.
#![allow(unused_imports)]

use super::interface_gen::*;
use super::options_gen::*;
use crate::common::{Like, LimitFrom, TagAssociation};
use sf_core::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateWarehouseRequest {
    pub(crate) or_replace: bool,
    pub(crate) if_not_exists: bool,
    pub(crate) name: AccountObjectIdentifier,
    pub(crate) warehouse_type: Option<WarehouseType>,
    pub(crate) warehouse_size: Option<WarehouseSize>,
    pub(crate) max_cluster_count: Option<i32>,
    pub(crate) min_cluster_count: Option<i32>,
    pub(crate) scaling_policy: Option<ScalingPolicy>,
    pub(crate) auto_suspend: Option<i32>,
    pub(crate) auto_resume: Option<bool>,
    pub(crate) initially_suspended: Option<bool>,
    pub(crate) resource_monitor: Option<AccountObjectIdentifier>,
    pub(crate) comment: Option<String>,
    pub(crate) enable_query_acceleration: Option<bool>,
    pub(crate) query_acceleration_max_scale_factor: Option<i32>,
    pub(crate) max_concurrency_level: Option<i32>,
    pub(crate) statement_queued_timeout_in_seconds: Option<i32>,
    pub(crate) statement_timeout_in_seconds: Option<i32>,
    pub(crate) tag: Vec<TagAssociation>,
}

impl CreateWarehouseRequest {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn with_or_replace(mut self, or_replace: bool) -> Self {
        self.or_replace = or_replace;
        self
    }

    pub fn with_if_not_exists(mut self, if_not_exists: bool) -> Self {
        self.if_not_exists = if_not_exists;
        self
    }

    pub fn with_warehouse_type(mut self, warehouse_type: WarehouseType) -> Self {
        self.warehouse_type = Some(warehouse_type);
        self
    }

    pub fn with_warehouse_size(mut self, warehouse_size: WarehouseSize) -> Self {
        self.warehouse_size = Some(warehouse_size);
        self
    }

    pub fn with_max_cluster_count(mut self, max_cluster_count: i32) -> Self {
        self.max_cluster_count = Some(max_cluster_count);
        self
    }

    pub fn with_min_cluster_count(mut self, min_cluster_count: i32) -> Self {
        self.min_cluster_count = Some(min_cluster_count);
        self
    }

    pub fn with_scaling_policy(mut self, scaling_policy: ScalingPolicy) -> Self {
        self.scaling_policy = Some(scaling_policy);
        self
    }

    pub fn with_auto_suspend(mut self, auto_suspend: i32) -> Self {
        self.auto_suspend = Some(auto_suspend);
        self
    }

    pub fn with_auto_resume(mut self, auto_resume: bool) -> Self {
        self.auto_resume = Some(auto_resume);
        self
    }

    pub fn with_initially_suspended(mut self, initially_suspended: bool) -> Self {
        self.initially_suspended = Some(initially_suspended);
        self
    }

    pub fn with_resource_monitor(mut self, resource_monitor: AccountObjectIdentifier) -> Self {
        self.resource_monitor = Some(resource_monitor);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_enable_query_acceleration(mut self, enable_query_acceleration: bool) -> Self {
        self.enable_query_acceleration = Some(enable_query_acceleration);
        self
    }

    pub fn with_query_acceleration_max_scale_factor(mut self, query_acceleration_max_scale_factor: i32) -> Self {
        self.query_acceleration_max_scale_factor = Some(query_acceleration_max_scale_factor);
        self
    }

    pub fn with_max_concurrency_level(mut self, max_concurrency_level: i32) -> Self {
        self.max_concurrency_level = Some(max_concurrency_level);
        self
    }

    pub fn with_statement_queued_timeout_in_seconds(mut self, statement_queued_timeout_in_seconds: i32) -> Self {
        self.statement_queued_timeout_in_seconds = Some(statement_queued_timeout_in_seconds);
        self
    }

    pub fn with_statement_timeout_in_seconds(mut self, statement_timeout_in_seconds: i32) -> Self {
        self.statement_timeout_in_seconds = Some(statement_timeout_in_seconds);
        self
    }

    pub fn with_tag(mut self, tag: Vec<TagAssociation>) -> Self {
        self.tag = tag;
        self
    }

    pub(crate) fn to_opts(&self) -> CreateWarehouseOptions {
        CreateWarehouseOptions {
            or_replace: self.or_replace,
            if_not_exists: self.if_not_exists,
            name: self.name.clone(),
            warehouse_type: self.warehouse_type,
            warehouse_size: self.warehouse_size,
            max_cluster_count: self.max_cluster_count,
            min_cluster_count: self.min_cluster_count,
            scaling_policy: self.scaling_policy,
            auto_suspend: self.auto_suspend,
            auto_resume: self.auto_resume,
            initially_suspended: self.initially_suspended,
            resource_monitor: self.resource_monitor.clone(),
            comment: self.comment.clone(),
            enable_query_acceleration: self.enable_query_acceleration,
            query_acceleration_max_scale_factor: self.query_acceleration_max_scale_factor,
            max_concurrency_level: self.max_concurrency_level,
            statement_queued_timeout_in_seconds: self.statement_queued_timeout_in_seconds,
            statement_timeout_in_seconds: self.statement_timeout_in_seconds,
            tag: self.tag.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlterWarehouseRequest {
    pub(crate) if_exists: bool,
    pub(crate) name: AccountObjectIdentifier,
    pub(crate) suspend: bool,
    pub(crate) resume: bool,
    pub(crate) if_suspended: bool,
    pub(crate) abort_all_queries: bool,
    pub(crate) new_name: Option<AccountObjectIdentifier>,
    pub(crate) set: Option<WarehouseSetRequest>,
    pub(crate) unset: Option<WarehouseUnsetRequest>,
    pub(crate) set_tag: Vec<TagAssociation>,
    pub(crate) unset_tag: Vec<SchemaObjectIdentifier>,
}

impl AlterWarehouseRequest {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn with_if_exists(mut self, if_exists: bool) -> Self {
        self.if_exists = if_exists;
        self
    }

    pub fn with_suspend(mut self, suspend: bool) -> Self {
        self.suspend = suspend;
        self
    }

    pub fn with_resume(mut self, resume: bool) -> Self {
        self.resume = resume;
        self
    }

    pub fn with_if_suspended(mut self, if_suspended: bool) -> Self {
        self.if_suspended = if_suspended;
        self
    }

    pub fn with_abort_all_queries(mut self, abort_all_queries: bool) -> Self {
        self.abort_all_queries = abort_all_queries;
        self
    }

    pub fn with_new_name(mut self, new_name: AccountObjectIdentifier) -> Self {
        self.new_name = Some(new_name);
        self
    }

    pub fn with_set(mut self, set: WarehouseSetRequest) -> Self {
        self.set = Some(set);
        self
    }

    pub fn with_unset(mut self, unset: WarehouseUnsetRequest) -> Self {
        self.unset = Some(unset);
        self
    }

    pub fn with_set_tag(mut self, set_tag: Vec<TagAssociation>) -> Self {
        self.set_tag = set_tag;
        self
    }

    pub fn with_unset_tag(mut self, unset_tag: Vec<SchemaObjectIdentifier>) -> Self {
        self.unset_tag = unset_tag;
        self
    }

    pub(crate) fn to_opts(&self) -> AlterWarehouseOptions {
        AlterWarehouseOptions {
            if_exists: self.if_exists,
            name: self.name.clone(),
            suspend: self.suspend,
            resume: self.resume,
            if_suspended: self.if_suspended,
            abort_all_queries: self.abort_all_queries,
            new_name: self.new_name.clone(),
            set: self.set.as_ref().map(|v| v.to_opts()),
            unset: self.unset.as_ref().map(|v| v.to_opts()),
            set_tag: self.set_tag.clone(),
            unset_tag: self.unset_tag.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarehouseSetRequest {
    pub(crate) warehouse_type: Option<WarehouseType>,
    pub(crate) warehouse_size: Option<WarehouseSize>,
    pub(crate) wait_for_completion: Option<bool>,
    pub(crate) max_cluster_count: Option<i32>,
    pub(crate) min_cluster_count: Option<i32>,
    pub(crate) scaling_policy: Option<ScalingPolicy>,
    pub(crate) auto_suspend: Option<i32>,
    pub(crate) auto_resume: Option<bool>,
    pub(crate) resource_monitor: Option<AccountObjectIdentifier>,
    pub(crate) comment: Option<String>,
    pub(crate) enable_query_acceleration: Option<bool>,
    pub(crate) query_acceleration_max_scale_factor: Option<i32>,
    pub(crate) max_concurrency_level: Option<i32>,
    pub(crate) statement_queued_timeout_in_seconds: Option<i32>,
    pub(crate) statement_timeout_in_seconds: Option<i32>,
}

impl WarehouseSetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_warehouse_type(mut self, warehouse_type: WarehouseType) -> Self {
        self.warehouse_type = Some(warehouse_type);
        self
    }

    pub fn with_warehouse_size(mut self, warehouse_size: WarehouseSize) -> Self {
        self.warehouse_size = Some(warehouse_size);
        self
    }

    pub fn with_wait_for_completion(mut self, wait_for_completion: bool) -> Self {
        self.wait_for_completion = Some(wait_for_completion);
        self
    }

    pub fn with_max_cluster_count(mut self, max_cluster_count: i32) -> Self {
        self.max_cluster_count = Some(max_cluster_count);
        self
    }

    pub fn with_min_cluster_count(mut self, min_cluster_count: i32) -> Self {
        self.min_cluster_count = Some(min_cluster_count);
        self
    }

    pub fn with_scaling_policy(mut self, scaling_policy: ScalingPolicy) -> Self {
        self.scaling_policy = Some(scaling_policy);
        self
    }

    pub fn with_auto_suspend(mut self, auto_suspend: i32) -> Self {
        self.auto_suspend = Some(auto_suspend);
        self
    }

    pub fn with_auto_resume(mut self, auto_resume: bool) -> Self {
        self.auto_resume = Some(auto_resume);
        self
    }

    pub fn with_resource_monitor(mut self, resource_monitor: AccountObjectIdentifier) -> Self {
        self.resource_monitor = Some(resource_monitor);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_enable_query_acceleration(mut self, enable_query_acceleration: bool) -> Self {
        self.enable_query_acceleration = Some(enable_query_acceleration);
        self
    }

    pub fn with_query_acceleration_max_scale_factor(mut self, query_acceleration_max_scale_factor: i32) -> Self {
        self.query_acceleration_max_scale_factor = Some(query_acceleration_max_scale_factor);
        self
    }

    pub fn with_max_concurrency_level(mut self, max_concurrency_level: i32) -> Self {
        self.max_concurrency_level = Some(max_concurrency_level);
        self
    }

    pub fn with_statement_queued_timeout_in_seconds(mut self, statement_queued_timeout_in_seconds: i32) -> Self {
        self.statement_queued_timeout_in_seconds = Some(statement_queued_timeout_in_seconds);
        self
    }

    pub fn with_statement_timeout_in_seconds(mut self, statement_timeout_in_seconds: i32) -> Self {
        self.statement_timeout_in_seconds = Some(statement_timeout_in_seconds);
        self
    }

    pub(crate) fn to_opts(&self) -> WarehouseSet {
        WarehouseSet {
            warehouse_type: self.warehouse_type,
            warehouse_size: self.warehouse_size,
            wait_for_completion: self.wait_for_completion,
            max_cluster_count: self.max_cluster_count,
            min_cluster_count: self.min_cluster_count,
            scaling_policy: self.scaling_policy,
            auto_suspend: self.auto_suspend,
            auto_resume: self.auto_resume,
            resource_monitor: self.resource_monitor.clone(),
            comment: self.comment.clone(),
            enable_query_acceleration: self.enable_query_acceleration,
            query_acceleration_max_scale_factor: self.query_acceleration_max_scale_factor,
            max_concurrency_level: self.max_concurrency_level,
            statement_queued_timeout_in_seconds: self.statement_queued_timeout_in_seconds,
            statement_timeout_in_seconds: self.statement_timeout_in_seconds,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarehouseUnsetRequest {
    pub(crate) warehouse_type: bool,
    pub(crate) max_cluster_count: bool,
    pub(crate) min_cluster_count: bool,
    pub(crate) scaling_policy: bool,
    pub(crate) auto_suspend: bool,
    pub(crate) auto_resume: bool,
    pub(crate) resource_monitor: bool,
    pub(crate) comment: bool,
    pub(crate) enable_query_acceleration: bool,
    pub(crate) query_acceleration_max_scale_factor: bool,
    pub(crate) max_concurrency_level: bool,
    pub(crate) statement_queued_timeout_in_seconds: bool,
    pub(crate) statement_timeout_in_seconds: bool,
}

impl WarehouseUnsetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_warehouse_type(mut self, warehouse_type: bool) -> Self {
        self.warehouse_type = warehouse_type;
        self
    }

    pub fn with_max_cluster_count(mut self, max_cluster_count: bool) -> Self {
        self.max_cluster_count = max_cluster_count;
        self
    }

    pub fn with_min_cluster_count(mut self, min_cluster_count: bool) -> Self {
        self.min_cluster_count = min_cluster_count;
        self
    }

    pub fn with_scaling_policy(mut self, scaling_policy: bool) -> Self {
        self.scaling_policy = scaling_policy;
        self
    }

    pub fn with_auto_suspend(mut self, auto_suspend: bool) -> Self {
        self.auto_suspend = auto_suspend;
        self
    }

    pub fn with_auto_resume(mut self, auto_resume: bool) -> Self {
        self.auto_resume = auto_resume;
        self
    }

    pub fn with_resource_monitor(mut self, resource_monitor: bool) -> Self {
        self.resource_monitor = resource_monitor;
        self
    }

    pub fn with_comment(mut self, comment: bool) -> Self {
        self.comment = comment;
        self
    }

    pub fn with_enable_query_acceleration(mut self, enable_query_acceleration: bool) -> Self {
        self.enable_query_acceleration = enable_query_acceleration;
        self
    }

    pub fn with_query_acceleration_max_scale_factor(mut self, query_acceleration_max_scale_factor: bool) -> Self {
        self.query_acceleration_max_scale_factor = query_acceleration_max_scale_factor;
        self
    }

    pub fn with_max_concurrency_level(mut self, max_concurrency_level: bool) -> Self {
        self.max_concurrency_level = max_concurrency_level;
        self
    }

    pub fn with_statement_queued_timeout_in_seconds(mut self, statement_queued_timeout_in_seconds: bool) -> Self {
        self.statement_queued_timeout_in_seconds = statement_queued_timeout_in_seconds;
        self
    }

    pub fn with_statement_timeout_in_seconds(mut self, statement_timeout_in_seconds: bool) -> Self {
        self.statement_timeout_in_seconds = statement_timeout_in_seconds;
        self
    }

    pub(crate) fn to_opts(&self) -> WarehouseUnset {
        WarehouseUnset {
            warehouse_type: self.warehouse_type,
            max_cluster_count: self.max_cluster_count,
            min_cluster_count: self.min_cluster_count,
            scaling_policy: self.scaling_policy,
            auto_suspend: self.auto_suspend,
            auto_resume: self.auto_resume,
            resource_monitor: self.resource_monitor,
            comment: self.comment,
            enable_query_acceleration: self.enable_query_acceleration,
            query_acceleration_max_scale_factor: self.query_acceleration_max_scale_factor,
            max_concurrency_level: self.max_concurrency_level,
            statement_queued_timeout_in_seconds: self.statement_queued_timeout_in_seconds,
            statement_timeout_in_seconds: self.statement_timeout_in_seconds,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropWarehouseRequest {
    pub(crate) if_exists: bool,
    pub(crate) name: AccountObjectIdentifier,
}

impl DropWarehouseRequest {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn with_if_exists(mut self, if_exists: bool) -> Self {
        self.if_exists = if_exists;
        self
    }

    pub(crate) fn to_opts(&self) -> DropWarehouseOptions {
        DropWarehouseOptions {
            if_exists: self.if_exists,
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowWarehouseRequest {
    pub(crate) like: Option<Like>,
}

impl ShowWarehouseRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_like(mut self, like: Like) -> Self {
        self.like = Some(like);
        self
    }

    pub(crate) fn to_opts(&self) -> ShowWarehouseOptions {
        ShowWarehouseOptions {
            like: self.like.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeWarehouseRequest {
    pub(crate) name: AccountObjectIdentifier,
}

impl DescribeWarehouseRequest {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            name,
        }
    }

    pub(crate) fn to_opts(&self) -> DescribeWarehouseOptions {
        DescribeWarehouseOptions {
            name: self.name.clone(),
        }
    }
}
