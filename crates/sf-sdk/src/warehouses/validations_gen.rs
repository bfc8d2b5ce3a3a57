// @generated by sf-gen from the Warehouses definition. Do not edit.
#![allow(unused_imports)]

use super::options_gen::*;
use crate::validation::{
    at_least_one, exactly_one, fewer_than_two, valid_identifier, IsSet, Validate, ValidationError,
};

impl Validate for CreateWarehouseOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("CreateWarehouseOptions", "name"));
        }
        if !valid_identifier(&self.resource_monitor) {
            errs.push(ValidationError::invalid_identifier("CreateWarehouseOptions", "resource_monitor"));
        }
        if !fewer_than_two(&[self.or_replace.is_set(), self.if_not_exists.is_set()]) {
            errs.push(ValidationError::conflicting_fields("CreateWarehouseOptions", &["or_replace", "if_not_exists"]));
        }
        for v in &self.tag {
            v.collect_errors(errs);
        }
    }
}

impl Validate for AlterWarehouseOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("AlterWarehouseOptions", "name"));
        }
        if !valid_identifier(&self.new_name) {
            errs.push(ValidationError::invalid_identifier("AlterWarehouseOptions", "new_name"));
        }
        if !exactly_one(&[self.suspend.is_set(), self.resume.is_set(), self.abort_all_queries.is_set(), self.new_name.is_set(), self.set.is_set(), self.unset.is_set(), self.set_tag.is_set(), self.unset_tag.is_set()]) {
            errs.push(ValidationError::exactly_one_of("AlterWarehouseOptions", &["suspend", "resume", "abort_all_queries", "new_name", "set", "unset", "set_tag", "unset_tag"]));
        }
        if !fewer_than_two(&[self.suspend.is_set(), self.if_suspended.is_set()]) {
            errs.push(ValidationError::conflicting_fields("AlterWarehouseOptions", &["suspend", "if_suspended"]));
        }
        if let Some(v) = &self.set {
            v.collect_errors(errs);
        }
        if let Some(v) = &self.unset {
            v.collect_errors(errs);
        }
        for v in &self.set_tag {
            v.collect_errors(errs);
        }
    }
}

impl Validate for WarehouseSet {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !at_least_one(&[self.warehouse_type.is_set(), self.warehouse_size.is_set(), self.wait_for_completion.is_set(), self.max_cluster_count.is_set(), self.min_cluster_count.is_set(), self.scaling_policy.is_set(), self.auto_suspend.is_set(), self.auto_resume.is_set(), self.resource_monitor.is_set(), self.comment.is_set(), self.enable_query_acceleration.is_set(), self.query_acceleration_max_scale_factor.is_set(), self.max_concurrency_level.is_set(), self.statement_queued_timeout_in_seconds.is_set(), self.statement_timeout_in_seconds.is_set()]) {
            errs.push(ValidationError::at_least_one_of("WarehouseSet", &["warehouse_type", "warehouse_size", "wait_for_completion", "max_cluster_count", "min_cluster_count", "scaling_policy", "auto_suspend", "auto_resume", "resource_monitor", "comment", "enable_query_acceleration", "query_acceleration_max_scale_factor", "max_concurrency_level", "statement_queued_timeout_in_seconds", "statement_timeout_in_seconds"]));
        }
        if !valid_identifier(&self.resource_monitor) {
            errs.push(ValidationError::invalid_identifier("WarehouseSet", "resource_monitor"));
        }
    }
}

impl Validate for WarehouseUnset {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !at_least_one(&[self.warehouse_type.is_set(), self.max_cluster_count.is_set(), self.min_cluster_count.is_set(), self.scaling_policy.is_set(), self.auto_suspend.is_set(), self.auto_resume.is_set(), self.resource_monitor.is_set(), self.comment.is_set(), self.enable_query_acceleration.is_set(), self.query_acceleration_max_scale_factor.is_set(), self.max_concurrency_level.is_set(), self.statement_queued_timeout_in_seconds.is_set(), self.statement_timeout_in_seconds.is_set()]) {
            errs.push(ValidationError::at_least_one_of("WarehouseUnset", &["warehouse_type", "max_cluster_count", "min_cluster_count", "scaling_policy", "auto_suspend", "auto_resume", "resource_monitor", "comment", "enable_query_acceleration", "query_acceleration_max_scale_factor", "max_concurrency_level", "statement_queued_timeout_in_seconds", "statement_timeout_in_seconds"]));
        }
    }
}

impl Validate for DropWarehouseOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("DropWarehouseOptions", "name"));
        }
    }
}

impl Validate for ShowWarehouseOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if let Some(v) = &self.like {
            v.collect_errors(errs);
        }
    }
}

impl Validate for DescribeWarehouseOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("DescribeWarehouseOptions", "name"));
        }
    }
}
