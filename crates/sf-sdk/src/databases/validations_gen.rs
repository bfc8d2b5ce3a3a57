// @generated by sf-gen from the Databases definition. Do not edit.
#![allow(unused_imports)]

use super::options_gen::*;
use crate::validation::{
    at_least_one, exactly_one, fewer_than_two, valid_identifier, IsSet, Validate, ValidationError,
};

impl Validate for CreateDatabaseOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("CreateDatabaseOptions", "name"));
        }
        if !valid_identifier(&self.clone_source) {
            errs.push(ValidationError::invalid_identifier("CreateDatabaseOptions", "clone_source"));
        }
        if !valid_identifier(&self.external_volume) {
            errs.push(ValidationError::invalid_identifier("CreateDatabaseOptions", "external_volume"));
        }
        if !valid_identifier(&self.catalog) {
            errs.push(ValidationError::invalid_identifier("CreateDatabaseOptions", "catalog"));
        }
        if !fewer_than_two(&[self.or_replace.is_set(), self.if_not_exists.is_set()]) {
            errs.push(ValidationError::conflicting_fields("CreateDatabaseOptions", &["or_replace", "if_not_exists"]));
        }
        for v in &self.tag {
            v.collect_errors(errs);
        }
    }
}

impl Validate for AlterDatabaseOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("AlterDatabaseOptions", "name"));
        }
        if !valid_identifier(&self.new_name) {
            errs.push(ValidationError::invalid_identifier("AlterDatabaseOptions", "new_name"));
        }
        if !valid_identifier(&self.swap_with) {
            errs.push(ValidationError::invalid_identifier("AlterDatabaseOptions", "swap_with"));
        }
        if !exactly_one(&[self.new_name.is_set(), self.swap_with.is_set(), self.set.is_set(), self.unset.is_set(), self.set_tag.is_set(), self.unset_tag.is_set()]) {
            errs.push(ValidationError::exactly_one_of("AlterDatabaseOptions", &["new_name", "swap_with", "set", "unset", "set_tag", "unset_tag"]));
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

impl Validate for DatabaseSet {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !at_least_one(&[self.data_retention_time_in_days.is_set(), self.max_data_extension_time_in_days.is_set(), self.external_volume.is_set(), self.catalog.is_set(), self.default_ddl_collation.is_set(), self.log_level.is_set(), self.trace_level.is_set(), self.comment.is_set()]) {
            errs.push(ValidationError::at_least_one_of("DatabaseSet", &["data_retention_time_in_days", "max_data_extension_time_in_days", "external_volume", "catalog", "default_ddl_collation", "log_level", "trace_level", "comment"]));
        }
        if !valid_identifier(&self.external_volume) {
            errs.push(ValidationError::invalid_identifier("DatabaseSet", "external_volume"));
        }
        if !valid_identifier(&self.catalog) {
            errs.push(ValidationError::invalid_identifier("DatabaseSet", "catalog"));
        }
    }
}

impl Validate for DatabaseUnset {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !at_least_one(&[self.data_retention_time_in_days.is_set(), self.max_data_extension_time_in_days.is_set(), self.external_volume.is_set(), self.catalog.is_set(), self.default_ddl_collation.is_set(), self.log_level.is_set(), self.trace_level.is_set(), self.comment.is_set()]) {
            errs.push(ValidationError::at_least_one_of("DatabaseUnset", &["data_retention_time_in_days", "max_data_extension_time_in_days", "external_volume", "catalog", "default_ddl_collation", "log_level", "trace_level", "comment"]));
        }
    }
}

impl Validate for DropDatabaseOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("DropDatabaseOptions", "name"));
        }
        if !fewer_than_two(&[self.cascade.is_set(), self.restrict.is_set()]) {
            errs.push(ValidationError::conflicting_fields("DropDatabaseOptions", &["cascade", "restrict"]));
        }
    }
}

impl Validate for UndropDatabaseOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("UndropDatabaseOptions", "name"));
        }
    }
}

impl Validate for ShowDatabaseOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if let Some(v) = &self.like {
            v.collect_errors(errs);
        }
        if let Some(v) = &self.limit {
            v.collect_errors(errs);
        }
    }
}

impl Validate for DescribeDatabaseOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("DescribeDatabaseOptions", "name"));
        }
    }
}
