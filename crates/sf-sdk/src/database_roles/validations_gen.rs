// @generated by sf-gen from the DatabaseRoles definition. Do not edit.
#![allow(unused_imports)]

use super::options_gen::*;
use crate::validation::{
    at_least_one, exactly_one, fewer_than_two, valid_identifier, IsSet, Validate, ValidationError,
};

impl Validate for CreateDatabaseRoleOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("CreateDatabaseRoleOptions", "name"));
        }
        if !fewer_than_two(&[self.or_replace.is_set(), self.if_not_exists.is_set()]) {
            errs.push(ValidationError::conflicting_fields("CreateDatabaseRoleOptions", &["or_replace", "if_not_exists"]));
        }
    }
}

impl Validate for AlterDatabaseRoleOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("AlterDatabaseRoleOptions", "name"));
        }
        if !valid_identifier(&self.rename) {
            errs.push(ValidationError::invalid_identifier("AlterDatabaseRoleOptions", "rename"));
        }
        if !exactly_one(&[self.rename.is_set(), self.set.is_set(), self.unset.is_set()]) {
            errs.push(ValidationError::exactly_one_of("AlterDatabaseRoleOptions", &["rename", "set", "unset"]));
        }
        if let Some(v) = &self.set {
            v.collect_errors(errs);
        }
        if let Some(v) = &self.unset {
            v.collect_errors(errs);
        }
    }
}

impl Validate for DatabaseRoleSet {
    fn collect_errors(&self, _errs: &mut Vec<ValidationError>) {}
}

impl Validate for DatabaseRoleUnset {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !at_least_one(&[self.comment.is_set()]) {
            errs.push(ValidationError::at_least_one_of("DatabaseRoleUnset", &["comment"]));
        }
    }
}

impl Validate for DropDatabaseRoleOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("DropDatabaseRoleOptions", "name"));
        }
    }
}

impl Validate for ShowDatabaseRoleOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.in_database) {
            errs.push(ValidationError::invalid_identifier("ShowDatabaseRoleOptions", "in_database"));
        }
        if let Some(v) = &self.like {
            v.collect_errors(errs);
        }
        if let Some(v) = &self.limit {
            v.collect_errors(errs);
        }
    }
}
