// @generated by sf-gen from the Roles definition. Do not edit.
#![allow(unused_imports)]

use super::options_gen::*;
use crate::validation::{
    at_least_one, exactly_one, fewer_than_two, valid_identifier, IsSet, Validate, ValidationError,
};

impl Validate for CreateRoleOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("CreateRoleOptions", "name"));
        }
        if !fewer_than_two(&[self.or_replace.is_set(), self.if_not_exists.is_set()]) {
            errs.push(ValidationError::conflicting_fields("CreateRoleOptions", &["or_replace", "if_not_exists"]));
        }
        for v in &self.tag {
            v.collect_errors(errs);
        }
    }
}

impl Validate for AlterRoleOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("AlterRoleOptions", "name"));
        }
        if !valid_identifier(&self.rename_to) {
            errs.push(ValidationError::invalid_identifier("AlterRoleOptions", "rename_to"));
        }
        if !exactly_one(&[self.rename_to.is_set(), self.set_comment.is_set(), self.set_tag.is_set(), self.unset_comment.is_set(), self.unset_tag.is_set()]) {
            errs.push(ValidationError::exactly_one_of("AlterRoleOptions", &["rename_to", "set_comment", "set_tag", "unset_comment", "unset_tag"]));
        }
        for v in &self.set_tag {
            v.collect_errors(errs);
        }
    }
}

impl Validate for DropRoleOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("DropRoleOptions", "name"));
        }
    }
}

impl Validate for ShowRoleOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.in_class) {
            errs.push(ValidationError::invalid_identifier("ShowRoleOptions", "in_class"));
        }
        if let Some(v) = &self.like {
            v.collect_errors(errs);
        }
    }
}

impl Validate for GrantRoleOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("GrantRoleOptions", "name"));
        }
        if !valid_identifier(&self.to_role) {
            errs.push(ValidationError::invalid_identifier("GrantRoleOptions", "to_role"));
        }
        if !valid_identifier(&self.to_user) {
            errs.push(ValidationError::invalid_identifier("GrantRoleOptions", "to_user"));
        }
        if !exactly_one(&[self.to_role.is_set(), self.to_user.is_set()]) {
            errs.push(ValidationError::exactly_one_of("GrantRoleOptions", &["to_role", "to_user"]));
        }
    }
}

impl Validate for RevokeRoleOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("RevokeRoleOptions", "name"));
        }
        if !valid_identifier(&self.from_role) {
            errs.push(ValidationError::invalid_identifier("RevokeRoleOptions", "from_role"));
        }
        if !valid_identifier(&self.from_user) {
            errs.push(ValidationError::invalid_identifier("RevokeRoleOptions", "from_user"));
        }
        if !exactly_one(&[self.from_role.is_set(), self.from_user.is_set()]) {
            errs.push(ValidationError::exactly_one_of("RevokeRoleOptions", &["from_role", "from_user"]));
        }
    }
}
