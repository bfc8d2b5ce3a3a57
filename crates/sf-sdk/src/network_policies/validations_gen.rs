// @generated by sf-gen from the NetworkPolicies definition. Do not edit.
#![allow(unused_imports)]

use super::options_gen::*;
use crate::validation::{
    at_least_one, exactly_one, fewer_than_two, valid_identifier, IsSet, Validate, ValidationError,
};

impl Validate for CreateNetworkPolicyOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("CreateNetworkPolicyOptions", "name"));
        }
        if !fewer_than_two(&[self.or_replace.is_set(), self.if_not_exists.is_set()]) {
            errs.push(ValidationError::conflicting_fields("CreateNetworkPolicyOptions", &["or_replace", "if_not_exists"]));
        }
    }
}

impl Validate for AlterNetworkPolicyOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("AlterNetworkPolicyOptions", "name"));
        }
        if !valid_identifier(&self.rename_to) {
            errs.push(ValidationError::invalid_identifier("AlterNetworkPolicyOptions", "rename_to"));
        }
        if !exactly_one(&[self.rename_to.is_set(), self.set.is_set(), self.unset.is_set()]) {
            errs.push(ValidationError::exactly_one_of("AlterNetworkPolicyOptions", &["rename_to", "set", "unset"]));
        }
        if let Some(v) = &self.set {
            v.collect_errors(errs);
        }
        if let Some(v) = &self.unset {
            v.collect_errors(errs);
        }
    }
}

impl Validate for NetworkPolicySet {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !at_least_one(&[self.allowed_ip_list.is_set(), self.blocked_ip_list.is_set(), self.comment.is_set()]) {
            errs.push(ValidationError::at_least_one_of("NetworkPolicySet", &["allowed_ip_list", "blocked_ip_list", "comment"]));
        }
    }
}

impl Validate for NetworkPolicyUnset {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !at_least_one(&[self.comment.is_set()]) {
            errs.push(ValidationError::at_least_one_of("NetworkPolicyUnset", &["comment"]));
        }
    }
}

impl Validate for DropNetworkPolicyOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("DropNetworkPolicyOptions", "name"));
        }
    }
}

impl Validate for ShowNetworkPolicyOptions {
    fn collect_errors(&self, _errs: &mut Vec<ValidationError>) {}
}

impl Validate for DescribeNetworkPolicyOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("DescribeNetworkPolicyOptions", "name"));
        }
    }
}
