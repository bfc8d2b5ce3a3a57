// @generated by sf-gen from the NetworkPolicies definition. Do not edit.
#![allow(unused_imports)]

use super::interface_gen::*;
use super::options_gen::*;
use crate::common::{Like, LimitFrom, TagAssociation};
use sf_core::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateNetworkPolicyRequest {
    pub(crate) or_replace: bool,
    pub(crate) if_not_exists: bool,
    pub(crate) name: AccountObjectIdentifier,
    pub(crate) allowed_ip_list: Vec<String>,
    pub(crate) blocked_ip_list: Vec<String>,
    pub(crate) comment: Option<String>,
}

impl CreateNetworkPolicyRequest {
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

    pub fn with_allowed_ip_list(mut self, allowed_ip_list: Vec<String>) -> Self {
        self.allowed_ip_list = allowed_ip_list;
        self
    }

    pub fn with_blocked_ip_list(mut self, blocked_ip_list: Vec<String>) -> Self {
        self.blocked_ip_list = blocked_ip_list;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub(crate) fn to_opts(&self) -> CreateNetworkPolicyOptions {
        CreateNetworkPolicyOptions {
            or_replace: self.or_replace,
            if_not_exists: self.if_not_exists,
            name: self.name.clone(),
            allowed_ip_list: self.allowed_ip_list.clone(),
            blocked_ip_list: self.blocked_ip_list.clone(),
            comment: self.comment.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlterNetworkPolicyRequest {
    pub(crate) if_exists: bool,
    pub(crate) name: AccountObjectIdentifier,
    pub(crate) set: Option<NetworkPolicySetRequest>,
    pub(crate) unset: Option<NetworkPolicyUnsetRequest>,
    pub(crate) rename_to: Option<AccountObjectIdentifier>,
}

impl AlterNetworkPolicyRequest {
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

    pub fn with_set(mut self, set: NetworkPolicySetRequest) -> Self {
        self.set = Some(set);
        self
    }

    pub fn with_unset(mut self, unset: NetworkPolicyUnsetRequest) -> Self {
        self.unset = Some(unset);
        self
    }

    pub fn with_rename_to(mut self, rename_to: AccountObjectIdentifier) -> Self {
        self.rename_to = Some(rename_to);
        self
    }

    pub(crate) fn to_opts(&self) -> AlterNetworkPolicyOptions {
        AlterNetworkPolicyOptions {
            if_exists: self.if_exists,
            name: self.name.clone(),
            set: self.set.as_ref().map(|v| v.to_opts()),
            unset: self.unset.as_ref().map(|v| v.to_opts()),
            rename_to: self.rename_to.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkPolicySetRequest {
    pub(crate) allowed_ip_list: Option<Vec<String>>,
    pub(crate) blocked_ip_list: Option<Vec<String>>,
    pub(crate) comment: Option<String>,
}

impl NetworkPolicySetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allowed_ip_list(mut self, allowed_ip_list: Vec<String>) -> Self {
        self.allowed_ip_list = Some(allowed_ip_list);
        self
    }

    pub fn with_blocked_ip_list(mut self, blocked_ip_list: Vec<String>) -> Self {
        self.blocked_ip_list = Some(blocked_ip_list);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub(crate) fn to_opts(&self) -> NetworkPolicySet {
        NetworkPolicySet {
            allowed_ip_list: self.allowed_ip_list.clone(),
            blocked_ip_list: self.blocked_ip_list.clone(),
            comment: self.comment.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkPolicyUnsetRequest {
    pub(crate) comment: bool,
}

impl NetworkPolicyUnsetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comment(mut self, comment: bool) -> Self {
        self.comment = comment;
        self
    }

    pub(crate) fn to_opts(&self) -> NetworkPolicyUnset {
        NetworkPolicyUnset {
            comment: self.comment,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropNetworkPolicyRequest {
    pub(crate) if_exists: bool,
    pub(crate) name: AccountObjectIdentifier,
}

impl DropNetworkPolicyRequest {
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

    pub(crate) fn to_opts(&self) -> DropNetworkPolicyOptions {
        DropNetworkPolicyOptions {
            if_exists: self.if_exists,
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowNetworkPolicyRequest {
}

impl ShowNetworkPolicyRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn to_opts(&self) -> ShowNetworkPolicyOptions {
        ShowNetworkPolicyOptions {
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeNetworkPolicyRequest {
    pub(crate) name: AccountObjectIdentifier,
}

impl DescribeNetworkPolicyRequest {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            name,
        }
    }

    pub(crate) fn to_opts(&self) -> DescribeNetworkPolicyOptions {
        DescribeNetworkPolicyOptions {
            name: self.name.clone(),
        }
    }
}
