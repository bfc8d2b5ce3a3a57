// @generated by sf-gen from the Roles definition. Do not edit.
#![allow(unused_imports)]

use super::interface_gen::*;
use super::options_gen::*;
use crate::common::{Like, LimitFrom, TagAssociation};
use sf_core::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateRoleRequest {
    pub(crate) or_replace: bool,
    pub(crate) if_not_exists: bool,
    pub(crate) name: AccountObjectIdentifier,
    pub(crate) comment: Option<String>,
    pub(crate) tag: Vec<TagAssociation>,
}

impl CreateRoleRequest {
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

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_tag(mut self, tag: Vec<TagAssociation>) -> Self {
        self.tag = tag;
        self
    }

    pub(crate) fn to_opts(&self) -> CreateRoleOptions {
        CreateRoleOptions {
            or_replace: self.or_replace,
            if_not_exists: self.if_not_exists,
            name: self.name.clone(),
            comment: self.comment.clone(),
            tag: self.tag.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlterRoleRequest {
    pub(crate) if_exists: bool,
    pub(crate) name: AccountObjectIdentifier,
    pub(crate) rename_to: Option<AccountObjectIdentifier>,
    pub(crate) set_comment: Option<String>,
    pub(crate) set_tag: Vec<TagAssociation>,
    pub(crate) unset_comment: bool,
    pub(crate) unset_tag: Vec<SchemaObjectIdentifier>,
}

impl AlterRoleRequest {
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

    pub fn with_rename_to(mut self, rename_to: AccountObjectIdentifier) -> Self {
        self.rename_to = Some(rename_to);
        self
    }

    pub fn with_set_comment(mut self, set_comment: impl Into<String>) -> Self {
        self.set_comment = Some(set_comment.into());
        self
    }

    pub fn with_set_tag(mut self, set_tag: Vec<TagAssociation>) -> Self {
        self.set_tag = set_tag;
        self
    }

    pub fn with_unset_comment(mut self, unset_comment: bool) -> Self {
        self.unset_comment = unset_comment;
        self
    }

    pub fn with_unset_tag(mut self, unset_tag: Vec<SchemaObjectIdentifier>) -> Self {
        self.unset_tag = unset_tag;
        self
    }

    pub(crate) fn to_opts(&self) -> AlterRoleOptions {
        AlterRoleOptions {
            if_exists: self.if_exists,
            name: self.name.clone(),
            rename_to: self.rename_to.clone(),
            set_comment: self.set_comment.clone(),
            set_tag: self.set_tag.clone(),
            unset_comment: self.unset_comment,
            unset_tag: self.unset_tag.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropRoleRequest {
    pub(crate) if_exists: bool,
    pub(crate) name: AccountObjectIdentifier,
}

impl DropRoleRequest {
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

    pub(crate) fn to_opts(&self) -> DropRoleOptions {
        DropRoleOptions {
            if_exists: self.if_exists,
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowRoleRequest {
    pub(crate) like: Option<Like>,
    pub(crate) in_class: Option<SchemaObjectIdentifier>,
}

impl ShowRoleRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_like(mut self, like: Like) -> Self {
        self.like = Some(like);
        self
    }

    pub fn with_in_class(mut self, in_class: SchemaObjectIdentifier) -> Self {
        self.in_class = Some(in_class);
        self
    }

    pub(crate) fn to_opts(&self) -> ShowRoleOptions {
        ShowRoleOptions {
            like: self.like.clone(),
            in_class: self.in_class.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrantRoleRequest {
    pub(crate) name: AccountObjectIdentifier,
    pub(crate) to_role: Option<AccountObjectIdentifier>,
    pub(crate) to_user: Option<AccountObjectIdentifier>,
}

impl GrantRoleRequest {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn with_to_role(mut self, to_role: AccountObjectIdentifier) -> Self {
        self.to_role = Some(to_role);
        self
    }

    pub fn with_to_user(mut self, to_user: AccountObjectIdentifier) -> Self {
        self.to_user = Some(to_user);
        self
    }

    pub(crate) fn to_opts(&self) -> GrantRoleOptions {
        GrantRoleOptions {
            name: self.name.clone(),
            to_role: self.to_role.clone(),
            to_user: self.to_user.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevokeRoleRequest {
    pub(crate) name: AccountObjectIdentifier,
    pub(crate) from_role: Option<AccountObjectIdentifier>,
    pub(crate) from_user: Option<AccountObjectIdentifier>,
}

impl RevokeRoleRequest {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn with_from_role(mut self, from_role: AccountObjectIdentifier) -> Self {
        self.from_role = Some(from_role);
        self
    }

    pub fn with_from_user(mut self, from_user: AccountObjectIdentifier) -> Self {
        self.from_user = Some(from_user);
        self
    }

    pub(crate) fn to_opts(&self) -> RevokeRoleOptions {
        RevokeRoleOptions {
            name: self.name.clone(),
            from_role: self.from_role.clone(),
            from_user: self.from_user.clone(),
        }
    }
}
