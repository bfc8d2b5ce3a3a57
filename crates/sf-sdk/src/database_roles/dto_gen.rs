// @generated by sf-gen from the DatabaseRoles definition. Do not edit.
#![allow(unused_imports)]

use super::interface_gen::*;
use super::options_gen::*;
use crate::common::{Like, LimitFrom, TagAssociation};
use sf_core::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateDatabaseRoleRequest {
    pub(crate) or_replace: bool,
    pub(crate) if_not_exists: bool,
    pub(crate) name: DatabaseObjectIdentifier,
    pub(crate) comment: Option<String>,
}

impl CreateDatabaseRoleRequest {
    pub fn new(name: DatabaseObjectIdentifier) -> Self {
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

    pub(crate) fn to_opts(&self) -> CreateDatabaseRoleOptions {
        CreateDatabaseRoleOptions {
            or_replace: self.or_replace,
            if_not_exists: self.if_not_exists,
            name: self.name.clone(),
            comment: self.comment.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlterDatabaseRoleRequest {
    pub(crate) if_exists: bool,
    pub(crate) name: DatabaseObjectIdentifier,
    pub(crate) rename: Option<DatabaseObjectIdentifier>,
    pub(crate) set: Option<DatabaseRoleSetRequest>,
    pub(crate) unset: Option<DatabaseRoleUnsetRequest>,
}

impl AlterDatabaseRoleRequest {
    pub fn new(name: DatabaseObjectIdentifier) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn with_if_exists(mut self, if_exists: bool) -> Self {
        self.if_exists = if_exists;
        self
    }

    pub fn with_rename(mut self, rename: DatabaseObjectIdentifier) -> Self {
        self.rename = Some(rename);
        self
    }

    pub fn with_set(mut self, set: DatabaseRoleSetRequest) -> Self {
        self.set = Some(set);
        self
    }

    pub fn with_unset(mut self, unset: DatabaseRoleUnsetRequest) -> Self {
        self.unset = Some(unset);
        self
    }

    pub(crate) fn to_opts(&self) -> AlterDatabaseRoleOptions {
        AlterDatabaseRoleOptions {
            if_exists: self.if_exists,
            name: self.name.clone(),
            rename: self.rename.clone(),
            set: self.set.as_ref().map(|v| v.to_opts()),
            unset: self.unset.as_ref().map(|v| v.to_opts()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseRoleSetRequest {
    pub(crate) comment: String,
}

impl DatabaseRoleSetRequest {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }

    pub(crate) fn to_opts(&self) -> DatabaseRoleSet {
        DatabaseRoleSet {
            comment: self.comment.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseRoleUnsetRequest {
    pub(crate) comment: bool,
}

impl DatabaseRoleUnsetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comment(mut self, comment: bool) -> Self {
        self.comment = comment;
        self
    }

    pub(crate) fn to_opts(&self) -> DatabaseRoleUnset {
        DatabaseRoleUnset {
            comment: self.comment,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropDatabaseRoleRequest {
    pub(crate) if_exists: bool,
    pub(crate) name: DatabaseObjectIdentifier,
}

impl DropDatabaseRoleRequest {
    pub fn new(name: DatabaseObjectIdentifier) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn with_if_exists(mut self, if_exists: bool) -> Self {
        self.if_exists = if_exists;
        self
    }

    pub(crate) fn to_opts(&self) -> DropDatabaseRoleOptions {
        DropDatabaseRoleOptions {
            if_exists: self.if_exists,
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowDatabaseRoleRequest {
    pub(crate) like: Option<Like>,
    pub(crate) in_database: AccountObjectIdentifier,
    pub(crate) limit: Option<LimitFrom>,
}

impl ShowDatabaseRoleRequest {
    pub fn new(in_database: AccountObjectIdentifier) -> Self {
        Self {
            in_database,
            ..Default::default()
        }
    }

    pub fn with_like(mut self, like: Like) -> Self {
        self.like = Some(like);
        self
    }

    pub fn with_limit(mut self, limit: LimitFrom) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_opts(&self) -> ShowDatabaseRoleOptions {
        ShowDatabaseRoleOptions {
            like: self.like.clone(),
            in_database: self.in_database.clone(),
            limit: self.limit.clone(),
        }
    }
}
