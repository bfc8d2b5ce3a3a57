// @generated by sf-gen from the Databases definition. Do not edit.
#![allow(unused_imports)]

use super::interface_gen::*;
use super::options_gen::*;
use crate::common::{Like, LimitFrom, TagAssociation};
use sf_core::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateDatabaseRequest {
    pub(crate) or_replace: bool,
    pub(crate) transient: bool,
    pub(crate) if_not_exists: bool,
    pub(crate) name: AccountObjectIdentifier,
    pub(crate) clone_source: Option<AccountObjectIdentifier>,
    pub(crate) data_retention_time_in_days: Option<i32>,
    pub(crate) max_data_extension_time_in_days: Option<i32>,
    pub(crate) external_volume: Option<AccountObjectIdentifier>,
    pub(crate) catalog: Option<AccountObjectIdentifier>,
    pub(crate) default_ddl_collation: Option<String>,
    pub(crate) log_level: Option<LogLevel>,
    pub(crate) trace_level: Option<TraceLevel>,
    pub(crate) comment: Option<String>,
    pub(crate) tag: Vec<TagAssociation>,
}

impl CreateDatabaseRequest {
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

    pub fn with_transient(mut self, transient: bool) -> Self {
        self.transient = transient;
        self
    }

    pub fn with_if_not_exists(mut self, if_not_exists: bool) -> Self {
        self.if_not_exists = if_not_exists;
        self
    }

    pub fn with_clone_source(mut self, clone_source: AccountObjectIdentifier) -> Self {
        self.clone_source = Some(clone_source);
        self
    }

    pub fn with_data_retention_time_in_days(mut self, data_retention_time_in_days: i32) -> Self {
        self.data_retention_time_in_days = Some(data_retention_time_in_days);
        self
    }

    pub fn with_max_data_extension_time_in_days(mut self, max_data_extension_time_in_days: i32) -> Self {
        self.max_data_extension_time_in_days = Some(max_data_extension_time_in_days);
        self
    }

    pub fn with_external_volume(mut self, external_volume: AccountObjectIdentifier) -> Self {
        self.external_volume = Some(external_volume);
        self
    }

    pub fn with_catalog(mut self, catalog: AccountObjectIdentifier) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_default_ddl_collation(mut self, default_ddl_collation: impl Into<String>) -> Self {
        self.default_ddl_collation = Some(default_ddl_collation.into());
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = Some(log_level);
        self
    }

    pub fn with_trace_level(mut self, trace_level: TraceLevel) -> Self {
        self.trace_level = Some(trace_level);
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

    pub(crate) fn to_opts(&self) -> CreateDatabaseOptions {
        CreateDatabaseOptions {
            or_replace: self.or_replace,
            transient: self.transient,
            if_not_exists: self.if_not_exists,
            name: self.name.clone(),
            clone_source: self.clone_source.clone(),
            data_retention_time_in_days: self.data_retention_time_in_days,
            max_data_extension_time_in_days: self.max_data_extension_time_in_days,
            external_volume: self.external_volume.clone(),
            catalog: self.catalog.clone(),
            default_ddl_collation: self.default_ddl_collation.clone(),
            log_level: self.log_level,
            trace_level: self.trace_level,
            comment: self.comment.clone(),
            tag: self.tag.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlterDatabaseRequest {
    pub(crate) if_exists: bool,
    pub(crate) name: AccountObjectIdentifier,
    pub(crate) new_name: Option<AccountObjectIdentifier>,
    pub(crate) swap_with: Option<AccountObjectIdentifier>,
    pub(crate) set: Option<DatabaseSetRequest>,
    pub(crate) unset: Option<DatabaseUnsetRequest>,
    pub(crate) set_tag: Vec<TagAssociation>,
    pub(crate) unset_tag: Vec<SchemaObjectIdentifier>,
}

impl AlterDatabaseRequest {
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

    pub fn with_new_name(mut self, new_name: AccountObjectIdentifier) -> Self {
        self.new_name = Some(new_name);
        self
    }

    pub fn with_swap_with(mut self, swap_with: AccountObjectIdentifier) -> Self {
        self.swap_with = Some(swap_with);
        self
    }

    pub fn with_set(mut self, set: DatabaseSetRequest) -> Self {
        self.set = Some(set);
        self
    }

    pub fn with_unset(mut self, unset: DatabaseUnsetRequest) -> Self {
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

    pub(crate) fn to_opts(&self) -> AlterDatabaseOptions {
        AlterDatabaseOptions {
            if_exists: self.if_exists,
            name: self.name.clone(),
            new_name: self.new_name.clone(),
            swap_with: self.swap_with.clone(),
            set: self.set.as_ref().map(|v| v.to_opts()),
            unset: self.unset.as_ref().map(|v| v.to_opts()),
            set_tag: self.set_tag.clone(),
            unset_tag: self.unset_tag.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseSetRequest {
    pub(crate) data_retention_time_in_days: Option<i32>,
    pub(crate) max_data_extension_time_in_days: Option<i32>,
    pub(crate) external_volume: Option<AccountObjectIdentifier>,
    pub(crate) catalog: Option<AccountObjectIdentifier>,
    pub(crate) default_ddl_collation: Option<String>,
    pub(crate) log_level: Option<LogLevel>,
    pub(crate) trace_level: Option<TraceLevel>,
    pub(crate) comment: Option<String>,
}

impl DatabaseSetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_retention_time_in_days(mut self, data_retention_time_in_days: i32) -> Self {
        self.data_retention_time_in_days = Some(data_retention_time_in_days);
        self
    }

    pub fn with_max_data_extension_time_in_days(mut self, max_data_extension_time_in_days: i32) -> Self {
        self.max_data_extension_time_in_days = Some(max_data_extension_time_in_days);
        self
    }

    pub fn with_external_volume(mut self, external_volume: AccountObjectIdentifier) -> Self {
        self.external_volume = Some(external_volume);
        self
    }

    pub fn with_catalog(mut self, catalog: AccountObjectIdentifier) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_default_ddl_collation(mut self, default_ddl_collation: impl Into<String>) -> Self {
        self.default_ddl_collation = Some(default_ddl_collation.into());
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = Some(log_level);
        self
    }

    pub fn with_trace_level(mut self, trace_level: TraceLevel) -> Self {
        self.trace_level = Some(trace_level);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub(crate) fn to_opts(&self) -> DatabaseSet {
        DatabaseSet {
            data_retention_time_in_days: self.data_retention_time_in_days,
            max_data_extension_time_in_days: self.max_data_extension_time_in_days,
            external_volume: self.external_volume.clone(),
            catalog: self.catalog.clone(),
            default_ddl_collation: self.default_ddl_collation.clone(),
            log_level: self.log_level,
            trace_level: self.trace_level,
            comment: self.comment.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseUnsetRequest {
    pub(crate) data_retention_time_in_days: bool,
    pub(crate) max_data_extension_time_in_days: bool,
    pub(crate) external_volume: bool,
    pub(crate) catalog: bool,
    pub(crate) default_ddl_collation: bool,
    pub(crate) log_level: bool,
    pub(crate) trace_level: bool,
    pub(crate) comment: bool,
}

impl DatabaseUnsetRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_retention_time_in_days(mut self, data_retention_time_in_days: bool) -> Self {
        self.data_retention_time_in_days = data_retention_time_in_days;
        self
    }

    pub fn with_max_data_extension_time_in_days(mut self, max_data_extension_time_in_days: bool) -> Self {
        self.max_data_extension_time_in_days = max_data_extension_time_in_days;
        self
    }

    pub fn with_external_volume(mut self, external_volume: bool) -> Self {
        self.external_volume = external_volume;
        self
    }

    pub fn with_catalog(mut self, catalog: bool) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_default_ddl_collation(mut self, default_ddl_collation: bool) -> Self {
        self.default_ddl_collation = default_ddl_collation;
        self
    }

    pub fn with_log_level(mut self, log_level: bool) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn with_trace_level(mut self, trace_level: bool) -> Self {
        self.trace_level = trace_level;
        self
    }

    pub fn with_comment(mut self, comment: bool) -> Self {
        self.comment = comment;
        self
    }

    pub(crate) fn to_opts(&self) -> DatabaseUnset {
        DatabaseUnset {
            data_retention_time_in_days: self.data_retention_time_in_days,
            max_data_extension_time_in_days: self.max_data_extension_time_in_days,
            external_volume: self.external_volume,
            catalog: self.catalog,
            default_ddl_collation: self.default_ddl_collation,
            log_level: self.log_level,
            trace_level: self.trace_level,
            comment: self.comment,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropDatabaseRequest {
    pub(crate) if_exists: bool,
    pub(crate) name: AccountObjectIdentifier,
    pub(crate) cascade: bool,
    pub(crate) restrict: bool,
}

impl DropDatabaseRequest {
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

    pub fn with_cascade(mut self, cascade: bool) -> Self {
        self.cascade = cascade;
        self
    }

    pub fn with_restrict(mut self, restrict: bool) -> Self {
        self.restrict = restrict;
        self
    }

    pub(crate) fn to_opts(&self) -> DropDatabaseOptions {
        DropDatabaseOptions {
            if_exists: self.if_exists,
            name: self.name.clone(),
            cascade: self.cascade,
            restrict: self.restrict,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UndropDatabaseRequest {
    pub(crate) name: AccountObjectIdentifier,
}

impl UndropDatabaseRequest {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            name,
        }
    }

    pub(crate) fn to_opts(&self) -> UndropDatabaseOptions {
        UndropDatabaseOptions {
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowDatabaseRequest {
    pub(crate) terse: bool,
    pub(crate) history: bool,
    pub(crate) like: Option<Like>,
    pub(crate) starts_with: Option<String>,
    pub(crate) limit: Option<LimitFrom>,
}

impl ShowDatabaseRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_terse(mut self, terse: bool) -> Self {
        self.terse = terse;
        self
    }

    pub fn with_history(mut self, history: bool) -> Self {
        self.history = history;
        self
    }

    pub fn with_like(mut self, like: Like) -> Self {
        self.like = Some(like);
        self
    }

    pub fn with_starts_with(mut self, starts_with: impl Into<String>) -> Self {
        self.starts_with = Some(starts_with.into());
        self
    }

    pub fn with_limit(mut self, limit: LimitFrom) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_opts(&self) -> ShowDatabaseOptions {
        ShowDatabaseOptions {
            terse: self.terse,
            history: self.history,
            like: self.like.clone(),
            starts_with: self.starts_with.clone(),
            limit: self.limit.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeDatabaseRequest {
    pub(crate) name: AccountObjectIdentifier,
}

impl DescribeDatabaseRequest {
    pub fn new(name: AccountObjectIdentifier) -> Self {
        Self {
            name,
        }
    }

    pub(crate) fn to_opts(&self) -> DescribeDatabaseOptions {
        DescribeDatabaseOptions {
            name: self.name.clone(),
        }
    }
}
