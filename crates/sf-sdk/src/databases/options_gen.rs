// @generated by sf-gen from the Databases definition. Do not edit.
#![allow(unused_imports)]

use super::interface_gen::*;
use crate::common::{Like, LimitFrom, TagAssociation};
use crate::ddl::{ListOptions, ParameterOptions, SqlBuilder, SqlRender};
use sf_core::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};

/// <https://docs.snowflake.com/en/sql-reference/sql/create-database>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateDatabaseOptions {
    pub or_replace: bool,
    pub transient: bool,
    pub if_not_exists: bool,
    pub name: AccountObjectIdentifier,
    pub clone_source: Option<AccountObjectIdentifier>,
    pub data_retention_time_in_days: Option<i32>,
    pub max_data_extension_time_in_days: Option<i32>,
    pub external_volume: Option<AccountObjectIdentifier>,
    pub catalog: Option<AccountObjectIdentifier>,
    pub default_ddl_collation: Option<String>,
    pub log_level: Option<LogLevel>,
    pub trace_level: Option<TraceLevel>,
    pub comment: Option<String>,
    pub tag: Vec<TagAssociation>,
}

impl SqlRender for CreateDatabaseOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("CREATE");
        b.keyword("OR REPLACE", self.or_replace);
        b.keyword("TRANSIENT", self.transient);
        b.static_sql("DATABASE");
        b.keyword("IF NOT EXISTS", self.if_not_exists);
        b.identifier("", &self.name);
        b.optional_identifier("CLONE", self.clone_source.as_ref());
        b.parameter("DATA_RETENTION_TIME_IN_DAYS", self.data_retention_time_in_days.as_ref(), ParameterOptions::new());
        b.parameter("MAX_DATA_EXTENSION_TIME_IN_DAYS", self.max_data_extension_time_in_days.as_ref(), ParameterOptions::new());
        b.parameter("EXTERNAL_VOLUME", self.external_volume.as_ref(), ParameterOptions::new());
        b.parameter("CATALOG", self.catalog.as_ref(), ParameterOptions::new());
        b.parameter("DEFAULT_DDL_COLLATION", self.default_ddl_collation.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("LOG_LEVEL", self.log_level.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("TRACE_LEVEL", self.trace_level.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("COMMENT", self.comment.as_ref(), ParameterOptions::new().single_quotes());
        b.struct_list("TAG", &self.tag, ListOptions::new());
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/alter-database>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlterDatabaseOptions {
    pub if_exists: bool,
    pub name: AccountObjectIdentifier,
    pub new_name: Option<AccountObjectIdentifier>,
    pub swap_with: Option<AccountObjectIdentifier>,
    pub set: Option<DatabaseSet>,
    pub unset: Option<DatabaseUnset>,
    pub set_tag: Vec<TagAssociation>,
    pub unset_tag: Vec<SchemaObjectIdentifier>,
}

impl SqlRender for AlterDatabaseOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("ALTER");
        b.static_sql("DATABASE");
        b.keyword("IF EXISTS", self.if_exists);
        b.identifier("", &self.name);
        b.optional_identifier("RENAME TO", self.new_name.as_ref());
        b.optional_identifier("SWAP WITH", self.swap_with.as_ref());
        b.nested("SET", self.set.as_ref());
        b.nested_list("UNSET", self.unset.as_ref());
        b.struct_list("SET TAG", &self.set_tag, ListOptions::new().no_parentheses());
        b.list("UNSET TAG", Some(self.unset_tag.as_slice()), ListOptions::new().no_parentheses());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseSet {
    pub data_retention_time_in_days: Option<i32>,
    pub max_data_extension_time_in_days: Option<i32>,
    pub external_volume: Option<AccountObjectIdentifier>,
    pub catalog: Option<AccountObjectIdentifier>,
    pub default_ddl_collation: Option<String>,
    pub log_level: Option<LogLevel>,
    pub trace_level: Option<TraceLevel>,
    pub comment: Option<String>,
}

impl SqlRender for DatabaseSet {
    fn render(&self, b: &mut SqlBuilder) {
        b.parameter("DATA_RETENTION_TIME_IN_DAYS", self.data_retention_time_in_days.as_ref(), ParameterOptions::new());
        b.parameter("MAX_DATA_EXTENSION_TIME_IN_DAYS", self.max_data_extension_time_in_days.as_ref(), ParameterOptions::new());
        b.parameter("EXTERNAL_VOLUME", self.external_volume.as_ref(), ParameterOptions::new());
        b.parameter("CATALOG", self.catalog.as_ref(), ParameterOptions::new());
        b.parameter("DEFAULT_DDL_COLLATION", self.default_ddl_collation.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("LOG_LEVEL", self.log_level.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("TRACE_LEVEL", self.trace_level.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("COMMENT", self.comment.as_ref(), ParameterOptions::new().single_quotes());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseUnset {
    pub data_retention_time_in_days: bool,
    pub max_data_extension_time_in_days: bool,
    pub external_volume: bool,
    pub catalog: bool,
    pub default_ddl_collation: bool,
    pub log_level: bool,
    pub trace_level: bool,
    pub comment: bool,
}

impl SqlRender for DatabaseUnset {
    fn render(&self, b: &mut SqlBuilder) {
        b.keyword("DATA_RETENTION_TIME_IN_DAYS", self.data_retention_time_in_days);
        b.keyword("MAX_DATA_EXTENSION_TIME_IN_DAYS", self.max_data_extension_time_in_days);
        b.keyword("EXTERNAL_VOLUME", self.external_volume);
        b.keyword("CATALOG", self.catalog);
        b.keyword("DEFAULT_DDL_COLLATION", self.default_ddl_collation);
        b.keyword("LOG_LEVEL", self.log_level);
        b.keyword("TRACE_LEVEL", self.trace_level);
        b.keyword("COMMENT", self.comment);
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/drop-database>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropDatabaseOptions {
    pub if_exists: bool,
    pub name: AccountObjectIdentifier,
    pub cascade: bool,
    pub restrict: bool,
}

impl SqlRender for DropDatabaseOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("DROP");
        b.static_sql("DATABASE");
        b.keyword("IF EXISTS", self.if_exists);
        b.identifier("", &self.name);
        b.keyword("CASCADE", self.cascade);
        b.keyword("RESTRICT", self.restrict);
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/undrop-database>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UndropDatabaseOptions {
    pub name: AccountObjectIdentifier,
}

impl SqlRender for UndropDatabaseOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("UNDROP DATABASE");
        b.identifier("", &self.name);
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/show-databases>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowDatabaseOptions {
    pub terse: bool,
    pub history: bool,
    pub like: Option<Like>,
    pub starts_with: Option<String>,
    pub limit: Option<LimitFrom>,
}

impl SqlRender for ShowDatabaseOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("SHOW");
        b.keyword("TERSE", self.terse);
        b.static_sql("DATABASES");
        b.keyword("HISTORY", self.history);
        b.nested("", self.like.as_ref());
        b.parameter("STARTS WITH", self.starts_with.as_ref(), ParameterOptions::new().single_quotes().no_equals());
        b.nested("", self.limit.as_ref());
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/desc-database>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeDatabaseOptions {
    pub name: AccountObjectIdentifier,
}

impl SqlRender for DescribeDatabaseOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("DESCRIBE");
        b.static_sql("DATABASE");
        b.identifier("", &self.name);
    }
}
