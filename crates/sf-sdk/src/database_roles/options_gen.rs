// @generated by sf-gen from the DatabaseRoles definition. Do not edit.
#![allow(unused_imports)]

use super::interface_gen::*;
use crate::common::{Like, LimitFrom, TagAssociation};
use crate::ddl::{ListOptions, ParameterOptions, SqlBuilder, SqlRender};
use sf_core::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};

/// <https://docs.snowflake.com/en/sql-reference/sql/create-database-role>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateDatabaseRoleOptions {
    pub or_replace: bool,
    pub if_not_exists: bool,
    pub name: DatabaseObjectIdentifier,
    pub comment: Option<String>,
}

impl SqlRender for CreateDatabaseRoleOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("CREATE");
        b.keyword("OR REPLACE", self.or_replace);
        b.static_sql("DATABASE ROLE");
        b.keyword("IF NOT EXISTS", self.if_not_exists);
        b.identifier("", &self.name);
        b.parameter("COMMENT", self.comment.as_ref(), ParameterOptions::new().single_quotes());
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/alter-database-role>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlterDatabaseRoleOptions {
    pub if_exists: bool,
    pub name: DatabaseObjectIdentifier,
    pub rename: Option<DatabaseObjectIdentifier>,
    pub set: Option<DatabaseRoleSet>,
    pub unset: Option<DatabaseRoleUnset>,
}

impl SqlRender for AlterDatabaseRoleOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("ALTER");
        b.static_sql("DATABASE ROLE");
        b.keyword("IF EXISTS", self.if_exists);
        b.identifier("", &self.name);
        b.optional_identifier("RENAME TO", self.rename.as_ref());
        b.nested("SET", self.set.as_ref());
        b.nested("UNSET", self.unset.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseRoleSet {
    pub comment: String,
}

impl SqlRender for DatabaseRoleSet {
    fn render(&self, b: &mut SqlBuilder) {
        b.parameter("COMMENT", Some(&self.comment), ParameterOptions::new().single_quotes());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatabaseRoleUnset {
    pub comment: bool,
}

impl SqlRender for DatabaseRoleUnset {
    fn render(&self, b: &mut SqlBuilder) {
        b.keyword("COMMENT", self.comment);
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/drop-database-role>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropDatabaseRoleOptions {
    pub if_exists: bool,
    pub name: DatabaseObjectIdentifier,
}

impl SqlRender for DropDatabaseRoleOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("DROP");
        b.static_sql("DATABASE ROLE");
        b.keyword("IF EXISTS", self.if_exists);
        b.identifier("", &self.name);
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/show-database-roles>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowDatabaseRoleOptions {
    pub like: Option<Like>,
    pub in_database: AccountObjectIdentifier,
    pub limit: Option<LimitFrom>,
}

impl SqlRender for ShowDatabaseRoleOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("SHOW");
        b.static_sql("DATABASE ROLES");
        b.nested("", self.like.as_ref());
        b.identifier("IN DATABASE", &self.in_database);
        b.nested("", self.limit.as_ref());
    }
}
