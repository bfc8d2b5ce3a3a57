// @generated by sf-gen from the Roles definition. Do not edit.
#![allow(unused_imports)]

use super::interface_gen::*;
use crate::common::{Like, LimitFrom, TagAssociation};
use crate::ddl::{ListOptions, ParameterOptions, SqlBuilder, SqlRender};
use sf_core::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};

/// <https://docs.snowflake.com/en/sql-reference/sql/create-role>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateRoleOptions {
    pub or_replace: bool,
    pub if_not_exists: bool,
    pub name: AccountObjectIdentifier,
    pub comment: Option<String>,
    pub tag: Vec<TagAssociation>,
}

impl SqlRender for CreateRoleOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("CREATE");
        b.keyword("OR REPLACE", self.or_replace);
        b.static_sql("ROLE");
        b.keyword("IF NOT EXISTS", self.if_not_exists);
        b.identifier("", &self.name);
        b.parameter("COMMENT", self.comment.as_ref(), ParameterOptions::new().single_quotes());
        b.struct_list("TAG", &self.tag, ListOptions::new());
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/alter-role>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlterRoleOptions {
    pub if_exists: bool,
    pub name: AccountObjectIdentifier,
    pub rename_to: Option<AccountObjectIdentifier>,
    pub set_comment: Option<String>,
    pub set_tag: Vec<TagAssociation>,
    pub unset_comment: bool,
    pub unset_tag: Vec<SchemaObjectIdentifier>,
}

impl SqlRender for AlterRoleOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("ALTER");
        b.static_sql("ROLE");
        b.keyword("IF EXISTS", self.if_exists);
        b.identifier("", &self.name);
        b.optional_identifier("RENAME TO", self.rename_to.as_ref());
        b.parameter("SET COMMENT", self.set_comment.as_ref(), ParameterOptions::new().single_quotes());
        b.struct_list("SET TAG", &self.set_tag, ListOptions::new().no_parentheses());
        b.keyword("UNSET COMMENT", self.unset_comment);
        b.list("UNSET TAG", Some(self.unset_tag.as_slice()), ListOptions::new().no_parentheses());
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/drop-role>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropRoleOptions {
    pub if_exists: bool,
    pub name: AccountObjectIdentifier,
}

impl SqlRender for DropRoleOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("DROP");
        b.static_sql("ROLE");
        b.keyword("IF EXISTS", self.if_exists);
        b.identifier("", &self.name);
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/show-roles>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowRoleOptions {
    pub like: Option<Like>,
    pub in_class: Option<SchemaObjectIdentifier>,
}

impl SqlRender for ShowRoleOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("SHOW");
        b.static_sql("ROLES");
        b.nested("", self.like.as_ref());
        b.optional_identifier("IN CLASS", self.in_class.as_ref());
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/grant-role>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrantRoleOptions {
    pub name: AccountObjectIdentifier,
    pub to_role: Option<AccountObjectIdentifier>,
    pub to_user: Option<AccountObjectIdentifier>,
}

impl SqlRender for GrantRoleOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("GRANT ROLE");
        b.identifier("", &self.name);
        b.optional_identifier("TO ROLE", self.to_role.as_ref());
        b.optional_identifier("TO USER", self.to_user.as_ref());
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/revoke-role>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevokeRoleOptions {
    pub name: AccountObjectIdentifier,
    pub from_role: Option<AccountObjectIdentifier>,
    pub from_user: Option<AccountObjectIdentifier>,
}

impl SqlRender for RevokeRoleOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("REVOKE ROLE");
        b.identifier("", &self.name);
        b.optional_identifier("FROM ROLE", self.from_role.as_ref());
        b.optional_identifier("FROM USER", self.from_user.as_ref());
    }
}
