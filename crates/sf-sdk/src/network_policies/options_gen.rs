// @generated by sf-gen from the NetworkPolicies definition. Do not edit.
#![allow(unused_imports)]

use super::interface_gen::*;
use crate::common::{Like, LimitFrom, TagAssociation};
use crate::ddl::{ListOptions, ParameterOptions, SqlBuilder, SqlRender};
use sf_core::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};

/// <https://docs.snowflake.com/en/sql-reference/sql/create-network-policy>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateNetworkPolicyOptions {
    pub or_replace: bool,
    pub if_not_exists: bool,
    pub name: AccountObjectIdentifier,
    pub allowed_ip_list: Vec<String>,
    pub blocked_ip_list: Vec<String>,
    pub comment: Option<String>,
}

impl SqlRender for CreateNetworkPolicyOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("CREATE");
        b.keyword("OR REPLACE", self.or_replace);
        b.static_sql("NETWORK POLICY");
        b.keyword("IF NOT EXISTS", self.if_not_exists);
        b.identifier("", &self.name);
        b.list("ALLOWED_IP_LIST", Some(self.allowed_ip_list.as_slice()), ListOptions::new().equals().single_quotes());
        b.list("BLOCKED_IP_LIST", Some(self.blocked_ip_list.as_slice()), ListOptions::new().equals().single_quotes());
        b.parameter("COMMENT", self.comment.as_ref(), ParameterOptions::new().single_quotes());
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/alter-network-policy>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlterNetworkPolicyOptions {
    pub if_exists: bool,
    pub name: AccountObjectIdentifier,
    pub set: Option<NetworkPolicySet>,
    pub unset: Option<NetworkPolicyUnset>,
    pub rename_to: Option<AccountObjectIdentifier>,
}

impl SqlRender for AlterNetworkPolicyOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("ALTER");
        b.static_sql("NETWORK POLICY");
        b.keyword("IF EXISTS", self.if_exists);
        b.identifier("", &self.name);
        b.nested("SET", self.set.as_ref());
        b.nested_list("UNSET", self.unset.as_ref());
        b.optional_identifier("RENAME TO", self.rename_to.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkPolicySet {
    pub allowed_ip_list: Option<Vec<String>>,
    pub blocked_ip_list: Option<Vec<String>>,
    pub comment: Option<String>,
}

impl SqlRender for NetworkPolicySet {
    fn render(&self, b: &mut SqlBuilder) {
        b.list("ALLOWED_IP_LIST", self.allowed_ip_list.as_deref(), ListOptions::new().equals().single_quotes().keep_empty());
        b.list("BLOCKED_IP_LIST", self.blocked_ip_list.as_deref(), ListOptions::new().equals().single_quotes().keep_empty());
        b.parameter("COMMENT", self.comment.as_ref(), ParameterOptions::new().single_quotes());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkPolicyUnset {
    pub comment: bool,
}

impl SqlRender for NetworkPolicyUnset {
    fn render(&self, b: &mut SqlBuilder) {
        b.keyword("COMMENT", self.comment);
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/drop-network-policy>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropNetworkPolicyOptions {
    pub if_exists: bool,
    pub name: AccountObjectIdentifier,
}

impl SqlRender for DropNetworkPolicyOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("DROP");
        b.static_sql("NETWORK POLICY");
        b.keyword("IF EXISTS", self.if_exists);
        b.identifier("", &self.name);
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/show-network-policies>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowNetworkPolicyOptions {
}

impl SqlRender for ShowNetworkPolicyOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("SHOW");
        b.static_sql("NETWORK POLICIES");
    }
}

/// <https://docs.snowflake.com/en/sql-reference/sql/desc-network-policy>
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeNetworkPolicyOptions {
    pub name: AccountObjectIdentifier,
}

impl SqlRender for DescribeNetworkPolicyOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("DESCRIBE");
        b.static_sql("NETWORK POLICY");
        b.identifier("", &self.name);
    }
}
