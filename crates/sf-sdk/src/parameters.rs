//! Session, account and object parameters.
//!
//! Hand-written rather than generated: `SHOW PARAMETERS` targets one of
//! several scopes, and account parameters are set by key at run time.

use crate::client::{Call, Client};
use crate::common::Like;
use crate::ddl::{text_value, ParameterOptions, SqlBuilder, SqlRender, SqlValue};
use crate::decode::{DecodeError, FromColumn, FromRow, RowExt};
use crate::error::SdkResult;
use crate::validation::{exactly_one, valid_identifier, IsSet, Validate, ValidationError};
use async_trait::async_trait;
use regex::Regex;
use sf_core::{
    AccountObjectIdentifier, Context, DatabaseObjectIdentifier, ObjectIdentifier,
    SchemaObjectIdentifier,
};
use sf_db::Row;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[async_trait]
pub trait Parameters: Send + Sync {
    /// <https://docs.snowflake.com/en/sql-reference/sql/show-parameters>
    async fn show_parameters(
        &self,
        ctx: &Context,
        request: &ShowParametersRequest,
    ) -> SdkResult<Vec<Parameter>>;

    /// `ALTER ACCOUNT SET <key> = <value>`
    async fn set_account_parameter(&self, ctx: &Context, key: &str, value: &str) -> SdkResult<()>;

    /// `ALTER ACCOUNT UNSET <key>`
    async fn unset_account_parameter(&self, ctx: &Context, key: &str) -> SdkResult<()>;
}

/// Level a parameter value was set at. `Default` is the empty level
/// reported for values nobody has overridden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParameterLevel {
    #[default]
    Default,
    Account,
    User,
    Session,
    Object,
    Warehouse,
    Database,
    Schema,
    Task,
    Table,
}

impl ParameterLevel {
    pub fn as_sql(&self) -> &'static str {
        match self {
            ParameterLevel::Default => "",
            ParameterLevel::Account => "ACCOUNT",
            ParameterLevel::User => "USER",
            ParameterLevel::Session => "SESSION",
            ParameterLevel::Object => "OBJECT",
            ParameterLevel::Warehouse => "WAREHOUSE",
            ParameterLevel::Database => "DATABASE",
            ParameterLevel::Schema => "SCHEMA",
            ParameterLevel::Task => "TASK",
            ParameterLevel::Table => "TABLE",
        }
    }
}

impl fmt::Display for ParameterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for ParameterLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" => Ok(ParameterLevel::Default),
            "ACCOUNT" => Ok(ParameterLevel::Account),
            "USER" => Ok(ParameterLevel::User),
            "SESSION" => Ok(ParameterLevel::Session),
            "OBJECT" => Ok(ParameterLevel::Object),
            "WAREHOUSE" => Ok(ParameterLevel::Warehouse),
            "DATABASE" => Ok(ParameterLevel::Database),
            "SCHEMA" => Ok(ParameterLevel::Schema),
            "TASK" => Ok(ParameterLevel::Task),
            "TABLE" => Ok(ParameterLevel::Table),
            _ => Err(format!("unknown ParameterLevel '{s}'")),
        }
    }
}

impl FromColumn for ParameterLevel {
    const EMPTY_IS_NULL: bool = false;

    fn from_column(raw: &str) -> Result<Self, String> {
        raw.parse()
    }
}

/// One row of `SHOW PARAMETERS`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub key: String,
    pub value: String,
    pub default: String,
    pub level: ParameterLevel,
    pub description: String,
}

impl FromRow for Parameter {
    fn from_row(row: &Row) -> Result<Self, DecodeError> {
        Ok(Self {
            key: row.decode("key")?,
            value: row.decode_opt("value")?.unwrap_or_default(),
            default: row.decode_opt("default")?.unwrap_or_default(),
            level: row.decode_opt("level")?.unwrap_or_default(),
            description: row.decode_opt("description")?.unwrap_or_default(),
        })
    }
}

/// `IN { SESSION | ACCOUNT | USER <u> | ... }`, exactly one target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParametersIn {
    pub session: bool,
    pub account: bool,
    pub user: Option<AccountObjectIdentifier>,
    pub warehouse: Option<AccountObjectIdentifier>,
    pub database: Option<AccountObjectIdentifier>,
    pub schema: Option<DatabaseObjectIdentifier>,
    pub task: Option<SchemaObjectIdentifier>,
    pub table: Option<SchemaObjectIdentifier>,
}

impl ParametersIn {
    pub fn session() -> Self {
        Self {
            session: true,
            ..Default::default()
        }
    }

    pub fn account() -> Self {
        Self {
            account: true,
            ..Default::default()
        }
    }

    pub fn user(id: AccountObjectIdentifier) -> Self {
        Self {
            user: Some(id),
            ..Default::default()
        }
    }

    pub fn warehouse(id: AccountObjectIdentifier) -> Self {
        Self {
            warehouse: Some(id),
            ..Default::default()
        }
    }

    pub fn database(id: AccountObjectIdentifier) -> Self {
        Self {
            database: Some(id),
            ..Default::default()
        }
    }

    pub fn schema(id: DatabaseObjectIdentifier) -> Self {
        Self {
            schema: Some(id),
            ..Default::default()
        }
    }

    pub fn task(id: SchemaObjectIdentifier) -> Self {
        Self {
            task: Some(id),
            ..Default::default()
        }
    }

    pub fn table(id: SchemaObjectIdentifier) -> Self {
        Self {
            table: Some(id),
            ..Default::default()
        }
    }

    fn target(&self) -> Option<String> {
        self.user
            .as_ref()
            .or(self.warehouse.as_ref())
            .or(self.database.as_ref())
            .map(|id| id.fully_qualified_name())
            .or_else(|| self.schema.as_ref().map(|id| id.fully_qualified_name()))
            .or_else(|| {
                self.task
                    .as_ref()
                    .or(self.table.as_ref())
                    .map(|id| id.fully_qualified_name())
            })
    }
}

impl SqlRender for ParametersIn {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("IN");
        b.keyword("SESSION", self.session);
        b.keyword("ACCOUNT", self.account);
        b.optional_identifier("USER", self.user.as_ref());
        b.optional_identifier("WAREHOUSE", self.warehouse.as_ref());
        b.optional_identifier("DATABASE", self.database.as_ref());
        b.optional_identifier("SCHEMA", self.schema.as_ref());
        b.optional_identifier("TASK", self.task.as_ref());
        b.optional_identifier("TABLE", self.table.as_ref());
    }
}

const IN_TARGETS: &[&str] = &[
    "session",
    "account",
    "user",
    "warehouse",
    "database",
    "schema",
    "task",
    "table",
];

impl Validate for ParametersIn {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        let set = [
            self.session.is_set(),
            self.account.is_set(),
            self.user.is_set(),
            self.warehouse.is_set(),
            self.database.is_set(),
            self.schema.is_set(),
            self.task.is_set(),
            self.table.is_set(),
        ];
        if !exactly_one(&set) {
            errs.push(ValidationError::exactly_one_of("ParametersIn", IN_TARGETS));
        }
        let ids = [
            ("user", valid_identifier(&self.user)),
            ("warehouse", valid_identifier(&self.warehouse)),
            ("database", valid_identifier(&self.database)),
            ("schema", valid_identifier(&self.schema)),
            ("task", valid_identifier(&self.task)),
            ("table", valid_identifier(&self.table)),
        ];
        for (field, ok) in ids {
            if !ok {
                errs.push(ValidationError::invalid_identifier("ParametersIn", field));
            }
        }
    }
}

/// `SHOW PARAMETERS [LIKE '<pattern>'] [IN ...]`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowParametersOptions {
    pub like: Option<Like>,
    pub in_: Option<ParametersIn>,
}

impl SqlRender for ShowParametersOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("SHOW PARAMETERS");
        b.nested("", self.like.as_ref());
        b.nested("", self.in_.as_ref());
    }
}

impl Validate for ShowParametersOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if let Some(v) = &self.like {
            v.collect_errors(errs);
        }
        if let Some(v) = &self.in_ {
            v.collect_errors(errs);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowParametersRequest {
    pub(crate) like: Option<Like>,
    pub(crate) in_: Option<ParametersIn>,
}

impl ShowParametersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_like(mut self, like: Like) -> Self {
        self.like = Some(like);
        self
    }

    pub fn with_in(mut self, in_: ParametersIn) -> Self {
        self.in_ = Some(in_);
        self
    }

    pub(crate) fn to_opts(&self) -> ShowParametersOptions {
        ShowParametersOptions {
            like: self.like.clone(),
            in_: self.in_.clone(),
        }
    }
}

/// Parameter value as written after `=`: numbers and booleans bare,
/// everything else single-quoted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterValue(pub String);

static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
static KEY_RE: OnceLock<Regex> = OnceLock::new();

/// Decimal literal: sign, digits, optional fraction and exponent.
fn is_number(raw: &str) -> bool {
    NUMBER_RE
        .get_or_init(|| {
            Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("valid regex")
        })
        .is_match(raw)
}

/// Parameter names are bare words; nothing else may reach the statement.
fn is_parameter_key(key: &str) -> bool {
    KEY_RE
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"))
        .is_match(key)
}

impl SqlValue for ParameterValue {
    fn to_sql(&self, _quoted: bool) -> String {
        let raw = self.0.trim();
        let bare = raw.eq_ignore_ascii_case("TRUE")
            || raw.eq_ignore_ascii_case("FALSE")
            || is_number(raw);
        if bare {
            raw.to_ascii_uppercase()
        } else {
            text_value(&self.0, true)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountParameterSet {
    pub key: String,
    pub value: ParameterValue,
}

impl SqlRender for AccountParameterSet {
    fn render(&self, b: &mut SqlBuilder) {
        b.parameter(&self.key.to_ascii_uppercase(), Some(&self.value), ParameterOptions::new());
    }
}

/// `ALTER ACCOUNT { SET <key> = <value> | UNSET <key> }`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlterAccountOptions {
    pub set: Option<AccountParameterSet>,
    pub unset: Option<String>,
}

impl SqlRender for AlterAccountOptions {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("ALTER ACCOUNT");
        b.nested("SET", self.set.as_ref());
        if let Some(key) = &self.unset {
            b.static_sql("UNSET");
            b.static_sql(&key.to_ascii_uppercase());
        }
    }
}

impl Validate for AlterAccountOptions {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !exactly_one(&[self.set.is_set(), self.unset.is_set()]) {
            errs.push(ValidationError::exactly_one_of("AlterAccountOptions", &["set", "unset"]));
        }
        let key = self.set.as_ref().map(|set| set.key.as_str()).or(self.unset.as_deref());
        if key.is_some_and(|key| !is_parameter_key(key)) {
            errs.push(ValidationError::invalid_name("AlterAccountOptions", "key"));
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParametersImpl {
    client: Client,
}

impl ParametersImpl {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Effective value of one parameter in `scope`, `None` when no row matches.
    pub async fn show_parameter(
        &self,
        ctx: &Context,
        key: &str,
        scope: ParametersIn,
    ) -> SdkResult<Option<Parameter>> {
        let request = ShowParametersRequest::new()
            .with_like(Like::new(key))
            .with_in(scope);
        let rows = self.show_parameters(ctx, &request).await?;
        Ok(rows.into_iter().find(|p| p.key.eq_ignore_ascii_case(key)))
    }
}

#[async_trait]
impl Parameters for ParametersImpl {
    async fn show_parameters(
        &self,
        ctx: &Context,
        request: &ShowParametersRequest,
    ) -> SdkResult<Vec<Parameter>> {
        let opts = request.to_opts();
        let call = Call::new("ShowParameters", opts.in_.as_ref().and_then(ParametersIn::target));
        self.client.query_options(ctx, call, Some(&opts)).await
    }

    async fn set_account_parameter(&self, ctx: &Context, key: &str, value: &str) -> SdkResult<()> {
        let opts = AlterAccountOptions {
            set: Some(AccountParameterSet {
                key: key.to_string(),
                value: ParameterValue(value.to_string()),
            }),
            unset: None,
        };
        let call = Call::new("SetAccountParameter", None);
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }

    async fn unset_account_parameter(&self, ctx: &Context, key: &str) -> SdkResult<()> {
        let opts = AlterAccountOptions {
            set: None,
            unset: Some(key.to_string()),
        };
        let call = Call::new("UnsetAccountParameter", None);
        self.client.exec_options(ctx, call, Some(&opts)).await.map(|_| ())
    }
}

#[cfg(test)]
#[path = "parameters_test.rs"]
mod tests;
