//! Typed Snowflake object names.
//!
//! Snowflake objects live at one of three depths: account objects
//! (warehouses, databases, roles), database objects (schemas, database
//! roles), and schema objects (tables, tags, policies). Functions and
//! procedures are schema objects that are additionally distinguished by their
//! argument types.
//!
//! Every identifier renders to its fully-qualified form by double-quoting
//! each non-empty segment. An identifier is valid when its rightmost segment
//! is non-empty, so the `Default` value of every type is invalid.

use crate::error::{CoreError, CoreResult};
use crate::sql_utils::join_qualified;
use std::fmt;
use std::str::FromStr;

/// Behaviour shared by every identifier variant.
pub trait ObjectIdentifier {
    /// The last segment, unquoted.
    fn name(&self) -> &str;

    /// Every non-empty segment double-quoted and joined with `.`.
    fn fully_qualified_name(&self) -> String;

    /// Whether the rightmost segment is non-empty.
    fn is_valid(&self) -> bool {
        !self.name().is_empty()
    }
}

/// Depth discriminator of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    AccountObject,
    DatabaseObject,
    SchemaObject,
    SchemaObjectWithArguments,
}

impl IdentifierKind {
    /// Number of dotted segments in the textual form.
    pub fn segment_count(&self) -> usize {
        match self {
            IdentifierKind::AccountObject => 1,
            IdentifierKind::DatabaseObject => 2,
            IdentifierKind::SchemaObject | IdentifierKind::SchemaObjectWithArguments => 3,
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::AccountObject => write!(f, "account object"),
            IdentifierKind::DatabaseObject => write!(f, "database object"),
            IdentifierKind::SchemaObject => write!(f, "schema object"),
            IdentifierKind::SchemaObjectWithArguments => write!(f, "schema object with arguments"),
        }
    }
}

/// Name of an account-level object, e.g. a warehouse or database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountObjectIdentifier {
    name: String,
}

impl AccountObjectIdentifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ObjectIdentifier for AccountObjectIdentifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn fully_qualified_name(&self) -> String {
        join_qualified(&[self.name.as_str()])
    }
}

/// Name of an object that lives inside a database, e.g. a schema or a
/// database role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatabaseObjectIdentifier {
    database_name: String,
    name: String,
}

impl DatabaseObjectIdentifier {
    pub fn new(database_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            name: name.into(),
        }
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    /// Identifier of the containing database.
    pub fn database_id(&self) -> AccountObjectIdentifier {
        AccountObjectIdentifier::new(self.database_name.clone())
    }
}

impl ObjectIdentifier for DatabaseObjectIdentifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn fully_qualified_name(&self) -> String {
        join_qualified(&[self.database_name.as_str(), self.name.as_str()])
    }
}

/// Name of an object that lives inside a schema, e.g. a table or a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaObjectIdentifier {
    database_name: String,
    schema_name: String,
    name: String,
}

impl SchemaObjectIdentifier {
    pub fn new(
        database_name: impl Into<String>,
        schema_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            database_name: database_name.into(),
            schema_name: schema_name.into(),
            name: name.into(),
        }
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn database_id(&self) -> AccountObjectIdentifier {
        AccountObjectIdentifier::new(self.database_name.clone())
    }

    /// Identifier of the containing schema.
    pub fn schema_id(&self) -> DatabaseObjectIdentifier {
        DatabaseObjectIdentifier::new(self.database_name.clone(), self.schema_name.clone())
    }

    /// Attach argument types, producing a function or procedure identifier.
    pub fn with_arguments(
        self,
        argument_data_types: Vec<String>,
    ) -> SchemaObjectIdentifierWithArguments {
        SchemaObjectIdentifierWithArguments {
            database_name: self.database_name,
            schema_name: self.schema_name,
            name: self.name,
            argument_data_types,
        }
    }
}

impl ObjectIdentifier for SchemaObjectIdentifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn fully_qualified_name(&self) -> String {
        join_qualified(&[
            self.database_name.as_str(),
            self.schema_name.as_str(),
            self.name.as_str(),
        ])
    }
}

/// Name of an overloadable schema object (function or procedure).
///
/// Renders as `"DB"."SCHEMA"."NAME"(TYPE, TYPE)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaObjectIdentifierWithArguments {
    database_name: String,
    schema_name: String,
    name: String,
    argument_data_types: Vec<String>,
}

impl SchemaObjectIdentifierWithArguments {
    pub fn new(
        database_name: impl Into<String>,
        schema_name: impl Into<String>,
        name: impl Into<String>,
        argument_data_types: Vec<String>,
    ) -> Self {
        Self {
            database_name: database_name.into(),
            schema_name: schema_name.into(),
            name: name.into(),
            argument_data_types,
        }
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    pub fn argument_data_types(&self) -> &[String] {
        &self.argument_data_types
    }

    pub fn schema_id(&self) -> DatabaseObjectIdentifier {
        DatabaseObjectIdentifier::new(self.database_name.clone(), self.schema_name.clone())
    }

    /// The same object name with the argument list dropped.
    pub fn without_arguments(&self) -> SchemaObjectIdentifier {
        SchemaObjectIdentifier::new(
            self.database_name.clone(),
            self.schema_name.clone(),
            self.name.clone(),
        )
    }
}

impl ObjectIdentifier for SchemaObjectIdentifierWithArguments {
    fn name(&self) -> &str {
        &self.name
    }

    fn fully_qualified_name(&self) -> String {
        format!(
            "{}({})",
            join_qualified(&[
                self.database_name.as_str(),
                self.schema_name.as_str(),
                self.name.as_str(),
            ]),
            self.argument_data_types.join(", ")
        )
    }
}

/// Closed sum over the four identifier depths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectId {
    Account(AccountObjectIdentifier),
    Database(DatabaseObjectIdentifier),
    Schema(SchemaObjectIdentifier),
    SchemaWithArguments(SchemaObjectIdentifierWithArguments),
}

impl ObjectId {
    pub fn kind(&self) -> IdentifierKind {
        match self {
            ObjectId::Account(_) => IdentifierKind::AccountObject,
            ObjectId::Database(_) => IdentifierKind::DatabaseObject,
            ObjectId::Schema(_) => IdentifierKind::SchemaObject,
            ObjectId::SchemaWithArguments(_) => IdentifierKind::SchemaObjectWithArguments,
        }
    }

    /// Parse text as an identifier of the given kind.
    pub fn parse(kind: IdentifierKind, input: &str) -> CoreResult<Self> {
        Ok(match kind {
            IdentifierKind::AccountObject => {
                ObjectId::Account(parse_account_object_identifier(input)?)
            }
            IdentifierKind::DatabaseObject => {
                ObjectId::Database(parse_database_object_identifier(input)?)
            }
            IdentifierKind::SchemaObject => {
                ObjectId::Schema(parse_schema_object_identifier(input)?)
            }
            IdentifierKind::SchemaObjectWithArguments => ObjectId::SchemaWithArguments(
                parse_schema_object_identifier_with_arguments(input)?,
            ),
        })
    }
}

impl ObjectIdentifier for ObjectId {
    fn name(&self) -> &str {
        match self {
            ObjectId::Account(id) => id.name(),
            ObjectId::Database(id) => id.name(),
            ObjectId::Schema(id) => id.name(),
            ObjectId::SchemaWithArguments(id) => id.name(),
        }
    }

    fn fully_qualified_name(&self) -> String {
        match self {
            ObjectId::Account(id) => id.fully_qualified_name(),
            ObjectId::Database(id) => id.fully_qualified_name(),
            ObjectId::Schema(id) => id.fully_qualified_name(),
            ObjectId::SchemaWithArguments(id) => id.fully_qualified_name(),
        }
    }
}

impl From<AccountObjectIdentifier> for ObjectId {
    fn from(id: AccountObjectIdentifier) -> Self {
        ObjectId::Account(id)
    }
}

impl From<DatabaseObjectIdentifier> for ObjectId {
    fn from(id: DatabaseObjectIdentifier) -> Self {
        ObjectId::Database(id)
    }
}

impl From<SchemaObjectIdentifier> for ObjectId {
    fn from(id: SchemaObjectIdentifier) -> Self {
        ObjectId::Schema(id)
    }
}

impl From<SchemaObjectIdentifierWithArguments> for ObjectId {
    fn from(id: SchemaObjectIdentifierWithArguments) -> Self {
        ObjectId::SchemaWithArguments(id)
    }
}

macro_rules! impl_display_and_from_str {
    ($($ty:ty => $parse:ident),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.fully_qualified_name())
                }
            }

            impl FromStr for $ty {
                type Err = CoreError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $parse(s)
                }
            }
        )*
    };
}

impl_display_and_from_str! {
    AccountObjectIdentifier => parse_account_object_identifier,
    DatabaseObjectIdentifier => parse_database_object_identifier,
    SchemaObjectIdentifier => parse_schema_object_identifier,
    SchemaObjectIdentifierWithArguments => parse_schema_object_identifier_with_arguments,
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fully_qualified_name())
    }
}

/// Parse `NAME` or `"NAME"`.
pub fn parse_account_object_identifier(input: &str) -> CoreResult<AccountObjectIdentifier> {
    let [name] = parse_exact::<1>(input)?;
    Ok(AccountObjectIdentifier::new(name))
}

/// Parse `DB.NAME`, with any segment optionally double-quoted.
pub fn parse_database_object_identifier(input: &str) -> CoreResult<DatabaseObjectIdentifier> {
    let [database, name] = parse_exact::<2>(input)?;
    Ok(DatabaseObjectIdentifier::new(database, name))
}

/// Parse `DB.SCHEMA.NAME`, with any segment optionally double-quoted.
pub fn parse_schema_object_identifier(input: &str) -> CoreResult<SchemaObjectIdentifier> {
    let [database, schema, name] = parse_exact::<3>(input)?;
    Ok(SchemaObjectIdentifier::new(database, schema, name))
}

/// Parse `DB.SCHEMA.NAME(TYPE, ...)`.
pub fn parse_schema_object_identifier_with_arguments(
    input: &str,
) -> CoreResult<SchemaObjectIdentifierWithArguments> {
    let open = find_unquoted(input, '(').ok_or_else(|| invalid(input, "missing argument list"))?;
    let rest = input[open + 1..].trim_end();
    let arguments = rest
        .strip_suffix(')')
        .ok_or_else(|| invalid(input, "argument list is not closed"))?;
    let argument_data_types = split_arguments(arguments)
        .ok_or_else(|| invalid(input, "unbalanced parentheses in argument list"))?;
    let id = parse_schema_object_identifier(&input[..open])?;
    Ok(id.with_arguments(argument_data_types))
}

fn parse_exact<const N: usize>(input: &str) -> CoreResult<[String; N]> {
    let segments = split_segments(input)?;
    if segments.len() != N {
        return Err(invalid(
            input,
            &format!("expected {} segment(s), found {}", N, segments.len()),
        ));
    }
    if let Some(pos) = segments.iter().position(String::is_empty) {
        return Err(invalid(input, &format!("segment {} is empty", pos + 1)));
    }
    segments
        .try_into()
        .map_err(|_| invalid(input, "segment count changed while parsing"))
}

/// Split on unquoted dots. Quoted segments keep their inner whitespace and
/// have doubled quotes collapsed; unquoted segments are trimmed.
fn split_segments(input: &str) -> CoreResult<Vec<String>> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        let mut segment = String::new();
        if chars.next_if_eq(&'"').is_some() {
            let mut closed = false;
            while let Some(c) = chars.next() {
                if c != '"' {
                    segment.push(c);
                } else if chars.next_if_eq(&'"').is_some() {
                    segment.push('"');
                } else {
                    closed = true;
                    break;
                }
            }
            if !closed {
                return Err(invalid(input, "unterminated quoted segment"));
            }
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
            segments.push(segment);
            match chars.next() {
                None => break,
                Some('.') => continue,
                Some(c) => {
                    return Err(invalid(
                        input,
                        &format!("unexpected '{c}' after quoted segment"),
                    ))
                }
            }
        } else {
            let mut more = false;
            for c in chars.by_ref() {
                match c {
                    '.' => {
                        more = true;
                        break;
                    }
                    '"' => return Err(invalid(input, "unexpected '\"' in unquoted segment")),
                    _ => segment.push(c),
                }
            }
            segments.push(segment.trim_end().to_string());
            if !more {
                break;
            }
        }
    }
    Ok(segments)
}

/// Split on commas outside nested parentheses, so `NUMBER(38, 0)` stays whole.
fn split_arguments(arguments: &str) -> Option<Vec<String>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, c) in arguments.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                parts.push(&arguments[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    parts.push(&arguments[start..]);
    Some(
        parts
            .into_iter()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(String::from)
            .collect(),
    )
}

fn find_unquoted(input: &str, needle: char) -> Option<usize> {
    let mut quoted = false;
    for (idx, c) in input.char_indices() {
        if c == '"' {
            quoted = !quoted;
        } else if c == needle && !quoted {
            return Some(idx);
        }
    }
    None
}

fn invalid(input: &str, reason: &str) -> CoreError {
    CoreError::InvalidIdentifier {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "identifier_test.rs"]
mod tests;
