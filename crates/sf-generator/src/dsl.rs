//! Builder DSL for writing definitions.
//!
//! Each method appends one pre-tagged field, so a definition reads in the
//! same order as the SQL it renders:
//!
//! ```
//! use sf_generator::dsl::QueryStructBuilder;
//! use sf_generator::model::{IdKind, Rule};
//!
//! let create = QueryStructBuilder::new("CreateDatabaseRoleOptions")
//!     .create()
//!     .or_replace()
//!     .sql("DATABASE ROLE")
//!     .if_not_exists()
//!     .name(IdKind::Database)
//!     .optional_comment()
//!     .with_validation(Rule::valid_identifier("name"))
//!     .with_validation(Rule::conflicting(&["or_replace", "if_not_exists"]))
//!     .build();
//! assert_eq!(create.fields.len(), 6);
//! ```

use crate::model::{
    Column, ColumnType, EnumDef, Field, FieldType, IdKind, Interface, Operation, OperationKind,
    QueryStruct, Rule, RowDef, StructRef, Variant,
};

/// Reference pages for operation docs.
pub const DOCS: &str = "https://docs.snowflake.com/en/sql-reference/sql";

pub fn docs(page: &str) -> String {
    format!("{DOCS}/{page}")
}

pub fn interface(name: &str, singular: &str, id_kind: IdKind) -> Interface {
    Interface {
        name: name.to_string(),
        singular: singular.to_string(),
        id_kind,
        operations: Vec::new(),
        enums: Vec::new(),
        rows: Vec::new(),
    }
}

impl Interface {
    pub fn with_operation(mut self, op: Operation) -> Self {
        self.operations.push(op);
        self
    }

    pub fn with_enum(mut self, def: EnumDef) -> Self {
        self.enums.push(def);
        self
    }

    pub fn with_row(mut self, row: RowDef) -> Self {
        self.rows.push(row);
        self
    }
}

fn field(name: &str, ty: FieldType, ddl: &[&str], sql: &str) -> Field {
    Field {
        name: name.to_string(),
        ty,
        ddl: ddl.iter().map(|t| t.to_string()).collect(),
        sql: sql.split_whitespace().map(str::to_string).collect(),
    }
}

#[derive(Debug, Clone)]
pub struct QueryStructBuilder {
    inner: QueryStruct,
}

impl QueryStructBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            inner: QueryStruct {
                name: name.to_string(),
                fields: Vec::new(),
                rules: Vec::new(),
            },
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.inner.fields.push(field);
        self
    }

    pub fn with_validation(mut self, rule: Rule) -> Self {
        self.inner.rules.push(rule);
        self
    }

    pub fn build(self) -> QueryStruct {
        self.inner
    }

    /// Unconditional literal.
    pub fn sql(self, sql: &str) -> Self {
        let name = format!("static_{}", self.inner.fields.len());
        self.field(field(&name, FieldType::Static, &["static"], sql))
    }

    pub fn create(self) -> Self {
        self.sql("CREATE")
    }

    pub fn alter(self) -> Self {
        self.sql("ALTER")
    }

    pub fn drop(self) -> Self {
        self.sql("DROP")
    }

    pub fn show(self) -> Self {
        self.sql("SHOW")
    }

    pub fn describe(self) -> Self {
        self.sql("DESCRIBE")
    }

    pub fn keyword(self, name: &str, sql: &str) -> Self {
        self.field(field(name, FieldType::Keyword, &["keyword"], sql))
    }

    pub fn or_replace(self) -> Self {
        self.keyword("or_replace", "OR REPLACE")
    }

    pub fn if_not_exists(self) -> Self {
        self.keyword("if_not_exists", "IF NOT EXISTS")
    }

    pub fn if_exists(self) -> Self {
        self.keyword("if_exists", "IF EXISTS")
    }

    /// The required object name, rendered bare.
    pub fn name(self, kind: IdKind) -> Self {
        self.identifier("name", "", kind)
    }

    pub fn identifier(self, name: &str, sql: &str, kind: IdKind) -> Self {
        self.field(field(name, FieldType::Identifier(kind), &["identifier"], sql))
    }

    pub fn optional_identifier(self, name: &str, sql: &str, kind: IdKind) -> Self {
        self.field(field(
            name,
            FieldType::OptionalIdentifier(kind),
            &["identifier"],
            sql,
        ))
    }

    /// `SQL = 'text'`
    pub fn optional_text_assignment(self, name: &str, sql: &str) -> Self {
        self.field(field(
            name,
            FieldType::Text,
            &["parameter", "single_quotes"],
            sql,
        ))
    }

    pub fn required_text_assignment(self, name: &str, sql: &str) -> Self {
        self.field(field(
            name,
            FieldType::RequiredText,
            &["parameter", "single_quotes"],
            sql,
        ))
    }

    pub fn optional_comment(self) -> Self {
        self.optional_text_assignment("comment", "COMMENT")
    }

    /// `SQL = 42`
    pub fn optional_number_assignment(self, name: &str, sql: &str) -> Self {
        self.field(field(name, FieldType::Number, &["parameter"], sql))
    }

    /// `SQL = TRUE`
    pub fn optional_bool_assignment(self, name: &str, sql: &str) -> Self {
        self.field(field(name, FieldType::Bool, &["parameter"], sql))
    }

    /// `SQL = 'VALUE'` for a generated enumeration.
    pub fn optional_enum_assignment(self, name: &str, sql: &str, enum_name: &str) -> Self {
        self.field(field(
            name,
            FieldType::Enum(enum_name.to_string()),
            &["parameter", "single_quotes"],
            sql,
        ))
    }

    /// `SQL = "IDENT"`
    pub fn optional_identifier_assignment(self, name: &str, sql: &str, kind: IdKind) -> Self {
        self.field(field(
            name,
            FieldType::OptionalIdentifier(kind),
            &["parameter"],
            sql,
        ))
    }

    /// `SQL 'text'`
    pub fn optional_text_clause(self, name: &str, sql: &str) -> Self {
        self.field(field(
            name,
            FieldType::Text,
            &["parameter", "single_quotes", "no_equals"],
            sql,
        ))
    }

    /// `SQL = ('a', 'b')`
    pub fn text_list_assignment(self, name: &str, sql: &str) -> Self {
        self.field(field(
            name,
            FieldType::TextList,
            &["list", "equals", "single_quotes"],
            sql,
        ))
    }

    /// Like [`Self::text_list_assignment`], but a present empty list renders
    /// `SQL = ()`.
    pub fn optional_text_list_assignment(self, name: &str, sql: &str) -> Self {
        self.field(field(
            name,
            FieldType::OptionalTextList,
            &["list", "equals", "single_quotes", "keep_empty"],
            sql,
        ))
    }

    /// `SQL "A", "B"`
    pub fn identifier_list(self, name: &str, sql: &str, kind: IdKind) -> Self {
        self.field(field(
            name,
            FieldType::IdentifierList(kind),
            &["list", "no_parentheses"],
            sql,
        ))
    }

    /// Sub-tree joined with spaces.
    pub fn nested(self, name: &str, sql: &str, target: StructRef) -> Self {
        self.field(field(name, FieldType::Nested(target), &["nested"], sql))
    }

    /// Sub-tree joined with `, `.
    pub fn nested_comma_list(self, name: &str, sql: &str, target: StructRef) -> Self {
        self.field(field(name, FieldType::Nested(target), &["nested", "list"], sql))
    }

    pub fn struct_list(self, name: &str, sql: &str, target: StructRef, ddl: &[&str]) -> Self {
        let mut tokens = vec!["list"];
        tokens.extend_from_slice(ddl);
        self.field(field(name, FieldType::NestedList(target), &tokens, sql))
    }

    pub fn optional_like(self) -> Self {
        self.nested("like", "", StructRef::External("Like".to_string()))
    }

    pub fn optional_limit_from(self) -> Self {
        self.nested("limit", "", StructRef::External("LimitFrom".to_string()))
    }

    /// `TAG ("DB"."S"."T" = 'v', ...)`
    pub fn optional_tags(self) -> Self {
        self.struct_list("tag", "TAG", tag_association(), &[])
    }

    /// `SET TAG "DB"."S"."T" = 'v', ...`
    pub fn set_tags(self) -> Self {
        self.struct_list("set_tag", "SET TAG", tag_association(), &["no_parentheses"])
    }

    /// `UNSET TAG "DB"."S"."T", ...`
    pub fn unset_tags(self) -> Self {
        self.identifier_list("unset_tag", "UNSET TAG", IdKind::Schema)
    }
}

fn tag_association() -> StructRef {
    StructRef::External("TagAssociation".to_string())
}

/// Reference to a helper declared on the same operation.
pub fn helper(name: &str) -> StructRef {
    StructRef::Generated(name.to_string())
}

pub fn exec(name: &str, doc_url: &str, options: QueryStruct) -> Operation {
    Operation {
        name: name.to_string(),
        kind: OperationKind::Exec,
        options,
        helpers: Vec::new(),
        doc_url: doc_url.to_string(),
        target: None,
    }
}

pub fn query(name: &str, doc_url: &str, options: QueryStruct, row: &str) -> Operation {
    Operation {
        kind: OperationKind::Query {
            row: row.to_string(),
        },
        ..exec(name, doc_url, options)
    }
}

impl Operation {
    pub fn with_helper(mut self, helper: QueryStruct) -> Self {
        self.helpers.push(helper);
        self
    }

    pub fn with_target(mut self, field: &str) -> Self {
        self.target = Some(field.to_string());
        self
    }
}

/// `variant(name, sql, aliases)`
pub fn variant(name: &str, sql: &str, aliases: &[&str]) -> Variant {
    Variant {
        name: name.to_string(),
        sql: sql.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
    }
}

pub fn enum_def(name: &str, variants: Vec<Variant>) -> EnumDef {
    EnumDef {
        name: name.to_string(),
        variants,
    }
}

#[derive(Debug, Clone)]
pub struct RowBuilder {
    inner: RowDef,
}

impl RowBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            inner: RowDef {
                name: name.to_string(),
                columns: Vec::new(),
            },
        }
    }

    fn column(mut self, name: &str, column: &str, ty: ColumnType, optional: bool) -> Self {
        self.inner.columns.push(Column {
            name: name.to_string(),
            column: column.to_string(),
            ty,
            optional,
        });
        self
    }

    pub fn text(self, name: &str) -> Self {
        self.column(name, name, ColumnType::Text, false)
    }

    pub fn optional_text(self, name: &str) -> Self {
        self.column(name, name, ColumnType::Text, true)
    }

    pub fn bool(self, name: &str) -> Self {
        self.column(name, name, ColumnType::Bool, false)
    }

    pub fn int(self, name: &str) -> Self {
        self.column(name, name, ColumnType::Int, false)
    }

    pub fn optional_int(self, name: &str) -> Self {
        self.column(name, name, ColumnType::Int, true)
    }

    pub fn optional_float(self, name: &str) -> Self {
        self.column(name, name, ColumnType::Float, true)
    }

    /// Enum column read from a differently named result column.
    pub fn enum_column(self, name: &str, column: &str, enum_name: &str, optional: bool) -> Self {
        self.column(name, column, ColumnType::Enum(enum_name.to_string()), optional)
    }

    pub fn build(self) -> RowDef {
        self.inner
    }
}

#[cfg(test)]
#[path = "dsl_test.rs"]
mod tests;
