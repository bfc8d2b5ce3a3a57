//! Interface definitions: the input of the generator.
//!
//! A definition describes one Snowflake object family: its operations, the
//! option tree of each operation (fields in SQL order, each tagged with a
//! `ddl` discipline and its `sql` literal), the declared validation rules,
//! the enumerations it uses and the records SHOW/DESCRIBE decode into.

/// Identifier shape of a field or of the family's objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Account,
    Database,
    Schema,
    SchemaWithArguments,
}

impl IdKind {
    pub fn rust_type(&self) -> &'static str {
        match self {
            IdKind::Account => "AccountObjectIdentifier",
            IdKind::Database => "DatabaseObjectIdentifier",
            IdKind::Schema => "SchemaObjectIdentifier",
            IdKind::SchemaWithArguments => "SchemaObjectIdentifierWithArguments",
        }
    }

    /// Test helper producing a random valid identifier of this kind.
    pub fn random_fn(&self) -> &'static str {
        match self {
            IdKind::Account => "random_account_object_identifier",
            IdKind::Database => "random_database_object_identifier",
            IdKind::Schema => "random_schema_object_identifier",
            IdKind::SchemaWithArguments => "random_schema_object_identifier_with_arguments",
        }
    }
}

/// A struct referenced by a nested field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructRef {
    /// Declared as a helper of the same operation; gets a request DTO.
    Generated(String),
    /// Hand-written clause type (`Like`, `LimitFrom`, `TagAssociation`).
    External(String),
}

impl StructRef {
    pub fn name(&self) -> &str {
        match self {
            StructRef::Generated(name) | StructRef::External(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Literal with no backing value.
    Static,
    Keyword,
    Text,
    RequiredText,
    Number,
    Bool,
    Enum(String),
    Identifier(IdKind),
    OptionalIdentifier(IdKind),
    TextList,
    /// Present-but-empty is distinct from absent (`LIST = ()`).
    OptionalTextList,
    IdentifierList(IdKind),
    Nested(StructRef),
    NestedList(StructRef),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: FieldType,
    /// Discipline first, then its formatting options.
    pub ddl: Vec<String>,
    /// Literal tokens, joined with spaces.
    pub sql: Vec<String>,
}

impl Field {
    pub fn sql_text(&self) -> String {
        self.sql.join(" ")
    }

    pub fn discipline(&self) -> &str {
        self.ddl.first().map(String::as_str).unwrap_or_default()
    }

    pub fn has_ddl(&self, token: &str) -> bool {
        self.ddl.iter().skip(1).any(|t| t == token)
    }

    pub fn is_static(&self) -> bool {
        self.ty == FieldType::Static
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    ValidIdentifier(String),
    Conflicting(Vec<String>),
    ExactlyOneOf(Vec<String>),
    AtLeastOneOf(Vec<String>),
}

impl Rule {
    pub fn valid_identifier(field: &str) -> Self {
        Rule::ValidIdentifier(field.to_string())
    }

    pub fn conflicting(fields: &[&str]) -> Self {
        Rule::Conflicting(to_strings(fields))
    }

    pub fn exactly_one_of(fields: &[&str]) -> Self {
        Rule::ExactlyOneOf(to_strings(fields))
    }

    pub fn at_least_one_of(fields: &[&str]) -> Self {
        Rule::AtLeastOneOf(to_strings(fields))
    }

    pub fn fields(&self) -> Vec<&str> {
        match self {
            Rule::ValidIdentifier(field) => vec![field.as_str()],
            Rule::Conflicting(fields) | Rule::ExactlyOneOf(fields) | Rule::AtLeastOneOf(fields) => {
                fields.iter().map(String::as_str).collect()
            }
        }
    }
}

fn to_strings(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

/// An option tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStruct {
    pub name: String,
    pub fields: Vec<Field>,
    pub rules: Vec<Rule>,
}

impl QueryStruct {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields that become struct members (everything but literals).
    pub fn value_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_static())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationKind {
    Exec,
    /// Read operation decoding rows into the named record.
    Query { row: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// `Create`, `Alter`, `Show`, ...
    pub name: String,
    pub kind: OperationKind,
    pub options: QueryStruct,
    pub helpers: Vec<QueryStruct>,
    pub doc_url: String,
    /// Field whose identifier labels errors; defaults to `name`.
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub sql: String,
    /// Alternate spellings accepted when reading values back.
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    pub name: String,
    pub variants: Vec<Variant>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Bool,
    Int,
    Float,
    Enum(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub column: String,
    pub ty: ColumnType,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDef {
    pub name: String,
    pub columns: Vec<Column>,
}

/// One object family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    /// Plural, e.g. `DatabaseRoles`; also the trait name.
    pub name: String,
    /// e.g. `DatabaseRole`; used in options and request names.
    pub singular: String,
    pub id_kind: IdKind,
    pub operations: Vec<Operation>,
    pub enums: Vec<EnumDef>,
    pub rows: Vec<RowDef>,
}

impl Interface {
    pub fn enum_def(&self, name: &str) -> Option<&EnumDef> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Every option struct in declaration order: each root, then its helpers.
    pub fn structs(&self) -> impl Iterator<Item = &QueryStruct> {
        self.operations
            .iter()
            .flat_map(|op| std::iter::once(&op.options).chain(op.helpers.iter()))
    }
}
