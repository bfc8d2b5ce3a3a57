//! View model: definitions interpreted into the snippets templates print.
//!
//! All tag interpretation happens here, at generation time. Templates only
//! iterate and print, so the emitted walkers are straight-line code.

use crate::error::{GenError, GenResult};
use crate::model::{
    ColumnType, FieldType, Interface, Operation, OperationKind, QueryStruct, Rule, StructRef,
};
use inflector::Inflector;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InterfaceView {
    pub name: String,
    pub module: String,
    pub impl_name: String,
    pub operations: Vec<OperationView>,
    pub structs: Vec<StructView>,
    pub dtos: Vec<DtoView>,
    pub enums: Vec<EnumView>,
    pub rows: Vec<RowView>,
    pub tests: Vec<TestView>,
}

#[derive(Debug, Serialize)]
pub struct OperationView {
    pub method: String,
    pub label: String,
    pub request: String,
    pub returns: String,
    pub query: bool,
    pub call_identifier: String,
    pub doc_url: String,
}

#[derive(Debug, Serialize)]
pub struct Member {
    pub name: String,
    pub ty: String,
}

#[derive(Debug, Serialize)]
pub struct StructView {
    pub name: String,
    pub doc: String,
    pub fields: Vec<Member>,
    pub walker: Vec<String>,
    pub validations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub init: String,
}

#[derive(Debug, Serialize)]
pub struct Setter {
    pub name: String,
    pub ty: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct Projection {
    pub name: String,
    pub expr: String,
}

#[derive(Debug, Serialize)]
pub struct DtoView {
    pub name: String,
    pub options: String,
    pub fields: Vec<Member>,
    pub required: Vec<Param>,
    pub has_optional: bool,
    pub setters: Vec<Setter>,
    pub projections: Vec<Projection>,
}

#[derive(Debug, Serialize)]
pub struct VariantView {
    pub name: String,
    pub sql: String,
    pub pattern: String,
}

#[derive(Debug, Serialize)]
pub struct EnumView {
    pub name: String,
    pub variants: Vec<VariantView>,
}

#[derive(Debug, Serialize)]
pub struct ColumnView {
    pub name: String,
    pub ty: String,
    pub decode: String,
}

#[derive(Debug, Serialize)]
pub struct RowView {
    pub name: String,
    pub columns: Vec<ColumnView>,
}

#[derive(Debug, Serialize)]
pub struct Assignment {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct CaseView {
    pub name: String,
    pub lines: Vec<String>,
    pub expected: String,
}

#[derive(Debug, Serialize)]
pub struct TestView {
    pub module: String,
    pub name: String,
    pub setup: Vec<Assignment>,
    pub partial: bool,
    pub prefix: String,
    pub cases: Vec<CaseView>,
}

/// Build the view of one interface, checking that every rule and reference
/// resolves.
pub fn build(interface: &Interface) -> GenResult<InterfaceView> {
    check(interface)?;
    let mut structs = Vec::new();
    let mut dtos = Vec::new();
    let mut tests = Vec::new();
    for op in &interface.operations {
        structs.push(struct_view(&op.options, &op.doc_url));
        dtos.push(dto_view(&op.options));
        tests.push(test_view(interface, &op.options, true));
        for helper in &op.helpers {
            structs.push(struct_view(helper, ""));
            dtos.push(dto_view(helper));
            if !helper.rules.is_empty() {
                tests.push(test_view(interface, helper, false));
            }
        }
    }

    Ok(InterfaceView {
        name: interface.name.clone(),
        module: interface.name.to_snake_case(),
        impl_name: format!("{}Impl", interface.name),
        operations: interface
            .operations
            .iter()
            .map(operation_view)
            .collect(),
        structs,
        dtos,
        enums: interface
            .enums
            .iter()
            .map(|e| EnumView {
                name: e.name.clone(),
                variants: e
                    .variants
                    .iter()
                    .map(|v| VariantView {
                        name: v.name.clone(),
                        sql: v.sql.clone(),
                        pattern: std::iter::once(&v.sql)
                            .chain(v.aliases.iter())
                            .map(|s| format!("\"{}\"", s.to_ascii_uppercase()))
                            .collect::<Vec<_>>()
                            .join(" | "),
                    })
                    .collect(),
            })
            .collect(),
        rows: interface
            .rows
            .iter()
            .map(|r| RowView {
                name: r.name.clone(),
                columns: r
                    .columns
                    .iter()
                    .map(|c| {
                        let base = match &c.ty {
                            ColumnType::Text => "String".to_string(),
                            ColumnType::Bool => "bool".to_string(),
                            ColumnType::Int => "i64".to_string(),
                            ColumnType::Float => "f64".to_string(),
                            ColumnType::Enum(name) => name.clone(),
                        };
                        let (ty, decode) = if c.optional {
                            (
                                format!("Option<{base}>"),
                                format!("row.decode_opt(\"{}\")?", c.column),
                            )
                        } else {
                            (base, format!("row.decode(\"{}\")?", c.column))
                        };
                        ColumnView {
                            name: c.name.clone(),
                            ty,
                            decode,
                        }
                    })
                    .collect(),
            })
            .collect(),
        tests,
    })
}

fn check(interface: &Interface) -> GenResult<()> {
    let invalid = |message: String| GenError::InvalidDefinition {
        interface: interface.name.clone(),
        message,
    };
    for op in &interface.operations {
        if let Some(FieldType::Identifier(kind)) = op.options.field("name").map(|f| &f.ty) {
            if *kind != interface.id_kind {
                return Err(invalid(format!(
                    "{}: name is a {} but the family uses {}",
                    op.options.name,
                    kind.rust_type(),
                    interface.id_kind.rust_type()
                )));
            }
        }
        if let OperationKind::Query { row } = &op.kind {
            if !interface.rows.iter().any(|r| &r.name == row) {
                return Err(invalid(format!("{}: unknown row type {row}", op.name)));
            }
        }
        for s in std::iter::once(&op.options).chain(op.helpers.iter()) {
            for rule in &s.rules {
                for name in rule.fields() {
                    let Some(field) = s.field(name) else {
                        return Err(invalid(format!("{}: rule names unknown field {name}", s.name)));
                    };
                    if matches!(rule, Rule::ValidIdentifier(_))
                        && !matches!(
                            field.ty,
                            FieldType::Identifier(_) | FieldType::OptionalIdentifier(_)
                        )
                    {
                        return Err(invalid(format!("{}: {name} is not an identifier", s.name)));
                    }
                }
            }
            for field in s.value_fields() {
                match &field.ty {
                    FieldType::Nested(StructRef::Generated(target))
                    | FieldType::NestedList(StructRef::Generated(target)) => {
                        if !op.helpers.iter().any(|h| &h.name == target) {
                            return Err(invalid(format!(
                                "{}: {} references undeclared helper {target}",
                                s.name, field.name
                            )));
                        }
                    }
                    FieldType::Enum(name) if interface.enum_def(name).is_none() => {
                        return Err(invalid(format!(
                            "{}: {} references undeclared enum {name}",
                            s.name, field.name
                        )));
                    }
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

fn operation_view(op: &Operation) -> OperationView {
    let options = &op.options;
    let target = op.target.as_deref().unwrap_or("name");
    let call_identifier = match options.field(target).map(|f| &f.ty) {
        Some(FieldType::Identifier(_)) => {
            format!("Some(opts.{target}.fully_qualified_name())")
        }
        Some(FieldType::OptionalIdentifier(_)) => {
            format!("opts.{target}.as_ref().map(|id| id.fully_qualified_name())")
        }
        _ => "None".to_string(),
    };
    let (query, returns) = match &op.kind {
        OperationKind::Exec => (false, "()".to_string()),
        OperationKind::Query { row } => (true, format!("Vec<{row}>")),
    };
    OperationView {
        method: op.name.to_snake_case(),
        label: options.name.trim_end_matches("Options").to_string(),
        request: request_name(&options.name),
        returns,
        query,
        call_identifier,
        doc_url: op.doc_url.clone(),
    }
}

/// `CreateDatabaseRoleOptions` -> `CreateDatabaseRoleRequest`,
/// `DatabaseRoleSet` -> `DatabaseRoleSetRequest`.
pub fn request_name(options: &str) -> String {
    format!("{}Request", options.trim_end_matches("Options"))
}

fn options_type(ty: &FieldType) -> String {
    match ty {
        FieldType::Static => String::new(),
        FieldType::Keyword => "bool".to_string(),
        FieldType::Text => "Option<String>".to_string(),
        FieldType::RequiredText => "String".to_string(),
        FieldType::Number => "Option<i32>".to_string(),
        FieldType::Bool => "Option<bool>".to_string(),
        FieldType::Enum(name) => format!("Option<{name}>"),
        FieldType::Identifier(kind) => kind.rust_type().to_string(),
        FieldType::OptionalIdentifier(kind) => format!("Option<{}>", kind.rust_type()),
        FieldType::TextList => "Vec<String>".to_string(),
        FieldType::OptionalTextList => "Option<Vec<String>>".to_string(),
        FieldType::IdentifierList(kind) => format!("Vec<{}>", kind.rust_type()),
        FieldType::Nested(target) => format!("Option<{}>", target.name()),
        FieldType::NestedList(target) => format!("Vec<{}>", target.name()),
    }
}

fn dto_type(ty: &FieldType) -> String {
    match ty {
        FieldType::Nested(StructRef::Generated(name)) => format!("Option<{}>", request_name(name)),
        FieldType::NestedList(StructRef::Generated(name)) => format!("Vec<{}>", request_name(name)),
        other => options_type(other),
    }
}

fn struct_view(s: &QueryStruct, doc_url: &str) -> StructView {
    StructView {
        name: s.name.clone(),
        doc: if doc_url.is_empty() {
            String::new()
        } else {
            format!("<{doc_url}>")
        },
        fields: s
            .value_fields()
            .map(|f| Member {
                name: f.name.clone(),
                ty: options_type(&f.ty),
            })
            .collect(),
        walker: s
            .fields
            .iter()
            .map(|f| {
                let sql = f.sql_text();
                let name = &f.name;
                match f.discipline() {
                    "static" => format!("b.static_sql(\"{sql}\");"),
                    "keyword" => format!("b.keyword(\"{sql}\", self.{name});"),
                    "parameter" => {
                        let value = match f.ty {
                            FieldType::RequiredText | FieldType::Identifier(_) => {
                                format!("Some(&self.{name})")
                            }
                            _ => format!("self.{name}.as_ref()"),
                        };
                        let opts = options_expr("ParameterOptions", &f.ddl);
                        format!("b.parameter(\"{sql}\", {value}, {opts});")
                    }
                    "identifier" => match f.ty {
                        FieldType::Identifier(_) => format!("b.identifier(\"{sql}\", &self.{name});"),
                        _ => format!("b.optional_identifier(\"{sql}\", self.{name}.as_ref());"),
                    },
                    "list" => {
                        let opts = options_expr("ListOptions", &f.ddl);
                        match f.ty {
                            FieldType::NestedList(_) => {
                                format!("b.struct_list(\"{sql}\", &self.{name}, {opts});")
                            }
                            FieldType::OptionalTextList => {
                                format!("b.list(\"{sql}\", self.{name}.as_deref(), {opts});")
                            }
                            _ => format!("b.list(\"{sql}\", Some(self.{name}.as_slice()), {opts});"),
                        }
                    }
                    _ if f.has_ddl("list") => {
                        format!("b.nested_list(\"{sql}\", self.{name}.as_ref());")
                    }
                    _ => format!("b.nested(\"{sql}\", self.{name}.as_ref());"),
                }
            })
            .collect(),
        validations: validation_lines(s),
    }
}

/// `ParameterOptions::new().single_quotes()`
fn options_expr(ty: &str, ddl: &[String]) -> String {
    let mut expr = format!("{ty}::new()");
    for token in ddl.iter().skip(1) {
        expr.push_str(&format!(".{token}()"));
    }
    expr
}

fn quoted_list(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| format!("\"{f}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_set_list(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| format!("self.{f}.is_set()"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn expected_error(s: &QueryStruct, rule: &Rule) -> String {
    let name = &s.name;
    match rule {
        Rule::ValidIdentifier(field) => {
            format!("ValidationError::invalid_identifier(\"{name}\", \"{field}\")")
        }
        Rule::Conflicting(fields) => format!(
            "ValidationError::conflicting_fields(\"{name}\", &[{}])",
            quoted_list(fields)
        ),
        Rule::ExactlyOneOf(fields) => format!(
            "ValidationError::exactly_one_of(\"{name}\", &[{}])",
            quoted_list(fields)
        ),
        Rule::AtLeastOneOf(fields) => format!(
            "ValidationError::at_least_one_of(\"{name}\", &[{}])",
            quoted_list(fields)
        ),
    }
}

/// Declared rules in order, then recursion into nested nodes.
fn validation_lines(s: &QueryStruct) -> Vec<String> {
    let mut lines = Vec::new();
    for rule in &s.rules {
        let condition = match rule {
            Rule::ValidIdentifier(field) => format!("!valid_identifier(&self.{field})"),
            Rule::Conflicting(fields) => format!("!fewer_than_two(&[{}])", is_set_list(fields)),
            Rule::ExactlyOneOf(fields) => format!("!exactly_one(&[{}])", is_set_list(fields)),
            Rule::AtLeastOneOf(fields) => format!("!at_least_one(&[{}])", is_set_list(fields)),
        };
        lines.push(format!("if {condition} {{"));
        lines.push(format!("    errs.push({});", expected_error(s, rule)));
        lines.push("}".to_string());
    }
    for field in s.value_fields() {
        let name = &field.name;
        match field.ty {
            FieldType::Nested(_) => {
                lines.push(format!("if let Some(v) = &self.{name} {{"));
                lines.push("    v.collect_errors(errs);".to_string());
                lines.push("}".to_string());
            }
            FieldType::NestedList(_) => {
                lines.push(format!("for v in &self.{name} {{"));
                lines.push("    v.collect_errors(errs);".to_string());
                lines.push("}".to_string());
            }
            _ => {}
        }
    }
    lines
}

fn dto_view(s: &QueryStruct) -> DtoView {
    let mut required = Vec::new();
    let mut setters = Vec::new();
    let mut projections = Vec::new();
    for field in s.value_fields() {
        let name = field.name.clone();
        match &field.ty {
            FieldType::Identifier(kind) => required.push(Param {
                init: name.clone(),
                ty: kind.rust_type().to_string(),
                name: name.clone(),
            }),
            FieldType::RequiredText => required.push(Param {
                init: format!("{name}: {name}.into()"),
                ty: "impl Into<String>".to_string(),
                name: name.clone(),
            }),
            FieldType::Keyword => setters.push(Setter {
                ty: "bool".to_string(),
                value: name.clone(),
                name: name.clone(),
            }),
            FieldType::Text => setters.push(Setter {
                ty: "impl Into<String>".to_string(),
                value: format!("Some({name}.into())"),
                name: name.clone(),
            }),
            FieldType::TextList | FieldType::IdentifierList(_) | FieldType::NestedList(_) => {
                setters.push(Setter {
                    ty: dto_type(&field.ty),
                    value: name.clone(),
                    name: name.clone(),
                })
            }
            other => setters.push(Setter {
                ty: inner_type(&dto_type(other)),
                value: format!("Some({name})"),
                name: name.clone(),
            }),
        }
        let expr = match &field.ty {
            FieldType::Keyword | FieldType::Number | FieldType::Bool | FieldType::Enum(_) => {
                format!("self.{name}")
            }
            FieldType::Nested(StructRef::Generated(_)) => {
                format!("self.{name}.as_ref().map(|v| v.to_opts())")
            }
            FieldType::NestedList(StructRef::Generated(_)) => {
                format!("self.{name}.iter().map(|v| v.to_opts()).collect()")
            }
            _ => format!("self.{name}.clone()"),
        };
        projections.push(Projection { name, expr });
    }
    DtoView {
        name: request_name(&s.name),
        options: s.name.clone(),
        fields: s
            .value_fields()
            .map(|f| Member {
                name: f.name.clone(),
                ty: dto_type(&f.ty),
            })
            .collect(),
        has_optional: !setters.is_empty(),
        required,
        setters,
        projections,
    }
}

/// `Option<T>` -> `T`
fn inner_type(ty: &str) -> String {
    ty.strip_prefix("Option<")
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(ty)
        .to_string()
}

fn sample_value(interface: &Interface, ty: &FieldType) -> String {
    let text = "\"value\".to_string()";
    match ty {
        FieldType::Static => String::new(),
        FieldType::Keyword => "true".to_string(),
        FieldType::Text => format!("Some({text})"),
        FieldType::RequiredText => text.to_string(),
        FieldType::Number => "Some(1)".to_string(),
        FieldType::Bool => "Some(true)".to_string(),
        FieldType::Enum(name) => {
            let first = interface
                .enum_def(name)
                .and_then(|e| e.variants.first())
                .map(|v| v.name.as_str())
                .unwrap_or_default();
            format!("Some({name}::{first})")
        }
        FieldType::Identifier(kind) => format!("{}()", kind.random_fn()),
        FieldType::OptionalIdentifier(kind) => format!("Some({}())", kind.random_fn()),
        FieldType::TextList => format!("vec![{text}]"),
        FieldType::OptionalTextList => format!("Some(vec![{text}])"),
        FieldType::IdentifierList(kind) => format!("vec![{}()]", kind.random_fn()),
        FieldType::Nested(_) => "Some(Default::default())".to_string(),
        FieldType::NestedList(_) => "vec![Default::default()]".to_string(),
    }
}

fn cleared_value(ty: &FieldType) -> &'static str {
    match ty {
        FieldType::Keyword => "false",
        FieldType::Identifier(_) => "Default::default()",
        FieldType::RequiredText => "String::new()",
        FieldType::TextList
        | FieldType::IdentifierList(_)
        | FieldType::NestedList(_) => "Vec::new()",
        _ => "None",
    }
}

fn test_view(interface: &Interface, s: &QueryStruct, root: bool) -> TestView {
    let ty_of = |name: &str| s.field(name).map(|f| f.ty.clone()).unwrap_or(FieldType::Static);

    let mut setup: Vec<Assignment> = s
        .value_fields()
        .filter_map(|f| match f.ty {
            FieldType::Identifier(kind) => Some(Assignment {
                name: f.name.clone(),
                value: format!("{}()", kind.random_fn()),
            }),
            _ => None,
        })
        .collect();
    for rule in &s.rules {
        if let Rule::ExactlyOneOf(fields) | Rule::AtLeastOneOf(fields) = rule {
            if let Some(first) = fields.first() {
                if !setup.iter().any(|a| &a.name == first) {
                    setup.push(Assignment {
                        name: first.clone(),
                        value: sample_value(interface, &ty_of(first)),
                    });
                }
            }
        }
    }

    let mut cases = Vec::new();
    for rule in &s.rules {
        let expected = expected_error(s, rule);
        match rule {
            Rule::ValidIdentifier(field) => {
                let value = match ty_of(field) {
                    FieldType::Identifier(_) => "Default::default()",
                    _ => "Some(Default::default())",
                };
                cases.push(CaseView {
                    name: format!("test_invalid_identifier_{field}"),
                    lines: vec![format!("opts.{field} = {value};")],
                    expected,
                });
            }
            Rule::Conflicting(fields) => cases.push(CaseView {
                name: format!("test_conflicting_{}", fields.join("_")),
                lines: fields
                    .iter()
                    .map(|f| format!("opts.{f} = {};", sample_value(interface, &ty_of(f))))
                    .collect(),
                expected,
            }),
            Rule::ExactlyOneOf(fields) => {
                let first = &fields[0];
                cases.push(CaseView {
                    name: format!("test_exactly_one_of_{first}_none"),
                    lines: clear_lines(fields, &ty_of),
                    expected: expected.clone(),
                });
                if fields.len() > 1 {
                    cases.push(CaseView {
                        name: format!("test_exactly_one_of_{first}_two"),
                        lines: fields[..2]
                            .iter()
                            .map(|f| format!("opts.{f} = {};", sample_value(interface, &ty_of(f))))
                            .collect(),
                        expected,
                    });
                }
            }
            Rule::AtLeastOneOf(fields) => cases.push(CaseView {
                name: format!("test_at_least_one_of_{}", fields[0]),
                lines: clear_lines(fields, &ty_of),
                expected,
            }),
        }
    }

    let prefix = if root {
        s.fields
            .iter()
            .take_while(|f| f.is_static())
            .map(|f| f.sql_text())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        String::new()
    };

    TestView {
        module: s.name.to_snake_case(),
        name: s.name.clone(),
        partial: setup.len() < s.value_fields().count(),
        setup,
        prefix,
        cases,
    }
}

fn clear_lines(fields: &[String], ty_of: &dyn Fn(&str) -> FieldType) -> Vec<String> {
    fields
        .iter()
        .map(|f| format!("opts.{f} = {};", cleared_value(&ty_of(f))))
        .collect()
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
