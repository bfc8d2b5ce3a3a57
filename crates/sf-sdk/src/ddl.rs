//! DDL rendering runtime.
//!
//! Option trees implement [`SqlRender`] with walker functions emitted by
//! `sf-gen`: one builder call per declared field, in declaration order. The
//! builder decides from the field's value whether anything is emitted, and
//! [`SqlBuilder::finish`] joins the emitted fragments with single spaces.
//!
//! Rendering never fails. An unset field contributes nothing.

use sf_core::identifier::{
    AccountObjectIdentifier, DatabaseObjectIdentifier, ObjectIdentifier, SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments,
};
use sf_core::sql_utils::quote_string;
use std::collections::BTreeMap;

/// A node of an option tree that can be emitted as SQL.
pub trait SqlRender {
    fn render(&self, b: &mut SqlBuilder);
}

/// Render a whole tree into one statement.
pub fn render<T: SqlRender + ?Sized>(node: &T) -> String {
    let mut b = SqlBuilder::new();
    node.render(&mut b);
    b.finish()
}

/// Scalar values that can follow a parameter keyword or sit in a list.
pub trait SqlValue {
    /// `quoted` requests a single-quoted string literal; types for which
    /// quoting makes no sense ignore it.
    fn to_sql(&self, quoted: bool) -> String;
}

/// Render text bare or as a single-quoted literal.
pub fn text_value(value: &str, quoted: bool) -> String {
    if quoted {
        quote_string(value)
    } else {
        value.to_string()
    }
}

impl SqlValue for bool {
    fn to_sql(&self, _quoted: bool) -> String {
        let literal = if *self { "TRUE" } else { "FALSE" };
        literal.to_string()
    }
}

impl SqlValue for str {
    fn to_sql(&self, quoted: bool) -> String {
        text_value(self, quoted)
    }
}

impl SqlValue for String {
    fn to_sql(&self, quoted: bool) -> String {
        text_value(self, quoted)
    }
}

macro_rules! impl_numeric_sql_value {
    ($($ty:ty),*) => {
        $(
            impl SqlValue for $ty {
                fn to_sql(&self, _quoted: bool) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_numeric_sql_value!(i32, i64, u32, u64, f64);

macro_rules! impl_identifier_sql_value {
    ($($ty:ty),*) => {
        $(
            impl SqlValue for $ty {
                fn to_sql(&self, _quoted: bool) -> String {
                    self.fully_qualified_name()
                }
            }
        )*
    };
}

impl_identifier_sql_value!(
    AccountObjectIdentifier,
    DatabaseObjectIdentifier,
    SchemaObjectIdentifier,
    SchemaObjectIdentifierWithArguments
);

/// Formatting of a single parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterOptions {
    single_quotes: bool,
    equals: bool,
    parentheses: bool,
}

impl ParameterOptions {
    /// `KEYWORD = value`
    pub const fn new() -> Self {
        Self {
            single_quotes: false,
            equals: true,
            parentheses: false,
        }
    }

    pub const fn single_quotes(mut self) -> Self {
        self.single_quotes = true;
        self
    }

    pub const fn no_equals(mut self) -> Self {
        self.equals = false;
        self
    }

    pub const fn parentheses(mut self) -> Self {
        self.parentheses = true;
        self
    }
}

impl Default for ParameterOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Formatting of a list of values or structs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    parentheses: bool,
    equals: bool,
    single_quotes: bool,
    keep_empty: bool,
}

impl ListOptions {
    /// `KEYWORD (a, b)`
    pub const fn new() -> Self {
        Self {
            parentheses: true,
            equals: false,
            single_quotes: false,
            keep_empty: false,
        }
    }

    pub const fn no_parentheses(mut self) -> Self {
        self.parentheses = false;
        self
    }

    pub const fn equals(mut self) -> Self {
        self.equals = true;
        self
    }

    pub const fn single_quotes(mut self) -> Self {
        self.single_quotes = true;
        self
    }

    /// Render a present but empty list as `KEYWORD = ()`.
    pub const fn keep_empty(mut self) -> Self {
        self.keep_empty = true;
        self
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulates one fragment per emitted field.
#[derive(Debug, Default)]
pub struct SqlBuilder {
    fragments: Vec<String>,
}

impl SqlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditional literal.
    pub fn static_sql(&mut self, sql: &str) {
        self.push(sql.to_string());
    }

    /// Literal emitted when `set` is true.
    pub fn keyword(&mut self, sql: &str, set: bool) {
        if set {
            self.static_sql(sql);
        }
    }

    /// `SQL = value`, or nothing when `value` is `None`.
    pub fn parameter<V: SqlValue + ?Sized>(
        &mut self,
        sql: &str,
        value: Option<&V>,
        opts: ParameterOptions,
    ) {
        let Some(value) = value else {
            return;
        };
        let mut rendered = value.to_sql(opts.single_quotes);
        if opts.parentheses {
            rendered = format!("({rendered})");
        }
        let fragment = match (sql.is_empty(), opts.equals) {
            (true, _) => rendered,
            (false, true) => format!("{sql} = {rendered}"),
            (false, false) => format!("{sql} {rendered}"),
        };
        self.push(fragment);
    }

    /// Fully-qualified name prefixed by `sql`; nothing when the identifier
    /// is not valid.
    pub fn identifier<I: ObjectIdentifier>(&mut self, sql: &str, id: &I) {
        if !id.is_valid() {
            return;
        }
        self.push(join_words(sql, &id.fully_qualified_name()));
    }

    pub fn optional_identifier<I: ObjectIdentifier>(&mut self, sql: &str, id: Option<&I>) {
        if let Some(id) = id {
            self.identifier(sql, id);
        }
    }

    /// Comma-separated values. `None` emits nothing; an empty list emits
    /// nothing unless `keep_empty` is set.
    pub fn list<V: SqlValue>(&mut self, sql: &str, items: Option<&[V]>, opts: ListOptions) {
        let Some(items) = items else {
            return;
        };
        let rendered: Vec<String> = items.iter().map(|v| v.to_sql(opts.single_quotes)).collect();
        self.push_list(sql, rendered, opts);
    }

    /// Comma-separated sub-trees, each rendered on its own.
    pub fn struct_list<T: SqlRender>(&mut self, sql: &str, items: &[T], opts: ListOptions) {
        let rendered: Vec<String> = items.iter().map(|item| render(item)).collect();
        self.push_list(sql, rendered, opts);
    }

    /// Sub-tree whose fragments are joined with spaces.
    pub fn nested<T: SqlRender>(&mut self, sql: &str, node: Option<&T>) {
        if let Some(node) = node {
            self.push(join_words(sql, &render(node)));
        }
    }

    /// Sub-tree whose fragments are joined with `, ` (e.g. `SET A = 1, B = 2`).
    pub fn nested_list<T: SqlRender>(&mut self, sql: &str, node: Option<&T>) {
        if let Some(node) = node {
            let mut inner = SqlBuilder::new();
            node.render(&mut inner);
            self.push(join_words(sql, &inner.fragments.join(", ")));
        }
    }

    /// `SQL K1 = v1 K2 = v2` in key order; nothing for an empty map.
    pub fn map(&mut self, sql: &str, entries: &BTreeMap<String, String>, opts: ParameterOptions) {
        if entries.is_empty() {
            return;
        }
        let mut inner = SqlBuilder::new();
        for (key, value) in entries {
            inner.parameter(key, Some(value.as_str()), opts);
        }
        self.push(join_words(sql, &inner.finish()));
    }

    /// Join the fragments with single spaces.
    pub fn finish(self) -> String {
        self.fragments.join(" ")
    }

    fn push_list(&mut self, sql: &str, rendered: Vec<String>, opts: ListOptions) {
        if rendered.is_empty() && !opts.keep_empty {
            return;
        }
        let mut body = rendered.join(", ");
        if opts.parentheses || rendered.is_empty() {
            body = format!("({body})");
        }
        let fragment = match (sql.is_empty(), opts.equals) {
            (true, _) => body,
            (false, true) => format!("{sql} = {body}"),
            (false, false) => format!("{sql} {body}"),
        };
        self.push(fragment);
    }

    fn push(&mut self, fragment: String) {
        if !fragment.is_empty() {
            self.fragments.push(fragment);
        }
    }
}

fn join_words(sql: &str, rest: &str) -> String {
    match (sql.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (false, true) => sql.to_string(),
        (false, false) => format!("{sql} {rest}"),
    }
}

#[cfg(test)]
#[path = "ddl_test.rs"]
mod tests;
