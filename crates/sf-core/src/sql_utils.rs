//! SQL quoting utilities
//!
//! Snowflake identifiers are emitted double-quoted so that their case and any
//! special characters survive exactly as given. String literals are emitted
//! single-quoted.

/// Quote a single identifier segment.
///
/// Wraps the segment in double quotes and doubles any embedded double quote.
///
/// # Examples
/// ```
/// use sf_core::sql_utils::quote_ident;
/// assert_eq!(quote_ident("WH_A"), r#""WH_A""#);
/// assert_eq!(quote_ident(r#"my"role"#), r#""my""role""#);
/// ```
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Join identifier segments into their fully-qualified form.
///
/// Empty segments are skipped, every other segment is quoted with
/// [`quote_ident`], and the results are joined with `.`.
///
/// # Examples
/// ```
/// use sf_core::sql_utils::join_qualified;
/// assert_eq!(join_qualified(&["DB1", "ROLE_A"]), r#""DB1"."ROLE_A""#);
/// assert_eq!(join_qualified(&["", "ROLE_A"]), r#""ROLE_A""#);
/// ```
pub fn join_qualified(segments: &[&str]) -> String {
    segments
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| quote_ident(s))
        .collect::<Vec<_>>()
        .join(".")
}

/// Escape a SQL string literal value by doubling single quotes.
///
/// This is for use inside single-quoted SQL string literals, not identifiers.
pub fn escape_sql_string(value: &str) -> String {
    value.replace('\'', "''")
}

/// Wrap a value in single quotes, escaping embedded single quotes.
///
/// # Examples
/// ```
/// use sf_core::sql_utils::quote_string;
/// assert_eq!(quote_string("it's"), "'it''s'");
/// ```
pub fn quote_string(value: &str) -> String {
    format!("'{}'", escape_sql_string(value))
}

#[cfg(test)]
#[path = "sql_utils_test.rs"]
mod tests;
