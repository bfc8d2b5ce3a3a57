use super::*;

#[derive(Default)]
struct Set {
    comment: Option<String>,
    retention: Option<i32>,
}

impl SqlRender for Set {
    fn render(&self, b: &mut SqlBuilder) {
        b.parameter("COMMENT", self.comment.as_ref(), ParameterOptions::new().single_quotes());
        b.parameter("DATA_RETENTION_TIME_IN_DAYS", self.retention.as_ref(), ParameterOptions::new());
    }
}

#[derive(Default)]
struct Tag {
    name: SchemaObjectIdentifier,
    value: String,
}

impl SqlRender for Tag {
    fn render(&self, b: &mut SqlBuilder) {
        b.identifier("", &self.name);
        b.static_sql("=");
        b.parameter("", Some(&self.value), ParameterOptions::new().single_quotes());
    }
}

#[derive(Default)]
struct Tree {
    or_replace: bool,
    name: AccountObjectIdentifier,
    clone_source: Option<AccountObjectIdentifier>,
    set: Option<Set>,
    set_list: Option<Set>,
    tags: Vec<Tag>,
}

impl SqlRender for Tree {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("ALTER");
        b.keyword("OR REPLACE", self.or_replace);
        b.static_sql("THING");
        b.identifier("", &self.name);
        b.optional_identifier("CLONE", self.clone_source.as_ref());
        b.nested("SET", self.set.as_ref());
        b.nested_list("SET", self.set_list.as_ref());
        b.struct_list("TAG", &self.tags, ListOptions::new());
    }
}

fn sample_tag(value: &str) -> Tag {
    Tag {
        name: SchemaObjectIdentifier::new("DB", "S", "T"),
        value: value.to_string(),
    }
}

#[test]
fn test_unset_fields_emit_nothing() {
    let tree = Tree {
        name: AccountObjectIdentifier::new("X"),
        ..Default::default()
    };
    assert_eq!(render(&tree), r#"ALTER THING "X""#);
}

#[test]
fn test_declared_order_is_emission_order() {
    let tree = Tree {
        or_replace: true,
        name: AccountObjectIdentifier::new("X"),
        clone_source: Some(AccountObjectIdentifier::new("SRC")),
        set: Some(Set {
            comment: Some("it's".to_string()),
            retention: Some(3),
        }),
        tags: vec![sample_tag("a"), sample_tag("b")],
        ..Default::default()
    };
    assert_eq!(
        render(&tree),
        r#"ALTER OR REPLACE THING "X" CLONE "SRC" SET COMMENT = 'it''s' DATA_RETENTION_TIME_IN_DAYS = 3 TAG ("DB"."S"."T" = 'a', "DB"."S"."T" = 'b')"#
    );
}

#[test]
fn test_nested_list_joins_with_commas() {
    let tree = Tree {
        name: AccountObjectIdentifier::new("X"),
        set_list: Some(Set {
            comment: Some("c".to_string()),
            retention: Some(1),
        }),
        ..Default::default()
    };
    assert_eq!(
        render(&tree),
        r#"ALTER THING "X" SET COMMENT = 'c', DATA_RETENTION_TIME_IN_DAYS = 1"#
    );
}

#[test]
fn test_invalid_identifier_is_skipped() {
    let tree = Tree::default();
    assert_eq!(render(&tree), "ALTER THING");
}

#[test]
fn test_parameter_value_types() {
    let mut b = SqlBuilder::new();
    b.parameter("AUTO_RESUME", Some(&true), ParameterOptions::new());
    b.parameter("AUTO_SUSPEND", Some(&60), ParameterOptions::new());
    b.parameter("COMMENT", Some("x"), ParameterOptions::new().single_quotes());
    b.parameter("RESOURCE_MONITOR", Some(&AccountObjectIdentifier::new("M")), ParameterOptions::new());
    b.parameter("LEVEL", Some("INFO"), ParameterOptions::new());
    assert_eq!(
        b.finish(),
        r#"AUTO_RESUME = TRUE AUTO_SUSPEND = 60 COMMENT = 'x' RESOURCE_MONITOR = "M" LEVEL = INFO"#
    );
}

#[test]
fn test_parameter_formatting_options() {
    let mut b = SqlBuilder::new();
    b.parameter("LIKE", Some("A%"), ParameterOptions::new().single_quotes().no_equals());
    b.parameter("LIMIT", Some(&10), ParameterOptions::new().no_equals());
    b.parameter("ARGS", Some("x"), ParameterOptions::new().parentheses());
    b.parameter::<str>("MISSING", None, ParameterOptions::new());
    assert_eq!(b.finish(), "LIKE 'A%' LIMIT 10 ARGS = (x)");
}

#[test]
fn test_quoted_text_is_not_altered() {
    let mut b = SqlBuilder::new();
    b.parameter("COMMENT", Some("two  spaces\tand tab"), ParameterOptions::new().single_quotes());
    assert_eq!(b.finish(), "COMMENT = 'two  spaces\tand tab'");
}

#[test]
fn test_list_formatting() {
    let ips = vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()];
    let mut b = SqlBuilder::new();
    b.list(
        "ALLOWED_IP_LIST",
        Some(ips.as_slice()),
        ListOptions::new().equals().single_quotes(),
    );
    b.list("UNSET TAG", Some(ips.as_slice()), ListOptions::new().no_parentheses());
    assert_eq!(
        b.finish(),
        "ALLOWED_IP_LIST = ('10.0.0.1', '10.0.0.2') UNSET TAG 10.0.0.1, 10.0.0.2"
    );
}

#[test]
fn test_empty_list_emits_nothing_unless_kept() {
    let empty: Vec<String> = Vec::new();
    let mut b = SqlBuilder::new();
    b.list("A", Some(empty.as_slice()), ListOptions::new().equals());
    b.list::<String>("B", None, ListOptions::new().equals().keep_empty());
    b.list(
        "BLOCKED_IP_LIST",
        Some(empty.as_slice()),
        ListOptions::new().equals().single_quotes().keep_empty(),
    );
    assert_eq!(b.finish(), "BLOCKED_IP_LIST = ()");
}

#[test]
fn test_empty_struct_list_emits_nothing() {
    let mut b = SqlBuilder::new();
    b.struct_list::<Tag>("TAG", &[], ListOptions::new());
    assert_eq!(b.finish(), "");
}

#[test]
fn test_map_renders_in_key_order() {
    let mut entries = BTreeMap::new();
    entries.insert("TIMEZONE".to_string(), "'UTC'".to_string());
    entries.insert("ABORT_DETACHED_QUERY".to_string(), "TRUE".to_string());
    let mut b = SqlBuilder::new();
    b.map("SET", &entries, ParameterOptions::new());
    b.map("UNSET", &BTreeMap::new(), ParameterOptions::new());
    assert_eq!(b.finish(), "SET ABORT_DETACHED_QUERY = TRUE TIMEZONE = 'UTC'");
}

#[test]
fn test_render_is_deterministic() {
    let build = || Tree {
        name: AccountObjectIdentifier::new("X"),
        tags: vec![sample_tag("a")],
        ..Default::default()
    };
    assert_eq!(render(&build()), render(&build()));
}
