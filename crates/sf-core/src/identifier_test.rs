use super::*;

#[test]
fn test_account_object_fully_qualified_name() {
    let id = AccountObjectIdentifier::new("WH_A");
    assert_eq!(id.name(), "WH_A");
    assert_eq!(id.fully_qualified_name(), r#""WH_A""#);
    assert_eq!(id.to_string(), r#""WH_A""#);
}

#[test]
fn test_database_object_fully_qualified_name() {
    let id = DatabaseObjectIdentifier::new("DB1", "ROLE_A");
    assert_eq!(id.name(), "ROLE_A");
    assert_eq!(id.database_name(), "DB1");
    assert_eq!(id.fully_qualified_name(), r#""DB1"."ROLE_A""#);
    assert_eq!(id.database_id(), AccountObjectIdentifier::new("DB1"));
}

#[test]
fn test_schema_object_fully_qualified_name() {
    let id = SchemaObjectIdentifier::new("DB", "PUBLIC", "my\"tag");
    assert_eq!(id.fully_qualified_name(), r#""DB"."PUBLIC"."my""tag""#);
    assert_eq!(id.schema_id(), DatabaseObjectIdentifier::new("DB", "PUBLIC"));
}

#[test]
fn test_schema_object_with_arguments_fully_qualified_name() {
    let id = SchemaObjectIdentifierWithArguments::new(
        "DB",
        "S",
        "F",
        vec!["VARCHAR".to_string(), "NUMBER".to_string()],
    );
    assert_eq!(id.name(), "F");
    assert_eq!(id.fully_qualified_name(), r#""DB"."S"."F"(VARCHAR, NUMBER)"#);
    assert_eq!(id.without_arguments(), SchemaObjectIdentifier::new("DB", "S", "F"));
}

#[test]
fn test_empty_segments_are_skipped_when_rendering() {
    let id = DatabaseObjectIdentifier::new("", "ROLE_A");
    assert_eq!(id.fully_qualified_name(), r#""ROLE_A""#);
}

#[test]
fn test_default_identifiers_are_invalid() {
    assert!(!AccountObjectIdentifier::default().is_valid());
    assert!(!DatabaseObjectIdentifier::default().is_valid());
    assert!(!SchemaObjectIdentifier::default().is_valid());
    assert!(!SchemaObjectIdentifierWithArguments::default().is_valid());
}

#[test]
fn test_validity_depends_on_rightmost_segment_only() {
    assert!(DatabaseObjectIdentifier::new("", "R").is_valid());
    assert!(!DatabaseObjectIdentifier::new("DB", "").is_valid());
}

#[test]
fn test_parse_unquoted() {
    let id = parse_schema_object_identifier("DB.PUBLIC.T").unwrap();
    assert_eq!(id, SchemaObjectIdentifier::new("DB", "PUBLIC", "T"));
}

#[test]
fn test_parse_quoted_with_dots_and_quotes() {
    let id = parse_database_object_identifier(r#""my.db"."a""b""#).unwrap();
    assert_eq!(id, DatabaseObjectIdentifier::new("my.db", "a\"b"));
}

#[test]
fn test_parse_whitespace_rules() {
    // Inside quotes whitespace is preserved, outside it is stripped
    let id = parse_database_object_identifier(r#"  " DB " . ROLE  "#).unwrap();
    assert_eq!(id, DatabaseObjectIdentifier::new(" DB ", "ROLE"));
}

#[test]
fn test_parse_is_case_sensitive() {
    let lower = parse_account_object_identifier("wh").unwrap();
    let upper = parse_account_object_identifier("WH").unwrap();
    assert_ne!(lower, upper);
}

#[test]
fn test_parse_wrong_segment_count() {
    assert!(parse_account_object_identifier("A.B").is_err());
    assert!(parse_database_object_identifier("A").is_err());
    assert!(parse_schema_object_identifier("A.B").is_err());
}

#[test]
fn test_parse_empty_segment() {
    assert!(parse_account_object_identifier("").is_err());
    assert!(parse_database_object_identifier("DB.").is_err());
    assert!(parse_database_object_identifier(r#""".R"#).is_err());
}

#[test]
fn test_parse_malformed_quoting() {
    assert!(parse_account_object_identifier("\"").is_err());
    assert!(parse_account_object_identifier(r#""abc"#).is_err());
    assert!(parse_account_object_identifier(r#"ab"c"#).is_err());
    assert!(parse_database_object_identifier(r#""a"x.b"#).is_err());
}

#[test]
fn test_parse_error_names_input() {
    let err = parse_database_object_identifier("ONLY_ONE").unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("[C001]"));
    assert!(msg.contains("ONLY_ONE"));
    assert!(msg.contains("expected 2 segment(s), found 1"));
}

#[test]
fn test_parse_with_arguments() {
    let id = parse_schema_object_identifier_with_arguments("DB.S.F(VARCHAR, NUMBER)").unwrap();
    assert_eq!(id.argument_data_types(), ["VARCHAR", "NUMBER"]);
    let empty = parse_schema_object_identifier_with_arguments(r#""DB"."S"."F"()"#).unwrap();
    assert!(empty.argument_data_types().is_empty());
    assert!(parse_schema_object_identifier_with_arguments("DB.S.F").is_err());
    assert!(parse_schema_object_identifier_with_arguments("DB.S.F(VARCHAR").is_err());
}

#[test]
fn test_round_trip_through_fully_qualified_name() {
    let account = AccountObjectIdentifier::new("wh \"x\" ü");
    assert_eq!(parse_account_object_identifier(&account.fully_qualified_name()).unwrap(), account);

    let database = DatabaseObjectIdentifier::new("a.b", " c ");
    assert_eq!(
        parse_database_object_identifier(&database.fully_qualified_name()).unwrap(),
        database
    );

    let schema = SchemaObjectIdentifier::new("DB", "S\"\"", "T");
    assert_eq!(parse_schema_object_identifier(&schema.fully_qualified_name()).unwrap(), schema);

    let function = SchemaObjectIdentifierWithArguments::new("DB", "S", "F", vec!["FLOAT".into()]);
    assert_eq!(
        parse_schema_object_identifier_with_arguments(&function.fully_qualified_name()).unwrap(),
        function
    );

    let function = SchemaObjectIdentifierWithArguments::new(
        "DB",
        "S",
        "F",
        vec!["NUMBER(38, 0)".into(), "VARCHAR".into()],
    );
    assert_eq!(function.fully_qualified_name(), r#""DB"."S"."F"(NUMBER(38, 0), VARCHAR)"#);
    assert_eq!(
        parse_schema_object_identifier_with_arguments(&function.fully_qualified_name()).unwrap(),
        function
    );
}

#[test]
fn test_arguments_with_nested_parentheses() {
    let id = parse_schema_object_identifier_with_arguments(
        r#""DB"."S"."F"(NUMBER(38,0), DECIMAL(10, 2),VARCHAR)"#,
    )
    .unwrap();
    assert_eq!(id.argument_data_types, vec!["NUMBER(38,0)", "DECIMAL(10, 2)", "VARCHAR"]);

    let err = parse_schema_object_identifier_with_arguments("DB.S.F(NUMBER(38, 0)").unwrap_err();
    assert!(err.to_string().contains("argument list"));
}

#[test]
fn test_from_str() {
    let id: DatabaseObjectIdentifier = "DB1.ROLE_A".parse().unwrap();
    assert_eq!(id, DatabaseObjectIdentifier::new("DB1", "ROLE_A"));
}

#[test]
fn test_object_id_dispatch() {
    let id = ObjectId::parse(IdentifierKind::DatabaseObject, "DB1.ROLE_A").unwrap();
    assert_eq!(id.kind(), IdentifierKind::DatabaseObject);
    assert_eq!(id.name(), "ROLE_A");
    assert_eq!(id.fully_qualified_name(), r#""DB1"."ROLE_A""#);
    assert!(id.is_valid());

    let from: ObjectId = AccountObjectIdentifier::new("WH").into();
    assert_eq!(from.kind(), IdentifierKind::AccountObject);
    assert_eq!(from.kind().segment_count(), 1);
}
