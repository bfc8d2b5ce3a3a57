use super::*;

#[test]
fn test_literals_get_positional_names() {
    let s = QueryStructBuilder::new("DropRoleOptions")
        .drop()
        .sql("ROLE")
        .if_exists()
        .name(IdKind::Account)
        .build();

    let names: Vec<_> = s.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["static_0", "static_1", "if_exists", "name"]);
    assert_eq!(s.value_fields().count(), 2);
    assert!(s.fields[1].is_static());
}

#[test]
fn test_fields_carry_discipline_and_tokens() {
    let s = QueryStructBuilder::new("ShowDatabaseOptions")
        .optional_text_clause("starts_with", "STARTS WITH")
        .optional_text_list_assignment("blocked_ip_list", "BLOCKED_IP_LIST")
        .identifier_list("unset_tag", "UNSET TAG", IdKind::Schema)
        .build();

    let clause = s.field("starts_with").unwrap();
    assert_eq!(clause.discipline(), "parameter");
    assert!(clause.has_ddl("no_equals"));
    assert!(!clause.has_ddl("parameter"));
    assert_eq!(clause.sql, vec!["STARTS", "WITH"]);
    assert_eq!(clause.sql_text(), "STARTS WITH");

    let list = s.field("blocked_ip_list").unwrap();
    assert_eq!(list.ty, FieldType::OptionalTextList);
    assert!(list.has_ddl("keep_empty"));

    let tags = s.field("unset_tag").unwrap();
    assert_eq!(tags.ty, FieldType::IdentifierList(IdKind::Schema));
    assert!(tags.has_ddl("no_parentheses"));
}

#[test]
fn test_name_is_bare_identifier() {
    let s = QueryStructBuilder::new("X").name(IdKind::Database).build();
    let name = s.field("name").unwrap();
    assert_eq!(name.ty, FieldType::Identifier(IdKind::Database));
    assert!(name.sql.is_empty());
}

#[test]
fn test_tag_helpers_reference_external_struct() {
    let s = QueryStructBuilder::new("AlterRoleOptions")
        .optional_tags()
        .set_tags()
        .optional_like()
        .build();

    let tag = StructRef::External("TagAssociation".to_string());
    assert_eq!(s.field("tag").unwrap().ty, FieldType::NestedList(tag.clone()));
    assert_eq!(s.field("tag").unwrap().ddl, vec!["list"]);
    assert_eq!(s.field("set_tag").unwrap().ty, FieldType::NestedList(tag));
    assert_eq!(s.field("set_tag").unwrap().ddl, vec!["list", "no_parentheses"]);
    assert_eq!(
        s.field("like").unwrap().ty,
        FieldType::Nested(StructRef::External("Like".to_string()))
    );
}

#[test]
fn test_rules_keep_declaration_order() {
    let s = QueryStructBuilder::new("X")
        .with_validation(Rule::valid_identifier("name"))
        .with_validation(Rule::exactly_one_of(&["a", "b"]))
        .build();
    assert_eq!(
        s.rules,
        vec![
            Rule::ValidIdentifier("name".to_string()),
            Rule::ExactlyOneOf(vec!["a".to_string(), "b".to_string()]),
        ]
    );
    assert_eq!(s.rules[1].fields(), vec!["a", "b"]);
}

#[test]
fn test_operations() {
    let options = QueryStructBuilder::new("ShowRoleOptions").show().build();
    let show = query("Show", &docs("show-roles"), options.clone(), "Role").with_target("in_class");
    assert_eq!(
        show.kind,
        OperationKind::Query {
            row: "Role".to_string()
        }
    );
    assert_eq!(show.doc_url, "https://docs.snowflake.com/en/sql-reference/sql/show-roles");
    assert_eq!(show.target.as_deref(), Some("in_class"));

    let drop = exec("Drop", "", options).with_helper(QueryStructBuilder::new("H").build());
    assert_eq!(drop.kind, OperationKind::Exec);
    assert_eq!(drop.helpers.len(), 1);
    assert_eq!(drop.target, None);
}

#[test]
fn test_interface_collects_structs_in_order() {
    let iface = interface("Roles", "Role", IdKind::Account)
        .with_operation(
            exec("Alter", "", QueryStructBuilder::new("AlterRoleOptions").build())
                .with_helper(QueryStructBuilder::new("RoleSet").build()),
        )
        .with_operation(exec("Drop", "", QueryStructBuilder::new("DropRoleOptions").build()))
        .with_enum(enum_def("Kind", vec![variant("A", "A", &["ALPHA"])]));

    let names: Vec<_> = iface.structs().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["AlterRoleOptions", "RoleSet", "DropRoleOptions"]);
    assert_eq!(iface.enum_def("Kind").unwrap().variants[0].aliases, vec!["ALPHA"]);
    assert!(iface.enum_def("Other").is_none());
}

#[test]
fn test_row_builder() {
    let row = RowBuilder::new("Warehouse")
        .text("name")
        .optional_int("auto_suspend")
        .enum_column("warehouse_type", "type", "WarehouseType", false)
        .build();

    assert_eq!(row.columns.len(), 3);
    assert!(row.columns[1].optional);
    assert_eq!(row.columns[1].ty, ColumnType::Int);
    assert_eq!(row.columns[2].name, "warehouse_type");
    assert_eq!(row.columns[2].column, "type");
    assert_eq!(row.columns[2].ty, ColumnType::Enum("WarehouseType".to_string()));
}
