use crate::dsl::{
    docs, enum_def, exec, helper, interface, query, variant, QueryStructBuilder, RowBuilder,
};
use crate::model::{IdKind, Interface, Rule};

/// Settable parameters, in the order `CREATE` and `ALTER ... SET` render them.
fn parameters(b: QueryStructBuilder) -> QueryStructBuilder {
    b.optional_number_assignment("data_retention_time_in_days", "DATA_RETENTION_TIME_IN_DAYS")
        .optional_number_assignment(
            "max_data_extension_time_in_days",
            "MAX_DATA_EXTENSION_TIME_IN_DAYS",
        )
        .optional_identifier_assignment("external_volume", "EXTERNAL_VOLUME", IdKind::Account)
        .optional_identifier_assignment("catalog", "CATALOG", IdKind::Account)
        .optional_text_assignment("default_ddl_collation", "DEFAULT_DDL_COLLATION")
        .optional_enum_assignment("log_level", "LOG_LEVEL", "LogLevel")
        .optional_enum_assignment("trace_level", "TRACE_LEVEL", "TraceLevel")
        .optional_comment()
}

const PARAMETERS: &[(&str, &str)] = &[
    ("data_retention_time_in_days", "DATA_RETENTION_TIME_IN_DAYS"),
    ("max_data_extension_time_in_days", "MAX_DATA_EXTENSION_TIME_IN_DAYS"),
    ("external_volume", "EXTERNAL_VOLUME"),
    ("catalog", "CATALOG"),
    ("default_ddl_collation", "DEFAULT_DDL_COLLATION"),
    ("log_level", "LOG_LEVEL"),
    ("trace_level", "TRACE_LEVEL"),
    ("comment", "COMMENT"),
];

fn parameter_names() -> Vec<&'static str> {
    PARAMETERS.iter().map(|(name, _)| *name).collect()
}

fn unset() -> QueryStructBuilder {
    let mut b = QueryStructBuilder::new("DatabaseUnset");
    for (name, sql) in PARAMETERS {
        b = b.keyword(name, sql);
    }
    b.with_validation(Rule::at_least_one_of(&parameter_names()))
}

pub fn databases() -> Interface {
    interface("Databases", "Database", IdKind::Account)
        .with_operation(exec(
            "Create",
            &docs("create-database"),
            parameters(
                QueryStructBuilder::new("CreateDatabaseOptions")
                    .create()
                    .or_replace()
                    .keyword("transient", "TRANSIENT")
                    .sql("DATABASE")
                    .if_not_exists()
                    .name(IdKind::Account)
                    .optional_identifier("clone_source", "CLONE", IdKind::Account),
            )
            .optional_tags()
            .with_validation(Rule::valid_identifier("name"))
            .with_validation(Rule::valid_identifier("clone_source"))
            .with_validation(Rule::valid_identifier("external_volume"))
            .with_validation(Rule::valid_identifier("catalog"))
            .with_validation(Rule::conflicting(&["or_replace", "if_not_exists"]))
            .build(),
        ))
        .with_operation(
            exec(
                "Alter",
                &docs("alter-database"),
                QueryStructBuilder::new("AlterDatabaseOptions")
                    .alter()
                    .sql("DATABASE")
                    .if_exists()
                    .name(IdKind::Account)
                    .optional_identifier("new_name", "RENAME TO", IdKind::Account)
                    .optional_identifier("swap_with", "SWAP WITH", IdKind::Account)
                    .nested("set", "SET", helper("DatabaseSet"))
                    .nested_comma_list("unset", "UNSET", helper("DatabaseUnset"))
                    .set_tags()
                    .unset_tags()
                    .with_validation(Rule::valid_identifier("name"))
                    .with_validation(Rule::valid_identifier("new_name"))
                    .with_validation(Rule::valid_identifier("swap_with"))
                    .with_validation(Rule::exactly_one_of(&[
                        "new_name",
                        "swap_with",
                        "set",
                        "unset",
                        "set_tag",
                        "unset_tag",
                    ]))
                    .build(),
            )
            .with_helper(
                parameters(QueryStructBuilder::new("DatabaseSet"))
                    .with_validation(Rule::at_least_one_of(&parameter_names()))
                    .with_validation(Rule::valid_identifier("external_volume"))
                    .with_validation(Rule::valid_identifier("catalog"))
                    .build(),
            )
            .with_helper(unset().build()),
        )
        .with_operation(exec(
            "Drop",
            &docs("drop-database"),
            QueryStructBuilder::new("DropDatabaseOptions")
                .drop()
                .sql("DATABASE")
                .if_exists()
                .name(IdKind::Account)
                .keyword("cascade", "CASCADE")
                .keyword("restrict", "RESTRICT")
                .with_validation(Rule::valid_identifier("name"))
                .with_validation(Rule::conflicting(&["cascade", "restrict"]))
                .build(),
        ))
        .with_operation(exec(
            "Undrop",
            &docs("undrop-database"),
            QueryStructBuilder::new("UndropDatabaseOptions")
                .sql("UNDROP DATABASE")
                .name(IdKind::Account)
                .with_validation(Rule::valid_identifier("name"))
                .build(),
        ))
        .with_operation(query(
            "Show",
            &docs("show-databases"),
            QueryStructBuilder::new("ShowDatabaseOptions")
                .show()
                .keyword("terse", "TERSE")
                .sql("DATABASES")
                .keyword("history", "HISTORY")
                .optional_like()
                .optional_text_clause("starts_with", "STARTS WITH")
                .optional_limit_from()
                .build(),
            "Database",
        ))
        .with_operation(query(
            "Describe",
            &docs("desc-database"),
            QueryStructBuilder::new("DescribeDatabaseOptions")
                .describe()
                .sql("DATABASE")
                .name(IdKind::Account)
                .with_validation(Rule::valid_identifier("name"))
                .build(),
            "DatabaseDetails",
        ))
        .with_enum(enum_def(
            "LogLevel",
            vec![
                variant("Trace", "TRACE", &[]),
                variant("Debug", "DEBUG", &[]),
                variant("Info", "INFO", &[]),
                variant("Warn", "WARN", &[]),
                variant("Error", "ERROR", &[]),
                variant("Fatal", "FATAL", &[]),
                variant("Off", "OFF", &[]),
            ],
        ))
        .with_enum(enum_def(
            "TraceLevel",
            vec![
                variant("Always", "ALWAYS", &[]),
                variant("OnEvent", "ON_EVENT", &[]),
                variant("Off", "OFF", &[]),
            ],
        ))
        .with_row(
            RowBuilder::new("Database")
                .text("created_on")
                .text("name")
                .bool("is_default")
                .bool("is_current")
                .optional_text("origin")
                .text("owner")
                .optional_text("comment")
                .optional_text("options")
                .optional_int("retention_time")
                .optional_text("resource_group")
                .optional_text("dropped_on")
                .optional_text("kind")
                .optional_text("owner_role_type")
                .build(),
        )
        .with_row(
            RowBuilder::new("DatabaseDetails")
                .text("created_on")
                .text("name")
                .text("kind")
                .build(),
        )
}
