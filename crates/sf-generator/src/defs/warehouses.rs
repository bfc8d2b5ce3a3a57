use crate::dsl::{
    docs, enum_def, exec, helper, interface, query, variant, QueryStructBuilder, RowBuilder,
};
use crate::model::{IdKind, Interface, Rule};

/// Properties shared by `CREATE WAREHOUSE` and `ALTER WAREHOUSE ... SET`.
fn properties(b: QueryStructBuilder, with_wait: bool) -> QueryStructBuilder {
    let b = b
        .optional_enum_assignment("warehouse_type", "WAREHOUSE_TYPE", "WarehouseType")
        .optional_enum_assignment("warehouse_size", "WAREHOUSE_SIZE", "WarehouseSize");
    let b = if with_wait {
        b.optional_bool_assignment("wait_for_completion", "WAIT_FOR_COMPLETION")
    } else {
        b
    };
    b.optional_number_assignment("max_cluster_count", "MAX_CLUSTER_COUNT")
        .optional_number_assignment("min_cluster_count", "MIN_CLUSTER_COUNT")
        .optional_enum_assignment("scaling_policy", "SCALING_POLICY", "ScalingPolicy")
        .optional_number_assignment("auto_suspend", "AUTO_SUSPEND")
        .optional_bool_assignment("auto_resume", "AUTO_RESUME")
}

fn tuning(b: QueryStructBuilder) -> QueryStructBuilder {
    b.optional_identifier_assignment("resource_monitor", "RESOURCE_MONITOR", IdKind::Account)
        .optional_comment()
        .optional_bool_assignment("enable_query_acceleration", "ENABLE_QUERY_ACCELERATION")
        .optional_number_assignment(
            "query_acceleration_max_scale_factor",
            "QUERY_ACCELERATION_MAX_SCALE_FACTOR",
        )
        .optional_number_assignment("max_concurrency_level", "MAX_CONCURRENCY_LEVEL")
        .optional_number_assignment(
            "statement_queued_timeout_in_seconds",
            "STATEMENT_QUEUED_TIMEOUT_IN_SECONDS",
        )
        .optional_number_assignment("statement_timeout_in_seconds", "STATEMENT_TIMEOUT_IN_SECONDS")
}

const UNSETTABLE: &[(&str, &str)] = &[
    ("warehouse_type", "WAREHOUSE_TYPE"),
    ("max_cluster_count", "MAX_CLUSTER_COUNT"),
    ("min_cluster_count", "MIN_CLUSTER_COUNT"),
    ("scaling_policy", "SCALING_POLICY"),
    ("auto_suspend", "AUTO_SUSPEND"),
    ("auto_resume", "AUTO_RESUME"),
    ("resource_monitor", "RESOURCE_MONITOR"),
    ("comment", "COMMENT"),
    ("enable_query_acceleration", "ENABLE_QUERY_ACCELERATION"),
    ("query_acceleration_max_scale_factor", "QUERY_ACCELERATION_MAX_SCALE_FACTOR"),
    ("max_concurrency_level", "MAX_CONCURRENCY_LEVEL"),
    ("statement_queued_timeout_in_seconds", "STATEMENT_QUEUED_TIMEOUT_IN_SECONDS"),
    ("statement_timeout_in_seconds", "STATEMENT_TIMEOUT_IN_SECONDS"),
];

fn create() -> QueryStructBuilder {
    let b = QueryStructBuilder::new("CreateWarehouseOptions")
        .create()
        .or_replace()
        .sql("WAREHOUSE")
        .if_not_exists()
        .name(IdKind::Account);
    let b = properties(b, false).optional_bool_assignment("initially_suspended", "INITIALLY_SUSPENDED");
    tuning(b)
        .optional_tags()
        .with_validation(Rule::valid_identifier("name"))
        .with_validation(Rule::valid_identifier("resource_monitor"))
        .with_validation(Rule::conflicting(&["or_replace", "if_not_exists"]))
}

fn set() -> QueryStructBuilder {
    let b = tuning(properties(QueryStructBuilder::new("WarehouseSet"), true));
    let mut fields: Vec<&str> = vec!["warehouse_type", "warehouse_size", "wait_for_completion"];
    fields.extend(UNSETTABLE.iter().skip(1).map(|(name, _)| *name));
    b.with_validation(Rule::at_least_one_of(&fields))
        .with_validation(Rule::valid_identifier("resource_monitor"))
}

fn unset() -> QueryStructBuilder {
    let mut b = QueryStructBuilder::new("WarehouseUnset");
    for (name, sql) in UNSETTABLE {
        b = b.keyword(name, sql);
    }
    let fields: Vec<&str> = UNSETTABLE.iter().map(|(name, _)| *name).collect();
    b.with_validation(Rule::at_least_one_of(&fields))
}

pub fn warehouses() -> Interface {
    interface("Warehouses", "Warehouse", IdKind::Account)
        .with_operation(exec("Create", &docs("create-warehouse"), create().build()))
        .with_operation(
            exec(
                "Alter",
                &docs("alter-warehouse"),
                QueryStructBuilder::new("AlterWarehouseOptions")
                    .alter()
                    .sql("WAREHOUSE")
                    .if_exists()
                    .name(IdKind::Account)
                    .keyword("suspend", "SUSPEND")
                    .keyword("resume", "RESUME")
                    .keyword("if_suspended", "IF SUSPENDED")
                    .keyword("abort_all_queries", "ABORT ALL QUERIES")
                    .optional_identifier("new_name", "RENAME TO", IdKind::Account)
                    .nested_comma_list("set", "SET", helper("WarehouseSet"))
                    .nested_comma_list("unset", "UNSET", helper("WarehouseUnset"))
                    .set_tags()
                    .unset_tags()
                    .with_validation(Rule::valid_identifier("name"))
                    .with_validation(Rule::valid_identifier("new_name"))
                    .with_validation(Rule::exactly_one_of(&[
                        "suspend",
                        "resume",
                        "abort_all_queries",
                        "new_name",
                        "set",
                        "unset",
                        "set_tag",
                        "unset_tag",
                    ]))
                    .with_validation(Rule::conflicting(&["suspend", "if_suspended"]))
                    .build(),
            )
            .with_helper(set().build())
            .with_helper(unset().build()),
        )
        .with_operation(exec(
            "Drop",
            &docs("drop-warehouse"),
            QueryStructBuilder::new("DropWarehouseOptions")
                .drop()
                .sql("WAREHOUSE")
                .if_exists()
                .name(IdKind::Account)
                .with_validation(Rule::valid_identifier("name"))
                .build(),
        ))
        .with_operation(query(
            "Show",
            &docs("show-warehouses"),
            QueryStructBuilder::new("ShowWarehouseOptions")
                .show()
                .sql("WAREHOUSES")
                .optional_like()
                .build(),
            "Warehouse",
        ))
        .with_operation(query(
            "Describe",
            &docs("desc-warehouse"),
            QueryStructBuilder::new("DescribeWarehouseOptions")
                .describe()
                .sql("WAREHOUSE")
                .name(IdKind::Account)
                .with_validation(Rule::valid_identifier("name"))
                .build(),
            "WarehouseDetails",
        ))
        .with_enum(enum_def(
            "WarehouseType",
            vec![
                variant("Standard", "STANDARD", &[]),
                variant("SnowparkOptimized", "SNOWPARK-OPTIMIZED", &["SNOWPARK_OPTIMIZED"]),
            ],
        ))
        .with_enum(enum_def(
            "WarehouseSize",
            vec![
                variant("XSmall", "XSMALL", &["X-SMALL"]),
                variant("Small", "SMALL", &[]),
                variant("Medium", "MEDIUM", &[]),
                variant("Large", "LARGE", &[]),
                variant("XLarge", "XLARGE", &["X-LARGE"]),
                variant("XXLarge", "XXLARGE", &["X2LARGE", "2X-LARGE"]),
                variant("XXXLarge", "XXXLARGE", &["X3LARGE", "3X-LARGE"]),
                variant("X4Large", "X4LARGE", &["4X-LARGE"]),
                variant("X5Large", "X5LARGE", &["5X-LARGE"]),
                variant("X6Large", "X6LARGE", &["6X-LARGE"]),
            ],
        ))
        .with_enum(enum_def(
            "ScalingPolicy",
            vec![
                variant("Standard", "STANDARD", &[]),
                variant("Economy", "ECONOMY", &[]),
            ],
        ))
        .with_row(
            RowBuilder::new("Warehouse")
                .text("name")
                .text("state")
                .enum_column("warehouse_type", "type", "WarehouseType", false)
                .enum_column("size", "size", "WarehouseSize", false)
                .int("min_cluster_count")
                .int("max_cluster_count")
                .int("started_clusters")
                .int("running")
                .int("queued")
                .bool("is_default")
                .bool("is_current")
                .optional_int("auto_suspend")
                .bool("auto_resume")
                .optional_float("available")
                .optional_float("provisioning")
                .optional_float("quiescing")
                .optional_float("other")
                .text("created_on")
                .text("owner")
                .optional_text("comment")
                .bool("enable_query_acceleration")
                .int("query_acceleration_max_scale_factor")
                .optional_text("resource_monitor")
                .enum_column("scaling_policy", "scaling_policy", "ScalingPolicy", true)
                .optional_text("owner_role_type")
                .build(),
        )
        .with_row(
            RowBuilder::new("WarehouseDetails")
                .text("created_on")
                .text("name")
                .text("kind")
                .build(),
        )
}
