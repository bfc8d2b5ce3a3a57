use crate::dsl::{docs, exec, helper, interface, query, QueryStructBuilder, RowBuilder};
use crate::model::{IdKind, Interface, Rule};

pub fn database_roles() -> Interface {
    interface("DatabaseRoles", "DatabaseRole", IdKind::Database)
        .with_operation(exec(
            "Create",
            &docs("create-database-role"),
            QueryStructBuilder::new("CreateDatabaseRoleOptions")
                .create()
                .or_replace()
                .sql("DATABASE ROLE")
                .if_not_exists()
                .name(IdKind::Database)
                .optional_comment()
                .with_validation(Rule::valid_identifier("name"))
                .with_validation(Rule::conflicting(&["or_replace", "if_not_exists"]))
                .build(),
        ))
        .with_operation(
            exec(
                "Alter",
                &docs("alter-database-role"),
                QueryStructBuilder::new("AlterDatabaseRoleOptions")
                    .alter()
                    .sql("DATABASE ROLE")
                    .if_exists()
                    .name(IdKind::Database)
                    .optional_identifier("rename", "RENAME TO", IdKind::Database)
                    .nested("set", "SET", helper("DatabaseRoleSet"))
                    .nested("unset", "UNSET", helper("DatabaseRoleUnset"))
                    .with_validation(Rule::valid_identifier("name"))
                    .with_validation(Rule::valid_identifier("rename"))
                    .with_validation(Rule::exactly_one_of(&["rename", "set", "unset"]))
                    .build(),
            )
            .with_helper(
                QueryStructBuilder::new("DatabaseRoleSet")
                    .required_text_assignment("comment", "COMMENT")
                    .build(),
            )
            .with_helper(
                QueryStructBuilder::new("DatabaseRoleUnset")
                    .keyword("comment", "COMMENT")
                    .with_validation(Rule::at_least_one_of(&["comment"]))
                    .build(),
            ),
        )
        .with_operation(exec(
            "Drop",
            &docs("drop-database-role"),
            QueryStructBuilder::new("DropDatabaseRoleOptions")
                .drop()
                .sql("DATABASE ROLE")
                .if_exists()
                .name(IdKind::Database)
                .with_validation(Rule::valid_identifier("name"))
                .build(),
        ))
        .with_operation(
            query(
                "Show",
                &docs("show-database-roles"),
                QueryStructBuilder::new("ShowDatabaseRoleOptions")
                    .show()
                    .sql("DATABASE ROLES")
                    .optional_like()
                    .identifier("in_database", "IN DATABASE", IdKind::Account)
                    .optional_limit_from()
                    .with_validation(Rule::valid_identifier("in_database"))
                    .build(),
                "DatabaseRole",
            )
            .with_target("in_database"),
        )
        .with_row(
            RowBuilder::new("DatabaseRole")
                .text("created_on")
                .text("name")
                .bool("is_default")
                .bool("is_current")
                .bool("is_inherited")
                .int("granted_to_roles")
                .int("granted_to_database_roles")
                .int("granted_database_roles")
                .text("owner")
                .optional_text("comment")
                .optional_text("owner_role_type")
                .build(),
        )
}
