use crate::dsl::{docs, exec, interface, query, QueryStructBuilder, RowBuilder};
use crate::model::{IdKind, Interface, Rule};

pub fn roles() -> Interface {
    interface("Roles", "Role", IdKind::Account)
        .with_operation(exec(
            "Create",
            &docs("create-role"),
            QueryStructBuilder::new("CreateRoleOptions")
                .create()
                .or_replace()
                .sql("ROLE")
                .if_not_exists()
                .name(IdKind::Account)
                .optional_comment()
                .optional_tags()
                .with_validation(Rule::valid_identifier("name"))
                .with_validation(Rule::conflicting(&["or_replace", "if_not_exists"]))
                .build(),
        ))
        .with_operation(exec(
            "Alter",
            &docs("alter-role"),
            QueryStructBuilder::new("AlterRoleOptions")
                .alter()
                .sql("ROLE")
                .if_exists()
                .name(IdKind::Account)
                .optional_identifier("rename_to", "RENAME TO", IdKind::Account)
                .optional_text_assignment("set_comment", "SET COMMENT")
                .set_tags()
                .keyword("unset_comment", "UNSET COMMENT")
                .unset_tags()
                .with_validation(Rule::valid_identifier("name"))
                .with_validation(Rule::valid_identifier("rename_to"))
                .with_validation(Rule::exactly_one_of(&[
                    "rename_to",
                    "set_comment",
                    "set_tag",
                    "unset_comment",
                    "unset_tag",
                ]))
                .build(),
        ))
        .with_operation(exec(
            "Drop",
            &docs("drop-role"),
            QueryStructBuilder::new("DropRoleOptions")
                .drop()
                .sql("ROLE")
                .if_exists()
                .name(IdKind::Account)
                .with_validation(Rule::valid_identifier("name"))
                .build(),
        ))
        .with_operation(query(
            "Show",
            &docs("show-roles"),
            QueryStructBuilder::new("ShowRoleOptions")
                .show()
                .sql("ROLES")
                .optional_like()
                .optional_identifier("in_class", "IN CLASS", IdKind::Schema)
                .with_validation(Rule::valid_identifier("in_class"))
                .build(),
            "Role",
        ))
        .with_operation(exec(
            "Grant",
            &docs("grant-role"),
            QueryStructBuilder::new("GrantRoleOptions")
                .sql("GRANT ROLE")
                .name(IdKind::Account)
                .optional_identifier("to_role", "TO ROLE", IdKind::Account)
                .optional_identifier("to_user", "TO USER", IdKind::Account)
                .with_validation(Rule::valid_identifier("name"))
                .with_validation(Rule::valid_identifier("to_role"))
                .with_validation(Rule::valid_identifier("to_user"))
                .with_validation(Rule::exactly_one_of(&["to_role", "to_user"]))
                .build(),
        ))
        .with_operation(exec(
            "Revoke",
            &docs("revoke-role"),
            QueryStructBuilder::new("RevokeRoleOptions")
                .sql("REVOKE ROLE")
                .name(IdKind::Account)
                .optional_identifier("from_role", "FROM ROLE", IdKind::Account)
                .optional_identifier("from_user", "FROM USER", IdKind::Account)
                .with_validation(Rule::valid_identifier("name"))
                .with_validation(Rule::valid_identifier("from_role"))
                .with_validation(Rule::valid_identifier("from_user"))
                .with_validation(Rule::exactly_one_of(&["from_role", "from_user"]))
                .build(),
        ))
        .with_row(
            RowBuilder::new("Role")
                .text("created_on")
                .text("name")
                .bool("is_default")
                .bool("is_current")
                .bool("is_inherited")
                .int("assigned_to_users")
                .int("granted_to_roles")
                .int("granted_roles")
                .text("owner")
                .optional_text("comment")
                .build(),
        )
}
