use crate::dsl::{docs, exec, helper, interface, query, QueryStructBuilder, RowBuilder};
use crate::model::{IdKind, Interface, Rule};

pub fn network_policies() -> Interface {
    interface("NetworkPolicies", "NetworkPolicy", IdKind::Account)
        .with_operation(exec(
            "Create",
            &docs("create-network-policy"),
            QueryStructBuilder::new("CreateNetworkPolicyOptions")
                .create()
                .or_replace()
                .sql("NETWORK POLICY")
                .if_not_exists()
                .name(IdKind::Account)
                .text_list_assignment("allowed_ip_list", "ALLOWED_IP_LIST")
                .text_list_assignment("blocked_ip_list", "BLOCKED_IP_LIST")
                .optional_comment()
                .with_validation(Rule::valid_identifier("name"))
                .with_validation(Rule::conflicting(&["or_replace", "if_not_exists"]))
                .build(),
        ))
        .with_operation(
            exec(
                "Alter",
                &docs("alter-network-policy"),
                QueryStructBuilder::new("AlterNetworkPolicyOptions")
                    .alter()
                    .sql("NETWORK POLICY")
                    .if_exists()
                    .name(IdKind::Account)
                    .nested("set", "SET", helper("NetworkPolicySet"))
                    .nested_comma_list("unset", "UNSET", helper("NetworkPolicyUnset"))
                    .optional_identifier("rename_to", "RENAME TO", IdKind::Account)
                    .with_validation(Rule::valid_identifier("name"))
                    .with_validation(Rule::valid_identifier("rename_to"))
                    .with_validation(Rule::exactly_one_of(&["rename_to", "set", "unset"]))
                    .build(),
            )
            .with_helper(
                QueryStructBuilder::new("NetworkPolicySet")
                    .optional_text_list_assignment("allowed_ip_list", "ALLOWED_IP_LIST")
                    .optional_text_list_assignment("blocked_ip_list", "BLOCKED_IP_LIST")
                    .optional_comment()
                    .with_validation(Rule::at_least_one_of(&[
                        "allowed_ip_list",
                        "blocked_ip_list",
                        "comment",
                    ]))
                    .build(),
            )
            .with_helper(
                QueryStructBuilder::new("NetworkPolicyUnset")
                    .keyword("comment", "COMMENT")
                    .with_validation(Rule::at_least_one_of(&["comment"]))
                    .build(),
            ),
        )
        .with_operation(exec(
            "Drop",
            &docs("drop-network-policy"),
            QueryStructBuilder::new("DropNetworkPolicyOptions")
                .drop()
                .sql("NETWORK POLICY")
                .if_exists()
                .name(IdKind::Account)
                .with_validation(Rule::valid_identifier("name"))
                .build(),
        ))
        .with_operation(query(
            "Show",
            &docs("show-network-policies"),
            QueryStructBuilder::new("ShowNetworkPolicyOptions")
                .show()
                .sql("NETWORK POLICIES")
                .build(),
            "NetworkPolicy",
        ))
        .with_operation(query(
            "Describe",
            &docs("desc-network-policy"),
            QueryStructBuilder::new("DescribeNetworkPolicyOptions")
                .describe()
                .sql("NETWORK POLICY")
                .name(IdKind::Account)
                .with_validation(Rule::valid_identifier("name"))
                .build(),
            "NetworkPolicyProperty",
        ))
        .with_row(
            RowBuilder::new("NetworkPolicy")
                .text("created_on")
                .text("name")
                .optional_text("comment")
                .int("entries_in_allowed_ip_list")
                .int("entries_in_blocked_ip_list")
                .build(),
        )
        .with_row(
            RowBuilder::new("NetworkPolicyProperty")
                .text("name")
                .text("value")
                .build(),
        )
}
