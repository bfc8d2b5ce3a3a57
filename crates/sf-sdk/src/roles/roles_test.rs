use super::*;
use crate::client::Client;
use crate::common::TagAssociation;
use crate::ddl::render;
use crate::validation::{Validate, ValidationError};
use sf_core::SchemaObjectIdentifier;
use sf_db::{RecordingDriver, Row};
use std::sync::Arc;

fn analyst() -> AccountObjectIdentifier {
    AccountObjectIdentifier::new("ANALYST")
}

fn cost_center() -> SchemaObjectIdentifier {
    SchemaObjectIdentifier::new("GOV", "TAGS", "COST_CENTER")
}

fn client(driver: &RecordingDriver) -> Client {
    Client::new(Arc::new(driver.clone()))
        .with_sensitive_attributes(Arc::new(sf_core::NoSensitiveAttributes))
}

#[test]
fn test_create_with_tags_sql() {
    let request = CreateRoleRequest::new(analyst())
        .with_if_not_exists(true)
        .with_comment("reporting")
        .with_tag(vec![TagAssociation::new(cost_center(), "finance")]);
    assert_eq!(
        render(&request.to_opts()),
        r#"CREATE ROLE IF NOT EXISTS "ANALYST" COMMENT = 'reporting' TAG ("GOV"."TAGS"."COST_CENTER" = 'finance')"#
    );
}

#[test]
fn test_alter_variants_sql() {
    let rename = AlterRoleRequest::new(analyst()).with_rename_to(AccountObjectIdentifier::new("ANALYST_2"));
    assert_eq!(
        render(&rename.to_opts()),
        r#"ALTER ROLE "ANALYST" RENAME TO "ANALYST_2""#
    );

    let set_comment = AlterRoleRequest::new(analyst())
        .with_if_exists(true)
        .with_set_comment("it's mine");
    assert_eq!(
        render(&set_comment.to_opts()),
        r#"ALTER ROLE IF EXISTS "ANALYST" SET COMMENT = 'it''s mine'"#
    );

    let set_tag = AlterRoleRequest::new(analyst()).with_set_tag(vec![
        TagAssociation::new(cost_center(), "finance"),
        TagAssociation::new(SchemaObjectIdentifier::new("GOV", "TAGS", "OWNER"), "bi"),
    ]);
    assert_eq!(
        render(&set_tag.to_opts()),
        r#"ALTER ROLE "ANALYST" SET TAG "GOV"."TAGS"."COST_CENTER" = 'finance', "GOV"."TAGS"."OWNER" = 'bi'"#
    );

    let unset_tag = AlterRoleRequest::new(analyst()).with_unset_tag(vec![cost_center()]);
    assert_eq!(
        render(&unset_tag.to_opts()),
        r#"ALTER ROLE "ANALYST" UNSET TAG "GOV"."TAGS"."COST_CENTER""#
    );

    let unset_comment = AlterRoleRequest::new(analyst()).with_unset_comment(true);
    assert_eq!(
        render(&unset_comment.to_opts()),
        r#"ALTER ROLE "ANALYST" UNSET COMMENT"#
    );
}

#[test]
fn test_alter_requires_exactly_one_action() {
    let opts = AlterRoleRequest::new(analyst()).to_opts();
    assert_eq!(
        opts.validate().unwrap_err().errors(),
        &[ValidationError::exactly_one_of(
            "AlterRoleOptions",
            &["rename_to", "set_comment", "set_tag", "unset_comment", "unset_tag"]
        )]
    );
}

#[test]
fn test_invalid_tag_in_create_is_reported() {
    let opts = CreateRoleRequest::new(analyst())
        .with_tag(vec![TagAssociation::default()])
        .to_opts();
    assert!(opts
        .validate()
        .unwrap_err()
        .contains(&ValidationError::invalid_identifier("TagAssociation", "name")));
}

#[test]
fn test_show_sql() {
    assert_eq!(render(&ShowRoleRequest::new().to_opts()), "SHOW ROLES");
    let request = ShowRoleRequest::new()
        .with_like(Like::new("ANA%"))
        .with_in_class(SchemaObjectIdentifier::new("SNOWFLAKE", "ML", "ANOMALY_DETECTION"));
    assert_eq!(
        render(&request.to_opts()),
        r#"SHOW ROLES LIKE 'ANA%' IN CLASS "SNOWFLAKE"."ML"."ANOMALY_DETECTION""#
    );
}

#[test]
fn test_grant_and_revoke_sql() {
    let grant = GrantRoleRequest::new(analyst()).with_to_role(AccountObjectIdentifier::new("SYSADMIN"));
    assert_eq!(
        render(&grant.to_opts()),
        r#"GRANT ROLE "ANALYST" TO ROLE "SYSADMIN""#
    );

    let revoke = RevokeRoleRequest::new(analyst()).with_from_user(AccountObjectIdentifier::new("JDOE"));
    assert_eq!(
        render(&revoke.to_opts()),
        r#"REVOKE ROLE "ANALYST" FROM USER "JDOE""#
    );
}

#[test]
fn test_grant_requires_exactly_one_grantee() {
    let both = GrantRoleRequest::new(analyst())
        .with_to_role(AccountObjectIdentifier::new("SYSADMIN"))
        .with_to_user(AccountObjectIdentifier::new("JDOE"))
        .to_opts();
    assert!(both
        .validate()
        .unwrap_err()
        .contains(&ValidationError::exactly_one_of("GrantRoleOptions", &["to_role", "to_user"])));
}

#[tokio::test]
async fn test_show_by_id() {
    let driver = RecordingDriver::new();
    driver.push_rows(vec![Row::from_pairs([
        ("created_on", Some("2024-01-01 00:00:00")),
        ("name", Some("ANALYST")),
        ("is_default", Some("N")),
        ("is_current", Some("Y")),
        ("is_inherited", Some("N")),
        ("assigned_to_users", Some("3")),
        ("granted_to_roles", Some("1")),
        ("granted_roles", Some("0")),
        ("owner", Some("SECURITYADMIN")),
        ("comment", Some("reporting")),
    ])]);
    let role = client(&driver)
        .roles()
        .show_by_id(&Context::new(), &analyst())
        .await
        .unwrap();
    assert!(role.is_current);
    assert_eq!(role.assigned_to_users, 3);
    assert_eq!(role.comment.as_deref(), Some("reporting"));
    assert_eq!(driver.statements(), vec!["SHOW ROLES LIKE 'ANALYST'"]);
}

#[tokio::test]
async fn test_drop_through_client() {
    let driver = RecordingDriver::new();
    client(&driver)
        .roles()
        .drop(&Context::new(), &DropRoleRequest::new(analyst()).with_if_exists(true))
        .await
        .unwrap();
    assert_eq!(driver.statements(), vec![r#"DROP ROLE IF EXISTS "ANALYST""#]);
}
