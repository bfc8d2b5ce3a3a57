use super::*;
use crate::client::Client;
use crate::common::LimitFrom;
use crate::ddl::render;
use crate::validation::{Validate, ValidationError};
use sf_core::{AccountObjectIdentifier, DatabaseObjectIdentifier};
use sf_db::{RecordingDriver, Row};
use std::sync::Arc;

fn role_a() -> DatabaseObjectIdentifier {
    DatabaseObjectIdentifier::new("DB1", "ROLE_A")
}

fn client(driver: &RecordingDriver) -> Client {
    Client::new(Arc::new(driver.clone()))
        .with_sensitive_attributes(Arc::new(sf_core::NoSensitiveAttributes))
}

fn role_row(name: &str) -> Row {
    Row::from_pairs([
        ("created_on", Some("2024-01-01 00:00:00")),
        ("name", Some(name)),
        ("is_default", Some("N")),
        ("is_current", Some("N")),
        ("is_inherited", Some("N")),
        ("granted_to_roles", Some("0")),
        ("granted_to_database_roles", Some("1")),
        ("granted_database_roles", Some("0")),
        ("owner", Some("ACCOUNTADMIN")),
        ("comment", None),
        ("owner_role_type", Some("ROLE")),
    ])
}

#[test]
fn test_create_sql() {
    let request = CreateDatabaseRoleRequest::new(role_a())
        .with_or_replace(true)
        .with_comment("hello");
    assert_eq!(
        render(&request.to_opts()),
        r#"CREATE OR REPLACE DATABASE ROLE "DB1"."ROLE_A" COMMENT = 'hello'"#
    );
}

#[test]
fn test_create_if_not_exists_sql() {
    let request = CreateDatabaseRoleRequest::new(role_a()).with_if_not_exists(true);
    assert_eq!(
        render(&request.to_opts()),
        r#"CREATE DATABASE ROLE IF NOT EXISTS "DB1"."ROLE_A""#
    );
}

#[test]
fn test_alter_set_comment_sql() {
    let request =
        AlterDatabaseRoleRequest::new(role_a()).with_set(DatabaseRoleSetRequest::new("x"));
    assert_eq!(
        render(&request.to_opts()),
        r#"ALTER DATABASE ROLE "DB1"."ROLE_A" SET COMMENT = 'x'"#
    );
}

#[test]
fn test_alter_unset_comment_sql() {
    let request = AlterDatabaseRoleRequest::new(role_a())
        .with_if_exists(true)
        .with_unset(DatabaseRoleUnsetRequest::new().with_comment(true));
    assert_eq!(
        render(&request.to_opts()),
        r#"ALTER DATABASE ROLE IF EXISTS "DB1"."ROLE_A" UNSET COMMENT"#
    );
}

#[test]
fn test_alter_rename_sql() {
    let request = AlterDatabaseRoleRequest::new(role_a())
        .with_rename(DatabaseObjectIdentifier::new("DB1", "ROLE_B"));
    assert_eq!(
        render(&request.to_opts()),
        r#"ALTER DATABASE ROLE "DB1"."ROLE_A" RENAME TO "DB1"."ROLE_B""#
    );
}

#[test]
fn test_show_sql() {
    let request = ShowDatabaseRoleRequest::new(AccountObjectIdentifier::new("DB1"))
        .with_like(Like::new("ROLE%"))
        .with_limit(LimitFrom::new(10).with_from("ROLE_A"));
    assert_eq!(
        render(&request.to_opts()),
        r#"SHOW DATABASE ROLES LIKE 'ROLE%' IN DATABASE "DB1" LIMIT 10 FROM 'ROLE_A'"#
    );
}

#[test]
fn test_alter_with_set_and_unset_is_rejected() {
    let opts = AlterDatabaseRoleRequest::new(role_a())
        .with_set(DatabaseRoleSetRequest::new("x"))
        .with_unset(DatabaseRoleUnsetRequest::new().with_comment(true))
        .to_opts();
    let errs = opts.validate().unwrap_err();
    assert_eq!(
        errs.errors(),
        &[ValidationError::exactly_one_of(
            "AlterDatabaseRoleOptions",
            &["rename", "set", "unset"]
        )]
    );
}

#[test]
fn test_empty_unset_reports_nested_error() {
    let opts = AlterDatabaseRoleRequest::new(role_a())
        .with_unset(DatabaseRoleUnsetRequest::new())
        .to_opts();
    let errs = opts.validate().unwrap_err();
    assert!(errs.contains(&ValidationError::at_least_one_of(
        "DatabaseRoleUnset",
        &["comment"]
    )));
}

#[tokio::test]
async fn test_create_executes_through_client() {
    let driver = RecordingDriver::new();
    let request = CreateDatabaseRoleRequest::new(role_a()).with_comment("hello");
    client(&driver)
        .database_roles()
        .create(&Context::new(), &request)
        .await
        .unwrap();
    assert_eq!(
        driver.statements(),
        vec![r#"CREATE DATABASE ROLE "DB1"."ROLE_A" COMMENT = 'hello'"#]
    );
}

#[tokio::test]
async fn test_conflicting_create_sends_nothing() {
    let driver = RecordingDriver::new();
    let request = CreateDatabaseRoleRequest::new(role_a())
        .with_or_replace(true)
        .with_if_not_exists(true);
    let err = client(&driver)
        .database_roles()
        .create(&Context::new(), &request)
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with(r#"[S002] CreateDatabaseRole on "DB1"."ROLE_A""#));
    assert!(driver.statements().is_empty());
}

#[tokio::test]
async fn test_show_by_id_filters_exact_name() {
    let driver = RecordingDriver::new();
    driver.push_rows(vec![role_row("ROLE_AB"), role_row("ROLE_A")]);
    let role = client(&driver)
        .database_roles()
        .show_by_id(&Context::new(), &role_a())
        .await
        .unwrap();
    assert_eq!(role.name, "ROLE_A");
    assert_eq!(role.granted_to_database_roles, 1);
    assert_eq!(role.comment, None);
    assert_eq!(
        driver.statements(),
        vec![r#"SHOW DATABASE ROLES LIKE 'ROLE_A' IN DATABASE "DB1""#]
    );
}

#[tokio::test]
async fn test_show_by_id_not_found() {
    let driver = RecordingDriver::new();
    driver.push_rows(vec![role_row("OTHER")]);
    let err = client(&driver)
        .database_roles()
        .show_by_id(&Context::new(), &role_a())
        .await
        .unwrap_err();
    assert!(err.is_object_not_found());
    assert!(err
        .to_string()
        .starts_with(r#"[S003] ShowDatabaseRoleByID on "DB1"."ROLE_A""#));
}

#[tokio::test]
async fn test_unnamed_role_error_omits_identifier() {
    let driver = RecordingDriver::new();
    let err = client(&driver)
        .database_roles()
        .create(
            &Context::new(),
            &CreateDatabaseRoleRequest::new(DatabaseObjectIdentifier::default()),
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "[S002] CreateDatabaseRole: CreateDatabaseRoleOptions: invalid object identifier in field 'name'"
    );
    assert!(driver.statements().is_empty());
}
