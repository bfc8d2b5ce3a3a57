//! End-to-end scenarios through the client facade and a recording driver

use sf_core::tracking::{append_metadata, parse_metadata, trim_metadata, METADATA_PREFIX};
use sf_core::{
    AccountObjectIdentifier, Context, ContextMetadata, DatabaseObjectIdentifier,
    NoSensitiveAttributes, Operation, QueryMetadata,
};
use sf_db::RecordingDriver;
use sf_sdk::database_roles::{
    AlterDatabaseRoleRequest, CreateDatabaseRoleRequest, DatabaseRoleSetRequest, DatabaseRoles,
};
use sf_sdk::warehouses::{CreateWarehouseRequest, WarehouseSize, Warehouses};
use sf_sdk::{Client, ValidationError};
use std::sync::Arc;

fn client(driver: &RecordingDriver) -> Client {
    Client::new(Arc::new(driver.clone()))
        .with_version("v1.0.0")
        .with_sensitive_attributes(Arc::new(NoSensitiveAttributes))
}

fn role_a() -> DatabaseObjectIdentifier {
    DatabaseObjectIdentifier::new("DB1", "ROLE_A")
}

fn resource_ctx(resource: &str, operation: Operation) -> Context {
    Context::new().with_metadata(ContextMetadata::resource(resource, operation))
}

#[tokio::test]
async fn test_create_database_role() {
    let driver = RecordingDriver::new();
    let request = CreateDatabaseRoleRequest::new(role_a())
        .with_or_replace(true)
        .with_comment("hello");
    client(&driver)
        .database_roles()
        .create(&resource_ctx("snowflake_database_role", Operation::Create), &request)
        .await
        .unwrap();

    let sent = driver.last_statement().unwrap();
    assert_eq!(
        trim_metadata(&sent),
        r#"CREATE OR REPLACE DATABASE ROLE "DB1"."ROLE_A" COMMENT = 'hello'"#
    );
    let metadata = parse_metadata(&sent).unwrap();
    assert_eq!(metadata.resource, "snowflake_database_role");
    assert_eq!(metadata.version, "v1.0.0");
}

#[tokio::test]
async fn test_conflicting_create_emits_no_sql() {
    let driver = RecordingDriver::new();
    let request = CreateDatabaseRoleRequest::new(role_a())
        .with_or_replace(true)
        .with_if_not_exists(true)
        .with_comment("hello");
    let err = client(&driver)
        .database_roles()
        .create(&Context::new(), &request)
        .await
        .unwrap_err();

    assert!(err
        .validation_errors()
        .unwrap()
        .contains(&ValidationError::conflicting_fields(
            "CreateDatabaseRoleOptions",
            &["or_replace", "if_not_exists"]
        )));
    assert!(driver.statements().is_empty());
}

#[tokio::test]
async fn test_alter_without_action_emits_no_sql() {
    let driver = RecordingDriver::new();
    let err = client(&driver)
        .database_roles()
        .alter(&Context::new(), &AlterDatabaseRoleRequest::new(role_a()))
        .await
        .unwrap_err();

    assert!(err
        .validation_errors()
        .unwrap()
        .contains(&ValidationError::exactly_one_of(
            "AlterDatabaseRoleOptions",
            &["rename", "set", "unset"]
        )));
    assert!(driver.statements().is_empty());
}

#[tokio::test]
async fn test_alter_database_role_set_comment() {
    let driver = RecordingDriver::new();
    let request =
        AlterDatabaseRoleRequest::new(role_a()).with_set(DatabaseRoleSetRequest::new("x"));
    client(&driver)
        .database_roles()
        .alter(&Context::new(), &request)
        .await
        .unwrap();
    assert_eq!(
        driver.statements(),
        vec![r#"ALTER DATABASE ROLE "DB1"."ROLE_A" SET COMMENT = 'x'"#]
    );
}

#[tokio::test]
async fn test_create_warehouse() {
    let driver = RecordingDriver::new();
    let request = CreateWarehouseRequest::new(AccountObjectIdentifier::new("WH_A"))
        .with_warehouse_size(WarehouseSize::XSmall)
        .with_auto_suspend(60)
        .with_auto_resume(true);
    client(&driver)
        .warehouses()
        .create(&resource_ctx("snowflake_warehouse", Operation::Create), &request)
        .await
        .unwrap();

    let sent = driver.last_statement().unwrap();
    assert_eq!(
        trim_metadata(&sent),
        r#"CREATE WAREHOUSE "WH_A" WAREHOUSE_SIZE = 'XSMALL' AUTO_SUSPEND = 60 AUTO_RESUME = TRUE"#
    );
    assert_eq!(parse_metadata(&sent).unwrap().operation, Operation::Create);
}

#[test]
fn test_metadata_round_trip() {
    let metadata = QueryMetadata::for_resource("v1.0.0", "snowflake_database", Operation::Create);
    let sql = append_metadata("SELECT 1", &metadata).unwrap();
    assert_eq!(
        sql,
        format!(
            r#"SELECT 1 --{METADATA_PREFIX} {{"version":"v1.0.0","resource":"snowflake_database","operation":"create"}}"#
        )
    );
    assert_eq!(parse_metadata(&sql).unwrap(), metadata);
    assert_eq!(trim_metadata(&sql), "SELECT 1");
}
