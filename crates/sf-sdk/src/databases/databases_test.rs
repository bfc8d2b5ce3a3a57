use super::*;
use crate::client::Client;
use crate::common::{LimitFrom, TagAssociation};
use crate::ddl::render;
use crate::validation::{Validate, ValidationError};
use sf_core::SchemaObjectIdentifier;
use sf_db::{RecordingDriver, Row};
use std::sync::Arc;

fn db1() -> AccountObjectIdentifier {
    AccountObjectIdentifier::new("DB1")
}

fn client(driver: &RecordingDriver) -> Client {
    Client::new(Arc::new(driver.clone()))
        .with_sensitive_attributes(Arc::new(sf_core::NoSensitiveAttributes))
}

#[test]
fn test_create_transient_clone_sql() {
    let request = CreateDatabaseRequest::new(db1())
        .with_transient(true)
        .with_if_not_exists(true)
        .with_clone_source(AccountObjectIdentifier::new("PROD"))
        .with_data_retention_time_in_days(1)
        .with_log_level(LogLevel::Warn)
        .with_trace_level(TraceLevel::OnEvent)
        .with_comment("scratch");
    assert_eq!(
        render(&request.to_opts()),
        concat!(
            r#"CREATE TRANSIENT DATABASE IF NOT EXISTS "DB1" CLONE "PROD" "#,
            r#"DATA_RETENTION_TIME_IN_DAYS = 1 LOG_LEVEL = 'WARN' TRACE_LEVEL = 'ON_EVENT' "#,
            r#"COMMENT = 'scratch'"#
        )
    );
}

#[test]
fn test_create_with_external_volume_and_tags_sql() {
    let request = CreateDatabaseRequest::new(db1())
        .with_or_replace(true)
        .with_external_volume(AccountObjectIdentifier::new("VOL"))
        .with_catalog(AccountObjectIdentifier::new("CAT"))
        .with_tag(vec![TagAssociation::new(
            SchemaObjectIdentifier::new("GOV", "TAGS", "ENV"),
            "dev",
        )]);
    assert_eq!(
        render(&request.to_opts()),
        r#"CREATE OR REPLACE DATABASE "DB1" EXTERNAL_VOLUME = "VOL" CATALOG = "CAT" TAG ("GOV"."TAGS"."ENV" = 'dev')"#
    );
}

#[test]
fn test_alter_sql() {
    let swap = AlterDatabaseRequest::new(db1()).with_swap_with(AccountObjectIdentifier::new("DB2"));
    assert_eq!(render(&swap.to_opts()), r#"ALTER DATABASE "DB1" SWAP WITH "DB2""#);

    let set = AlterDatabaseRequest::new(db1()).with_set(
        DatabaseSetRequest::new()
            .with_max_data_extension_time_in_days(14)
            .with_default_ddl_collation("en-ci"),
    );
    assert_eq!(
        render(&set.to_opts()),
        r#"ALTER DATABASE "DB1" SET MAX_DATA_EXTENSION_TIME_IN_DAYS = 14 DEFAULT_DDL_COLLATION = 'en-ci'"#
    );

    let unset = AlterDatabaseRequest::new(db1())
        .with_if_exists(true)
        .with_unset(DatabaseUnsetRequest::new().with_log_level(true).with_comment(true));
    assert_eq!(
        render(&unset.to_opts()),
        r#"ALTER DATABASE IF EXISTS "DB1" UNSET LOG_LEVEL, COMMENT"#
    );
}

#[test]
fn test_drop_cascade_and_restrict_conflict() {
    let cascade = DropDatabaseRequest::new(db1()).with_cascade(true);
    assert_eq!(render(&cascade.to_opts()), r#"DROP DATABASE "DB1" CASCADE"#);

    let both = cascade.with_restrict(true).to_opts();
    assert!(both
        .validate()
        .unwrap_err()
        .contains(&ValidationError::conflicting_fields(
            "DropDatabaseOptions",
            &["cascade", "restrict"]
        )));
}

#[test]
fn test_undrop_sql() {
    assert_eq!(
        render(&UndropDatabaseRequest::new(db1()).to_opts()),
        r#"UNDROP DATABASE "DB1""#
    );
}

#[test]
fn test_show_sql() {
    let request = ShowDatabaseRequest::new()
        .with_terse(true)
        .with_history(true)
        .with_like(Like::new("DB%"))
        .with_starts_with("DB")
        .with_limit(LimitFrom::new(5));
    assert_eq!(
        render(&request.to_opts()),
        "SHOW TERSE DATABASES HISTORY LIKE 'DB%' STARTS WITH 'DB' LIMIT 5"
    );
}

#[test]
fn test_invalid_clone_source_is_reported() {
    let opts = CreateDatabaseRequest::new(db1())
        .with_clone_source(AccountObjectIdentifier::default())
        .to_opts();
    assert!(opts
        .validate()
        .unwrap_err()
        .contains(&ValidationError::invalid_identifier("CreateDatabaseOptions", "clone_source")));
}

#[test]
fn test_trace_level_parsing() {
    assert_eq!("on_event".parse::<TraceLevel>(), Ok(TraceLevel::OnEvent));
    assert_eq!(LogLevel::Fatal.as_sql(), "FATAL");
}

#[tokio::test]
async fn test_show_by_id_reads_optional_columns() {
    let driver = RecordingDriver::new();
    driver.push_rows(vec![Row::from_pairs([
        ("created_on", Some("2024-01-01 00:00:00")),
        ("name", Some("DB1")),
        ("is_default", Some("N")),
        ("is_current", Some("Y")),
        ("origin", Some("")),
        ("owner", Some("SYSADMIN")),
        ("comment", Some("scratch")),
        ("options", Some("TRANSIENT")),
        ("retention_time", Some("1")),
    ])]);
    let db = client(&driver)
        .databases()
        .show_by_id(&Context::new(), &db1())
        .await
        .unwrap();
    assert_eq!(db.options.as_deref(), Some("TRANSIENT"));
    assert_eq!(db.retention_time, Some(1));
    assert_eq!(db.dropped_on, None);
    assert_eq!(driver.statements(), vec!["SHOW DATABASES LIKE 'DB1'"]);
}

#[tokio::test]
async fn test_undrop_through_client() {
    let driver = RecordingDriver::new();
    client(&driver)
        .databases()
        .undrop(&Context::new(), &UndropDatabaseRequest::new(db1()))
        .await
        .unwrap();
    assert_eq!(driver.statements(), vec![r#"UNDROP DATABASE "DB1""#]);
}
