use super::*;
use crate::ddl::SqlBuilder;
use crate::decode::{DecodeError, RowExt};
use crate::validation::{valid_identifier, ValidationError};
use sf_core::tracking::{parse_metadata, trim_metadata};
use sf_core::{AccountObjectIdentifier, ContextMetadata, ObjectIdentifier, Operation};
use sf_db::{RecordingDriver, Row};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Default)]
struct DropThing {
    if_exists: bool,
    name: AccountObjectIdentifier,
}

impl SqlRender for DropThing {
    fn render(&self, b: &mut SqlBuilder) {
        b.static_sql("DROP THING");
        b.keyword("IF EXISTS", self.if_exists);
        b.identifier("", &self.name);
    }
}

impl Validate for DropThing {
    fn collect_errors(&self, errs: &mut Vec<ValidationError>) {
        if !valid_identifier(&self.name) {
            errs.push(ValidationError::invalid_identifier("DropThing", "name"));
        }
    }
}

#[derive(Debug, PartialEq)]
struct Thing {
    name: String,
}

impl FromRow for Thing {
    fn from_row(row: &Row) -> Result<Self, DecodeError> {
        Ok(Self {
            name: row.decode("name")?,
        })
    }
}

fn drop_thing(name: &str) -> DropThing {
    DropThing {
        if_exists: true,
        name: AccountObjectIdentifier::new(name),
    }
}

fn call(opts: &DropThing) -> Call {
    Call::new("DropThing", Some(opts.name.fully_qualified_name()))
}

fn client(driver: &RecordingDriver) -> Client {
    Client::new(Arc::new(driver.clone()))
        .with_version("v1.2.3")
        .with_sensitive_attributes(Arc::new(sf_core::NoSensitiveAttributes))
}

#[tokio::test]
async fn test_exec_sends_rendered_sql() {
    let driver = RecordingDriver::new();
    let opts = drop_thing("T1");
    client(&driver)
        .exec_options(&Context::new(), call(&opts), Some(&opts))
        .await
        .unwrap();
    assert_eq!(driver.statements(), vec![r#"DROP THING IF EXISTS "T1""#]);
}

#[tokio::test]
async fn test_validation_precedes_execution() {
    let driver = RecordingDriver::new();
    let opts = DropThing::default();
    let err = client(&driver)
        .exec_options(&Context::new(), call(&opts), Some(&opts))
        .await
        .unwrap_err();
    assert!(err
        .validation_errors()
        .unwrap()
        .contains(&ValidationError::invalid_identifier("DropThing", "name")));
    assert!(err.to_string().starts_with("[S002] DropThing:"));
    assert!(driver.statements().is_empty());
}

#[test]
fn test_empty_identifier_is_absent() {
    assert_eq!(Call::new("DropThing", Some(String::new())).identifier, None);
    assert_eq!(
        Call::new("DropThing", Some(r#""T1""#.to_string())).identifier.as_deref(),
        Some(r#""T1""#)
    );
}

#[tokio::test]
async fn test_nil_options() {
    let driver = RecordingDriver::new();
    let err = client(&driver)
        .exec_options::<DropThing>(&Context::new(), Call::new("DropThing", None), None)
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::NilOptions { operation: "DropThing", .. }));
    assert!(driver.statements().is_empty());
}

#[tokio::test]
async fn test_metadata_attached_from_context() {
    let driver = RecordingDriver::new();
    let opts = drop_thing("T1");
    let ctx = Context::new().with_metadata(ContextMetadata::resource(
        "snowflake_thing",
        Operation::Delete,
    ));
    client(&driver)
        .exec_options(&ctx, call(&opts), Some(&opts))
        .await
        .unwrap();

    let sent = driver.last_statement().unwrap();
    assert_eq!(trim_metadata(&sent), r#"DROP THING IF EXISTS "T1""#);
    let metadata = parse_metadata(&sent).unwrap();
    assert_eq!(metadata.version, "v1.2.3");
    assert_eq!(metadata.resource, "snowflake_thing");
    assert_eq!(metadata.operation, Operation::Delete);
}

#[tokio::test]
async fn test_pinned_metadata_version_wins() {
    let driver = RecordingDriver::new();
    let opts = drop_thing("T1");
    let ctx = Context::new()
        .with_metadata(ContextMetadata::resource("snowflake_thing", Operation::Read).with_version("v0.9.0"));
    client(&driver)
        .exec_options(&ctx, call(&opts), Some(&opts))
        .await
        .unwrap();
    let metadata = parse_metadata(&driver.last_statement().unwrap()).unwrap();
    assert_eq!(metadata.version, "v0.9.0");
}

#[tokio::test]
async fn test_cancelled_context_sends_nothing() {
    let driver = RecordingDriver::new();
    let opts = drop_thing("T1");
    let token = CancellationToken::new();
    token.cancel();
    let ctx = Context::new().with_cancellation(token);
    let err = client(&driver)
        .exec_options(&ctx, call(&opts), Some(&opts))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Cancelled { .. }));
    assert!(driver.statements().is_empty());
}

#[tokio::test]
async fn test_expired_context_sends_nothing() {
    let driver = RecordingDriver::new();
    let opts = drop_thing("T1");
    let ctx = Context::new().with_timeout(Duration::ZERO);
    let err = client(&driver)
        .exec_options(&ctx, call(&opts), Some(&opts))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::DeadlineExceeded { .. }));
    assert!(driver.statements().is_empty());
}

#[tokio::test]
async fn test_cancellation_aborts_in_flight_statement() {
    let driver = RecordingDriver::new().with_delay(Duration::from_secs(30));
    let opts = drop_thing("T1");
    let token = CancellationToken::new();
    let ctx = Context::new().with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        token.cancel();
    });
    let err = client(&driver)
        .exec_options(&ctx, call(&opts), Some(&opts))
        .await
        .unwrap_err();
    canceller.await.unwrap();

    assert!(matches!(err, SdkError::Cancelled { .. }));
    assert_eq!(driver.statements().len(), 1);
}

#[tokio::test]
async fn test_deadline_aborts_in_flight_statement() {
    let driver = RecordingDriver::new().with_delay(Duration::from_secs(30));
    let opts = drop_thing("T1");
    let ctx = Context::new().with_timeout(Duration::from_millis(20));
    let err = client(&driver)
        .exec_options(&ctx, call(&opts), Some(&opts))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::DeadlineExceeded { .. }));
}

#[tokio::test]
async fn test_object_not_found_is_mapped() {
    let driver = RecordingDriver::new();
    driver.push_error(DbError::execution(
        Some("002003"),
        "SQL compilation error: Thing 'T1' does not exist or not authorized.",
    ));
    let opts = drop_thing("T1");
    let err = client(&driver)
        .exec_options(&Context::new(), call(&opts), Some(&opts))
        .await
        .unwrap_err();
    assert!(err.is_object_not_found());
    let msg = err.to_string();
    assert!(msg.starts_with(r#"[S003] DropThing on "T1""#));
    assert!(!msg.contains("DROP THING"));
    assert!(!msg.contains("[D003]"));
    assert!(msg.ends_with(
        "object does not exist or not authorized: SQL compilation error: Thing 'T1' does not exist or not authorized."
    ));
}

#[tokio::test]
async fn test_driver_error_carries_sql() {
    let driver = RecordingDriver::new();
    driver.push_error(DbError::execution(Some("001003"), "syntax error"));
    let opts = drop_thing("T1");
    let err = client(&driver)
        .exec_options(&Context::new(), call(&opts), Some(&opts))
        .await
        .unwrap_err();
    match err {
        SdkError::Driver { sql, source, .. } => {
            assert_eq!(sql, r#"DROP THING IF EXISTS "T1""#);
            assert!(!source.is_object_not_found());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_sensitive_resource_masks_sql() {
    let driver = RecordingDriver::new();
    driver.push_error(DbError::execution(None, "boom"));
    let registry = SensitiveRegistry::from_lines(["snowflake_thing.t1.secret"]);
    let client = client(&driver).with_sensitive_attributes(Arc::new(registry));
    let opts = drop_thing("T1");
    let ctx = Context::new().with_metadata(ContextMetadata::resource(
        "snowflake_thing",
        Operation::Update,
    ));

    let err = client
        .exec_options(&ctx, call(&opts), Some(&opts))
        .await
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains(MASKED_SQL));
    assert!(!msg.contains("DROP THING"));
    // The driver still receives the real statement
    assert!(driver.last_statement().unwrap().starts_with("DROP THING"));
}

#[tokio::test]
async fn test_query_decodes_rows() {
    let driver = RecordingDriver::new();
    driver.push_rows(vec![
        Row::from_pairs([("name", Some("A"))]),
        Row::from_pairs([("name", Some("B"))]),
    ]);
    let opts = drop_thing("T1");
    let things: Vec<Thing> = client(&driver)
        .query_options(&Context::new(), call(&opts), Some(&opts))
        .await
        .unwrap();
    assert_eq!(
        things,
        vec![
            Thing {
                name: "A".to_string()
            },
            Thing {
                name: "B".to_string()
            }
        ]
    );
}

#[tokio::test]
async fn test_query_decode_failure() {
    let driver = RecordingDriver::new();
    driver.push_rows(vec![Row::from_pairs([("other", Some("A"))])]);
    let opts = drop_thing("T1");
    let err = client(&driver)
        .query_options::<_, Thing>(&Context::new(), call(&opts), Some(&opts))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Decode { .. }));
    assert!(err.to_string().contains("'name'"));
}

#[tokio::test]
async fn test_connect_with_config_validates_first() {
    let recorder = RecordingDriver::new();
    let err = Client::connect_with_config(&recorder, DriverConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Config(_)));
    assert!(recorder.connected_config().is_none());

    let config = DriverConfig {
        account: Some("ACC".to_string()),
        user: Some("U".to_string()),
        password: Some("pw".into()),
        ..Default::default()
    };
    let client = Client::connect_with_config(&recorder, config).await.unwrap();
    assert_eq!(client.version(), PROVIDER_VERSION);
    assert!(recorder.connected_config().is_some());
}
