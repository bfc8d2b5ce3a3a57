use super::*;

#[tokio::test]
async fn test_records_statements_in_order() {
    let driver = RecordingDriver::new();
    let ctx = Context::new();
    driver.exec(&ctx, "CREATE ROLE \"A\"").await.unwrap();
    driver.query(&ctx, "SHOW ROLES").await.unwrap();
    assert_eq!(driver.statements(), vec!["CREATE ROLE \"A\"", "SHOW ROLES"]);
    assert_eq!(driver.last_statement().as_deref(), Some("SHOW ROLES"));
}

#[tokio::test]
async fn test_replays_queued_responses() {
    let driver = RecordingDriver::new();
    driver
        .push_exec(3)
        .push_rows(vec![Row::from_pairs([("name", Some("R1"))])])
        .push_error(DbError::execution(Some("002003"), "missing"));
    let ctx = Context::new();

    assert_eq!(driver.exec(&ctx, "a").await.unwrap(), 3);
    assert_eq!(driver.query(&ctx, "b").await.unwrap().len(), 1);
    assert!(driver
        .exec(&ctx, "c")
        .await
        .unwrap_err()
        .is_object_not_found());
    assert_eq!(driver.exec(&ctx, "d").await.unwrap(), 0);
}

#[tokio::test]
async fn test_clones_share_state() {
    let driver = RecordingDriver::new();
    let clone = driver.clone();
    clone.exec(&Context::new(), "SELECT 1").await.unwrap();
    assert_eq!(driver.statements().len(), 1);
    driver.clear();
    assert!(clone.statements().is_empty());
}

#[tokio::test]
async fn test_connector_hands_out_shared_driver() {
    let recorder = RecordingDriver::new();
    let config = DriverConfig {
        account: Some("ACC".to_string()),
        ..Default::default()
    };
    let driver = recorder.connect(&config).await.unwrap();
    assert_eq!(driver.db_type(), "recording");
    driver.exec(&Context::new(), "SELECT 1").await.unwrap();
    assert_eq!(recorder.statements(), vec!["SELECT 1"]);
    assert_eq!(recorder.connected_config(), Some(config));
}
