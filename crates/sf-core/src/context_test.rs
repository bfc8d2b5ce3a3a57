use super::*;

#[test]
fn test_metadata_falls_back_to_provider_version() {
    let meta = ContextMetadata::resource("snowflake_database", Operation::Create);
    let wire = meta.to_query_metadata("v9.9.9");
    assert_eq!(
        wire,
        QueryMetadata::for_resource("v9.9.9", "snowflake_database", Operation::Create)
    );
}

#[test]
fn test_metadata_pinned_version_wins() {
    let meta = ContextMetadata::datasource("snowflake_roles").with_version("v1.0.0");
    let wire = meta.to_query_metadata("v9.9.9");
    assert_eq!(wire.version, "v1.0.0");
    assert_eq!(wire.datasource, "snowflake_roles");
    assert!(wire.resource.is_empty());
    assert_eq!(wire.operation, Operation::Read);
}

#[test]
fn test_subject_prefers_resource() {
    let meta = ContextMetadata::resource("snowflake_user", Operation::Read);
    assert_eq!(meta.subject(), Some("snowflake_user"));
    assert_eq!(ContextMetadata::datasource("snowflake_users").subject(), Some("snowflake_users"));
}

#[test]
fn test_default_context_is_live() {
    let ctx = Context::new();
    assert!(ctx.metadata().is_none());
    assert!(!ctx.is_cancelled());
    assert!(!ctx.is_expired());
    assert!(ctx.deadline().is_none());
}

#[test]
fn test_shared_token_cancels_context() {
    let token = CancellationToken::new();
    let ctx = Context::new().with_cancellation(token.clone());
    token.cancel();
    assert!(ctx.is_cancelled());
}

#[tokio::test]
async fn test_cancelled_future_resolves() {
    let token = CancellationToken::new();
    let ctx = Context::new().with_cancellation(token.clone());
    token.cancel();
    ctx.cancelled().await;
}

#[tokio::test]
async fn test_zero_timeout_expires() {
    let ctx = Context::new().with_timeout(Duration::ZERO);
    assert!(ctx.is_expired());
    ctx.deadline_reached().await;
}
