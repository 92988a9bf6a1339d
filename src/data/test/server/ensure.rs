use super::*;

/// Tests provisioning an unknown server.
///
/// Verifies that the first reference to a server creates it with the default
/// quota and no webhooks.
///
/// Expected: Ok with default settings
#[tokio::test]
async fn creates_unknown_server_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let settings = repo.ensure(1234).await?;

    assert_eq!(settings.server_id, 1234);
    assert_eq!(settings.usage_per_user, DEFAULT_USAGE_PER_USER as u32);
    assert!(settings.reports_webhook_url.is_none());
    assert!(settings.logs_webhook_url.is_none());

    Ok(())
}

/// Tests that ensure is idempotent.
///
/// Verifies that calling ensure twice keeps a single row and does not
/// overwrite settings changed in between.
///
/// Expected: Ok with one row and the changed quota preserved
#[tokio::test]
async fn keeps_existing_server_settings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::server::ServerFactory::new(db)
        .usage_per_user(4)
        .build()
        .await?;
    let server_id: u64 = server.server_id.parse().unwrap();

    let repo = ServerRepository::new(db);
    repo.ensure(server_id).await?;
    let settings = repo.ensure(server_id).await?;

    assert_eq!(settings.usage_per_user, 4);
    let count = entity::prelude::Server::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
