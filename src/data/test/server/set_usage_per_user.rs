use super::*;

/// Tests changing the default quota.
///
/// Expected: Ok with the new quota returned and persisted
#[tokio::test]
async fn updates_default_quota() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    repo.ensure(77).await?;

    let updated = repo.set_usage_per_user(77, 5).await?;
    assert_eq!(updated.usage_per_user, 5);

    let reloaded = repo.find(77).await?.unwrap();
    assert_eq!(reloaded.usage_per_user, 5);

    Ok(())
}

/// Tests that a quota of zero is accepted.
///
/// Expected: Ok with usage_per_user of 0
#[tokio::test]
async fn accepts_zero_quota() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    repo.ensure(78).await?;

    let updated = repo.set_usage_per_user(78, 0).await?;
    assert_eq!(updated.usage_per_user, 0);

    Ok(())
}

/// Tests updating a server that was never provisioned.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let result = repo.set_usage_per_user(404, 3).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
