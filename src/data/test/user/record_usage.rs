use super::*;

/// Tests recording a dispense against the observed count.
///
/// Expected: Ok with the incremented count and the domain appended
#[tokio::test]
async fn increments_count_and_appends_domain() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let user = factory::user::UserFactory::new(db, &server.server_id)
        .usage_count(1)
        .used_domains(["a.com"])
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let new_count = repo
        .record_usage(id(&server.server_id), id(&user.user_id), 1, "b.com")
        .await?;

    assert_eq!(new_count, 2);

    let reloaded = repo
        .find(id(&server.server_id), id(&user.user_id))
        .await?
        .unwrap();
    assert_eq!(reloaded.usage_count, 2);
    assert_eq!(reloaded.used_domains, vec!["a.com", "b.com"]);

    Ok(())
}

/// Tests that a stale observed count is rejected.
///
/// Simulates a second dispense committing between the quota check and the
/// write. Neither the count nor the dedupe set may change.
///
/// Expected: Err(UsageConflict) with no mutation
#[tokio::test]
async fn rejects_stale_observed_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let user = factory::user::UserFactory::new(db, &server.server_id)
        .usage_count(1)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .record_usage(id(&server.server_id), id(&user.user_id), 0, "a.com")
        .await;

    assert!(matches!(result, Err(AppError::UsageConflict { .. })));

    let reloaded = repo
        .find(id(&server.server_id), id(&user.user_id))
        .await?
        .unwrap();
    assert_eq!(reloaded.usage_count, 1);
    assert!(reloaded.used_domains.is_empty());

    let rows = entity::prelude::UsedDomain::find()
        .filter(entity::used_domain::Column::ServerUserId.eq(user.id))
        .count(db)
        .await?;
    assert_eq!(rows, 0);

    Ok(())
}

/// Tests that only one of two writes from the same observed count succeeds.
///
/// Expected: first Ok(1), second Err(UsageConflict)
#[tokio::test]
async fn second_write_from_same_observation_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let user = factory::create_user(db, &server.server_id).await?;

    let repo = UserRepository::new(db);
    let first = repo
        .record_usage(id(&server.server_id), id(&user.user_id), 0, "a.com")
        .await?;
    let second = repo
        .record_usage(id(&server.server_id), id(&user.user_id), 0, "b.com")
        .await;

    assert_eq!(first, 1);
    assert!(matches!(second, Err(AppError::UsageConflict { .. })));

    Ok(())
}

/// Tests recording for a user that was never provisioned.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;

    let result = UserRepository::new(db)
        .record_usage(id(&server.server_id), 999_999, 0, "a.com")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
