use super::*;

/// Tests a reset that keeps the dedupe set.
///
/// Expected: Ok(true) with usage zeroed and used domains kept
#[tokio::test]
async fn zeroes_usage_and_keeps_dupes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let user = factory::user::UserFactory::new(db, &server.server_id)
        .usage_count(3)
        .used_domains(["a.com", "b.com"])
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let reset = repo
        .reset_user(id(&server.server_id), id(&user.user_id), false)
        .await?;
    assert!(reset);

    let reloaded = repo
        .find(id(&server.server_id), id(&user.user_id))
        .await?
        .unwrap();
    assert_eq!(reloaded.usage_count, 0);
    assert_eq!(reloaded.used_domains, vec!["a.com", "b.com"]);

    Ok(())
}

/// Tests a reset that also clears the dedupe set.
///
/// Expected: Ok(true) with usage zeroed and used domains cleared
#[tokio::test]
async fn clears_dupes_when_requested() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let user = factory::user::UserFactory::new(db, &server.server_id)
        .usage_count(2)
        .used_domains(["a.com"])
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.reset_user(id(&server.server_id), id(&user.user_id), true)
        .await?;

    let reloaded = repo
        .find(id(&server.server_id), id(&user.user_id))
        .await?
        .unwrap();
    assert_eq!(reloaded.usage_count, 0);
    assert!(reloaded.used_domains.is_empty());

    Ok(())
}

/// Tests resetting a user with no record.
///
/// Expected: Ok(false) and no row created
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;

    let reset = UserRepository::new(db)
        .reset_user(id(&server.server_id), 123, true)
        .await?;
    assert!(!reset);

    let count = entity::prelude::ServerUser::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
