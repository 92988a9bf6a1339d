use super::*;

/// Tests creating a user on first reference.
///
/// Expected: Ok with zero usage, no dedupe set and not banned
#[tokio::test]
async fn creates_zeroed_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;

    let user = UserRepository::new(db)
        .ensure(id(&server.server_id), 42)
        .await?;

    assert_eq!(user.user_id, 42);
    assert_eq!(user.usage_count, 0);
    assert!(user.used_domains.is_empty());
    assert!(!user.banned);

    Ok(())
}

/// Tests that an existing user is returned unchanged with their dedupe set.
///
/// Expected: Ok with stored usage and domains in insertion order
#[tokio::test]
async fn returns_existing_user_with_used_domains() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let existing = factory::user::UserFactory::new(db, &server.server_id)
        .usage_count(2)
        .used_domains(["b.com", "a.com"])
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .ensure(id(&server.server_id), id(&existing.user_id))
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.usage_count, 2);
    assert_eq!(user.used_domains, vec!["b.com", "a.com"]);

    let count = entity::prelude::ServerUser::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the same Discord user is tracked separately per server.
///
/// Expected: Ok with two distinct user rows
#[tokio::test]
async fn scopes_users_by_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_server(db).await?;
    let second = factory::create_server(db).await?;

    let repo = UserRepository::new(db);
    let a = repo.ensure(id(&first.server_id), 7).await?;
    let b = repo.ensure(id(&second.server_id), 7).await?;

    assert_ne!(a.id, b.id);

    Ok(())
}
