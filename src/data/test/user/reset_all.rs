use super::*;

/// Tests a server-wide reset without clearing dupes.
///
/// Verifies that only users of the target server are touched.
///
/// Expected: Ok(2) with the other server's user unchanged
#[tokio::test]
async fn resets_only_target_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;
    let first = factory::user::UserFactory::new(db, &server.server_id)
        .usage_count(1)
        .used_domains(["a.com"])
        .build()
        .await?;
    factory::user::UserFactory::new(db, &server.server_id)
        .usage_count(2)
        .build()
        .await?;
    let outsider = factory::user::UserFactory::new(db, &other.server_id)
        .usage_count(3)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let reset = repo.reset_all(id(&server.server_id), false).await?;
    assert_eq!(reset, 2);

    let first = repo
        .find(id(&server.server_id), id(&first.user_id))
        .await?
        .unwrap();
    assert_eq!(first.usage_count, 0);
    assert_eq!(first.used_domains, vec!["a.com"]);

    let outsider = repo
        .find(id(&other.server_id), id(&outsider.user_id))
        .await?
        .unwrap();
    assert_eq!(outsider.usage_count, 3);

    Ok(())
}

/// Tests a server-wide reset that clears dupes.
///
/// Expected: Ok with every dedupe row of the server removed and others kept
#[tokio::test]
async fn clears_dupes_for_server_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;
    factory::user::UserFactory::new(db, &server.server_id)
        .used_domains(["a.com", "b.com"])
        .build()
        .await?;
    let outsider = factory::user::UserFactory::new(db, &other.server_id)
        .used_domains(["c.com"])
        .build()
        .await?;

    UserRepository::new(db)
        .reset_all(id(&server.server_id), true)
        .await?;

    let remaining = entity::prelude::UsedDomain::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].server_user_id, outsider.id);

    Ok(())
}
