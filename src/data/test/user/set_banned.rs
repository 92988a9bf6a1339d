use super::*;

/// Tests toggling the banned flag.
///
/// Expected: Ok with the flag set, then cleared
#[tokio::test]
async fn toggles_banned_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let user = factory::create_user(db, &server.server_id).await?;
    let (server_id, user_id) = (id(&server.server_id), id(&user.user_id));

    let repo = UserRepository::new(db);

    repo.set_banned(server_id, user_id, true).await?;
    assert!(repo.find(server_id, user_id).await?.unwrap().banned);

    repo.set_banned(server_id, user_id, false).await?;
    assert!(!repo.find(server_id, user_id).await?.unwrap().banned);

    Ok(())
}
