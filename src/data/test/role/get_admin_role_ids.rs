use super::*;

/// Tests listing admin roles.
///
/// Expected: Ok with only roles flagged admin_role
#[tokio::test]
async fn returns_only_admin_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    factory::role::RoleFactory::new(db, &server.server_id)
        .role_id("11")
        .admin_role(true)
        .build()
        .await?;
    factory::role::RoleFactory::new(db, &server.server_id)
        .role_id("12")
        .special_limit(4)
        .build()
        .await?;

    let ids = RoleRepository::new(db)
        .get_admin_role_ids(id(&server.server_id))
        .await?;

    assert_eq!(ids, vec![11]);

    Ok(())
}
