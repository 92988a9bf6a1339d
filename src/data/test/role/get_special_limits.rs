use super::*;

/// Tests looking up limits for the roles a member holds.
///
/// Verifies that unconfigured roles are absent, configured roles without a
/// limit map to None, and roles of other servers are ignored.
///
/// Expected: Ok with exactly the held, configured roles of this server
#[tokio::test]
async fn maps_held_configured_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;
    factory::role::RoleFactory::new(db, &server.server_id)
        .role_id("1")
        .special_limit(5)
        .build()
        .await?;
    factory::role::RoleFactory::new(db, &server.server_id)
        .role_id("2")
        .build()
        .await?;
    factory::role::RoleFactory::new(db, &server.server_id)
        .role_id("3")
        .special_limit(9)
        .build()
        .await?;
    factory::role::RoleFactory::new(db, &other.server_id)
        .role_id("4")
        .special_limit(50)
        .build()
        .await?;

    let limits = RoleRepository::new(db)
        .get_special_limits(id(&server.server_id), &[1, 2, 4, 8])
        .await?;

    assert_eq!(limits.len(), 2);
    assert_eq!(limits.get(&1), Some(&Some(5)));
    assert_eq!(limits.get(&2), Some(&None));
    assert!(!limits.contains_key(&3));
    assert!(!limits.contains_key(&4));

    Ok(())
}

/// Tests a member holding no roles.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_for_no_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;

    let limits = RoleRepository::new(db)
        .get_special_limits(id(&server.server_id), &[])
        .await?;
    assert!(limits.is_empty());

    Ok(())
}
