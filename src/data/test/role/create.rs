use super::*;

/// Tests creating a role with a special limit.
///
/// Expected: Ok with the role stored and retrievable
#[tokio::test]
async fn creates_role_with_special_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let server_id = id(&server.server_id);

    let repo = RoleRepository::new(db);
    let role = repo
        .create(
            server_id,
            CreateRoleParam {
                role_id: 555,
                special_limit: Some(3),
                admin_role: false,
            },
        )
        .await?;

    assert_eq!(role.role_id, 555);
    assert_eq!(role.special_limit, Some(3));
    assert!(!role.admin_role);

    let found = repo.find(server_id, 555).await?;
    assert_eq!(found, Some(role));

    Ok(())
}

/// Tests creating an admin role without a limit override.
///
/// Expected: Ok with special_limit None
#[tokio::test]
async fn creates_admin_role_without_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;

    let role = RoleRepository::new(db)
        .create(
            id(&server.server_id),
            CreateRoleParam {
                role_id: 10,
                special_limit: None,
                admin_role: true,
            },
        )
        .await?;

    assert!(role.special_limit.is_none());
    assert!(role.admin_role);

    Ok(())
}
