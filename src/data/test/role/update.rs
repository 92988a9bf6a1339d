use super::*;

/// Tests that an edit only overwrites the provided fields.
///
/// Expected: Ok with the limit changed and admin flag preserved
#[tokio::test]
async fn overwrites_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let role = factory::role::RoleFactory::new(db, &server.server_id)
        .special_limit(2)
        .admin_role(true)
        .build()
        .await?;

    let updated = RoleRepository::new(db)
        .update(
            id(&server.server_id),
            id(&role.role_id),
            UpdateRoleParam {
                special_limit: Some(6),
                admin_role: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.special_limit, Some(6));
    assert!(updated.admin_role);

    Ok(())
}

/// Tests editing a role that isn't configured.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;

    let updated = RoleRepository::new(db)
        .update(id(&server.server_id), 1, UpdateRoleParam::default())
        .await?;
    assert!(updated.is_none());

    Ok(())
}
