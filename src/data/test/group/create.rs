use super::*;

/// Tests creating a group.
///
/// Expected: Ok with an empty group carrying the creator and button metadata
#[tokio::test]
async fn creates_empty_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;

    let group = DomainGroupRepository::new(db)
        .create(id(&server.server_id), 31, create_param("main"))
        .await?;

    assert_eq!(group.group_id, "main");
    assert_eq!(group.button.label, "Get main");
    assert_eq!(group.button.style, ButtonStyle::Success);
    assert_eq!(group.created_by, 31);
    assert_eq!(group.updated_by, 31);
    assert!(group.domains.is_empty());

    Ok(())
}

/// Tests creating a group gated behind a role.
///
/// Expected: Ok with required_role_id stored
#[tokio::test]
async fn stores_required_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let mut param = create_param("vip");
    param.required_role_id = Some(777);

    let repo = DomainGroupRepository::new(db);
    repo.create(id(&server.server_id), 1, param).await?;

    let found = repo.find(id(&server.server_id), "vip").await?.unwrap();
    assert_eq!(found.required_role_id, Some(777));

    Ok(())
}
