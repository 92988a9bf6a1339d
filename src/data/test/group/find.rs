use super::*;

/// Tests finding a group with its domains.
///
/// Expected: Ok(Some) with domains in insertion order
#[tokio::test]
async fn returns_group_with_domains_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let (group, _) = factory::helpers::create_group_with_domains(
        db,
        &server.server_id,
        &["c.com", "a.com", "b.com"],
    )
    .await?;

    let found = DomainGroupRepository::new(db)
        .find(id(&server.server_id), &group.group_id)
        .await?
        .unwrap();

    assert_eq!(found.id, group.id);
    assert_eq!(
        found.domain_names().collect::<Vec<_>>(),
        vec!["c.com", "a.com", "b.com"]
    );

    Ok(())
}

/// Tests that group names are scoped per server.
///
/// Expected: Ok(None) when looking up another server's group name
#[tokio::test]
async fn does_not_cross_servers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;
    let group = factory::group::GroupFactory::new(db, &server.server_id)
        .group_id("main")
        .build()
        .await?;

    let repo = DomainGroupRepository::new(db);
    assert!(repo
        .find(id(&server.server_id), &group.group_id)
        .await?
        .is_some());
    assert!(repo.find(id(&other.server_id), "main").await?.is_none());

    Ok(())
}
