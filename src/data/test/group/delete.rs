use super::*;

/// Tests deleting a group and its domains.
///
/// Expected: Ok(true) with the group and its domains gone, other groups kept
#[tokio::test]
async fn deletes_group_and_domains() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let (group, _) =
        factory::helpers::create_group_with_domains(db, &server.server_id, &["a.com", "b.com"])
            .await?;
    let (kept, _) =
        factory::helpers::create_group_with_domains(db, &server.server_id, &["c.com"]).await?;

    let repo = DomainGroupRepository::new(db);
    let deleted = repo.delete(id(&server.server_id), &group.group_id).await?;

    assert!(deleted);
    assert!(repo
        .find(id(&server.server_id), &group.group_id)
        .await?
        .is_none());

    let remaining = entity::prelude::Domain::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].group_id, kept.id);

    Ok(())
}

/// Tests deleting a group that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;

    let deleted = DomainGroupRepository::new(db)
        .delete(id(&server.server_id), "missing")
        .await?;
    assert!(!deleted);

    let count = entity::prelude::DomainGroup::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
