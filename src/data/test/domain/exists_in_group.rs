use super::*;

/// Tests the per-group duplicate check.
///
/// Expected: true in the owning group, false in another group
#[tokio::test]
async fn checks_membership_per_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let (group, _) =
        factory::helpers::create_group_with_domains(db, &server.server_id, &["a.com"]).await?;
    let other = factory::create_group(db, &server.server_id).await?;

    let repo = DomainRepository::new(db);
    assert!(repo.exists_in_group(group.id, "a.com").await?);
    assert!(!repo.exists_in_group(group.id, "b.com").await?);
    assert!(!repo.exists_in_group(other.id, "a.com").await?);

    Ok(())
}
