use super::*;

/// Tests removing a domain from a group.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn removes_domain_once() -> Result<(), AppError> {
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

    let repo = DomainRepository::new(db);
    assert!(repo.delete(group.id, "a.com").await?);
    assert!(!repo.delete(group.id, "a.com").await?);
    assert!(repo.exists_in_group(group.id, "b.com").await?);

    Ok(())
}
