use super::*;

/// Tests adding a domain to a group.
///
/// Expected: Ok with the domain bound to the group and creator
#[tokio::test]
async fn adds_domain_to_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let group = factory::create_group(db, &server.server_id).await?;

    let domain = DomainRepository::new(db)
        .create(id(&server.server_id), group.id, 55, "new.com")
        .await?;

    assert_eq!(domain.group_row_id, group.id);
    assert_eq!(domain.domain_name, "new.com");
    assert_eq!(domain.created_by, 55);

    Ok(())
}
