use super::*;

/// Tests listing a server's groups with their domains.
///
/// Expected: Ok with groups in creation order, each with only its own domains
#[tokio::test]
async fn lists_groups_with_their_domains() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;
    let (first, _) =
        factory::helpers::create_group_with_domains(db, &server.server_id, &["a.com", "b.com"])
            .await?;
    let empty = factory::create_group(db, &server.server_id).await?;
    factory::helpers::create_group_with_domains(db, &other.server_id, &["z.com"]).await?;

    let groups = DomainGroupRepository::new(db)
        .get_by_server(id(&server.server_id))
        .await?;

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].group_id, first.group_id);
    assert_eq!(
        groups[0].domain_names().collect::<Vec<_>>(),
        vec!["a.com", "b.com"]
    );
    assert_eq!(groups[1].group_id, empty.group_id);
    assert!(groups[1].domains.is_empty());

    Ok(())
}
