use super::*;

/// Tests counting a server's domains across groups.
///
/// Expected: Ok(3)
#[tokio::test]
async fn counts_across_groups() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    factory::helpers::create_group_with_domains(db, &server.server_id, &["a.com"]).await?;
    factory::helpers::create_group_with_domains(db, &server.server_id, &["b.com", "c.com"])
        .await?;

    let count = DomainRepository::new(db)
        .count_by_server(id(&server.server_id))
        .await?;
    assert_eq!(count, 3);

    Ok(())
}
