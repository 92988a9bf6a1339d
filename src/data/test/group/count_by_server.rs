use super::*;

/// Tests counting groups per server.
///
/// Expected: Ok(2) for the server with two groups
#[tokio::test]
async fn counts_only_server_groups() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;
    factory::create_group(db, &server.server_id).await?;
    factory::create_group(db, &server.server_id).await?;
    factory::create_group(db, &other.server_id).await?;

    let count = DomainGroupRepository::new(db)
        .count_by_server(id(&server.server_id))
        .await?;
    assert_eq!(count, 2);

    Ok(())
}
