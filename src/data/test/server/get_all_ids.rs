use super::*;

/// Tests listing every known server.
///
/// Expected: Ok with both server IDs
#[tokio::test]
async fn returns_every_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    repo.ensure(100).await?;
    repo.ensure(200).await?;

    let mut ids = repo.get_all_ids().await?;
    ids.sort();

    assert_eq!(ids, vec![100, 200]);

    Ok(())
}

/// Tests listing servers on an empty database.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_servers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ids = ServerRepository::new(db).get_all_ids().await?;
    assert!(ids.is_empty());

    Ok(())
}
