use super::*;
use sea_orm::ConnectionTrait;

/// Tests replacing a server's domains with a new set.
///
/// Expected: Ok(3) cleared, the new set stored and the other server untouched
#[tokio::test]
async fn replaces_server_domains_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let other = factory::create_server(db).await?;
    let (group, _) =
        factory::helpers::create_group_with_domains(db, &server.server_id, &["a.com", "b.com"])
            .await?;
    factory::helpers::create_group_with_domains(db, &server.server_id, &["c.com"]).await?;
    factory::helpers::create_group_with_domains(db, &other.server_id, &["d.com"]).await?;

    let repo = DomainRepository::new(db);
    let cleared = repo
        .replace_all_by_server(id(&server.server_id), 1, &[(group.id, "e.com".to_string())])
        .await?;

    assert_eq!(cleared, 3);
    assert_eq!(repo.count_by_server(id(&server.server_id)).await?, 1);
    assert!(repo.exists_in_group(group.id, "e.com").await?);
    assert_eq!(repo.count_by_server(id(&other.server_id)).await?, 1);

    Ok(())
}

/// Tests that a failed insert rolls back the whole replacement.
///
/// Expected: Err and the server keeps its previous domains
#[tokio::test]
async fn keeps_previous_domains_when_insert_fails() -> Result<(), AppError> {
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
        &["old-a.com", "old-b.com", "old-c.com"],
    )
    .await?;

    db.execute_unprepared(
        "CREATE TRIGGER reject_c BEFORE INSERT ON domain \
         WHEN NEW.domain_name = 'c.com' \
         BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
    )
    .await?;

    let repo = DomainRepository::new(db);
    let planned: Vec<(i32, String)> = ["a.com", "b.com", "c.com"]
        .iter()
        .map(|d| (group.id, d.to_string()))
        .collect();
    let result = repo
        .replace_all_by_server(id(&server.server_id), 1, &planned)
        .await;

    assert!(result.is_err());
    assert_eq!(repo.count_by_server(id(&server.server_id)).await?, 3);
    assert!(repo.exists_in_group(group.id, "old-a.com").await?);
    assert!(!repo.exists_in_group(group.id, "a.com").await?);

    Ok(())
}
