use super::*;

/// Tests removing a configured role.
///
/// Expected: Ok(true) then Ok(false) for the second removal
#[tokio::test]
async fn removes_role_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let role = factory::create_role(db, &server.server_id).await?;
    let (server_id, role_id) = (id(&server.server_id), id(&role.role_id));

    let repo = RoleRepository::new(db);
    assert!(repo.delete(server_id, role_id).await?);
    assert!(!repo.delete(server_id, role_id).await?);
    assert!(repo.find(server_id, role_id).await?.is_none());

    Ok(())
}
