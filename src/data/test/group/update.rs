use super::*;

/// Tests that an edit overwrites only the provided fields.
///
/// Expected: Ok(Some) with new style and role, old label kept, updated_by changed
#[tokio::test]
async fn overwrites_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;
    let group = factory::group::GroupFactory::new(db, &server.server_id)
        .button_label("Original")
        .build()
        .await?;

    let updated = DomainGroupRepository::new(db)
        .update(
            id(&server.server_id),
            &group.group_id,
            88,
            UpdateGroupParam {
                button_style: Some(ButtonStyle::Danger),
                required_role_id: Some(4),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.button.label, "Original");
    assert_eq!(updated.button.style, ButtonStyle::Danger);
    assert_eq!(updated.required_role_id, Some(4));
    assert_eq!(updated.updated_by, 88);

    Ok(())
}

/// Tests editing a missing group.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let server = factory::create_server(db).await?;

    let updated = DomainGroupRepository::new(db)
        .update(
            id(&server.server_id),
            "missing",
            1,
            UpdateGroupParam::default(),
        )
        .await?;
    assert!(updated.is_none());

    Ok(())
}
