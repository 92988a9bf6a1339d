use super::*;

/// Tests setting and then clearing webhook URLs.
///
/// Verifies that both URLs are replaced together and that `None` clears a
/// previously configured webhook.
///
/// Expected: Ok with URLs set, then the logs URL cleared
#[tokio::test]
async fn sets_and_clears_webhooks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_dispenser_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    repo.ensure(9).await?;

    let settings = repo
        .set_webhook_urls(
            9,
            UpdateWebhooksParam {
                reports: Some("https://discord.com/api/webhooks/1/a".to_string()),
                logs: Some("https://discord.com/api/webhooks/2/b".to_string()),
            },
        )
        .await?;
    assert_eq!(
        settings.reports_webhook_url.as_deref(),
        Some("https://discord.com/api/webhooks/1/a")
    );
    assert_eq!(
        settings.logs_webhook_url.as_deref(),
        Some("https://discord.com/api/webhooks/2/b")
    );

    let settings = repo
        .set_webhook_urls(
            9,
            UpdateWebhooksParam {
                reports: Some("https://discord.com/api/webhooks/1/a".to_string()),
                logs: None,
            },
        )
        .await?;
    assert!(settings.reports_webhook_url.is_some());
    assert!(settings.logs_webhook_url.is_none());

    Ok(())
}
