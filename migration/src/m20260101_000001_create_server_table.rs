use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Server::Table)
                    .if_not_exists()
                    .col(string(Server::ServerId).primary_key())
                    .col(integer(Server::UsagePerUser).default(1))
                    .col(string_null(Server::ReportsWebhookUrl))
                    .col(string_null(Server::LogsWebhookUrl))
                    .col(timestamp_with_time_zone(Server::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Server::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Server {
    Table,
    ServerId,
    UsagePerUser,
    ReportsWebhookUrl,
    LogsWebhookUrl,
    CreatedAt,
}
