use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_server_table::Server;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerUser::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerUser::Id))
                    .col(string(ServerUser::ServerId))
                    .col(string(ServerUser::UserId))
                    .col(integer(ServerUser::UsageCount).default(0))
                    .col(boolean(ServerUser::Banned).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_user_server_id")
                            .from(ServerUser::Table, ServerUser::ServerId)
                            .to(Server::Table, Server::ServerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_server_user_server_id_user_id")
                    .table(ServerUser::Table)
                    .col(ServerUser::ServerId)
                    .col(ServerUser::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerUser {
    Table,
    Id,
    ServerId,
    UserId,
    UsageCount,
    Banned,
}
