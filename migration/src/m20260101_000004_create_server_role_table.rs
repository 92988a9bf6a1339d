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
                    .table(ServerRole::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerRole::Id))
                    .col(string(ServerRole::ServerId))
                    .col(string(ServerRole::RoleId))
                    .col(integer_null(ServerRole::SpecialLimit))
                    .col(boolean(ServerRole::AdminRole).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_role_server_id")
                            .from(ServerRole::Table, ServerRole::ServerId)
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
                    .name("idx_server_role_server_id_role_id")
                    .table(ServerRole::Table)
                    .col(ServerRole::ServerId)
                    .col(ServerRole::RoleId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerRole {
    Table,
    Id,
    ServerId,
    RoleId,
    SpecialLimit,
    AdminRole,
}
