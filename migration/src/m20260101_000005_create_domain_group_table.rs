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
                    .table(DomainGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(DomainGroup::Id))
                    .col(string(DomainGroup::ServerId))
                    .col(string(DomainGroup::GroupId))
                    .col(string_null(DomainGroup::RequiredRoleId))
                    .col(string(DomainGroup::ButtonLabel))
                    .col(string(DomainGroup::ButtonStyle))
                    .col(string_null(DomainGroup::ButtonEmoji))
                    .col(string(DomainGroup::CreatedBy))
                    .col(string(DomainGroup::UpdatedBy))
                    .col(timestamp_with_time_zone(DomainGroup::CreatedAt))
                    .col(timestamp_with_time_zone(DomainGroup::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_domain_group_server_id")
                            .from(DomainGroup::Table, DomainGroup::ServerId)
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
                    .name("idx_domain_group_server_id_group_id")
                    .table(DomainGroup::Table)
                    .col(DomainGroup::ServerId)
                    .col(DomainGroup::GroupId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DomainGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DomainGroup {
    Table,
    Id,
    ServerId,
    GroupId,
    RequiredRoleId,
    ButtonLabel,
    ButtonStyle,
    ButtonEmoji,
    CreatedBy,
    UpdatedBy,
    CreatedAt,
    UpdatedAt,
}
