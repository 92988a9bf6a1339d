use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_server_user_table::ServerUser;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UsedDomain::Table)
                    .if_not_exists()
                    .col(pk_auto(UsedDomain::Id))
                    .col(integer(UsedDomain::ServerUserId))
                    .col(string(UsedDomain::DomainName))
                    .col(timestamp_with_time_zone(UsedDomain::UsedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_used_domain_server_user_id")
                            .from(UsedDomain::Table, UsedDomain::ServerUserId)
                            .to(ServerUser::Table, ServerUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_used_domain_server_user_id_domain_name")
                    .table(UsedDomain::Table)
                    .col(UsedDomain::ServerUserId)
                    .col(UsedDomain::DomainName)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UsedDomain::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UsedDomain {
    Table,
    Id,
    ServerUserId,
    DomainName,
    UsedAt,
}
