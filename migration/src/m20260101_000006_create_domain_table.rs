use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000005_create_domain_group_table::DomainGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Domain::Table)
                    .if_not_exists()
                    .col(pk_auto(Domain::Id))
                    .col(string(Domain::ServerId))
                    .col(integer(Domain::GroupId))
                    .col(string(Domain::DomainName))
                    .col(string(Domain::CreatedBy))
                    .col(timestamp_with_time_zone(Domain::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_domain_group_id")
                            .from(Domain::Table, Domain::GroupId)
                            .to(DomainGroup::Table, DomainGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_domain_group_id_domain_name")
                    .table(Domain::Table)
                    .col(Domain::GroupId)
                    .col(Domain::DomainName)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Domain::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Domain {
    Table,
    Id,
    ServerId,
    GroupId,
    DomainName,
    CreatedBy,
    CreatedAt,
}
