use sea_orm::entity::prelude::*;

/// A Discord guild the bot has dispensed in, with its settings inline.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "server")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub server_id: String,
    pub usage_per_user: i32,
    pub reports_webhook_url: Option<String>,
    pub logs_webhook_url: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::server_user::Entity")]
    ServerUser,
    #[sea_orm(has_many = "super::server_role::Entity")]
    ServerRole,
    #[sea_orm(has_many = "super::domain_group::Entity")]
    DomainGroup,
}

impl Related<super::server_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServerUser.def()
    }
}

impl Related<super::server_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServerRole.def()
    }
}

impl Related<super::domain_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DomainGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
