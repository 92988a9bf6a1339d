use sea_orm::entity::prelude::*;

/// A domain already handed to a user; one row per entry of the dedupe set.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "used_domain")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub server_user_id: i32,
    pub domain_name: String,
    pub used_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::server_user::Entity",
        from = "Column::ServerUserId",
        to = "super::server_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ServerUser,
}

impl Related<super::server_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServerUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
