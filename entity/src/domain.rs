use sea_orm::entity::prelude::*;

/// A dispensable domain, stored without a URI scheme.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "domain")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub server_id: String,
    pub group_id: i32,
    pub domain_name: String,
    pub created_by: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::domain_group::Entity",
        from = "Column::GroupId",
        to = "super::domain_group::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    DomainGroup,
}

impl Related<super::domain_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DomainGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
