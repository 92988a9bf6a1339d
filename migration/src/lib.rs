pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_server_table;
mod m20260101_000002_create_server_user_table;
mod m20260101_000003_create_used_domain_table;
mod m20260101_000004_create_server_role_table;
mod m20260101_000005_create_domain_group_table;
mod m20260101_000006_create_domain_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_server_table::Migration),
            Box::new(m20260101_000002_create_server_user_table::Migration),
            Box::new(m20260101_000003_create_used_domain_table::Migration),
            Box::new(m20260101_000004_create_server_role_table::Migration),
            Box::new(m20260101_000005_create_domain_group_table::Migration),
            Box::new(m20260101_000006_create_domain_table::Migration),
        ]
    }
}
