pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_organizations_table;
mod m20240101_000002_create_users_table;
mod m20240101_000003_create_memberships_table;
mod m20240102_000001_create_addresses_table;
mod m20240103_000001_create_sessions_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_organizations_table::Migration),
            Box::new(m20240101_000002_create_users_table::Migration),
            Box::new(m20240101_000003_create_memberships_table::Migration),
            Box::new(m20240102_000001_create_addresses_table::Migration),
            Box::new(m20240103_000001_create_sessions_table::Migration)
        ]
    }
}
