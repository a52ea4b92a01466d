pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_users_table;
mod m20260105_000002_create_sites_table;
mod m20260105_000003_create_notifications_table;
mod m20260105_000004_create_payments_table;
mod m20260112_000005_add_status_to_sites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_users_table::Migration),
            Box::new(m20260105_000002_create_sites_table::Migration),
            Box::new(m20260105_000003_create_notifications_table::Migration),
            Box::new(m20260105_000004_create_payments_table::Migration),
            Box::new(m20260112_000005_add_status_to_sites::Migration),
        ]
    }
}
