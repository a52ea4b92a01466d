use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260105_000002_create_sites_table::Sites;

/// Adds the approval `status` column to `sites`.
///
/// Databases created before site approval existed may already carry the column from a
/// manual `ALTER TABLE`, so the column is only added when it is missing.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.has_column("sites", "status").await? {
            tracing::info!("Column 'status' already exists in 'sites'");
            return Ok(());
        }

        tracing::info!("Adding 'status' column to 'sites'");
        manager
            .alter_table(
                Table::alter()
                    .table(Sites::Table)
                    .add_column(string(Sites::Status).default("pending"))
                    .to_owned(),
            )
            .await?;
        tracing::info!("Column 'status' added successfully");

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Sites::Table)
                    .drop_column(Sites::Status)
                    .to_owned(),
            )
            .await
    }
}
