use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260105_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sites::Table)
                    .if_not_exists()
                    .col(pk_auto(Sites::SiteId))
                    .col(string(Sites::Name))
                    .col(text(Sites::Description))
                    .col(string(Sites::Location))
                    .col(string_null(Sites::ImageUrl))
                    .col(double(Sites::EntranceFee).default(0.0))
                    .col(integer_null(Sites::CreatedBy))
                    .col(integer_null(Sites::AgentId))
                    .col(timestamp_with_time_zone(Sites::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sites_created_by")
                            .from(Sites::Table, Sites::CreatedBy)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sites_agent_id")
                            .from(Sites::Table, Sites::AgentId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sites::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sites {
    Table,
    SiteId,
    Name,
    Description,
    Location,
    ImageUrl,
    EntranceFee,
    CreatedBy,
    AgentId,
    Status,
    CreatedAt,
}
