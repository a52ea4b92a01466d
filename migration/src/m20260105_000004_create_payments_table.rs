use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260105_000001_create_users_table::Users, m20260105_000002_create_sites_table::Sites,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(pk_auto(Payments::PaymentId))
                    .col(integer(Payments::UserId))
                    .col(integer(Payments::SiteId))
                    .col(double(Payments::Amount))
                    .col(string(Payments::Status).default("pending"))
                    .col(timestamp_with_time_zone(Payments::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_user_id")
                            .from(Payments::Table, Payments::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_site_id")
                            .from(Payments::Table, Payments::SiteId)
                            .to(Sites::Table, Sites::SiteId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payments {
    Table,
    PaymentId,
    UserId,
    SiteId,
    Amount,
    Status,
    CreatedAt,
}
