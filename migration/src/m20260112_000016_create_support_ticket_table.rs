use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_company_table::Company;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupportTicket::Table)
                    .if_not_exists()
                    .col(pk_auto(SupportTicket::Id))
                    .col(integer(SupportTicket::CompanyId))
                    .col(integer_null(SupportTicket::CreatedBy))
                    .col(string(SupportTicket::Subject))
                    .col(text(SupportTicket::Description))
                    .col(string(SupportTicket::Priority).default("medium"))
                    .col(string(SupportTicket::Status).default("open"))
                    .col(
                        timestamp_with_time_zone(SupportTicket::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(SupportTicket::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_tickets_company")
                            .from(SupportTicket::Table, SupportTicket::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SupportTicket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SupportTicket {
    #[sea_orm(iden = "support_tickets")]
    Table,
    Id,
    CompanyId,
    CreatedBy,
    Subject,
    Description,
    Priority,
    Status,
    CreatedAt,
    UpdatedAt,
}
