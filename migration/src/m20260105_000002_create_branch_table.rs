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
                    .table(Branch::Table)
                    .if_not_exists()
                    .col(pk_auto(Branch::Id))
                    .col(integer(Branch::CompanyId))
                    .col(string(Branch::Name))
                    .col(text_null(Branch::Address))
                    .col(string_null(Branch::Phone))
                    .col(string_null(Branch::ManagerName))
                    .col(boolean(Branch::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Branch::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Branch::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_branches_company_id")
                            .from(Branch::Table, Branch::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_branches_company_name")
                            .col(Branch::CompanyId)
                            .col(Branch::Name)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Branch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Branch {
    #[sea_orm(iden = "branches")]
    Table,
    Id,
    CompanyId,
    Name,
    Address,
    Phone,
    ManagerName,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
