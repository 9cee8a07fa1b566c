use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(pk_auto(Staff::Id))
                    .col(integer_null(Staff::CompanyId))
                    .col(integer_null(Staff::BranchId))
                    .col(string(Staff::Name))
                    .col(string_null(Staff::Role))
                    .col(string_null(Staff::Phone))
                    .col(string_null(Staff::Email))
                    .col(boolean(Staff::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Staff::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Staff {
    #[sea_orm(iden = "staff")]
    Table,
    Id,
    CompanyId,
    BranchId,
    Name,
    Role,
    Phone,
    Email,
    IsActive,
    CreatedAt,
}
