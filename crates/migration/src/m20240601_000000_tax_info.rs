//! Creates the `tax_info` table holding one row per ledger entry.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum TaxInfo {
    Table,
    Id,
    Income,
    Expenses,
    TaxAmount,
    TaxRate,
    Description,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaxInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TaxInfo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TaxInfo::Income).double().not_null())
                    .col(ColumnDef::new(TaxInfo::Expenses).double().not_null())
                    .col(ColumnDef::new(TaxInfo::TaxAmount).double().not_null())
                    .col(ColumnDef::new(TaxInfo::TaxRate).double().not_null())
                    .col(ColumnDef::new(TaxInfo::Description).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaxInfo::Table).to_owned())
            .await
    }
}
