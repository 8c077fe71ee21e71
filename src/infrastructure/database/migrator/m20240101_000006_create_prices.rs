//! Create prices table

use sea_orm_migration::prelude::*;

use super::m20240101_000005_create_fuel_products::FuelProducts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prices::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Prices::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Prices::FuelProductId).string().not_null())
                    .col(ColumnDef::new(Prices::Amount).double().not_null())
                    .col(ColumnDef::new(Prices::Currency).string_len(3).not_null())
                    .check(Expr::col(Prices::Amount).gte(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prices_fuel_product")
                            .from(Prices::Table, Prices::FuelProductId)
                            .to(FuelProducts::Table, FuelProducts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Prices {
    Table,
    Id,
    FuelProductId,
    Amount,
    Currency,
}
