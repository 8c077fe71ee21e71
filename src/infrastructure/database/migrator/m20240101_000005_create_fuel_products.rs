//! Create fuel_products table

use sea_orm_migration::prelude::*;

use super::m20240101_000004_create_pumps::Pumps;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FuelProducts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FuelProducts::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FuelProducts::PumpId).string().not_null())
                    .col(ColumnDef::new(FuelProducts::Name).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fuel_products_pump")
                            .from(FuelProducts::Table, FuelProducts::PumpId)
                            .to(Pumps::Table, Pumps::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FuelProducts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum FuelProducts {
    Table,
    Id,
    PumpId,
    Name,
}
