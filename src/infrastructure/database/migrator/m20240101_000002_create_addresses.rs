//! Create addresses table (one row per POI at most)

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_pois::Pois;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Addresses::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Addresses::PoiId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Addresses::Country).string().not_null())
                    .col(ColumnDef::new(Addresses::ZipCode).string().not_null())
                    .col(ColumnDef::new(Addresses::City).string().not_null())
                    .col(ColumnDef::new(Addresses::Street).string().not_null())
                    .col(ColumnDef::new(Addresses::HouseNumber).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_addresses_poi")
                            .from(Addresses::Table, Addresses::PoiId)
                            .to(Pois::Table, Pois::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Addresses {
    Table,
    Id,
    PoiId,
    Country,
    ZipCode,
    City,
    Street,
    HouseNumber,
}
