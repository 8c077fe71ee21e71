//! Create pumps table

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
                    .table(Pumps::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Pumps::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Pumps::PoiId).string().not_null())
                    .col(ColumnDef::new(Pumps::Name).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pumps_poi")
                            .from(Pumps::Table, Pumps::PoiId)
                            .to(Pois::Table, Pois::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pumps_poi")
                    .table(Pumps::Table)
                    .col(Pumps::PoiId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pumps::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Pumps {
    Table,
    Id,
    PoiId,
    Name,
}
