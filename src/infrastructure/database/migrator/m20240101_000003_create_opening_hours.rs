//! Create opening_hours table

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
                    .table(OpeningHours::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OpeningHours::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OpeningHours::PoiId).string().not_null())
                    .col(
                        ColumnDef::new(OpeningHours::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(OpeningHours::DayOfWeek)
                            .string_len(16)
                            .not_null(),
                    )
                    .col(ColumnDef::new(OpeningHours::OpenTime).string_len(5).not_null())
                    .col(ColumnDef::new(OpeningHours::CloseTime).string_len(5).not_null())
                    .col(
                        ColumnDef::new(OpeningHours::IsClosed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_opening_hours_poi")
                            .from(OpeningHours::Table, OpeningHours::PoiId)
                            .to(Pois::Table, Pois::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_opening_hours_poi")
                    .table(OpeningHours::Table)
                    .col(OpeningHours::PoiId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OpeningHours::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum OpeningHours {
    Table,
    Id,
    PoiId,
    Position,
    DayOfWeek,
    OpenTime,
    CloseTime,
    IsClosed,
}
