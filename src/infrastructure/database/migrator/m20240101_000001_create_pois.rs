//! Create pois table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pois::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Pois::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Pois::Name).string().not_null())
                    .col(
                        ColumnDef::new(Pois::Status)
                            .string_len(16)
                            .not_null()
                            .default("OFFLINE"),
                    )
                    .col(
                        ColumnDef::new(Pois::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Pois::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing pages by creation time
        manager
            .create_index(
                Index::create()
                    .name("idx_pois_created_at")
                    .table(Pois::Table)
                    .col(Pois::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pois::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Pois {
    Table,
    Id,
    Name,
    Status,
    CreatedAt,
    UpdatedAt,
}
