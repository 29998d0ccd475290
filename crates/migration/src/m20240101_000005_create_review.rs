//! Create `review` table.
//!
//! Reviews start `pending`; only `approved` rows are publicly listed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(uuid(Review::Id).primary_key())
                    .col(string_len(Review::UserName, 64).not_null())
                    .col(string_len(Review::Name, 128).not_null())
                    .col(text(Review::Body).not_null())
                    .col(ColumnDef::new(Review::Rating).integer().null())
                    .col(string_len(Review::Status, 16).not_null())
                    .col(timestamp_with_time_zone(Review::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Review::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Review { Table, Id, UserName, Name, Body, Rating, Status, CreatedAt }
