//! Create `cart_item` table.
//!
//! No foreign key on `service_id`: catalog rows may be deleted while
//! carts still reference them; listings drop stale references instead.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartItem::Table)
                    .if_not_exists()
                    .col(uuid(CartItem::Id).primary_key())
                    .col(string_len(CartItem::Email, 255).not_null())
                    .col(uuid(CartItem::ServiceId).not_null())
                    .col(timestamp_with_time_zone(CartItem::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CartItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CartItem { Table, Id, Email, ServiceId, CreatedAt }
