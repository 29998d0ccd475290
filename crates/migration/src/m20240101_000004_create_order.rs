//! Create `orders` table.
//!
//! Status updates are keyed by `payment_id`, not by row id.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(uuid(Order::Id).primary_key())
                    .col(string_len(Order::UserName, 64).not_null())
                    .col(string_len(Order::Email, 255).not_null())
                    .col(string_len(Order::PaymentId, 128).not_null())
                    .col(string_len(Order::ServiceName, 128).not_null())
                    .col(big_integer(Order::AmountCents).not_null())
                    .col(string_len(Order::Status, 16).not_null())
                    .col(timestamp_with_time_zone(Order::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Order::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    UserName,
    Email,
    PaymentId,
    ServiceName,
    AmountCents,
    Status,
    CreatedAt,
}
