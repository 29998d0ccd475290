use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // CartItem: owner lookups and bulk clears filter by email
        manager
            .create_index(
                Index::create()
                    .name("idx_cart_item_email")
                    .table(CartItem::Table)
                    .col(CartItem::Email)
                    .to_owned(),
            )
            .await?;

        // Orders: owner-scoped listing by email
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_email")
                    .table(Order::Table)
                    .col(Order::Email)
                    .to_owned(),
            )
            .await?;

        // Orders: status updates look up by payment reference
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_payment")
                    .table(Order::Table)
                    .col(Order::PaymentId)
                    .to_owned(),
            )
            .await?;

        // Review: public listing filters on status
        manager
            .create_index(
                Index::create()
                    .name("idx_review_status")
                    .table(Review::Table)
                    .col(Review::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_cart_item_email").table(CartItem::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_orders_email").table(Order::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_orders_payment").table(Order::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_review_status").table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CartItem { Table, Email }

#[derive(DeriveIden)]
enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Email,
    PaymentId,
}

#[derive(DeriveIden)]
enum Review { Table, Status }
