use std::str::FromStr;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::shop::domain::{CartEntry, OrderRecord, OrderStatus, SubmitOrderInput};
use crate::shop::repository::ShopRepository;

pub struct SeaOrmShopRepository {
    pub db: DatabaseConnection,
}

fn cart_to_domain(m: models::cart_item::Model) -> CartEntry {
    CartEntry {
        id: m.id,
        email: m.email,
        service_id: m.service_id,
        created_at: m.created_at.into(),
    }
}

fn order_to_domain(m: models::order::Model) -> Result<OrderRecord, ServiceError> {
    let status = OrderStatus::from_str(&m.status).map_err(ServiceError::Storage)?;
    Ok(OrderRecord {
        id: m.id,
        user_name: m.user_name,
        email: m.email,
        payment_id: m.payment_id,
        service_name: m.service_name,
        amount_cents: m.amount_cents,
        status,
        created_at: m.created_at.into(),
    })
}

#[async_trait::async_trait]
impl ShopRepository for SeaOrmShopRepository {
    async fn insert_cart_item(&self, email: &str, service_id: Uuid) -> Result<CartEntry, ServiceError> {
        let created = models::cart_item::create(&self.db, email, service_id).await?;
        Ok(cart_to_domain(created))
    }

    async fn list_cart(&self, email: &str) -> Result<Vec<CartEntry>, ServiceError> {
        let rows = models::cart_item::Entity::find()
            .filter(models::cart_item::Column::Email.eq(email))
            .order_by_asc(models::cart_item::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(rows.into_iter().map(cart_to_domain).collect())
    }

    async fn clear_cart(&self, email: &str) -> Result<u64, ServiceError> {
        let removed = models::cart_item::clear_by_email(&self.db, email).await?;
        Ok(removed)
    }

    async fn insert_order(
        &self,
        user_name: &str,
        email: &str,
        input: &SubmitOrderInput,
    ) -> Result<OrderRecord, ServiceError> {
        let created = models::order::create(
            &self.db,
            user_name,
            email,
            &input.payment_id,
            &input.service_name,
            input.amount_cents,
        )
        .await?;
        order_to_domain(created)
    }

    async fn list_orders_all(&self) -> Result<Vec<OrderRecord>, ServiceError> {
        let rows = models::order::Entity::find()
            .order_by_asc(models::order::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        rows.into_iter().map(order_to_domain).collect()
    }

    async fn list_orders_by_email(&self, email: &str) -> Result<Vec<OrderRecord>, ServiceError> {
        let rows = models::order::Entity::find()
            .filter(models::order::Column::Email.eq(email))
            .order_by_asc(models::order::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        rows.into_iter().map(order_to_domain).collect()
    }

    async fn set_order_status(
        &self,
        payment_id: &str,
        status: OrderStatus,
    ) -> Result<Option<OrderRecord>, ServiceError> {
        let updated = models::order::update_status_by_payment(&self.db, payment_id, status.as_str()).await?;
        updated.map(order_to_domain).transpose()
    }
}
