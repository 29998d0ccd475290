use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{CartEntry, OrderRecord, OrderStatus, SubmitOrderInput};
use crate::errors::ServiceError;

/// Repository abstraction for carts and orders. Each call is a single
/// atomic storage operation; nothing here spans documents.
#[async_trait]
pub trait ShopRepository: Send + Sync {
    async fn insert_cart_item(&self, email: &str, service_id: Uuid) -> Result<CartEntry, ServiceError>;
    async fn list_cart(&self, email: &str) -> Result<Vec<CartEntry>, ServiceError>;
    /// Bulk delete; returns rows removed (0 for an empty cart).
    async fn clear_cart(&self, email: &str) -> Result<u64, ServiceError>;

    async fn insert_order(
        &self,
        user_name: &str,
        email: &str,
        input: &SubmitOrderInput,
    ) -> Result<OrderRecord, ServiceError>;
    async fn list_orders_all(&self) -> Result<Vec<OrderRecord>, ServiceError>;
    async fn list_orders_by_email(&self, email: &str) -> Result<Vec<OrderRecord>, ServiceError>;
    /// Overwrite the status of the order carrying `payment_id`;
    /// `None` when no order matches. Last write wins under races.
    async fn set_order_status(
        &self,
        payment_id: &str,
        status: OrderStatus,
    ) -> Result<Option<OrderRecord>, ServiceError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockShopRepository {
        carts: Mutex<Vec<CartEntry>>,
        orders: Mutex<Vec<OrderRecord>>,
    }

    #[async_trait]
    impl ShopRepository for MockShopRepository {
        async fn insert_cart_item(&self, email: &str, service_id: Uuid) -> Result<CartEntry, ServiceError> {
            let entry = CartEntry {
                id: Uuid::new_v4(),
                email: email.to_string(),
                service_id,
                created_at: Utc::now(),
            };
            self.carts.lock().unwrap().push(entry.clone());
            Ok(entry)
        }

        async fn list_cart(&self, email: &str) -> Result<Vec<CartEntry>, ServiceError> {
            let carts = self.carts.lock().unwrap();
            Ok(carts.iter().filter(|c| c.email == email).cloned().collect())
        }

        async fn clear_cart(&self, email: &str) -> Result<u64, ServiceError> {
            let mut carts = self.carts.lock().unwrap();
            let before = carts.len();
            carts.retain(|c| c.email != email);
            Ok((before - carts.len()) as u64)
        }

        async fn insert_order(
            &self,
            user_name: &str,
            email: &str,
            input: &SubmitOrderInput,
        ) -> Result<OrderRecord, ServiceError> {
            let record = OrderRecord {
                id: Uuid::new_v4(),
                user_name: user_name.to_string(),
                email: email.to_string(),
                payment_id: input.payment_id.clone(),
                service_name: input.service_name.clone(),
                amount_cents: input.amount_cents,
                status: OrderStatus::Pending,
                created_at: Utc::now(),
            };
            self.orders.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn list_orders_all(&self) -> Result<Vec<OrderRecord>, ServiceError> {
            Ok(self.orders.lock().unwrap().clone())
        }

        async fn list_orders_by_email(&self, email: &str) -> Result<Vec<OrderRecord>, ServiceError> {
            let orders = self.orders.lock().unwrap();
            Ok(orders.iter().filter(|o| o.email == email).cloned().collect())
        }

        async fn set_order_status(
            &self,
            payment_id: &str,
            status: OrderStatus,
        ) -> Result<Option<OrderRecord>, ServiceError> {
            let mut orders = self.orders.lock().unwrap();
            for order in orders.iter_mut() {
                if order.payment_id == payment_id {
                    order.status = status;
                    return Ok(Some(order.clone()));
                }
            }
            Ok(None)
        }
    }
}
