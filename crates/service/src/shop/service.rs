use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{CartEntry, OrderRecord, OrderStatus, SubmitOrderInput};
use super::repository::ShopRepository;
use crate::auth::domain::IdentityClaims;
use crate::auth::guard::{Guard, OwnerScope};
use crate::catalog::domain::CatalogItem;
use crate::catalog::repository::CatalogRepository;
use crate::errors::ServiceError;

/// Cart and order workflow. Owner scoping is derived from the verified
/// claim; the catalog repo is only consulted to join cart references.
pub struct ShopService {
    shop: Arc<dyn ShopRepository>,
    catalog: Arc<dyn CatalogRepository>,
}

impl ShopService {
    pub fn new(shop: Arc<dyn ShopRepository>, catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { shop, catalog }
    }

    /// Add a catalog reference to the caller's own cart. The owning
    /// email always comes from the claim, so a body claiming another
    /// user changes nothing.
    #[instrument(skip(self, claims), fields(email = %claims.email))]
    pub async fn add_to_cart(&self, claims: &IdentityClaims, service_id: Uuid) -> Result<CartEntry, ServiceError> {
        let entry = self.shop.insert_cart_item(&claims.email, service_id).await?;
        info!(cart_id = %entry.id, service_id = %service_id, "cart_item_added");
        Ok(entry)
    }

    /// Resolve the caller's cart against the catalog. Strictly
    /// owner-scoped; there is no admin override on this listing.
    /// References whose catalog row is gone are silently dropped.
    pub async fn list_cart(&self, claims: &IdentityClaims) -> Result<Vec<CatalogItem>, ServiceError> {
        let entries = self.shop.list_cart(&claims.email).await?;
        let ids: Vec<Uuid> = entries.iter().map(|e| e.service_id).collect();
        self.catalog.find_by_ids(&ids).await
    }

    /// Create an order stamped with the caller's identity, a `pending`
    /// status and a server-assigned timestamp. Any identity, status or
    /// timestamp fields a client smuggles into the payload never reach
    /// storage; the input type has no slots for them.
    #[instrument(skip(self, claims, input), fields(email = %claims.email, payment_id = %input.payment_id))]
    pub async fn submit_order(
        &self,
        claims: &IdentityClaims,
        input: SubmitOrderInput,
    ) -> Result<OrderRecord, ServiceError> {
        if input.payment_id.trim().is_empty() {
            return Err(ServiceError::Validation("payment reference required".into()));
        }
        if input.amount_cents < 0 {
            return Err(ServiceError::Validation("amount must not be negative".into()));
        }
        let order = self.shop.insert_order(&claims.user_name, &claims.email, &input).await?;
        info!(order_id = %order.id, "order_submitted");
        Ok(order)
    }

    /// Bulk-clear the caller's cart. Idempotent: an empty cart clears
    /// to a count of zero, not an error. Order creation and cart
    /// clearing are two independent writes; callers submit first and
    /// clear second, and a retry of either step is safe.
    #[instrument(skip(self, claims), fields(email = %claims.email))]
    pub async fn clear_cart(&self, claims: &IdentityClaims) -> Result<u64, ServiceError> {
        let removed = self.shop.clear_cart(&claims.email).await?;
        info!(removed, "cart_cleared");
        Ok(removed)
    }

    /// Order listing: admins see all orders, everyone else only their
    /// own.
    pub async fn list_orders(&self, claims: &IdentityClaims) -> Result<Vec<OrderRecord>, ServiceError> {
        match Guard::order_scope(claims) {
            OwnerScope::All => self.shop.list_orders_all().await,
            OwnerScope::Owner(email) => self.shop.list_orders_by_email(&email).await,
        }
    }

    /// Admin tier: overwrite the status of the order carrying
    /// `payment_id`. Races between concurrent updates are last-write-
    /// wins at the storage layer.
    #[instrument(skip(self, claims), fields(payment_id = %payment_id, status = %status))]
    pub async fn update_order_status(
        &self,
        claims: &IdentityClaims,
        payment_id: &str,
        status: OrderStatus,
    ) -> Result<OrderRecord, ServiceError> {
        if !claims.is_admin() {
            return Err(ServiceError::Forbidden);
        }
        let updated = self
            .shop
            .set_order_status(payment_id, status)
            .await?
            .ok_or_else(|| ServiceError::not_found("order"))?;
        info!(order_id = %updated.id, "order_status_updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::{AuthUser, Role};
    use crate::catalog::domain::{ImageDescriptor, NewCatalogItem};
    use crate::catalog::repository::mock::MockCatalogRepository;
    use crate::catalog::repository::CatalogRepository;
    use crate::shop::repository::mock::MockShopRepository;
    use chrono::Utc;

    fn claims_for(user_name: &str, email: &str, role: Role) -> IdentityClaims {
        IdentityClaims::for_user(&AuthUser {
            id: Uuid::new_v4(),
            user_name: user_name.into(),
            email: email.into(),
            name: user_name.into(),
            role,
            created_at: Utc::now(),
        })
    }

    fn new_item(name: &str) -> NewCatalogItem {
        NewCatalogItem {
            name: name.into(),
            description: "desc".into(),
            price_cents: 2_500,
            image: ImageDescriptor {
                file_name: "svc.png".into(),
                content_type: "image/png".into(),
                size_bytes: 10,
            },
        }
    }

    fn order_input(payment_id: &str) -> SubmitOrderInput {
        SubmitOrderInput {
            payment_id: payment_id.into(),
            service_name: "Yoga".into(),
            amount_cents: 2_500,
        }
    }

    async fn svc() -> (ShopService, Arc<MockCatalogRepository>) {
        let catalog = Arc::new(MockCatalogRepository::default());
        let shop = ShopService::new(Arc::new(MockShopRepository::default()), catalog.clone());
        (shop, catalog)
    }

    #[tokio::test]
    async fn cart_is_stamped_with_caller_email_only() {
        let (shop, catalog) = svc().await;
        let item = catalog.insert(new_item("Yoga")).await.unwrap();

        let alice = claims_for("alice", "alice@x.com", Role::User);
        let bob = claims_for("bob1", "bob@x.com", Role::User);
        shop.add_to_cart(&alice, item.id).await.unwrap();

        // Bob's listing never shows Alice's record, whatever he sends.
        assert!(shop.list_cart(&bob).await.unwrap().is_empty());
        let mine = shop.list_cart(&alice).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, item.id);
    }

    #[tokio::test]
    async fn admin_gets_no_override_on_cart_listing() {
        let (shop, catalog) = svc().await;
        let item = catalog.insert(new_item("Yoga")).await.unwrap();
        let alice = claims_for("alice", "alice@x.com", Role::User);
        shop.add_to_cart(&alice, item.id).await.unwrap();

        let admin = claims_for("root1", "root@x.com", Role::Admin);
        assert!(shop.list_cart(&admin).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn stale_cart_references_are_silently_dropped() {
        let (shop, catalog) = svc().await;
        let kept = catalog.insert(new_item("Yoga")).await.unwrap();
        let doomed = catalog.insert(new_item("Spin")).await.unwrap();

        let alice = claims_for("alice", "alice@x.com", Role::User);
        shop.add_to_cart(&alice, kept.id).await.unwrap();
        shop.add_to_cart(&alice, doomed.id).await.unwrap();
        catalog.delete(doomed.id).await.unwrap();

        let listed = shop.list_cart(&alice).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, kept.id);
    }

    #[tokio::test]
    async fn clear_cart_is_idempotent() {
        let (shop, catalog) = svc().await;
        let item = catalog.insert(new_item("Yoga")).await.unwrap();
        let alice = claims_for("alice", "alice@x.com", Role::User);
        shop.add_to_cart(&alice, item.id).await.unwrap();

        assert_eq!(shop.clear_cart(&alice).await.unwrap(), 1);
        // Clearing twice more succeeds with zero removed.
        assert_eq!(shop.clear_cart(&alice).await.unwrap(), 0);
        assert_eq!(shop.clear_cart(&alice).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn submitted_orders_start_pending_with_caller_identity() {
        let (shop, _) = svc().await;
        let alice = claims_for("alice", "alice@x.com", Role::User);
        let order = shop.submit_order(&alice, order_input("pay-1")).await.unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.email, "alice@x.com");
        assert_eq!(order.user_name, "alice");
    }

    #[tokio::test]
    async fn order_listing_is_owner_scoped_unless_admin() {
        let (shop, _) = svc().await;
        let alice = claims_for("alice", "alice@x.com", Role::User);
        let bob = claims_for("bob1", "bob@x.com", Role::User);
        shop.submit_order(&alice, order_input("pay-1")).await.unwrap();
        shop.submit_order(&bob, order_input("pay-2")).await.unwrap();

        let mine = shop.list_orders(&alice).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert!(mine.iter().all(|o| o.email == "alice@x.com"));

        let admin = claims_for("root1", "root@x.com", Role::Admin);
        assert_eq!(shop.list_orders(&admin).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn status_update_is_admin_gated_and_mutates_nothing_on_failure() {
        let (shop, _) = svc().await;
        let alice = claims_for("alice", "alice@x.com", Role::User);
        shop.submit_order(&alice, order_input("pay-1")).await.unwrap();

        // A valid non-admin token fails authorization and mutates nothing.
        let res = shop.update_order_status(&alice, "pay-1", OrderStatus::Approved).await;
        assert!(matches!(res, Err(ServiceError::Forbidden)));
        let orders = shop.list_orders(&alice).await.unwrap();
        assert_eq!(orders[0].status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn admin_updates_status_by_payment_reference() {
        let (shop, _) = svc().await;
        let alice = claims_for("alice", "alice@x.com", Role::User);
        let admin = claims_for("root1", "root@x.com", Role::Admin);
        shop.submit_order(&alice, order_input("pay-1")).await.unwrap();

        let updated = shop
            .update_order_status(&admin, "pay-1", OrderStatus::Approved)
            .await
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Approved);

        // Repeating the same update is a harmless no-op, not a revert.
        let again = shop
            .update_order_status(&admin, "pay-1", OrderStatus::Approved)
            .await
            .unwrap();
        assert_eq!(again.status, OrderStatus::Approved);
        let listed = shop.list_orders(&alice).await.unwrap();
        assert_eq!(listed[0].status, OrderStatus::Approved);
    }

    #[tokio::test]
    async fn updating_unknown_payment_reference_is_not_found() {
        let (shop, _) = svc().await;
        let admin = claims_for("root1", "root@x.com", Role::Admin);
        let res = shop.update_order_status(&admin, "missing", OrderStatus::Approved).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
    }
}
