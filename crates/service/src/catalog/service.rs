use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{CatalogItem, NewCatalogItem};
use super::repository::CatalogRepository;
use crate::auth::domain::IdentityClaims;
use crate::errors::ServiceError;

pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        Self { repo }
    }

    /// Admin tier: add a catalog item. The image descriptor comes from
    /// the upload boundary, already renamed server-side.
    #[instrument(skip(self, claims, item), fields(name = %item.name))]
    pub async fn add_service(
        &self,
        claims: &IdentityClaims,
        item: NewCatalogItem,
    ) -> Result<CatalogItem, ServiceError> {
        if !claims.is_admin() {
            return Err(ServiceError::Forbidden);
        }
        if item.name.trim().is_empty() {
            return Err(ServiceError::Validation("service name required".into()));
        }
        let created = self.repo.insert(item).await?;
        info!(service_id = %created.id, "service_added");
        Ok(created)
    }

    /// Public tier: full catalog listing.
    pub async fn list_services(&self) -> Result<Vec<CatalogItem>, ServiceError> {
        self.repo.list_all().await
    }

    /// Admin tier: remove a catalog item.
    #[instrument(skip(self, claims))]
    pub async fn delete_service(&self, claims: &IdentityClaims, id: Uuid) -> Result<(), ServiceError> {
        if !claims.is_admin() {
            return Err(ServiceError::Forbidden);
        }
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("service"));
        }
        info!(service_id = %id, "service_removed");
        Ok(())
    }
}
