use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::catalog::domain::{CatalogItem, ImageDescriptor, NewCatalogItem};
use crate::catalog::repository::CatalogRepository;
use crate::errors::ServiceError;

pub struct SeaOrmCatalogRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: models::service::Model) -> CatalogItem {
    CatalogItem {
        id: m.id,
        name: m.name,
        description: m.description,
        price_cents: m.price_cents,
        image: ImageDescriptor {
            file_name: m.image_name,
            content_type: m.image_content_type,
            size_bytes: m.image_size,
        },
        created_at: m.created_at.into(),
    }
}

#[async_trait::async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn insert(&self, item: NewCatalogItem) -> Result<CatalogItem, ServiceError> {
        let created = models::service::create(
            &self.db,
            &item.name,
            &item.description,
            item.price_cents,
            &item.image.file_name,
            &item.image.content_type,
            item.image.size_bytes,
        )
        .await?;
        Ok(to_domain(created))
    }

    async fn list_all(&self) -> Result<Vec<CatalogItem>, ServiceError> {
        let rows = models::service::Entity::find()
            .order_by_asc(models::service::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<CatalogItem>, ServiceError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = models::service::Entity::find()
            .filter(models::service::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = models::service::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
