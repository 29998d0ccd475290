use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{CatalogItem, NewCatalogItem};
use crate::errors::ServiceError;

/// Repository abstraction for the service catalog.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn insert(&self, item: NewCatalogItem) -> Result<CatalogItem, ServiceError>;
    async fn list_all(&self) -> Result<Vec<CatalogItem>, ServiceError>;
    /// Resolve ids to catalog rows; ids with no row are simply absent
    /// from the result (callers rely on this for stale cart references).
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<CatalogItem>, ServiceError>;
    /// Delete by id; `false` when no row matched.
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCatalogRepository {
        items: Mutex<HashMap<Uuid, CatalogItem>>,
    }

    #[async_trait]
    impl CatalogRepository for MockCatalogRepository {
        async fn insert(&self, item: NewCatalogItem) -> Result<CatalogItem, ServiceError> {
            let record = CatalogItem {
                id: Uuid::new_v4(),
                name: item.name,
                description: item.description,
                price_cents: item.price_cents,
                image: item.image,
                created_at: Utc::now(),
            };
            self.items.lock().unwrap().insert(record.id, record.clone());
            Ok(record)
        }

        async fn list_all(&self) -> Result<Vec<CatalogItem>, ServiceError> {
            let items = self.items.lock().unwrap();
            let mut all: Vec<CatalogItem> = items.values().cloned().collect();
            all.sort_by_key(|i| i.created_at);
            Ok(all)
        }

        async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<CatalogItem>, ServiceError> {
            let items = self.items.lock().unwrap();
            Ok(ids.iter().filter_map(|id| items.get(id).cloned()).collect())
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            Ok(self.items.lock().unwrap().remove(&id).is_some())
        }
    }
}
