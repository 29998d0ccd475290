use std::str::FromStr;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::review::domain::{ReviewRecord, ReviewStatus, SubmitReviewInput};
use crate::review::repository::ReviewRepository;

pub struct SeaOrmReviewRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: models::review::Model) -> Result<ReviewRecord, ServiceError> {
    let status = ReviewStatus::from_str(&m.status).map_err(ServiceError::Storage)?;
    Ok(ReviewRecord {
        id: m.id,
        user_name: m.user_name,
        name: m.name,
        body: m.body,
        rating: m.rating,
        status,
        created_at: m.created_at.into(),
    })
}

#[async_trait::async_trait]
impl ReviewRepository for SeaOrmReviewRepository {
    async fn insert(
        &self,
        user_name: &str,
        name: &str,
        input: &SubmitReviewInput,
    ) -> Result<ReviewRecord, ServiceError> {
        let created = models::review::create(&self.db, user_name, name, &input.body, input.rating).await?;
        to_domain(created)
    }

    async fn list_by_status(&self, status: ReviewStatus) -> Result<Vec<ReviewRecord>, ServiceError> {
        let rows = models::review::Entity::find()
            .filter(models::review::Column::Status.eq(status.as_str()))
            .order_by_asc(models::review::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        rows.into_iter().map(to_domain).collect()
    }

    async fn list_all(&self) -> Result<Vec<ReviewRecord>, ServiceError> {
        let rows = models::review::Entity::find()
            .order_by_asc(models::review::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        rows.into_iter().map(to_domain).collect()
    }

    async fn set_status(&self, id: Uuid, status: ReviewStatus) -> Result<Option<ReviewRecord>, ServiceError> {
        let updated = models::review::update_status(&self.db, id, status.as_str()).await?;
        updated.map(to_domain).transpose()
    }
}
