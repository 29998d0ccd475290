use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{ReviewRecord, ReviewStatus, SubmitReviewInput};
use crate::errors::ServiceError;

/// Repository abstraction for reviews.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert(
        &self,
        user_name: &str,
        name: &str,
        input: &SubmitReviewInput,
    ) -> Result<ReviewRecord, ServiceError>;
    async fn list_by_status(&self, status: ReviewStatus) -> Result<Vec<ReviewRecord>, ServiceError>;
    async fn list_all(&self) -> Result<Vec<ReviewRecord>, ServiceError>;
    /// Overwrite a review's status; `None` when the id is unknown.
    async fn set_status(&self, id: Uuid, status: ReviewStatus) -> Result<Option<ReviewRecord>, ServiceError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockReviewRepository {
        reviews: Mutex<Vec<ReviewRecord>>,
    }

    #[async_trait]
    impl ReviewRepository for MockReviewRepository {
        async fn insert(
            &self,
            user_name: &str,
            name: &str,
            input: &SubmitReviewInput,
        ) -> Result<ReviewRecord, ServiceError> {
            let record = ReviewRecord {
                id: Uuid::new_v4(),
                user_name: user_name.to_string(),
                name: name.to_string(),
                body: input.body.clone(),
                rating: input.rating,
                status: ReviewStatus::Pending,
                created_at: Utc::now(),
            };
            self.reviews.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn list_by_status(&self, status: ReviewStatus) -> Result<Vec<ReviewRecord>, ServiceError> {
            let reviews = self.reviews.lock().unwrap();
            Ok(reviews.iter().filter(|r| r.status == status).cloned().collect())
        }

        async fn list_all(&self) -> Result<Vec<ReviewRecord>, ServiceError> {
            Ok(self.reviews.lock().unwrap().clone())
        }

        async fn set_status(&self, id: Uuid, status: ReviewStatus) -> Result<Option<ReviewRecord>, ServiceError> {
            let mut reviews = self.reviews.lock().unwrap();
            for review in reviews.iter_mut() {
                if review.id == id {
                    review.status = status;
                    return Ok(Some(review.clone()));
                }
            }
            Ok(None)
        }
    }
}
