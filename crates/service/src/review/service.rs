use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{ReviewRecord, ReviewStatus, SubmitReviewInput};
use super::repository::ReviewRepository;
use crate::auth::domain::IdentityClaims;
use crate::errors::ServiceError;

/// Review workflow: submissions land pending, admins approve or
/// reject. Repeat admin transitions are allowed; the latest admin
/// action is authoritative.
pub struct ReviewService {
    repo: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    pub fn new(repo: Arc<dyn ReviewRepository>) -> Self {
        Self { repo }
    }

    /// Authenticated tier: record a review stamped with the caller's
    /// username and display name, forced to `pending`.
    #[instrument(skip(self, claims, input), fields(user_name = %claims.user_name))]
    pub async fn submit_review(
        &self,
        claims: &IdentityClaims,
        input: SubmitReviewInput,
    ) -> Result<ReviewRecord, ServiceError> {
        if input.body.trim().is_empty() {
            return Err(ServiceError::Validation("review text required".into()));
        }
        let review = self.repo.insert(&claims.user_name, &claims.name, &input).await?;
        info!(review_id = %review.id, "review_submitted");
        Ok(review)
    }

    /// Public tier: strictly the approved subset.
    pub async fn list_approved(&self) -> Result<Vec<ReviewRecord>, ServiceError> {
        self.repo.list_by_status(ReviewStatus::Approved).await
    }

    /// Admin tier: everything, all statuses.
    pub async fn list_all(&self, claims: &IdentityClaims) -> Result<Vec<ReviewRecord>, ServiceError> {
        if !claims.is_admin() {
            return Err(ServiceError::Forbidden);
        }
        self.repo.list_all().await
    }

    /// Admin tier: overwrite a review's status by id.
    #[instrument(skip(self, claims), fields(review_id = %id, status = %status))]
    pub async fn update_status(
        &self,
        claims: &IdentityClaims,
        id: Uuid,
        status: ReviewStatus,
    ) -> Result<ReviewRecord, ServiceError> {
        if !claims.is_admin() {
            return Err(ServiceError::Forbidden);
        }
        let updated = self
            .repo
            .set_status(id, status)
            .await?
            .ok_or_else(|| ServiceError::not_found("review"))?;
        info!(review_id = %updated.id, "review_status_updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::{AuthUser, Role};
    use crate::review::repository::mock::MockReviewRepository;
    use chrono::Utc;

    fn claims_for(user_name: &str, role: Role) -> IdentityClaims {
        IdentityClaims::for_user(&AuthUser {
            id: Uuid::new_v4(),
            user_name: user_name.into(),
            email: format!("{user_name}@x.com"),
            name: format!("{user_name} full"),
            role,
            created_at: Utc::now(),
        })
    }

    fn review_input(body: &str) -> SubmitReviewInput {
        SubmitReviewInput { body: body.into(), rating: Some(5) }
    }

    fn svc() -> ReviewService {
        ReviewService::new(Arc::new(MockReviewRepository::default()))
    }

    #[tokio::test]
    async fn submission_is_stamped_and_pending() {
        let svc = svc();
        let alice = claims_for("alice", Role::User);
        let review = svc.submit_review(&alice, review_input("great place")).await.unwrap();
        assert_eq!(review.status, ReviewStatus::Pending);
        assert_eq!(review.user_name, "alice");
        assert_eq!(review.name, "alice full");
    }

    #[tokio::test]
    async fn public_listing_shows_only_approved() {
        let svc = svc();
        let alice = claims_for("alice", Role::User);
        let admin = claims_for("root1", Role::Admin);

        let pending = svc.submit_review(&alice, review_input("first")).await.unwrap();
        let approved = svc.submit_review(&alice, review_input("second")).await.unwrap();
        svc.update_status(&admin, approved.id, ReviewStatus::Approved).await.unwrap();

        let public = svc.list_approved().await.unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].id, approved.id);
        assert!(public.iter().all(|r| r.status == ReviewStatus::Approved));
        let _ = pending;
    }

    #[tokio::test]
    async fn admin_listing_and_update_are_gated() {
        let svc = svc();
        let alice = claims_for("alice", Role::User);
        let review = svc.submit_review(&alice, review_input("text")).await.unwrap();

        assert!(matches!(svc.list_all(&alice).await, Err(ServiceError::Forbidden)));
        let res = svc.update_status(&alice, review.id, ReviewStatus::Approved).await;
        assert!(matches!(res, Err(ServiceError::Forbidden)));

        // gate failure performed no mutation
        let admin = claims_for("root1", Role::Admin);
        let all = svc.list_all(&admin).await.unwrap();
        assert_eq!(all[0].status, ReviewStatus::Pending);
    }

    #[tokio::test]
    async fn admin_may_retransition_reviews() {
        let svc = svc();
        let alice = claims_for("alice", Role::User);
        let admin = claims_for("root1", Role::Admin);
        let review = svc.submit_review(&alice, review_input("text")).await.unwrap();

        svc.update_status(&admin, review.id, ReviewStatus::Approved).await.unwrap();
        let flipped = svc.update_status(&admin, review.id, ReviewStatus::Rejected).await.unwrap();
        assert_eq!(flipped.status, ReviewStatus::Rejected);
        assert!(svc.list_approved().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_review_id_is_not_found() {
        let svc = svc();
        let admin = claims_for("root1", Role::Admin);
        let res = svc.update_status(&admin, Uuid::new_v4(), ReviewStatus::Approved).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn empty_body_is_rejected() {
        let svc = svc();
        let alice = claims_for("alice", Role::User);
        let res = svc.submit_review(&alice, review_input("   ")).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
    }
}
