use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Message, NewMessage};
use super::repository::ContactRepository;
use crate::auth::domain::IdentityClaims;
use crate::errors::ServiceError;

pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }

    /// Public tier: store a contact-form message.
    #[instrument(skip(self, message))]
    pub async fn send_message(&self, message: NewMessage) -> Result<Message, ServiceError> {
        if message.body.trim().is_empty() {
            return Err(ServiceError::Validation("message body required".into()));
        }
        let stored = self.repo.insert(message).await?;
        info!(message_id = %stored.id, "message_received");
        Ok(stored)
    }

    /// Admin tier: full inbox.
    pub async fn list_messages(&self, claims: &IdentityClaims) -> Result<Vec<Message>, ServiceError> {
        if !claims.is_admin() {
            return Err(ServiceError::Forbidden);
        }
        self.repo.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::{AuthUser, Role};
    use crate::contact::repository::mock::MockContactRepository;
    use chrono::Utc;
    use uuid::Uuid;

    fn claims_for(role: Role) -> IdentityClaims {
        IdentityClaims::for_user(&AuthUser {
            id: Uuid::new_v4(),
            user_name: "tester".into(),
            email: "tester@x.com".into(),
            name: "Tester".into(),
            role,
            created_at: Utc::now(),
        })
    }

    fn msg() -> NewMessage {
        NewMessage { name: "Visitor".into(), email: "v@x.com".into(), body: "hello".into() }
    }

    #[tokio::test]
    async fn anyone_may_send_but_only_admin_lists() {
        let svc = ContactService::new(Arc::new(MockContactRepository::default()));
        svc.send_message(msg()).await.unwrap();

        let user = claims_for(Role::User);
        assert!(matches!(svc.list_messages(&user).await, Err(ServiceError::Forbidden)));

        let admin = claims_for(Role::Admin);
        assert_eq!(svc.list_messages(&admin).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_body_is_rejected() {
        let svc = ContactService::new(Arc::new(MockContactRepository::default()));
        let res = svc.send_message(NewMessage { name: "n".into(), email: "e@x.com".into(), body: " ".into() }).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
    }
}
