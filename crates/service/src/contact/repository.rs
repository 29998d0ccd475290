use async_trait::async_trait;

use super::domain::{Message, NewMessage};
use crate::errors::ServiceError;

/// Repository abstraction for contact messages.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, message: NewMessage) -> Result<Message, ServiceError>;
    async fn list_all(&self) -> Result<Vec<Message>, ServiceError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    pub struct MockContactRepository {
        messages: Mutex<Vec<Message>>,
    }

    #[async_trait]
    impl ContactRepository for MockContactRepository {
        async fn insert(&self, message: NewMessage) -> Result<Message, ServiceError> {
            let record = Message {
                id: Uuid::new_v4(),
                name: message.name,
                email: message.email,
                body: message.body,
                created_at: Utc::now(),
            };
            self.messages.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn list_all(&self) -> Result<Vec<Message>, ServiceError> {
            Ok(self.messages.lock().unwrap().clone())
        }
    }
}
