use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::contact::domain::{Message, NewMessage};
use crate::contact::repository::ContactRepository;
use crate::errors::ServiceError;

pub struct SeaOrmContactRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: models::message::Model) -> Message {
    Message {
        id: m.id,
        name: m.name,
        email: m.email,
        body: m.body,
        created_at: m.created_at.into(),
    }
}

#[async_trait::async_trait]
impl ContactRepository for SeaOrmContactRepository {
    async fn insert(&self, message: NewMessage) -> Result<Message, ServiceError> {
        let created = models::message::create(&self.db, &message.name, &message.email, &message.body).await?;
        Ok(to_domain(created))
    }

    async fn list_all(&self) -> Result<Vec<Message>, ServiceError> {
        let rows = models::message::Entity::find()
            .order_by_asc(models::message::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        Ok(rows.into_iter().map(to_domain).collect())
    }
}
