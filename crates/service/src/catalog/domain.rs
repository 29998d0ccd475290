use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where and what the stored image is. Produced by the upload boundary;
/// the file name is server-generated, never the client's original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCatalogItem {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub image: ImageDescriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub image: ImageDescriptor,
    pub created_at: DateTime<Utc>,
}
