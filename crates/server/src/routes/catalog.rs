use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use service::catalog::domain::{CatalogItem, ImageDescriptor, NewCatalogItem};

use super::ActionResponse;
use crate::errors::ApiError;
use crate::extract::AdminIdentity;
use crate::state::ServerState;

#[derive(Serialize)]
pub struct ServicesResponse {
    pub success: bool,
    pub services: Vec<CatalogItem>,
}

/// Multipart intake for a new catalog item: text fields `name`,
/// `description`, `priceCents` and a binary `image` part. The image is
/// renamed server-side (fresh uuid, original extension) before it
/// touches disk.
#[utoipa::path(post, path = "/addService", tag = "catalog",
    responses((status = 200, description = "Service added"), (status = 400, description = "Missing fields or upload"), (status = 403, description = "Unauthorized / no permission")))]
pub async fn add_service(
    State(state): State<ServerState>,
    AdminIdentity(claims): AdminIdentity,
    mut multipart: Multipart,
) -> Result<Json<ActionResponse>, ApiError> {
    let mut name: Option<String> = None;
    let mut description: Option<String> = None;
    let mut price_cents: Option<i64> = None;
    let mut image: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(e.to_string()))?
    {
        match field.name() {
            Some("name") => {
                name = Some(field.text().await.map_err(|e| ApiError::Validation(e.to_string()))?);
            }
            Some("description") => {
                description = Some(field.text().await.map_err(|e| ApiError::Validation(e.to_string()))?);
            }
            Some("priceCents") => {
                let raw = field.text().await.map_err(|e| ApiError::Validation(e.to_string()))?;
                let parsed = raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| ApiError::Validation("priceCents must be an integer".into()))?;
                price_cents = Some(parsed);
            }
            Some("image") => {
                let original = field.file_name().unwrap_or("upload.bin").to_string();
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Validation(e.to_string()))?;
                image = Some((original, content_type, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let (original, content_type, bytes) =
        image.ok_or_else(|| ApiError::Validation("No files were uploaded.".into()))?;
    let name = name.ok_or_else(|| ApiError::Validation("service name required".into()))?;
    let price_cents = price_cents.ok_or_else(|| ApiError::Validation("priceCents required".into()))?;

    let ext = std::path::Path::new(&original)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("bin");
    let file_name = format!("svc_{}.{ext}", Uuid::new_v4());
    let dest = state.uploads_dir.join(&file_name);
    tokio::fs::write(&dest, &bytes)
        .await
        .map_err(|e| ApiError::Storage(e.to_string()))?;

    let item = NewCatalogItem {
        name,
        description: description.unwrap_or_default(),
        price_cents,
        image: ImageDescriptor {
            file_name,
            content_type,
            size_bytes: bytes.len() as i64,
        },
    };
    state.catalog.add_service(&claims, item).await?;
    Ok(Json(ActionResponse { success: true, message: "Services Added Successfully".into() }))
}

#[utoipa::path(get, path = "/get-services", tag = "catalog",
    responses((status = 200, description = "Catalog listing")))]
pub async fn get_services(State(state): State<ServerState>) -> Result<Json<ServicesResponse>, ApiError> {
    let services = state.catalog.list_services().await?;
    Ok(Json(ServicesResponse { success: true, services }))
}

#[utoipa::path(delete, path = "/deleteService/{id}", tag = "catalog",
    params(("id" = Uuid, Path, description = "Catalog item id")),
    responses((status = 200, description = "Service removed"), (status = 404, description = "Unknown service")))]
pub async fn delete_service(
    State(state): State<ServerState>,
    AdminIdentity(claims): AdminIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<ActionResponse>, ApiError> {
    state.catalog.delete_service(&claims, id).await?;
    Ok(Json(ActionResponse { success: true, message: "Services Removed Successfully".into() }))
}
