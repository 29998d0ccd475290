use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use service::catalog::domain::CatalogItem;
use service::shop::domain::{OrderRecord, OrderStatus, SubmitOrderInput};

use super::ActionResponse;
use crate::errors::ApiError;
use crate::extract::{AdminIdentity, Identity};
use crate::state::ServerState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartInput {
    pub service_id: Uuid,
}

/// Status arrives as a raw string and is parsed against the closed
/// vocabulary here, so an unknown value is a 400, not a 422 or a write.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusInput {
    pub payment_id: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct CartResponse {
    pub success: bool,
    pub services: Vec<CatalogItem>,
}

#[derive(Serialize)]
pub struct ClearCartResponse {
    pub success: bool,
    pub deleted: u64,
}

#[derive(Serialize)]
pub struct OrdersResponse {
    pub success: bool,
    pub orders: Vec<OrderRecord>,
}

#[utoipa::path(post, path = "/add-to-cart", tag = "shop", request_body = crate::openapi::AddToCartRequest,
    responses((status = 200, description = "Added to caller's cart"), (status = 403, description = "Unauthorized")))]
pub async fn add_to_cart(
    State(state): State<ServerState>,
    Identity(claims): Identity,
    Json(input): Json<AddToCartInput>,
) -> Result<Json<ActionResponse>, ApiError> {
    state.shop.add_to_cart(&claims, input.service_id).await?;
    Ok(Json(ActionResponse { success: true, message: "Services Added To Cart Successfully".into() }))
}

#[utoipa::path(get, path = "/get-cart", tag = "shop",
    responses((status = 200, description = "Caller's cart joined against the catalog"), (status = 403, description = "Unauthorized")))]
pub async fn get_cart(
    State(state): State<ServerState>,
    Identity(claims): Identity,
) -> Result<Json<CartResponse>, ApiError> {
    let services = state.shop.list_cart(&claims).await?;
    Ok(Json(CartResponse { success: true, services }))
}

#[utoipa::path(post, path = "/submit-order", tag = "shop", request_body = crate::openapi::SubmitOrderRequest,
    responses((status = 200, description = "Order created as pending"), (status = 403, description = "Unauthorized")))]
pub async fn submit_order(
    State(state): State<ServerState>,
    Identity(claims): Identity,
    Json(input): Json<SubmitOrderInput>,
) -> Result<Json<ActionResponse>, ApiError> {
    state.shop.submit_order(&claims, input).await?;
    Ok(Json(ActionResponse { success: true, message: "Order Submitted Successfully".into() }))
}

#[utoipa::path(delete, path = "/clear-cart", tag = "shop",
    responses((status = 200, description = "Cart cleared; count reported"), (status = 403, description = "Unauthorized")))]
pub async fn clear_cart(
    State(state): State<ServerState>,
    Identity(claims): Identity,
) -> Result<Json<ClearCartResponse>, ApiError> {
    let deleted = state.shop.clear_cart(&claims).await?;
    Ok(Json(ClearCartResponse { success: true, deleted }))
}

#[utoipa::path(get, path = "/getOrders", tag = "shop",
    responses((status = 200, description = "Orders; admin sees all, others their own"), (status = 403, description = "Unauthorized")))]
pub async fn get_orders(
    State(state): State<ServerState>,
    Identity(claims): Identity,
) -> Result<Json<OrdersResponse>, ApiError> {
    let orders = state.shop.list_orders(&claims).await?;
    Ok(Json(OrdersResponse { success: true, orders }))
}

#[utoipa::path(patch, path = "/update-order-status", tag = "shop", request_body = crate::openapi::UpdateOrderStatusRequest,
    responses((status = 200, description = "Status updated"), (status = 400, description = "Unknown status"), (status = 404, description = "Unknown payment reference")))]
pub async fn update_order_status(
    State(state): State<ServerState>,
    AdminIdentity(claims): AdminIdentity,
    Json(input): Json<UpdateOrderStatusInput>,
) -> Result<Json<ActionResponse>, ApiError> {
    let status: OrderStatus = input.status.parse().map_err(ApiError::Validation)?;
    let updated = state
        .shop
        .update_order_status(&claims, &input.payment_id, status)
        .await?;
    Ok(Json(ActionResponse { success: true, message: format!("{} Successfully", updated.status) }))
}
