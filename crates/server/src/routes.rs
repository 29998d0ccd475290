use axum::{
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::state::ServerState;

pub mod auth;
pub mod catalog;
pub mod contact;
pub mod review;
pub mod shop;

/// Envelope for mutations that only need an acknowledgement.
#[derive(Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public, authenticated and admin
/// tiers. Tier enforcement happens in the `Identity`/`AdminIdentity`
/// extractors, so a route's handler signature is its policy.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    // Public routes
    let public = Router::new()
        .route("/health", get(health))
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/send-message", post(contact::send_message))
        .route("/get-services", get(catalog::get_services))
        .route("/get-approved-review", get(review::get_approved_reviews));

    // Authenticated routes (valid bearer token; owner-scoped where noted)
    let authenticated = Router::new()
        .route("/add-to-cart", post(shop::add_to_cart))
        .route("/get-cart", get(shop::get_cart))
        .route("/submit-order", post(shop::submit_order))
        .route("/clear-cart", delete(shop::clear_cart))
        .route("/getOrders", get(shop::get_orders))
        .route("/submit-review", post(review::submit_review));

    // Admin routes
    let admin = Router::new()
        .route("/users", get(auth::get_users))
        .route("/get-messages", get(contact::get_messages))
        .route("/addService", post(catalog::add_service))
        .route("/deleteService/:id", delete(catalog::delete_service))
        .route("/update-order-status", patch(shop::update_order_status))
        .route("/get-all-review", get(review::get_all_reviews))
        .route("/review-status-updater", post(review::update_review_status))
        .route("/makeAdmin/:email", get(auth::make_admin));

    // Compose
    public
        .merge(authenticated)
        .merge(admin)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
