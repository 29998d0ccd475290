use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct SignupRequest {
    pub user_name: String,
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct SendMessageRequest {
    pub name: String,
    pub email: String,
    pub body: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub service_id: Uuid,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct SubmitOrderRequest {
    pub payment_id: String,
    pub service_name: String,
    pub amount_cents: i64,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub payment_id: String,
    /// One of `pending`, `approved`, `rejected`.
    pub status: String,
}

#[derive(ToSchema)]
pub struct SubmitReviewRequest {
    pub body: String,
    pub rating: Option<i32>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UpdateReviewStatusRequest {
    pub review_id: Uuid,
    /// One of `pending`, `approved`, `rejected`.
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::signup,
        crate::routes::auth::login,
        crate::routes::auth::get_users,
        crate::routes::auth::make_admin,
        crate::routes::contact::send_message,
        crate::routes::contact::get_messages,
        crate::routes::catalog::add_service,
        crate::routes::catalog::get_services,
        crate::routes::catalog::delete_service,
        crate::routes::shop::add_to_cart,
        crate::routes::shop::get_cart,
        crate::routes::shop::submit_order,
        crate::routes::shop::clear_cart,
        crate::routes::shop::get_orders,
        crate::routes::shop::update_order_status,
        crate::routes::review::submit_review,
        crate::routes::review::get_approved_reviews,
        crate::routes::review::get_all_reviews,
        crate::routes::review::update_review_status,
    ),
    components(
        schemas(
            HealthResponse,
            SignupRequest,
            LoginRequest,
            SendMessageRequest,
            AddToCartRequest,
            SubmitOrderRequest,
            UpdateOrderStatusRequest,
            SubmitReviewRequest,
            UpdateReviewStatusRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "contact"),
        (name = "catalog"),
        (name = "shop"),
        (name = "review"),
    )
)]
pub struct ApiDoc;
