use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use service::review::domain::{ReviewRecord, ReviewStatus, SubmitReviewInput};

use super::ActionResponse;
use crate::errors::ApiError;
use crate::extract::{AdminIdentity, Identity};
use crate::state::ServerState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewStatusInput {
    pub review_id: Uuid,
    pub status: String,
}

#[derive(Serialize)]
pub struct ReviewsResponse {
    pub success: bool,
    pub reviews: Vec<ReviewRecord>,
}

#[utoipa::path(post, path = "/submit-review", tag = "review", request_body = crate::openapi::SubmitReviewRequest,
    responses((status = 200, description = "Review recorded as pending"), (status = 403, description = "Unauthorized")))]
pub async fn submit_review(
    State(state): State<ServerState>,
    Identity(claims): Identity,
    Json(input): Json<SubmitReviewInput>,
) -> Result<Json<ActionResponse>, ApiError> {
    state.reviews.submit_review(&claims, input).await?;
    Ok(Json(ActionResponse {
        success: true,
        message: "Review Submitted Successfully. Needs Admin Approval To Be Shown".into(),
    }))
}

#[utoipa::path(get, path = "/get-approved-review", tag = "review",
    responses((status = 200, description = "Approved reviews only")))]
pub async fn get_approved_reviews(State(state): State<ServerState>) -> Result<Json<ReviewsResponse>, ApiError> {
    let reviews = state.reviews.list_approved().await?;
    Ok(Json(ReviewsResponse { success: true, reviews }))
}

#[utoipa::path(get, path = "/get-all-review", tag = "review",
    responses((status = 200, description = "All reviews, any status"), (status = 403, description = "Unauthorized / no permission")))]
pub async fn get_all_reviews(
    State(state): State<ServerState>,
    AdminIdentity(claims): AdminIdentity,
) -> Result<Json<ReviewsResponse>, ApiError> {
    let reviews = state.reviews.list_all(&claims).await?;
    Ok(Json(ReviewsResponse { success: true, reviews }))
}

#[utoipa::path(post, path = "/review-status-updater", tag = "review", request_body = crate::openapi::UpdateReviewStatusRequest,
    responses((status = 200, description = "Status updated"), (status = 400, description = "Unknown status"), (status = 404, description = "Unknown review")))]
pub async fn update_review_status(
    State(state): State<ServerState>,
    AdminIdentity(claims): AdminIdentity,
    Json(input): Json<UpdateReviewStatusInput>,
) -> Result<Json<ActionResponse>, ApiError> {
    let status: ReviewStatus = input.status.parse().map_err(ApiError::Validation)?;
    let updated = state.reviews.update_status(&claims, input.review_id, status).await?;
    Ok(Json(ActionResponse { success: true, message: format!("{} Successfully", updated.status) }))
}
