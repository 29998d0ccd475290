use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use service::auth::domain::{AuthUser, LoginInput, SignupInput};

use super::ActionResponse;
use crate::errors::ApiError;
use crate::extract::AdminIdentity;
use crate::state::ServerState;

#[derive(Serialize)]
pub struct TokenResponse {
    pub success: bool,
    pub token: String,
}

#[derive(Serialize)]
pub struct UsersResponse {
    pub success: bool,
    pub users: Vec<AuthUser>,
}

#[utoipa::path(post, path = "/signup", tag = "auth", request_body = crate::openapi::SignupRequest,
    responses((status = 200, description = "Registered, token issued"), (status = 400, description = "Validation or conflict")))]
pub async fn signup(
    State(state): State<ServerState>,
    Json(input): Json<SignupInput>,
) -> Result<Json<TokenResponse>, ApiError> {
    let session = state.auth.signup(input).await?;
    Ok(Json(TokenResponse { success: true, token: session.token }))
}

#[utoipa::path(post, path = "/login", tag = "auth", request_body = crate::openapi::LoginRequest,
    responses((status = 200, description = "Logged in, token issued"), (status = 403, description = "Invalid Password"), (status = 404, description = "Unknown user")))]
pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<TokenResponse>, ApiError> {
    let session = state.auth.login(input).await?;
    Ok(Json(TokenResponse { success: true, token: session.token }))
}

#[utoipa::path(get, path = "/users", tag = "auth",
    responses((status = 200, description = "Full user list"), (status = 403, description = "Unauthorized / no permission")))]
pub async fn get_users(
    State(state): State<ServerState>,
    AdminIdentity(claims): AdminIdentity,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.auth.list_users(&claims).await?;
    Ok(Json(UsersResponse { success: true, users }))
}

#[utoipa::path(get, path = "/makeAdmin/{email}", tag = "auth",
    params(("email" = String, Path, description = "Email of the account to promote")),
    responses((status = 200, description = "Promoted"), (status = 404, description = "Unknown user")))]
pub async fn make_admin(
    State(state): State<ServerState>,
    AdminIdentity(claims): AdminIdentity,
    Path(email): Path<String>,
) -> Result<Json<ActionResponse>, ApiError> {
    state.auth.promote_to_admin(&claims, &email).await?;
    Ok(Json(ActionResponse { success: true, message: "promotion successful".into() }))
}
