use axum::{extract::State, Json};
use serde::Serialize;

use service::contact::domain::{Message, NewMessage};

use super::ActionResponse;
use crate::errors::ApiError;
use crate::extract::AdminIdentity;
use crate::state::ServerState;

#[derive(Serialize)]
pub struct MessagesResponse {
    pub success: bool,
    pub messages: Vec<Message>,
}

#[utoipa::path(post, path = "/send-message", tag = "contact", request_body = crate::openapi::SendMessageRequest,
    responses((status = 200, description = "Message stored"), (status = 400, description = "Empty body")))]
pub async fn send_message(
    State(state): State<ServerState>,
    Json(input): Json<NewMessage>,
) -> Result<Json<ActionResponse>, ApiError> {
    state.contact.send_message(input).await?;
    Ok(Json(ActionResponse { success: true, message: "Submitted Successfully".into() }))
}

#[utoipa::path(get, path = "/get-messages", tag = "contact",
    responses((status = 200, description = "Full inbox"), (status = 403, description = "Unauthorized / no permission")))]
pub async fn get_messages(
    State(state): State<ServerState>,
    AdminIdentity(claims): AdminIdentity,
) -> Result<Json<MessagesResponse>, ApiError> {
    let messages = state.contact.list_messages(&claims).await?;
    Ok(Json(MessagesResponse { success: true, messages }))
}
