use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, info};

use chatter_types::api::{CreateMessageRequest, UpdateMessageRequest};
use chatter_types::models::Message;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::{JsonObject, MessageId};

/// GET /messages — every message, in insertion order.
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = state.store.list()?;
    debug!("Listing {} messages", messages.len());
    Ok(Json(messages))
}

/// GET /messages/{id}
pub async fn get_message(
    State(state): State<AppState>,
    MessageId(id): MessageId,
) -> Result<Json<Message>, ApiError> {
    state.store.get(id)?.map(Json).ok_or(ApiError::NotFound)
}

/// POST /messages — `user` and `content` are both required.
pub async fn create_message(
    State(state): State<AppState>,
    JsonObject(req): JsonObject<CreateMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (user, content) = req
        .into_parts()
        .ok_or_else(|| ApiError::BadRequest("`user` and `content` are required".into()))?;

    let message = state.store.create(user, content)?;
    info!("Created message {} from {}", message.id, message.user);

    Ok((StatusCode::CREATED, Json(message)))
}

/// PUT /messages/{id} — an unknown id is a 404 even when the body is invalid,
/// so the body is only inspected once the message is known to exist.
pub async fn update_message(
    State(state): State<AppState>,
    MessageId(id): MessageId,
    payload: Result<JsonObject<UpdateMessageRequest>, ApiError>,
) -> Result<Json<Message>, ApiError> {
    if !state.store.contains(id)? {
        return Err(ApiError::NotFound);
    }
    let JsonObject(req) = payload?;

    let message = state
        .store
        .update(id, req.user, req.content)?
        .ok_or(ApiError::NotFound)?;
    info!("Updated message {}", id);

    Ok(Json(message))
}

/// DELETE /messages/{id} — succeeds whether or not the message existed.
pub async fn delete_message(
    State(state): State<AppState>,
    MessageId(id): MessageId,
) -> Result<StatusCode, ApiError> {
    let removed = state.store.delete(id)?;
    if removed > 0 {
        info!("Deleted message {}", id);
    }
    Ok(StatusCode::NO_CONTENT)
}
