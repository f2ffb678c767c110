use axum::{Json, extract::State};
use tracing::info;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chat_proxy::UpstreamStatus,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    info!(message_len = payload.message.len(), "Chat request received");

    let reply = state
        .chat
        .ask(&payload.message, UpstreamStatus::Check)
        .await?;

    Ok(Json(ChatResponse { reply }))
}
