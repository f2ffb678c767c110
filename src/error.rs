// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::{message::ErrorResponse, services::chat_proxy::ChatError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Chat(ChatError::Upstream(code)) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Chat(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::NotFound(msg) => (status, msg).into_response(),
            AppError::Template(err) => {
                error!("Template error: {err}");
                (status, "Template error").into_response()
            }
            AppError::Chat(err) => {
                let message = match err {
                    ChatError::NotConfigured => "API key not configured".to_string(),
                    ChatError::Upstream(code) => format!("API error: {code}"),
                    ChatError::Transport(_) | ChatError::MalformedResponse => {
                        "Failed to communicate with AI".to_string()
                    }
                };
                (status, Json(ErrorResponse { error: message })).into_response()
            }
        }
    }
}
