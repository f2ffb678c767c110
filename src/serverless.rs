//! Chat proxy packaged for a managed function platform.
//!
//! The platform hands over a method and a raw body string and expects a JSON
//! body plus a status code back. Unlike the web route, this handler does not
//! inspect the upstream status before decoding the reply.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, error, warn};

use crate::{
    config::PlatformConfig,
    message::ChatRequest,
    services::chat_proxy::{ChatError, ChatProxy, UpstreamStatus},
};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FunctionRequest {
    pub method: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FunctionResponse {
    pub status: u16,
    pub body: Value,
}

impl FunctionResponse {
    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }
}

/// Client for the function platform's backend API.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    config: PlatformConfig,
}

impl PlatformClient {
    pub fn new(config: PlatformConfig) -> Self {
        if config.endpoint.is_none() || config.project_id.is_none() {
            warn!("Platform endpoint or project not configured");
        }
        debug!(endpoint = ?config.endpoint, project = ?config.project_id, "Platform client ready");

        Self { config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.endpoint.is_some()
            && self.config.project_id.is_some()
            && self.config.api_key.is_some()
    }
}

pub async fn handle(proxy: &ChatProxy, request: FunctionRequest) -> FunctionResponse {
    if request.method != "POST" {
        return FunctionResponse::error(405, "Method not allowed");
    }

    let payload: ChatRequest = match serde_json::from_str(&request.body) {
        Ok(p) => p,
        Err(e) => {
            warn!("Rejecting function body: {e}");
            return FunctionResponse::error(400, "Invalid request body");
        }
    };

    match proxy.ask(&payload.message, UpstreamStatus::Ignore).await {
        Ok(reply) => FunctionResponse {
            status: 200,
            body: json!({ "reply": reply }),
        },
        Err(ChatError::NotConfigured) => FunctionResponse::error(500, "AI provider not configured"),
        Err(e) => {
            error!("{e}");
            FunctionResponse::error(500, "Failed to communicate with AI")
        }
    }
}
