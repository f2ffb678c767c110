//! Forwards a single user question to the upstream chat-completion API.
//!
//! The proxy is shared by the web route and the serverless handler. Each
//! adapter picks an [`UpstreamStatus`] policy and maps [`ChatError`] onto its
//! own response shape.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

pub const DEFAULT_ENDPOINT: &str = "https://api.perplexity.ai/chat/completions";
pub const DEFAULT_MODEL: &str = "sonar-pro";
pub const SYSTEM_PROMPT: &str = "You are a helpful culinary assistant for Alimenta, a minimalist recipe archive. Provide concise, high-fidelity culinary advice.";

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Chat provider not configured")]
    NotConfigured,

    #[error("Upstream API returned status {0}")]
    Upstream(u16),

    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Malformed upstream response")]
    MalformedResponse,
}

/// Whether the upstream HTTP status is inspected before the body is decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpstreamStatus {
    /// Non-2xx responses become [`ChatError::Upstream`].
    Check,
    /// The body is decoded regardless of status.
    Ignore,
}

#[derive(Clone, Debug)]
pub struct ChatProxyConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub system_prompt: String,
}

impl Default for ChatProxyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }
}

impl ChatProxyConfig {
    pub fn with_api_key(api_key: Option<String>) -> Self {
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

/// Only the content of a returned message is read.
#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Clone, Debug)]
pub struct ChatProxy {
    config: ChatProxyConfig,
    client: Client,
}

impl ChatProxy {
    pub fn new(config: ChatProxyConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Two-message conversation: the persona prompt, then the user's message.
    pub fn build_request<'a>(&'a self, message: &str) -> CompletionRequest<'a> {
        CompletionRequest {
            model: &self.config.model,
            messages: vec![
                Message {
                    role: Role::System,
                    content: self.config.system_prompt.clone(),
                },
                Message {
                    role: Role::User,
                    content: message.to_string(),
                },
            ],
        }
    }

    pub async fn ask(&self, message: &str, status: UpstreamStatus) -> Result<String, ChatError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => {
                error!("Chat API key missing from configuration");
                return Err(ChatError::NotConfigured);
            }
        };

        info!(message_len = message.len(), "Forwarding chat request");

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&self.build_request(message))
            .send()
            .await
            .map_err(|e| {
                error!("Chat transport error: {e}");
                ChatError::Transport(e)
            })?;

        let code = response.status();
        if status == UpstreamStatus::Check && !code.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = code.as_u16(), body = %body, "Upstream chat API error");
            return Err(ChatError::Upstream(code.as_u16()));
        }

        let completion: CompletionResponse = response.json().await.map_err(|e| {
            error!(status = code.as_u16(), "Could not decode upstream response: {e}");
            ChatError::MalformedResponse
        })?;

        let reply = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                error!(status = code.as_u16(), "Upstream response carried no choices");
                ChatError::MalformedResponse
            })?;

        debug!(reply_len = reply.len(), "Chat reply received");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_has_persona_then_user_message() {
        let proxy = ChatProxy::new(ChatProxyConfig::with_api_key(Some("k".into())));
        let body = serde_json::to_value(proxy.build_request("How long to rest dough?")).unwrap();

        assert_eq!(body["model"], "sonar-pro");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "How long to rest dough?");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        assert!(!ChatProxyConfig::with_api_key(Some(String::new())).has_api_key());
        assert!(!ChatProxyConfig::default().has_api_key());
        assert!(ChatProxyConfig::with_api_key(Some("pplx".into())).has_api_key());
    }
}
