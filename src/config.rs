// src/config.rs
use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

use crate::services::chat_proxy::ChatProxyConfig;

/// Settings read from the environment once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub chat: ChatProxyConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: load_or("HOST", "0.0.0.0")?,
            port: load_or("PORT", "3000")?,
            chat: ChatProxyConfig::with_api_key(optional(env_var, "PERPLEXITY_API_KEY")),
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Backend platform settings for the serverless deployment.
#[derive(Clone, Debug, Default)]
pub struct PlatformConfig {
    pub endpoint: Option<String>,
    pub project_id: Option<String>,
    pub api_key: Option<String>,
}

/// Everything the chat function needs, read once per invocation.
#[derive(Clone, Debug)]
pub struct FunctionConfig {
    pub chat: ChatProxyConfig,
    pub platform: PlatformConfig,
}

impl FunctionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            chat: ChatProxyConfig::with_api_key(optional(&lookup, "PERPLEXITY_API_KEY")),
            platform: PlatformConfig {
                endpoint: optional(&lookup, "APPWRITE_FUNCTION_ENDPOINT"),
                project_id: optional(&lookup, "APPWRITE_FUNCTION_PROJECT_ID"),
                api_key: optional(&lookup, "APPWRITE_API_KEY"),
            },
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Returns `None` for unset or blank variables.
fn optional(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn load_or<T: FromStr>(key: &str, default: &str) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = optional(env_var, key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow::anyhow!("invalid value for {key}: {e}")
    })
}
