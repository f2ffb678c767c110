// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::catalog::Catalog;
use crate::services::chat_proxy::{ChatProxy, ChatProxyConfig};
use crate::services::templates::Templates;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub catalog: Catalog,
    pub chat: ChatProxy,
    pub templates: Templates,
}

impl AppState {
    pub fn new(catalog: Catalog, chat: ChatProxyConfig) -> Result<Self, tera::Error> {
        Ok(Self {
            catalog,
            chat: ChatProxy::new(chat),
            templates: Templates::load()?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, tera::Error> {
        Self::new(Catalog::seeded(), config.chat.clone())
    }
}
