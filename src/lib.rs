//! Alimenta: a small recipe archive with an "ask the kitchen" chat proxy.
//!
//! The web server renders the in-memory [`services::catalog::Catalog`] and
//! forwards chat questions through [`services::chat_proxy::ChatProxy`]. The
//! `chat-function` binary exposes the same proxy through [`serverless`].

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod serverless;
pub mod services;
pub mod state;

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
