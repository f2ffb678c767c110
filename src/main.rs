use std::sync::Arc;

use alimenta::{config::Config, init_tracing, routes, state::AppState};
use anyhow::Context;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    info!("API key present: {}", config.chat.has_api_key());

    let state = Arc::new(AppState::from_config(&config).context("loading templates")?);
    let app = routes::create_router().with_state(state);

    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;

    info!("Server is running on http://{address}");
    axum::serve(listener, app).await?;
    Ok(())
}
