//! Runs one chat-proxy invocation: a platform request as JSON on stdin, the
//! platform response as JSON on stdout.

use alimenta::{
    config::FunctionConfig,
    init_tracing,
    serverless::{self, FunctionRequest, PlatformClient},
    services::chat_proxy::ChatProxy,
};
use anyhow::Context;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = FunctionConfig::from_env();
    let _platform = PlatformClient::new(config.platform);
    let proxy = ChatProxy::new(config.chat);

    let mut raw = String::new();
    tokio::io::stdin()
        .read_to_string(&mut raw)
        .await
        .context("reading function request")?;
    let request: FunctionRequest =
        serde_json::from_str(&raw).context("decoding function request")?;

    let response = serverless::handle(&proxy, request).await;

    let mut out = serde_json::to_vec(&response)?;
    out.push(b'\n');
    tokio::io::stdout().write_all(&out).await?;
    Ok(())
}
