use anyhow::Context;
use parley_server::{AppState, router};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Initializing signaling relay...");

    let addr = env::var("PARLEY_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let addr: SocketAddr = addr
        .parse()
        .with_context(|| format!("invalid listen address '{addr}'"))?;

    let state = Arc::new(AppState::new());
    let app = router(state);

    info!("Signaling server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
