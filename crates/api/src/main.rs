use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dxm_ai::{AiGateway, OpenAiClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dxm_api::config::ServerConfig;
use dxm_api::router::build_app_router;
use dxm_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dxm_api=debug,dxm_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env()?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Storage (selected once, never re-selected) ---
    let store = dxm_db::store::open_store(config.database_url.as_deref())
        .await
        .context("Failed to open submission store")?;
    tracing::info!(backend = %store.backend(), "Submission store ready");
    tracing::warn!(
        "Submission listing endpoints are unauthenticated; restrict /api/*/submissions at the proxy"
    );

    // --- AI gateway ---
    let ai: Option<Arc<dyn AiGateway>> = match &config.ai {
        Some(ai_config) => {
            let client = OpenAiClient::new(ai_config.clone()).context("Failed to build AI client")?;
            tracing::info!(model = %ai_config.model, "AI gateway configured");
            Some(Arc::new(client))
        }
        None => {
            tracing::warn!("OPENAI_API_KEY not set, AI endpoints will return a configuration error");
            None
        }
    };

    // --- App state ---
    let state = AppState {
        store,
        ai,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let host = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST address '{}'", config.host))?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
///
/// If a handler cannot be installed that signal is ignored rather than
/// shutting the server down immediately.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
