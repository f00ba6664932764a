//! Mind dump - jot down your thoughts, get a gentle summary back.
//!
//! This is the main entry point for the mind dump web server.
//! The application is organized into the following modules:
//!
//! - `workflow`: The capture → analyze → display state machine
//! - `sessions`: Per-visitor workflows keyed by cookie
//! - `analysis`: Prompt building and the text-generation relay
//! - `extract`: Parsing the structured result out of generated text
//! - `share`: `mailto:` / `sms:` handoff URIs
//! - `placeholder`: Rotating input hints
//! - `templates`: HTML/CSS/JS templates and rendering
//! - `handlers`: HTTP route handlers

use anyhow::Context;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

use mind_dump::{app, AnthropicAnalyzer, AppState, Config, PlaceholderRotator};

/// How often idle sessions are swept.
const PURGE_INTERVAL_SECS: u64 = 600;

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let analyzer = AnthropicAnalyzer::new(&config).context("failed to build HTTP client")?;

    let placeholders = PlaceholderRotator::new(Duration::from_secs(config.placeholder_secs));
    let state = Arc::new(AppState::new(Arc::new(analyzer), placeholders));

    state.placeholders.start();
    let purge = spawn_session_purge(Arc::clone(&state));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    tracing::info!(%addr, model = %config.model, "mind dump server running");

    axum::serve(listener, app(Arc::clone(&state)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    purge.abort();
    state.placeholders.stop();
    tracing::info!("mind dump server stopped");
    Ok(())
}

fn spawn_session_purge(state: Arc<AppState>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(PURGE_INTERVAL_SECS));
        loop {
            ticker.tick().await;
            let removed = state.sessions.purge_expired(Utc::now());
            if removed > 0 {
                tracing::info!(removed, remaining = state.sessions.len(), "purged idle sessions");
            }
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received terminate signal, shutting down"),
    }
}
