//! Entry point for the abfuhr HTTP service.

use std::future;
use std::sync::Arc;

use abfuhr_server::{AppState, api::app_router, build_state, config::Config, init_tracing};
use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    // HTTP + service setup
    let state = build_state(&config)?;
    let router = app_router(Arc::clone(&state));

    tracing::info!("Listening on {}", config.listen_addr);
    let listener = TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    drain(&state).await;
    Ok(())
}

async fn drain(state: &AppState) {
    state.service.shutdown().await;
    tracing::info!("schedule cache drained, shutting down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to listen for ctrl-c");
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to listen for SIGTERM");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
