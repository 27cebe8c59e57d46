//! creamery server
//!
//! - Catalog API on `server.listen`
//! - Prometheus metrics on `metrics.listen`
//! - Graceful shutdown of both listeners on Ctrl+C / SIGTERM

use std::process::ExitCode;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::{fmt, EnvFilter};

use creamery_server::{app_state::AppState, config, error::Result, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "creamery stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env()?;
    let listen = cfg.server.listen_addr("server")?;
    let metrics_listen = cfg.metrics.listen_addr("metrics")?;

    let state = AppState::new(&cfg);
    let app = router::build_router(state.clone());
    let metrics_app = router::build_metrics_router(state);

    let api_listener = TcpListener::bind(listen).await?;
    let metrics_listener = TcpListener::bind(metrics_listen).await?;
    tracing::info!(%listen, %metrics_listen, "creamery starting");

    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = stop_tx.send(true);
    });

    let api = axum::serve(api_listener, app).with_graceful_shutdown(stopped(stop_rx.clone()));
    let metrics = axum::serve(metrics_listener, metrics_app).with_graceful_shutdown(stopped(stop_rx));

    tokio::try_join!(async move { api.await }, async move { metrics.await })?;
    tracing::info!("creamery stopped cleanly");
    Ok(())
}

/// Resolves once the stop flag flips (or its sender goes away).
async fn stopped(mut rx: watch::Receiver<bool>) {
    while !*rx.borrow() {
        if rx.changed().await.is_err() {
            return;
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
