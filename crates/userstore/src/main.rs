mod app;
mod config;
mod handlers;
mod state;
mod storage;

use std::{
    future::{Future, IntoFuture},
    time::Duration,
};

use anyhow::Result;
use axum::Router;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal, sync::oneshot};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app::create_app, config::Config, state::AppState, storage::build_repository};

/// userstore - CRUD service for users backed by DynamoDB
#[derive(Parser, Debug)]
#[command(name = "userstore")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "8080", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userstore=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let repo = build_repository(&config).await;
    let state = AppState::new(repo);

    // Startup continues without a table; requests then fail with store errors.
    match state.users.ensure_schema().await {
        Ok(()) => tracing::info!(table = %config.table_name, "User table is ready"),
        Err(err) => tracing::warn!(
            table = %config.table_name,
            error = %err,
            "Could not ensure user table exists"
        ),
    }

    let app = create_app(state, config.request_timeout());

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!(
        mode = %config.store_mode,
        "listening on {}",
        listener.local_addr()?
    );

    serve(listener, app, config.shutdown_grace(), shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Run the server until `shutdown` resolves.
///
/// After that no new connections are accepted and in-flight requests get at
/// most `grace` to finish before the server task is aborted.
async fn serve(
    listener: TcpListener,
    app: Router,
    grace: Duration,
    shutdown: impl Future<Output = ()>,
) -> Result<()> {
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = stop_rx.await;
    });
    let mut server = tokio::spawn(server.into_future());

    tokio::select! {
        result = &mut server => {
            result??;
            return Ok(());
        }
        _ = shutdown => {}
    }

    let _ = stop_tx.send(());

    match tokio::time::timeout(grace, &mut server).await {
        Ok(result) => result??,
        Err(_) => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Requests still in flight after grace period, forcing shutdown"
            );
            server.abort();
        }
    }

    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
